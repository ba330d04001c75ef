//! # CLI Module
//!
//! Command-line interface for update-copyright. Every argument is optional;
//! running the binary bare rewrites the tree under the current directory with
//! the built-in notice.

mod update;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use update::{UpdateArgs, run_update};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Rewrite headers in the current directory
  update-copyright

  # Rewrite headers under another directory
  update-copyright ../rpc

  # Use a specific configuration file
  update-copyright --config copyright.toml

  # Ignore any .update-copyright.toml and use the built-in notice
  update-copyright --no-config
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub update_args: UpdateArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use clap::CommandFactory;
  use update_copyright::logging::ColorMode;

  use super::*;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_no_arguments_defaults() {
    let cli = Cli::try_parse_from(["update-copyright"]).unwrap();
    let args = cli.update_args;
    assert_eq!(args.root, PathBuf::from("."));
    assert!(args.config.is_none());
    assert!(!args.no_config);
    assert_eq!(args.verbose, 0);
    assert!(!args.quiet);
    assert_eq!(args.colors, ColorMode::Auto);
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["update-copyright", "-q", "-v"]).is_err());
  }

  #[test]
  fn test_config_conflicts_with_no_config() {
    assert!(Cli::try_parse_from(["update-copyright", "--config", "x.toml", "--no-config"]).is_err());
  }
}
