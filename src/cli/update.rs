//! # Update Command
//!
//! Loads the configuration, builds the processor, and rewrites the tree.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;
use update_copyright::config::load_config;
use update_copyright::info_log;
use update_copyright::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use update_copyright::processor::{Processor, RunSummary};

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
  /// Root of the tree to rewrite. Exclusions are relative to it.
  #[arg(default_value = ".", value_name = "ROOT")]
  pub root: PathBuf,

  /// Path to config file (default: .update-copyright.toml in ROOT)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the update with the given arguments
pub fn run_update(args: UpdateArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let config = load_config(args.config.as_deref(), &args.root, args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file overrides");
  }

  let processor = Processor::from_config(config.as_ref())?;
  let summary = processor.run(&args.root)?;

  info_log!("{}", summary_line(&summary));

  Ok(())
}

fn summary_line(summary: &RunSummary) -> String {
  let total = summary.total_rewritten();
  let noun = if total == 1 { "file" } else { "files" };

  if total == 0 {
    return format!("Updated 0 files, skipped {}", summary.skipped);
  }

  let per_style: Vec<String> = summary
    .rewritten
    .iter()
    .map(|(style, count)| format!("{count} {style}"))
    .collect();

  format!(
    "Updated {total} {noun} ({}), skipped {}",
    per_style.join(", "),
    summary.skipped
  )
}
