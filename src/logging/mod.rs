//! # Logging Module
//!
//! Output helpers for update-copyright:
//! - Progress lines (one per rewritten file) on stdout, with color support
//! - Verbose diagnostics on stderr, enabled with `--verbose`
//! - A `tracing` subscriber for `debug!`/`trace!` events
//!
//! ## Example
//!
//! ```rust
//! use update_copyright::logging::{ColorMode, set_verbose};
//! use update_copyright::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! // Goes to stderr
//! verbose_log!("Skipping: {}", "README.md");
//!
//! // Goes to stdout
//! info_log!("Processing C-style file: {}", "./src/main.cpp");
//! ```

mod modes;

pub use modes::{ColorMode, default_level, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// Uses the same format string syntax as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info line, colored when the active [`ColorMode`] allows it.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
