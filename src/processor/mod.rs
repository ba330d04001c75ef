//! # Processor Module
//!
//! Drives a run: walk the tree, pick a style for each file, and rewrite the
//! header of every file that has one.
//!
//! Every matching file is read and written back even when its header is
//! already current. The first error stops the run.

mod file_io;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

pub use self::file_io::FileIO;
use crate::config::{Config, ConfigError};
use crate::header;
use crate::info_log;
use crate::notice::Notice;
use crate::style::{CommentStyle, StyleTable};
use crate::verbose_log;
use crate::walker::{Exclusions, SourceWalker};

/// What a completed run touched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
  /// Number of rewritten files, keyed by style name.
  pub rewritten: BTreeMap<String, usize>,
  /// Files visited that matched no style.
  pub skipped: usize,
}

impl RunSummary {
  pub fn total_rewritten(&self) -> usize {
    self.rewritten.values().sum()
  }

  fn record(&mut self, style: &CommentStyle) {
    *self.rewritten.entry(style.name.clone()).or_default() += 1;
  }
}

/// Rewrites headers across a tree.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use update_copyright::processor::Processor;
///
/// # fn main() -> anyhow::Result<()> {
/// let processor = Processor::from_config(None)?;
/// let summary = processor.run(Path::new("."))?;
/// println!("{} files updated", summary.total_rewritten());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Processor {
  notice: Notice,
  styles: StyleTable,
  exclusions: Exclusions,
}

impl Processor {
  /// Creates a processor from its parts.
  ///
  /// Fails if some style could not strip the header it writes for `notice`.
  pub fn new(notice: Notice, styles: StyleTable, exclusions: Exclusions) -> Result<Self, ConfigError> {
    styles.check_converges(&notice)?;
    Ok(Self {
      notice,
      styles,
      exclusions,
    })
  }

  /// Creates a processor from an optional configuration, falling back to the
  /// built-in notice, styles and exclusions. `{{year}}` in the notice is
  /// rendered with the current year.
  pub fn from_config(config: Option<&Config>) -> Result<Self> {
    let Some(config) = config else {
      return Ok(Self::new(Notice::default(), StyleTable::builtin(), Exclusions::default())?);
    };

    let notice = config.notice().render_current_year();
    let styles = StyleTable::from_config(config)?;
    let exclusions = match &config.exclude {
      Some(entries) => Exclusions::new(entries),
      None => Exclusions::default(),
    };

    Ok(Self::new(notice, styles, exclusions)?)
  }

  pub const fn notice(&self) -> &Notice {
    &self.notice
  }

  /// Replaces the header of one file using `style`.
  ///
  /// Nothing is written when the existing header is malformed.
  pub fn rewrite_file(&self, path: &Path, style: &CommentStyle) -> Result<()> {
    let content = FileIO::read_full_content(path)?;
    let output = header::rewrite(&content, &self.notice, style)
      .with_context(|| format!("Failed to replace header in {}", path.display()))?;
    FileIO::write_file(path, &output)
  }

  /// Rewrites every matching file under `root`.
  pub fn run(&self, root: &Path) -> Result<RunSummary> {
    let walker = SourceWalker::new(root.to_path_buf(), self.exclusions.clone());
    let files = walker.collect_files()?;

    let mut summary = RunSummary::default();
    for path in files {
      let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
        continue;
      };

      match self.styles.resolve(&file_name) {
        Some(style) => {
          info_log!("Processing {} file: {}", style.name, path.display());
          self.rewrite_file(&path, style)?;
          summary.record(style);
        }
        None => {
          verbose_log!("Skipping: {} (no matching style)", path.display());
          summary.skipped += 1;
        }
      }
    }

    debug!(
      "Rewrote {} files, skipped {}",
      summary.total_rewritten(),
      summary.skipped
    );

    Ok(summary)
  }
}
