//! # Walker Module
//!
//! Recursive traversal of the source tree, pruning excluded subtrees.
//!
//! Exclusions are path prefixes relative to the root, compared component by
//! component: `third_party` excludes `./third_party/zlib` but not
//! `./third_party_tools`. The root itself is never excluded.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::verbose_log;

/// Subtrees skipped when no configuration overrides them: vendored code and
/// git metadata.
pub const DEFAULT_EXCLUDES: &[&str] = &["third_party", ".git"];

/// Set of subtrees, relative to the root, that are never visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions {
  prefixes: Vec<PathBuf>,
}

impl Default for Exclusions {
  fn default() -> Self {
    Self::new(DEFAULT_EXCLUDES)
  }
}

impl Exclusions {
  /// Builds the set from relative paths. A leading `./` is accepted and
  /// ignored; entries that reduce to nothing are dropped.
  pub fn new<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let prefixes = entries
      .into_iter()
      .filter_map(|entry| {
        let normalized: PathBuf = Path::new(entry.as_ref())
          .components()
          .filter(|component| !matches!(component, Component::CurDir))
          .collect();
        (!normalized.as_os_str().is_empty()).then_some(normalized)
      })
      .collect();

    Self { prefixes }
  }

  pub fn prefixes(&self) -> &[PathBuf] {
    &self.prefixes
  }

  /// Decides whether `dir`, a path under `root`, is skipped along with its
  /// descendants.
  pub fn is_excluded(&self, root: &Path, dir: &Path) -> bool {
    let Ok(relative) = dir.strip_prefix(root) else {
      return false;
    };
    if relative.as_os_str().is_empty() {
      return false;
    }
    self.prefixes.iter().any(|prefix| relative.starts_with(prefix))
  }
}

/// Walks a root directory and yields the regular files outside excluded
/// subtrees.
pub struct SourceWalker {
  root: PathBuf,
  exclusions: Exclusions,
}

impl SourceWalker {
  pub const fn new(root: PathBuf, exclusions: Exclusions) -> Self {
    Self { root, exclusions }
  }

  /// Collects every regular file under the root, sorted by path within each
  /// directory. Symlinks are not followed and are not returned.
  ///
  /// Any traversal error (unreadable directory, entry vanished) is fatal.
  pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", self.root.display());
    let start_time = std::time::Instant::now();

    let root = self.root.as_path();
    let exclusions = &self.exclusions;

    let walker = WalkDir::new(root)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(|entry| {
        if entry.file_type().is_dir() && exclusions.is_excluded(root, entry.path()) {
          verbose_log!("Skipping: {} (excluded)", entry.path().display());
          return false;
        }
        true
      });

    let mut files = Vec::new();
    for entry in walker {
      let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
      if entry.file_type().is_file() {
        files.push(entry.into_path());
      }
    }

    debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

    Ok(files)
  }
}
