//! # File I/O Module
//!
//! Whole-file reads and in-place overwrites used by the processor.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the complete file as UTF-8 text.
  ///
  /// Non-UTF-8 content is an error; a binary file that happens to match a
  /// style rule is never rewritten.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Truncates and overwrites the file with `content`.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_read_non_utf8_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blob.c");
    std::fs::write(&path, b"\xff\xfe\x00A").unwrap();

    let err = FileIO::read_full_content(&path).unwrap_err();
    assert!(err.to_string().contains("blob.c"));
  }

  #[test]
  fn test_write_then_read() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.py");

    FileIO::write_file(&path, "import os").unwrap();
    assert_eq!(FileIO::read_full_content(&path).unwrap(), "import os");
  }
}
