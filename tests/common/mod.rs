#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Header written for C-like files with the built-in notice.
pub const C_HEADER: &str = "/*-\n * Copyright (c) 2016-2017 Doug Rabson\n * All rights reserved.\n */\n\n";

/// Header written for Python and BUILD files with the built-in notice.
pub const SHELL_HEADER: &str = "#-\n# Copyright (c) 2016-2017 Doug Rabson\n# All rights reserved.\n#\n\n";

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads `root/relative` as text.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads `root/relative` as raw bytes.
pub fn read_bytes(root: &Path, relative: &str) -> Result<Vec<u8>> {
  let path = root.join(relative);
  fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
}
