mod common;

use std::fs;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use tempfile::tempdir;
use update_copyright::notice::Notice;
use update_copyright::processor::Processor;
use update_copyright::style::StyleTable;
use update_copyright::walker::Exclusions;

use crate::common::{C_HEADER, SHELL_HEADER, read_bytes, read_file, write_file};

fn default_processor() -> Processor {
  Processor::from_config(None).expect("built-in defaults are valid")
}

#[test]
fn test_style_selection() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "a.cpp", "int main() {}\n")?;
  write_file(root, "a.py", "import os\n")?;
  write_file(root, "BUILD", "cc_library(name = \"a\")\n")?;
  write_file(root, "a.txt", "just text\n")?;

  let summary = default_processor().run(root)?;

  assert_eq!(read_file(root, "a.cpp")?, format!("{C_HEADER}int main() {{}}\n"));
  assert_eq!(read_file(root, "a.py")?, format!("{SHELL_HEADER}import os\n"));
  assert_eq!(
    read_file(root, "BUILD")?,
    format!("{SHELL_HEADER}cc_library(name = \"a\")\n")
  );
  assert_eq!(read_file(root, "a.txt")?, "just text\n");

  assert_eq!(summary.total_rewritten(), 3);
  assert_eq!(summary.skipped, 1);
  Ok(())
}

#[test]
fn test_header_replacement() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(
    root,
    "main.c",
    "/*-\n * Copyright (c) 2009 Old Owner\n * Licensed under old terms.\n */\n\nint main() {}",
  )?;

  default_processor().run(root)?;

  let content = read_file(root, "main.c")?;
  assert_eq!(content, format!("{C_HEADER}int main() {{}}"));
  assert!(!content.contains("Old Owner"));
  assert!(!content.contains("old terms"));
  Ok(())
}

#[test]
fn test_fresh_file() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  let original = "#include <stdint.h>\n\nuint32_t xid;\n";
  write_file(root, "include/rpc/xdr.h", original)?;

  default_processor().run(root)?;

  let content = read_file(root, "include/rpc/xdr.h")?;
  assert_eq!(content, format!("{C_HEADER}{original}"));
  Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "src/a.cpp", "/*-\n * Copyright (c) 2015 Old\n */\n\nint a;\n")?;
  write_file(root, "src/b.cpp", "int b;\n")?;
  write_file(root, "scripts/tool.py", "#!/usr/bin/env python\nprint('hi')\n")?;
  write_file(root, "BUILD", "")?;

  let processor = default_processor();
  processor.run(root)?;

  let first: Vec<Vec<u8>> = ["src/a.cpp", "src/b.cpp", "scripts/tool.py", "BUILD"]
    .iter()
    .map(|path| read_bytes(root, path))
    .collect::<Result<_>>()?;

  processor.run(root)?;

  let second: Vec<Vec<u8>> = ["src/a.cpp", "src/b.cpp", "scripts/tool.py", "BUILD"]
    .iter()
    .map(|path| read_bytes(root, path))
    .collect::<Result<_>>()?;

  assert_eq!(first, second);
  Ok(())
}

#[test]
fn test_excluded_paths_untouched() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  let vendored = "/* zlib */\nint inflate(void);\n";
  write_file(root, "third_party/zlib/inflate.c", vendored)?;
  write_file(root, ".git/hooks/hook.py", "pass\n")?;
  write_file(root, "src/util.cpp", "int util;\n")?;

  let before = read_bytes(root, "third_party/zlib/inflate.c")?;
  default_processor().run(root)?;

  assert_eq!(read_bytes(root, "third_party/zlib/inflate.c")?, before);
  assert_eq!(read_file(root, ".git/hooks/hook.py")?, "pass\n");
  assert!(read_file(root, "src/util.cpp")?.starts_with(C_HEADER));
  Ok(())
}

#[test]
fn test_malformed_header_fails_run() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  let broken = "/*-\n * Copyright (c) 2009 Old Owner\nint main() {}\n";
  write_file(root, "broken.c", broken)?;

  let err = default_processor().run(root).unwrap_err();
  let message = format!("{err:#}");
  assert!(message.contains("broken.c"), "unexpected error: {message}");
  assert!(message.contains("never closed"), "unexpected error: {message}");

  assert_eq!(read_file(root, "broken.c")?, broken);
  Ok(())
}

#[test]
fn test_unchanged_file_is_still_written() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  let current = format!("{C_HEADER}int a;\n");
  write_file(root, "a.c", &current)?;
  let path = root.join("a.c");

  let backdated = SystemTime::now() - Duration::from_secs(3600);
  fs::File::options().write(true).open(&path)?.set_modified(backdated)?;
  assert_eq!(fs::metadata(&path)?.modified()?, backdated);

  default_processor().run(root)?;

  let modified = fs::metadata(&path)?.modified()?;
  assert!(
    modified > backdated,
    "expected the file to be rewritten, mtime stayed at {modified:?}"
  );
  assert_eq!(read_file(root, "a.c")?, current);
  Ok(())
}

#[test]
fn test_custom_notice() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "a.c", "int a;\n")?;

  let notice = Notice::new(vec!["Copyright (c) 2026 Example Corp".to_string()]);
  let processor = Processor::new(notice, StyleTable::builtin(), Exclusions::default())?;
  processor.run(root)?;

  assert_eq!(
    read_file(root, "a.c")?,
    "/*-\n * Copyright (c) 2026 Example Corp\n */\n\nint a;\n"
  );
  Ok(())
}

#[test]
fn test_non_utf8_source_is_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  fs::write(root.join("blob.h"), b"/*\xff\xfe")?;

  let err = default_processor().run(root).unwrap_err();
  assert!(format!("{err:#}").contains("Failed to read file"));
  assert_eq!(fs::read(root.join("blob.h"))?, b"/*\xff\xfe");
  Ok(())
}
