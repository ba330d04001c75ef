//! # Header Module
//!
//! Pure text transformation behind every rewrite: find and drop an existing
//! header, then put the canonical one in front of what is left.
//!
//! An existing header is recognized only when the very first line equals the
//! style's begin marker. It extends to the first following line equal to the
//! end marker, and one blank line directly after it is treated as the
//! separator and dropped too. Everything else is body and is reproduced
//! byte-for-byte, including a missing final newline.
//!
//! ## Example
//!
//! ```rust
//! use update_copyright::header::rewrite;
//! use update_copyright::notice::Notice;
//! use update_copyright::style::CommentStyle;
//!
//! let notice = Notice::new(vec!["Copyright (c) 2026 Example Corp".to_string()]);
//! let out = rewrite("int main() {}\n", &notice, &CommentStyle::c_style()).unwrap();
//! assert_eq!(out, "/*-\n * Copyright (c) 2026 Example Corp\n */\n\nint main() {}\n");
//! ```

use crate::notice::Notice;
use crate::style::CommentStyle;

/// A header that cannot be replaced safely.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
  /// The file opens with the begin marker but no line closes it.
  #[error("header opened by '{begin}' is never closed by '{end}'")]
  Unterminated { begin: String, end: String },
}

/// Drops a trailing `\n` or `\r\n`.
fn line_text(line: &str) -> &str {
  match line.strip_suffix('\n') {
    Some(text) => text.strip_suffix('\r').unwrap_or(text),
    None => line,
  }
}

/// Returns the part of `content` that follows the existing header.
///
/// Content without a header is returned whole. A header without an end marker
/// is an error.
pub fn strip_header<'a>(content: &'a str, style: &CommentStyle) -> Result<&'a str, HeaderError> {
  let lines: Vec<&str> = content.split_inclusive('\n').collect();

  match lines.first() {
    Some(first) if line_text(first) == style.begin => {}
    _ => return Ok(content),
  }

  // Scan starts after the begin marker so a style whose begin and end are
  // identical still needs a closing line.
  let end_index = lines
    .iter()
    .skip(1)
    .position(|line| line_text(line) == style.end)
    .map(|offset| offset + 1)
    .ok_or_else(|| HeaderError::Unterminated {
      begin: style.begin.clone(),
      end: style.end.clone(),
    })?;

  let mut cursor = end_index + 1;
  if lines.get(cursor).is_some_and(|line| line_text(line).is_empty()) {
    cursor += 1;
  }

  let offset: usize = lines[..cursor].iter().map(|line| line.len()).sum();
  Ok(&content[offset..])
}

/// Renders the framed notice followed by the blank separator line.
pub fn render_header(notice: &Notice, style: &CommentStyle) -> String {
  let mut header = String::with_capacity(64 * (notice.lines().len() + 3));

  header.push_str(&style.begin);
  header.push('\n');
  for line in notice.lines() {
    header.push_str(&style.format_line(line));
    header.push('\n');
  }
  header.push_str(&style.end);
  header.push('\n');
  header.push('\n');

  header
}

/// Replaces the header of `content` with the canonical one.
pub fn rewrite(content: &str, notice: &Notice, style: &CommentStyle) -> Result<String, HeaderError> {
  let body = strip_header(content, style)?;
  let mut output = render_header(notice, style);
  output.push_str(body);
  Ok(output)
}
