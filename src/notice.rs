//! # Notice Module
//!
//! The canonical copyright notice written into every header. A notice is just
//! an ordered list of lines; the comment framing comes from
//! [`CommentStyle`](crate::style::CommentStyle).
//!
//! Lines may contain a `{{year}}` placeholder, filled in by
//! [`Notice::render`].
//!
//! ## Example
//!
//! ```rust
//! use update_copyright::notice::Notice;
//!
//! let notice = Notice::new(vec!["Copyright (c) {{year}} Example Corp".to_string()]);
//! let rendered = notice.render("2026");
//! assert_eq!(rendered.lines(), ["Copyright (c) 2026 Example Corp"]);
//! ```

use chrono::Datelike;

use crate::verbose_log;

/// Notice written when no configuration overrides it.
pub const DEFAULT_NOTICE: &[&str] = &["Copyright (c) 2016-2017 Doug Rabson", "All rights reserved."];

/// Placeholder replaced by the copyright year when rendering.
pub const YEAR_PLACEHOLDER: &str = "{{year}}";

/// The copyright notice body, one entry per line, without comment framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  lines: Vec<String>,
}

impl Default for Notice {
  fn default() -> Self {
    Self::new(DEFAULT_NOTICE.iter().map(|line| (*line).to_string()).collect())
  }
}

impl Notice {
  pub const fn new(lines: Vec<String>) -> Self {
    Self { lines }
  }

  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Substitutes `{{year}}` in every line.
  pub fn render(&self, year: &str) -> Self {
    verbose_log!("Rendering notice with year: {}", year);
    Self {
      lines: self.lines.iter().map(|line| line.replace(YEAR_PLACEHOLDER, year)).collect(),
    }
  }

  /// Renders the notice with the current local year.
  pub fn render_current_year(&self) -> Self {
    self.render(&chrono::Local::now().year().to_string())
  }
}
