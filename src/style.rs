//! # Style Module
//!
//! Comment framing for headers and the rules that decide which framing a file
//! gets.
//!
//! A [`CommentStyle`] is the `(begin, prefix, end)` triple wrapped around the
//! notice. A [`StyleTable`] maps file names to styles: configured filename and
//! extension rules first, then the built-in C and Shell rules. Files that match
//! no rule are never touched.

use crate::config::{Config, ConfigError};
use crate::notice::Notice;

/// How a header is framed in one kind of file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
  /// Label used in progress output, e.g. `C-style`.
  pub name: String,
  /// First line of the header. Also how an existing header is recognized.
  pub begin: String,
  /// Prepended to every notice line.
  pub prefix: String,
  /// Last line of the header.
  pub end: String,
}

impl CommentStyle {
  pub fn new(name: &str, begin: &str, prefix: &str, end: &str) -> Self {
    Self {
      name: name.to_string(),
      begin: begin.to_string(),
      prefix: prefix.to_string(),
      end: end.to_string(),
    }
  }

  /// Block comment framing for C, C++ and header files.
  pub fn c_style() -> Self {
    Self::new("C-style", "/*-", " *", " */")
  }

  /// Line comment framing for Python scripts and BUILD files.
  pub fn shell_style() -> Self {
    Self::new("Shell-style", "#-", "#", "#")
  }

  /// Formats one notice line. Empty lines become the bare prefix so no
  /// trailing whitespace is written.
  pub fn format_line(&self, line: &str) -> String {
    if line.is_empty() {
      self.prefix.clone()
    } else {
      format!("{} {}", self.prefix, line)
    }
  }
}

/// What part of a file name a rule looks at.
#[derive(Debug, Clone)]
pub enum NameMatcher {
  /// File name ends with this suffix (including the dot).
  Suffix(String),
  /// File name is exactly this string.
  Exact(String),
  /// File name matches this glob.
  Glob(glob::Pattern),
}

impl NameMatcher {
  pub fn matches(&self, file_name: &str) -> bool {
    match self {
      Self::Suffix(suffix) => file_name.ends_with(suffix.as_str()),
      Self::Exact(name) => file_name == name,
      Self::Glob(pattern) => pattern.matches(file_name),
    }
  }

  /// Returns `true` if every name `other` matches is also matched by `self`.
  ///
  /// Conservative: globs only shadow identical globs.
  pub fn shadows(&self, other: &NameMatcher) -> bool {
    match (self, other) {
      (Self::Suffix(earlier), Self::Suffix(later)) => later.ends_with(earlier.as_str()),
      (Self::Suffix(_) | Self::Exact(_) | Self::Glob(_), Self::Exact(name)) => self.matches(name),
      (Self::Glob(earlier), Self::Glob(later)) => earlier.as_str() == later.as_str(),
      _ => false,
    }
  }
}

/// A single name rule and the style it selects.
#[derive(Debug, Clone)]
pub struct StyleRule {
  pub matcher: NameMatcher,
  pub style: CommentStyle,
}

/// Ordered list of style rules. The first matching rule wins.
#[derive(Debug, Clone)]
pub struct StyleTable {
  rules: Vec<StyleRule>,
}

impl Default for StyleTable {
  fn default() -> Self {
    Self::builtin()
  }
}

impl StyleTable {
  pub const fn new(rules: Vec<StyleRule>) -> Self {
    Self { rules }
  }

  /// The built-in rules: `.cpp`, `.c`, `.h` are C-style; `BUILD` and `.py`
  /// are Shell-style.
  pub fn builtin() -> Self {
    let c = CommentStyle::c_style();
    let shell = CommentStyle::shell_style();

    let rules = vec![
      StyleRule {
        matcher: NameMatcher::Suffix(".cpp".to_string()),
        style: c.clone(),
      },
      StyleRule {
        matcher: NameMatcher::Suffix(".c".to_string()),
        style: c.clone(),
      },
      StyleRule {
        matcher: NameMatcher::Suffix(".h".to_string()),
        style: c,
      },
      StyleRule {
        matcher: NameMatcher::Exact("BUILD".to_string()),
        style: shell.clone(),
      },
      StyleRule {
        matcher: NameMatcher::Suffix(".py".to_string()),
        style: shell,
      },
    ];

    Self { rules }
  }

  /// Builds a table with the configured rules ahead of the built-ins.
  ///
  /// Filename rules come before extension rules. Filename keys containing
  /// `*`, `?` or `[` are treated as globs.
  pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
    let mut rules = Vec::with_capacity(config.filenames.len() + config.comment_styles.len() + 5);

    for (name, style) in &config.filenames {
      let matcher = if name.contains(['*', '?', '[']) {
        let pattern = glob::Pattern::new(name).map_err(|source| ConfigError::InvalidGlob {
          pattern: name.clone(),
          source,
        })?;
        NameMatcher::Glob(pattern)
      } else {
        NameMatcher::Exact(name.clone())
      };
      rules.push(StyleRule {
        matcher,
        style: style.to_style(&format!("{name}-style")),
      });
    }

    for (ext, style) in &config.comment_styles {
      rules.push(StyleRule {
        matcher: NameMatcher::Suffix(format!(".{ext}")),
        style: style.to_style(&format!(".{ext}-style")),
      });
    }

    rules.extend(Self::builtin().rules);
    Ok(Self { rules })
  }

  /// Resolves the style for a bare file name, or `None` if the file should be
  /// left alone.
  pub fn resolve(&self, file_name: &str) -> Option<&CommentStyle> {
    self
      .rules
      .iter()
      .find(|rule| rule.matcher.matches(file_name))
      .map(|rule| &rule.style)
  }

  /// Verifies that every reachable style can strip the header it writes for
  /// `notice`.
  ///
  /// If a formatted notice line equals the style's end marker, the next run
  /// would end the header at that line and leave the rest of the old notice in
  /// the body. Rules that an earlier rule always shadows never select a file
  /// and are not checked.
  pub fn check_converges(&self, notice: &Notice) -> Result<(), ConfigError> {
    for (index, rule) in self.rules.iter().enumerate() {
      if self.rules[..index]
        .iter()
        .any(|earlier| earlier.matcher.shadows(&rule.matcher))
      {
        continue;
      }

      let style = &rule.style;
      if let Some(line) = notice.lines().iter().find(|line| style.format_line(line) == style.end) {
        return Err(ConfigError::NoticeLineEndsHeader {
          style: style.name.clone(),
          line: line.clone(),
        });
      }
    }
    Ok(())
  }
}
