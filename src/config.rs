//! # Configuration Module
//!
//! Optional overrides for the notice text, the excluded subtrees, and the
//! comment styles. Without a configuration file the tool uses its built-in
//! defaults.
//!
//! Configuration is read from `.update-copyright.toml` in the root, from the
//! path in the `UPDATE_COPYRIGHT_CONFIG` environment variable, or from an
//! explicit `--config` path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::notice::Notice;
use crate::style::CommentStyle;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".update-copyright.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "UPDATE_COPYRIGHT_CONFIG";

/// User-defined comment style.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommentStyleConfig {
  /// First header line, e.g. `/*-`.
  pub begin: String,

  /// Prefix for each notice line, e.g. ` *`.
  pub prefix: String,

  /// Last header line, e.g. ` */`.
  pub end: String,
}

impl CommentStyleConfig {
  pub fn new(begin: &str, prefix: &str, end: &str) -> Self {
    Self {
      begin: begin.to_string(),
      prefix: prefix.to_string(),
      end: end.to_string(),
    }
  }

  /// Converts into a [`CommentStyle`] labelled `name` in progress output.
  pub fn to_style(&self, name: &str) -> CommentStyle {
    CommentStyle::new(name, &self.begin, &self.prefix, &self.end)
  }
}

/// Main configuration struct, loaded from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Replacement notice lines. `{{year}}` is substituted with the current
  /// year.
  #[serde(default)]
  pub notice: Option<Vec<String>>,

  /// Replacement list of excluded subtrees, relative to the root.
  #[serde(default)]
  pub exclude: Option<Vec<String>>,

  /// Comment styles keyed by file extension without the leading dot.
  #[serde(default, rename = "comment-styles")]
  pub comment_styles: BTreeMap<String, CommentStyleConfig>,

  /// Comment styles keyed by exact file name or glob (e.g. `CMakeLists.txt`,
  /// `*.bzl`).
  #[serde(default)]
  pub filenames: BTreeMap<String, CommentStyleConfig>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A comment style configuration is invalid.
  #[error("Invalid comment style for '{key}': {message}")]
  InvalidCommentStyle { key: String, message: String },

  /// A filename key could not be compiled as a glob.
  #[error("Invalid filename pattern '{pattern}': {source}")]
  InvalidGlob {
    pattern: String,
    source: glob::PatternError,
  },

  /// An exclusion entry cannot be interpreted relative to the root.
  #[error("Invalid exclude entry '{entry}': {message}")]
  InvalidExclude { entry: String, message: String },

  /// The notice would be cut short when its header is stripped again.
  #[error("Notice line '{line}' is written by {style} exactly as its end marker; the header could not be replaced on later runs")]
  NoticeLineEndsHeader { style: String, line: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    verbose_log!(
      "Loaded {} extension and {} filename style overrides",
      config.comment_styles.len(),
      config.filenames.len()
    );

    Ok(config)
  }

  /// Checks that:
  /// - `begin` and `end` are non-empty for every style
  /// - Extension keys don't include the leading dot
  /// - Exclude entries are relative paths
  fn validate(&self) -> Result<(), ConfigError> {
    let styles = self.comment_styles.iter().chain(self.filenames.iter());
    for (key, style) in styles {
      if style.begin.is_empty() {
        return Err(ConfigError::InvalidCommentStyle {
          key: key.clone(),
          message: "begin field cannot be empty".to_string(),
        });
      }
      if style.end.is_empty() {
        return Err(ConfigError::InvalidCommentStyle {
          key: key.clone(),
          message: "end field cannot be empty".to_string(),
        });
      }
    }

    for ext in self.comment_styles.keys() {
      if ext.starts_with('.') {
        return Err(ConfigError::InvalidCommentStyle {
          key: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
    }

    for entry in self.exclude.iter().flatten() {
      if entry.is_empty() {
        return Err(ConfigError::InvalidExclude {
          entry: entry.clone(),
          message: "entry cannot be empty".to_string(),
        });
      }
      if Path::new(entry).is_absolute() {
        return Err(ConfigError::InvalidExclude {
          entry: entry.clone(),
          message: "entry must be relative to the root".to_string(),
        });
      }
    }

    Ok(())
  }

  /// The configured notice, or the built-in one.
  pub fn notice(&self) -> Notice {
    match &self.notice {
      Some(lines) => Notice::new(lines.clone()),
      None => Notice::default(),
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `UPDATE_COPYRIGHT_CONFIG` environment variable
/// 3. `.update-copyright.toml` in the root directory
///
/// An explicit path that does not exist is returned anyway so that loading it
/// reports the error instead of silently falling back to defaults.
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using root config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when discovery is disabled or nothing was found.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
