//! # update-copyright
//!
//! Rewrites the copyright header at the top of every source file in a tree,
//! replacing whatever header block is there with the canonical notice.
//!
//! A run walks a root directory, skips excluded subtrees (vendored code and
//! git metadata by default), and picks a comment style for each file by name:
//! block comments for `.c`, `.cpp` and `.h`, line comments for `.py` and
//! `BUILD`. Other files are left alone. Running it again produces the same
//! bytes.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use update_copyright::notice::Notice;
//! use update_copyright::processor::Processor;
//! use update_copyright::style::StyleTable;
//! use update_copyright::walker::Exclusions;
//!
//! fn main() -> anyhow::Result<()> {
//!     let notice = Notice::new(vec![
//!         "Copyright (c) 2026 Example Corp".to_string(),
//!         "All rights reserved.".to_string(),
//!     ]);
//!
//!     let processor = Processor::new(notice, StyleTable::builtin(), Exclusions::default())?;
//!     let summary = processor.run(Path::new("."))?;
//!
//!     println!("Rewrote {} files", summary.total_rewritten());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Runs the rewrite over a tree
//! * [`header`] - Strips and renders headers in file content
//! * [`style`] - Comment styles and style selection
//! * [`walker`] - Directory traversal and exclusions
//! * [`notice`] - The notice text
//! * [`config`] - Optional TOML configuration
//! * [`logging`] - Output macros and tracing setup

pub mod config;
pub mod header;
pub mod logging;
pub mod notice;
pub mod processor;
pub mod style;
pub mod walker;
