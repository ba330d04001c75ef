//! # update-copyright
//!
//! Rewrites the copyright header at the top of every source file in a tree.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_update};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_update(cli.update_args)
}
