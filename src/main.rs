//! # Repo Setup CLI
//!
//! Binary entry point for the `repo-setup` command-line tool. It parses the
//! arguments with `clap` and runs the selected command; errors are reported
//! by `anyhow` on the way out of `main`.
//!
//! The file processing itself lives in the `repo_setup` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
