//! # Fix Prettier Pre-commit Command Implementation
//!
//! Pins the prettier hook repo in `.pre-commit-config.yaml` to the supported
//! `rev`, adding the repo when it is missing.

use anyhow::Result;
use clap::{ArgAction, Args};

use repo_setup::defaults::pre_commit::{FILENAME, SAMPLE};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::parse_bool_flag;
use repo_setup::output::OutputConfig;
use repo_setup::processors::prettier::fix_prettier_rev;

use super::CommonArgs;

/// Pin the prettier hook rev in .pre-commit-config.yaml
#[derive(Args, Debug)]
pub struct FixPrettierPreCommitArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Whether .pre-commit-config.yaml already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub exists: bool,
}

/// Execute the `fix-prettier-pre-commit` command.
pub fn execute(args: FixPrettierPreCommitArgs, out: &OutputConfig) -> Result<()> {
    let workspace = Workspace::from_env()?;
    let mut document = loader::load_yaml(&workspace, FILENAME, args.exists, SAMPLE)?;
    fix_prettier_rev(&mut document)?;

    let mut stage = MemoryFS::new();
    stage.add_file_string(FILENAME, &loader::render_yaml(&document)?)?;
    super::finish(&stage, &workspace, &args.common, out)
}
