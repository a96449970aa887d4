//! # Prettier Command Implementation
//!
//! Runs the `.prettierrc` update and the prettier `rev` pin together, staging
//! both files so they are written in one pass.

use anyhow::Result;
use clap::{ArgAction, Args};
use log::info;

use repo_setup::defaults::{pre_commit, prettier};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::parse_bool_flag;
use repo_setup::output::OutputConfig;
use repo_setup::processors::prettier::{fix_prettier_rev, process_prettierrc};

use super::{CommonArgs, LineLengthArgs};

/// Update .prettierrc and pin the prettier pre-commit hook
#[derive(Args, Debug)]
pub struct PrettierArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub line_length: LineLengthArgs,

    /// Only run when prettier is part of the project
    #[arg(long)]
    pub include_prettier: bool,

    /// Whether .prettierrc already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub prettierrc_exists: bool,

    /// Whether .pre-commit-config.yaml already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub pre_commit_config_exists: bool,
}

/// Execute the `prettier` command.
pub fn execute(args: PrettierArgs, out: &OutputConfig) -> Result<()> {
    if !args.include_prettier {
        info!("prettier is not included, nothing to do");
        return Ok(());
    }

    let workspace = Workspace::from_env()?;
    let mut prettierrc = loader::load_json(
        &workspace,
        prettier::FILENAME,
        args.prettierrc_exists,
        prettier::SAMPLE,
    )?;
    let mut pre_commit_config = loader::load_yaml(
        &workspace,
        pre_commit::FILENAME,
        args.pre_commit_config_exists,
        pre_commit::SAMPLE,
    )?;

    process_prettierrc(&mut prettierrc, args.line_length.line_length)?;
    fix_prettier_rev(&mut pre_commit_config)?;

    let mut stage = MemoryFS::new();
    stage.add_file_string(prettier::FILENAME, &loader::render_json(&prettierrc)?)?;
    stage.add_file_string(pre_commit::FILENAME, &loader::render_yaml(&pre_commit_config)?)?;
    super::finish(&stage, &workspace, &args.common, out)
}
