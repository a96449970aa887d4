//! # Prettierrc Command Implementation

use anyhow::Result;
use clap::{ArgAction, Args};
use log::info;

use repo_setup::defaults::prettier::{FILENAME, SAMPLE};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::parse_bool_flag;
use repo_setup::output::OutputConfig;
use repo_setup::processors::prettier::process_prettierrc;

use super::{CommonArgs, LineLengthArgs};

/// Set printWidth in .prettierrc
#[derive(Args, Debug)]
pub struct PrettierrcArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub line_length: LineLengthArgs,

    /// Only touch .prettierrc when prettier is part of the project
    #[arg(long)]
    pub include_prettier: bool,

    /// Whether .prettierrc already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub exists: bool,
}

/// Execute the `prettierrc` command.
pub fn execute(args: PrettierrcArgs, out: &OutputConfig) -> Result<()> {
    if !args.include_prettier {
        info!("prettier is not included, leaving {} alone", FILENAME);
        return Ok(());
    }

    let workspace = Workspace::from_env()?;
    let mut document = loader::load_json(&workspace, FILENAME, args.exists, SAMPLE)?;
    process_prettierrc(&mut document, args.line_length.line_length)?;

    let mut stage = MemoryFS::new();
    stage.add_file_string(FILENAME, &loader::render_json(&document)?)?;
    super::finish(&stage, &workspace, &args.common, out)
}
