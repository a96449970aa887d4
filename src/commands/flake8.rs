//! # Flake8 Command Implementation

use anyhow::Result;
use clap::{ArgAction, Args};

use repo_setup::defaults::flake8::{FILENAME, SAMPLE};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::parse_bool_flag;
use repo_setup::output::OutputConfig;
use repo_setup::processors::flake8;

use super::{CommonArgs, LineLengthArgs};

/// Create or update .flake8
#[derive(Args, Debug)]
pub struct Flake8Args {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub line_length: LineLengthArgs,

    /// Whether .flake8 already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub exists: bool,
}

/// Execute the `flake8` command.
pub fn execute(args: Flake8Args, out: &OutputConfig) -> Result<()> {
    let workspace = Workspace::from_env()?;
    let mut document = loader::load_ini(&workspace, FILENAME, args.exists, SAMPLE)?;
    flake8::process(&mut document, args.line_length.line_length);

    let mut stage = MemoryFS::new();
    stage.add_file_string(FILENAME, &loader::render_ini(&document))?;
    super::finish(&stage, &workspace, &args.common, out)
}
