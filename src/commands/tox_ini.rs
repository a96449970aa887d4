//! # Tox.ini Command Implementation

use anyhow::Result;
use clap::{ArgAction, Args};

use repo_setup::defaults::tox_ini::{FILENAME, SAMPLE};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::parse_bool_flag;
use repo_setup::output::OutputConfig;
use repo_setup::processors::tox_ini;

use super::{CommonArgs, LineLengthArgs};

/// Create or update the [pycodestyle] section of tox.ini
#[derive(Args, Debug)]
pub struct ToxIniArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub line_length: LineLengthArgs,

    /// Keep a [pycodestyle] section (it is removed otherwise)
    #[arg(long)]
    pub pycodestyle_enabled: bool,

    /// Whether tox.ini already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub exists: bool,
}

/// Execute the `tox-ini` command.
pub fn execute(args: ToxIniArgs, out: &OutputConfig) -> Result<()> {
    let workspace = Workspace::from_env()?;
    let mut document = loader::load_ini(&workspace, FILENAME, args.exists, SAMPLE)?;
    tox_ini::process(&mut document, args.pycodestyle_enabled, args.line_length.line_length);

    let mut stage = MemoryFS::new();
    stage.add_file_string(FILENAME, &loader::render_ini(&document))?;
    super::finish(&stage, &workspace, &args.common, out)
}
