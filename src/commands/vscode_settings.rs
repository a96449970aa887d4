//! # VS Code Settings Command Implementation
//!
//! Updates `.vscode/settings.json`. The interpreter path is derived from the
//! project directory name, which is taken from `PWD`.

use anyhow::Result;
use clap::{ArgAction, Args};
use log::debug;

use repo_setup::defaults::vscode::{FILENAME, SAMPLE};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::{parse_bool_flag, PythonFormatter};
use repo_setup::output::OutputConfig;
use repo_setup::processors::vscode;

use super::CommonArgs;

/// Create or update .vscode/settings.json
#[derive(Args, Debug)]
pub struct VscodeSettingsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Whether .vscode/settings.json already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub exists: bool,

    /// Python formatter extension to select: '', autopep8, black or yapf
    #[arg(long, value_name = "NAME", env = "REPO_SETUP_PYTHON_FORMATTER", default_value = "black")]
    pub python_formatter: PythonFormatter,
}

/// Execute the `vscode-settings` command.
pub fn execute(args: VscodeSettingsArgs, out: &OutputConfig) -> Result<()> {
    let workspace = Workspace::from_env()?;
    let project_name = workspace.project_name();
    debug!("vscode settings for project '{}' with formatter '{}'", project_name, args.python_formatter);

    let mut document = loader::load_json(&workspace, FILENAME, args.exists, SAMPLE)?;
    vscode::process(&mut document, args.python_formatter, &project_name)?;

    let mut stage = MemoryFS::new();
    stage.add_file_string(FILENAME, &loader::render_json(&document)?)?;
    super::finish(&stage, &workspace, &args.common, out)
}
