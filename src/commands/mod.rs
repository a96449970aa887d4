//! # CLI Command Implementations
//!
//! One file per subcommand. Each command module contains:
//! - An `Args` struct derived with `clap`, flattening [`CommonArgs`].
//! - An `execute` function that loads the target file (or the bundled sample),
//!   runs the matching processor from `repo_setup::processors`, stages the
//!   rendered result and hands the stage to [`finish`].

pub mod completions;
pub mod fix_prettier_pre_commit;
pub mod flake8;
pub mod pre_commit;
pub mod prettier;
pub mod prettierrc;
pub mod pylintrc;
pub mod pyproject;
pub mod tox_ini;
pub mod vscode_settings;

use anyhow::Result;
use clap::Args;
use log::info;

use repo_setup::defaults::DEFAULT_LINE_LENGTH;
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::Workspace;
use repo_setup::output::{status_line, OutputConfig, Status};
use repo_setup::write;

/// Flags shared by every setup command.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Log the effective options and each update step
    #[arg(short, long)]
    pub debug: bool,

    /// Print the rendered files instead of writing them
    #[arg(long)]
    pub test: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LineLengthArgs {
    /// Maximum line length written into the tool configuration
    #[arg(long, value_name = "N", env = "REPO_SETUP_LINE_LENGTH", default_value_t = DEFAULT_LINE_LENGTH)]
    pub line_length: u32,
}

/// Write the stage into the workspace, or print it in test mode.
pub fn finish(stage: &MemoryFS, workspace: &Workspace, common: &CommonArgs, out: &OutputConfig) -> Result<()> {
    if common.test {
        info!("Test mode, not writing to {}", workspace.root().display());
        for (path, file) in stage.files() {
            println!("{}", status_line(out, Status::Rendered, &path.display().to_string()));
            print!("{}", file.as_str()?);
        }
        for path in stage.deletions() {
            println!(
                "{} (test mode, kept)",
                status_line(out, Status::Deleted, &path.display().to_string())
            );
        }
        return Ok(());
    }

    let report = write::execute(stage, workspace.root())?;
    for path in &report.written {
        println!("{}", status_line(out, Status::Written, &path.display().to_string()));
    }
    for path in &report.deleted {
        println!("{}", status_line(out, Status::Deleted, &path.display().to_string()));
    }
    Ok(())
}
