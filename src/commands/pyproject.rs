//! # Pyproject Command Implementation
//!
//! Updates the `[tool.*]` tables of `pyproject.toml`. When no tool table is
//! left the file is deleted rather than written empty.

use anyhow::Result;
use clap::{ArgAction, Args};
use log::debug;

use repo_setup::defaults::pyproject::{DEFAULT_ISORT_PROFILE, DEFAULT_PACKAGE_MANAGER, FILENAME, SAMPLE};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::{parse_bool_flag, PythonFormatter};
use repo_setup::output::OutputConfig;
use repo_setup::processors::pyproject::{self, PyprojectOptions};

use super::{CommonArgs, LineLengthArgs};

/// Create, update or remove pyproject.toml
#[derive(Args, Debug)]
pub struct PyprojectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub line_length: LineLengthArgs,

    /// Whether pyproject.toml already exists
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub exists: bool,

    /// Python formatter to configure: '', autopep8, black or yapf
    #[arg(long, value_name = "NAME", env = "REPO_SETUP_PYTHON_FORMATTER", default_value = "black")]
    pub python_formatter: PythonFormatter,

    /// Keep a [tool.isort] table
    #[arg(long)]
    pub include_isort: bool,

    /// isort profile used when the formatter is not black
    #[arg(long, value_name = "PROFILE", default_value = DEFAULT_ISORT_PROFILE)]
    pub isort_profile: String,

    /// Keep a [tool.pytest.ini_options] table
    #[arg(long)]
    pub pytest_enabled: bool,

    /// Package manager of the project (pip, poetry, ...)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PACKAGE_MANAGER)]
    pub package_manager: String,

    /// Whether the project is an installable package
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub is_package: bool,
}

impl PyprojectArgs {
    fn options(&self) -> PyprojectOptions {
        PyprojectOptions {
            python_formatter: self.python_formatter,
            include_isort: self.include_isort,
            isort_profile: self.isort_profile.clone(),
            pytest_enabled: self.pytest_enabled,
            line_length: self.line_length.line_length,
            package_manager: self.package_manager.clone(),
            is_package: self.is_package,
        }
    }
}

/// Execute the `pyproject` command.
pub fn execute(args: PyprojectArgs, out: &OutputConfig) -> Result<()> {
    let workspace = Workspace::from_env()?;
    let options = args.options();
    debug!("pyproject options: exists={} {:?}", args.exists, options);

    let mut document = loader::load_toml(&workspace, FILENAME, args.exists, SAMPLE)?;
    pyproject::process(&mut document, &options);

    let mut stage = MemoryFS::new();
    if document.is_empty() {
        stage.delete_file(FILENAME);
    } else {
        stage.add_file_string(FILENAME, &loader::render_toml(&document)?)?;
    }
    super::finish(&stage, &workspace, &args.common, out)
}
