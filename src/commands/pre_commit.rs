//! # Pre-commit Command Implementation
//!
//! Creates or updates `.pre-commit-config.yaml`: the base hooks are always
//! present, every other hook repo follows its `--*-enabled`/`--include-*`
//! flag.

use anyhow::Result;
use clap::{ArgAction, Args};
use log::debug;

use repo_setup::defaults::pre_commit::{DEFAULT_PYLINT_ENTRY_PREFIX, FILENAME, SAMPLE};
use repo_setup::filesystem::MemoryFS;
use repo_setup::loader::{self, Workspace};
use repo_setup::options::{parse_bool_flag, PythonFormatter};
use repo_setup::output::OutputConfig;
use repo_setup::processors::pre_commit::{self, PreCommitOptions};

use super::CommonArgs;

/// Create or update .pre-commit-config.yaml
#[derive(Args, Debug)]
pub struct PreCommitArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Whether .pre-commit-config.yaml already exists (otherwise start from the bundled sample)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, value_parser = parse_bool_flag, default_value = "false")]
    pub exists: bool,

    /// Add the jumanjihouse hooks (forbid-binary, shellcheck, ...)
    #[arg(long)]
    pub include_jumanji_house: bool,

    /// Add the prettier hook
    #[arg(long)]
    pub include_prettier: bool,

    /// Add the isort hook
    #[arg(long)]
    pub include_isort: bool,

    /// Python formatter hook to keep: '', autopep8, black or yapf
    #[arg(long, value_name = "NAME", env = "REPO_SETUP_PYTHON_FORMATTER", default_value = "black")]
    pub python_formatter: PythonFormatter,

    /// Add the local pylint hook
    #[arg(long)]
    pub pylint_enabled: bool,

    /// Add the flake8 hook
    #[arg(long)]
    pub flake8_enabled: bool,

    /// Add the pydocstyle hook
    #[arg(long)]
    pub pydocstyle_enabled: bool,

    /// Add the bandit hook
    #[arg(long)]
    pub bandit_enabled: bool,

    /// Directory prefix of ensure_venv.sh in the pylint hook entry
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_PYLINT_ENTRY_PREFIX)]
    pub pylint_entry_prefix: String,
}

impl PreCommitArgs {
    fn options(&self) -> PreCommitOptions {
        PreCommitOptions {
            include_jumanji_house: self.include_jumanji_house,
            include_prettier: self.include_prettier,
            include_isort: self.include_isort,
            python_formatter: self.python_formatter,
            pylint_enabled: self.pylint_enabled,
            flake8_enabled: self.flake8_enabled,
            pydocstyle_enabled: self.pydocstyle_enabled,
            bandit_enabled: self.bandit_enabled,
            pylint_entry_prefix: self.pylint_entry_prefix.clone(),
        }
    }
}

/// Execute the `pre-commit` command.
pub fn execute(args: PreCommitArgs, out: &OutputConfig) -> Result<()> {
    let workspace = Workspace::from_env()?;
    let options = args.options();
    debug!("pre-commit options: exists={} {:?}", args.exists, options);

    let mut document = loader::load_yaml(&workspace, FILENAME, args.exists, SAMPLE)?;
    pre_commit::process(&mut document, &options)?;

    let mut stage = MemoryFS::new();
    stage.add_file_string(FILENAME, &loader::render_yaml(&document)?)?;
    super::finish(&stage, &workspace, &args.common, out)
}
