//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use repo_setup::output::OutputConfig;

use crate::commands;
use crate::commands::CommonArgs;

pub const BIN_NAME: &str = "repo-setup";

/// Repo Setup - Create and update Python project tooling configuration
#[derive(Parser, Debug)]
#[command(name = "repo-setup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create or update .pre-commit-config.yaml
    PreCommit(commands::pre_commit::PreCommitArgs),

    /// Pin the prettier hook rev in .pre-commit-config.yaml
    FixPrettierPreCommit(commands::fix_prettier_pre_commit::FixPrettierPreCommitArgs),

    /// Update .prettierrc and pin the prettier pre-commit hook
    Prettier(commands::prettier::PrettierArgs),

    /// Set printWidth in .prettierrc
    Prettierrc(commands::prettierrc::PrettierrcArgs),

    /// Create or update .flake8
    Flake8(commands::flake8::Flake8Args),

    /// Create or update .pylintrc
    Pylintrc(commands::pylintrc::PylintrcArgs),

    /// Create or update the [pycodestyle] section of tox.ini
    ToxIni(commands::tox_ini::ToxIniArgs),

    /// Create, update or remove pyproject.toml
    Pyproject(commands::pyproject::PyprojectArgs),

    /// Create or update .vscode/settings.json
    VscodeSettings(commands::vscode_settings::VscodeSettingsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Commands {
    fn common(&self) -> Option<&CommonArgs> {
        match self {
            Commands::PreCommit(args) => Some(&args.common),
            Commands::FixPrettierPreCommit(args) => Some(&args.common),
            Commands::Prettier(args) => Some(&args.common),
            Commands::Prettierrc(args) => Some(&args.common),
            Commands::Flake8(args) => Some(&args.common),
            Commands::Pylintrc(args) => Some(&args.common),
            Commands::ToxIni(args) => Some(&args.common),
            Commands::Pyproject(args) => Some(&args.common),
            Commands::VscodeSettings(args) => Some(&args.common),
            Commands::Completions(_) => None,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let debug = self.command.common().is_some_and(|common| common.debug);
        init_logging(&self.log_level, debug);
        debug!("{:?}", self.command);

        let out = OutputConfig::from_env_and_flag(&self.color);
        match self.command {
            Commands::PreCommit(args) => commands::pre_commit::execute(args, &out),
            Commands::FixPrettierPreCommit(args) => commands::fix_prettier_pre_commit::execute(args, &out),
            Commands::Prettier(args) => commands::prettier::execute(args, &out),
            Commands::Prettierrc(args) => commands::prettierrc::execute(args, &out),
            Commands::Flake8(args) => commands::flake8::execute(args, &out),
            Commands::Pylintrc(args) => commands::pylintrc::execute(args, &out),
            Commands::ToxIni(args) => commands::tox_ini::execute(args, &out),
            Commands::Pyproject(args) => commands::pyproject::execute(args, &out),
            Commands::VscodeSettings(args) => commands::vscode_settings::execute(args, &out),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

// Logs go to stderr so test-mode output on stdout stays clean.
fn init_logging(log_level: &str, debug: bool) {
    let filter = if debug { "debug" } else { log_level };
    let _ = env_logger::Builder::new()
        .parse_filters(filter)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
