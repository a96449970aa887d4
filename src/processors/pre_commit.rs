//! `.pre-commit-config.yaml` processing.
//!
//! The hook repos are handled in a fixed order: base hooks, jumanjihouse,
//! prettier, isort, the Python formatter, pylint, flake8, pydocstyle and
//! bandit. Enabled repos are reconciled against their defaults, disabled ones
//! are removed. Pylint lives in the `local` repo, so disabling it only removes
//! the pylint hook and leaves other local hooks alone.

use log::{debug, info};
use serde_yaml::Value as YamlValue;

use crate::defaults::pre_commit::{
    RepoDefault, AUTOPEP8, BANDIT, BLACK, DEFAULT_PYLINT_ENTRY_PREFIX, FLAKE8, ISORT, JUMANJI_HOUSE,
    LOCAL, LOCAL_REPO, PRETTIER, PRE_COMMIT_HOOKS, PYDOCSTYLE, PYLINT_ENTRY_SCRIPT, PYLINT_HOOK_ID,
    YAPF,
};
use crate::error::Result;
use crate::merge::yaml::{reconcile, remove, set_entry_field, Layout};
use crate::options::PythonFormatter;

const LAYOUT: Layout = Layout::PRE_COMMIT;

/// Repos owned by each formatter choice.
const FORMATTER_REPOS: [(PythonFormatter, RepoDefault); 3] = [
    (PythonFormatter::Autopep8, AUTOPEP8),
    (PythonFormatter::Black, BLACK),
    (PythonFormatter::Yapf, YAPF),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreCommitOptions {
    pub include_jumanji_house: bool,
    pub include_prettier: bool,
    pub include_isort: bool,
    pub python_formatter: PythonFormatter,
    pub pylint_enabled: bool,
    pub flake8_enabled: bool,
    pub pydocstyle_enabled: bool,
    pub bandit_enabled: bool,
    /// Prepended to `ensure_venv.sh` in the pylint hook's `entry`.
    pub pylint_entry_prefix: String,
}

impl Default for PreCommitOptions {
    fn default() -> Self {
        Self {
            include_jumanji_house: false,
            include_prettier: false,
            include_isort: false,
            python_formatter: PythonFormatter::None,
            pylint_enabled: false,
            flake8_enabled: false,
            pydocstyle_enabled: false,
            bandit_enabled: false,
            pylint_entry_prefix: DEFAULT_PYLINT_ENTRY_PREFIX.to_string(),
        }
    }
}

/// Reconcile a repo and every hook it owns.
pub fn update_repo(document: &mut YamlValue, repo: &RepoDefault) -> Result<()> {
    let group_default = repo.to_value()?;
    let hooks = repo.hook_values()?;
    reconcile(document, &LAYOUT, repo.repo, &group_default, &hooks)
}

fn toggle_repo(document: &mut YamlValue, repo: &RepoDefault, enabled: bool) -> Result<()> {
    if enabled {
        update_repo(document, repo)
    } else {
        remove(document, &LAYOUT, &[repo.repo], &[])
    }
}

pub fn process(document: &mut YamlValue, options: &PreCommitOptions) -> Result<()> {
    debug!("Processing .pre-commit-config.yaml with {:?}", options);

    update_repo(document, &PRE_COMMIT_HOOKS)?;
    toggle_repo(document, &JUMANJI_HOUSE, options.include_jumanji_house)?;
    toggle_repo(document, &PRETTIER, options.include_prettier)?;
    toggle_repo(document, &ISORT, options.include_isort)?;
    process_python_formatter(document, options.python_formatter)?;
    process_pylint(document, options.pylint_enabled, &options.pylint_entry_prefix)?;
    toggle_repo(document, &FLAKE8, options.flake8_enabled)?;
    toggle_repo(document, &PYDOCSTYLE, options.pydocstyle_enabled)?;
    toggle_repo(document, &BANDIT, options.bandit_enabled)?;

    Ok(())
}

fn process_python_formatter(document: &mut YamlValue, formatter: PythonFormatter) -> Result<()> {
    if let Some((_, selected)) = FORMATTER_REPOS.iter().find(|(owner, _)| *owner == formatter) {
        update_repo(document, selected)?;
    }
    let others: Vec<&str> = FORMATTER_REPOS
        .iter()
        .filter(|(owner, _)| *owner != formatter)
        .map(|(_, repo)| repo.repo)
        .collect();
    remove(document, &LAYOUT, &others, &[])
}

fn process_pylint(document: &mut YamlValue, enabled: bool, entry_prefix: &str) -> Result<()> {
    if !enabled {
        info!("Pylint disabled, removing it from the local repo");
        return remove(document, &LAYOUT, &[LOCAL_REPO], &[PYLINT_HOOK_ID]);
    }

    update_repo(document, &LOCAL)?;
    set_entry_field(
        document,
        &LAYOUT,
        LOCAL_REPO,
        PYLINT_HOOK_ID,
        "entry",
        YamlValue::String(format!("{}{}", entry_prefix, PYLINT_ENTRY_SCRIPT)),
    )
}
