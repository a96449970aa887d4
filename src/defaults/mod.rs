//! Default values for the generated configuration files.
//!
//! Each submodule holds the filenames, keys, default values and bundled
//! sample document for one tool. The sample is what gets processed when the
//! project does not have the file yet.

pub mod flake8;
pub mod pre_commit;
pub mod prettier;
pub mod pylintrc;
pub mod pyproject;
pub mod tox_ini;
pub mod vscode;

/// Name of the directory the setup scripts are vendored under. Tool configs
/// exclude it from linting, formatting and test discovery.
pub const REPO_NAME: &str = "utility-repo-scripts";

/// Line length used when `--line-length` is not given.
pub const DEFAULT_LINE_LENGTH: u32 = 125;

/// Environment variable the project directory is read from.
pub const PROJECT_DIR_ENV: &str = "PWD";
