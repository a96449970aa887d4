//! `pyproject.toml` table names, values and sample.

pub const FILENAME: &str = "pyproject.toml";
pub const TOOL_KEY: &str = "tool";

pub const AUTOPEP8_KEY: &str = "autopep8";
pub const BLACK_KEY: &str = "black";
pub const YAPF_KEY: &str = "yapf";
pub const YAPF_BASED_ON_STYLE: &str = "pep8";

pub const ISORT_KEY: &str = "isort";
pub const ISORT_PROFILE_KEY: &str = "profile";
pub const DEFAULT_ISORT_PROFILE: &str = "black";

pub const PYTEST_KEY: &str = "pytest";
pub const PYTEST_INI_OPTIONS_KEY: &str = "ini_options";
pub const PYTEST_ADDOPTS_KEY: &str = "addopts";
pub const PYTEST_IGNORE_OPTION: &str = "--ignore=./utility-repo-scripts";
pub const PYTEST_LOG_CLI_LEVEL: &str = "WARNING";
pub const PYTEST_LOG_CLI_FORMAT: &str =
    "%(asctime)s [%(levelname)8s] %(message)s (%(filename)s:%(lineno)s)";
pub const PYTEST_LOG_CLI_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const POETRY_KEY: &str = "poetry";
pub const POETRY_PACKAGE_MODE_KEY: &str = "package-mode";
pub const POETRY_PACKAGE_MANAGER: &str = "poetry";
pub const DEFAULT_PACKAGE_MANAGER: &str = "pip";

pub const SAMPLE: &str = r#"[tool.autopep8]
max_line_length = 125
experimental = true

[tool.black]
line-length = 125

[tool.isort]
line_length = 125
profile = "black"

[tool.pytest.ini_options]
addopts = "--ignore=./utility-repo-scripts"
log_cli = false
log_cli_level = "WARNING"
log_cli_format = "%(asctime)s [%(levelname)8s] %(message)s (%(filename)s:%(lineno)s)"
log_cli_date_format = "%Y-%m-%d %H:%M:%S"
markers = [
    "example_mark_with_description: marks tests as example_mark_with_description (deselect with '-m \"not example_mark_with_description\"')",
    "example_mark_without_description",
]
"#;
