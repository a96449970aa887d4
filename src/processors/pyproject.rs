//! `pyproject.toml` `[tool.*]` processing.

use log::{debug, info};
use toml::{Table, Value as TomlValue};

use crate::defaults::pyproject::*;
use crate::defaults::DEFAULT_LINE_LENGTH;
use crate::merge::toml::{ensure_table, remove_table};
use crate::options::PythonFormatter;

/// Settings for `pyproject.toml` processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PyprojectOptions {
    pub python_formatter: PythonFormatter,
    pub include_isort: bool,
    /// Used when the formatter is not black; empty means no profile.
    pub isort_profile: String,
    pub pytest_enabled: bool,
    pub line_length: u32,
    pub package_manager: String,
    pub is_package: bool,
}

impl Default for PyprojectOptions {
    fn default() -> Self {
        Self {
            python_formatter: PythonFormatter::None,
            include_isort: false,
            isort_profile: String::new(),
            pytest_enabled: false,
            line_length: DEFAULT_LINE_LENGTH,
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            is_package: false,
        }
    }
}

/// Reconcile the tool tables.
///
/// When nothing is left under `[tool]` the whole document is cleared; the
/// caller then deletes the file instead of writing it.
pub fn process(document: &mut Table, options: &PyprojectOptions) {
    let tool = ensure_table(document, TOOL_KEY);
    process_formatter(tool, options);
    process_isort(tool, options);
    process_pytest(tool, options);
    process_poetry(tool, options);

    if tool.is_empty() {
        info!("No tool configuration left, {} will be removed", FILENAME);
        document.clear();
    }
}

fn integer(value: u32) -> TomlValue {
    TomlValue::Integer(i64::from(value))
}

fn process_formatter(tool: &mut Table, options: &PyprojectOptions) {
    let line_length = options.line_length;
    match options.python_formatter {
        PythonFormatter::Autopep8 => {
            let autopep8 = ensure_table(tool, AUTOPEP8_KEY);
            autopep8.insert("max_line_length".to_string(), integer(line_length));
            autopep8.insert("experimental".to_string(), TomlValue::Boolean(true));
        }
        PythonFormatter::Black => {
            ensure_table(tool, BLACK_KEY).insert("line-length".to_string(), integer(line_length));
        }
        PythonFormatter::Yapf => {
            let yapf = ensure_table(tool, YAPF_KEY);
            yapf.insert("based_on_style".to_string(), TomlValue::from(YAPF_BASED_ON_STYLE));
            yapf.insert("column_limit".to_string(), integer(line_length));
        }
        PythonFormatter::None => {}
    }

    let selected = match options.python_formatter {
        PythonFormatter::Autopep8 => Some(AUTOPEP8_KEY),
        PythonFormatter::Black => Some(BLACK_KEY),
        PythonFormatter::Yapf => Some(YAPF_KEY),
        PythonFormatter::None => None,
    };
    for key in [AUTOPEP8_KEY, BLACK_KEY, YAPF_KEY] {
        if Some(key) != selected {
            remove_table(tool, key);
        }
    }
}

fn process_isort(tool: &mut Table, options: &PyprojectOptions) {
    if !options.include_isort {
        remove_table(tool, ISORT_KEY);
        return;
    }

    let isort = ensure_table(tool, ISORT_KEY);
    isort.insert("line_length".to_string(), integer(options.line_length));
    let profile = if options.python_formatter == PythonFormatter::Black {
        DEFAULT_ISORT_PROFILE
    } else {
        options.isort_profile.as_str()
    };
    if profile.is_empty() {
        isort.remove(ISORT_PROFILE_KEY);
    } else {
        isort.insert(ISORT_PROFILE_KEY.to_string(), TomlValue::from(profile));
    }
}

fn process_pytest(tool: &mut Table, options: &PyprojectOptions) {
    if !options.pytest_enabled {
        remove_table(tool, PYTEST_KEY);
        return;
    }

    let ini_options = ensure_table(ensure_table(tool, PYTEST_KEY), PYTEST_INI_OPTIONS_KEY);
    let mut addopts = ini_options
        .get(PYTEST_ADDOPTS_KEY)
        .and_then(TomlValue::as_str)
        .unwrap_or_default()
        .to_string();
    if !addopts.contains(PYTEST_IGNORE_OPTION) {
        addopts = format!("{} {}", addopts, PYTEST_IGNORE_OPTION).trim().to_string();
    }
    ini_options.insert(PYTEST_ADDOPTS_KEY.to_string(), TomlValue::from(addopts));
    ini_options.insert("log_cli".to_string(), TomlValue::Boolean(false));
    ini_options.insert("log_cli_level".to_string(), TomlValue::from(PYTEST_LOG_CLI_LEVEL));
    ini_options.insert("log_cli_format".to_string(), TomlValue::from(PYTEST_LOG_CLI_FORMAT));
    ini_options.insert(
        "log_cli_date_format".to_string(),
        TomlValue::from(PYTEST_LOG_CLI_DATE_FORMAT),
    );
}

fn process_poetry(tool: &mut Table, options: &PyprojectOptions) {
    if options.package_manager != POETRY_PACKAGE_MANAGER || options.is_package {
        return;
    }
    debug!("Marking poetry project as non-package");
    ensure_table(tool, POETRY_KEY).insert(POETRY_PACKAGE_MODE_KEY.to_string(), TomlValue::Boolean(false));
}
