//! `.vscode/settings.json` processing.
//!
//! Settings the tool owns are overwritten; the `python.analysis.*` defaults
//! are only filled in when missing so user tweaks survive.

use log::debug;
use serde_json::{json, Map, Value as JsonValue};

use crate::defaults::vscode::*;
use crate::error::Result;
use crate::merge::json::{append_unique, as_object_mut, ensure_array, ensure_object, set_default};
use crate::options::PythonFormatter;

type Settings = Map<String, JsonValue>;

/// Formatter-specific args keys, paired with the formatter that owns them.
const FORMATTER_ARGS: [(PythonFormatter, &str); 3] = [
    (PythonFormatter::Autopep8, AUTOPEP8_ARGS_KEY),
    (PythonFormatter::Black, BLACK_FORMATTER_ARGS_KEY),
    (PythonFormatter::Yapf, YAPF_ARGS_KEY),
];

/// Update the settings for a project named `project_name`.
pub fn process(document: &mut JsonValue, python_formatter: PythonFormatter, project_name: &str) -> Result<()> {
    let settings = as_object_mut(document)?;

    let interpreter = format!("{}/{}", PYENV_VERSIONS_DIR, project_name);
    debug!("Default interpreter: {}", interpreter);
    settings.insert(PYTHON_DEFAULT_INTERPRETER_KEY.to_string(), JsonValue::from(interpreter));

    process_analysis(settings);
    ensure_object(settings, SEARCH_EXCLUDE_KEY).insert(SEARCH_EXCLUDE_PATTERN.to_string(), JsonValue::Bool(true));
    process_formatter(settings, python_formatter);
    process_linters(settings);
    process_testing(settings);
    settings.insert(ISORT_ARGS_KEY.to_string(), json!([ISORT_ARGS_VALUE]));
    process_package_index_depths(settings);
    Ok(())
}

fn process_analysis(settings: &mut Settings) {
    for (key, value) in PYTHON_ANALYSIS_DEFAULTS {
        set_default(settings, key, value.into());
    }
    append_unique(
        ensure_array(settings, PYTHON_ANALYSIS_EXCLUDE_KEY),
        JsonValue::from(REPO_IGNORE_PATTERN),
    );
}

fn process_formatter(settings: &mut Settings, python_formatter: PythonFormatter) {
    let formatter_id = match python_formatter {
        PythonFormatter::Autopep8 => AUTOPEP8_FORMATTER,
        PythonFormatter::Black => BLACK_FORMATTER,
        PythonFormatter::Yapf => YAPF_FORMATTER,
        PythonFormatter::None => FALLBACK_FORMATTER,
    };

    for (formatter, key) in FORMATTER_ARGS {
        if formatter != python_formatter {
            settings.remove(key);
            continue;
        }
        let args = match formatter {
            PythonFormatter::Black => json!([BLACK_FORMATTER_ARGS_VALUE]),
            PythonFormatter::Yapf => json!([YAPF_ARGS_VALUE]),
            _ => json!([]),
        };
        settings.insert(key.to_string(), args);
    }

    let python = ensure_object(settings, PYTHON_LANGUAGE_KEY);
    python.insert(EDITOR_DEFAULT_FORMATTER_KEY.to_string(), JsonValue::from(formatter_id));
    python.insert(EDITOR_FORMAT_ON_SAVE_KEY.to_string(), JsonValue::Bool(true));
    ensure_object(python, EDITOR_CODE_ACTIONS_ON_SAVE_KEY)
        .insert(SOURCE_ORGANIZE_IMPORTS_KEY.to_string(), JsonValue::from("explicit"));
}

fn process_linters(settings: &mut Settings) {
    settings.insert(PYLINT_ARGS_KEY.to_string(), json!([PYLINT_ARGS_VALUE]));
    settings.insert(FLAKE8_ARGS_KEY.to_string(), json!([FLAKE8_ARGS_VALUE]));
    settings.insert(MYPY_ARGS_KEY.to_string(), json!(MYPY_ARGS_VALUE));
}

fn process_testing(settings: &mut Settings) {
    settings.insert(PYTHON_TESTING_PYTEST_ARGS_KEY.to_string(), json!([PYTEST_IGNORE_ARG]));
    settings.insert(PYTHON_TESTING_PYTEST_ENABLED_KEY.to_string(), JsonValue::Bool(true));
    settings.remove(PYTHON_TESTING_UNITTEST_ARGS_KEY);
    settings.insert(PYTHON_TESTING_UNITTEST_ENABLED_KEY.to_string(), JsonValue::Bool(false));
}

// Known packages get at least the default depth; unknown entries are kept
// untouched.
fn process_package_index_depths(settings: &mut Settings) {
    let depths = ensure_array(settings, PYTHON_ANALYSIS_PACKAGE_INDEX_DEPTHS_KEY);
    let mut missing: Vec<&str> = INDEX_NAMES.to_vec();

    for item in depths.iter_mut() {
        let Some(entry) = item.as_object_mut() else {
            continue;
        };
        let Some(position) = entry
            .get(NAME_KEY)
            .and_then(JsonValue::as_str)
            .and_then(|name| missing.iter().position(|known| *known == name))
        else {
            continue;
        };
        missing.remove(position);

        let depth = entry
            .get(DEPTH_KEY)
            .and_then(JsonValue::as_u64)
            .map_or(DEFAULT_DEPTH, |depth| depth.max(DEFAULT_DEPTH));
        entry.insert(DEPTH_KEY.to_string(), JsonValue::from(depth));
        entry.insert(INCLUDE_ALL_SYMBOLS_KEY.to_string(), JsonValue::Bool(true));
    }

    for name in missing {
        depths.push(json!({
            NAME_KEY: name,
            DEPTH_KEY: DEFAULT_DEPTH,
            INCLUDE_ALL_SYMBOLS_KEY: true,
        }));
    }
}
