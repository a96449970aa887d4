//! `.vscode/settings.json` keys and sample.

pub const FILENAME: &str = ".vscode/settings.json";

/// Glob excluding the vendored scripts from Pylance analysis.
pub const REPO_IGNORE_PATTERN: &str = "./utility-repo-scripts/**";
pub const SEARCH_EXCLUDE_PATTERN: &str = "utility-repo-scripts/**";

pub const PYTHON_LANGUAGE_KEY: &str = "[python]";
pub const EDITOR_CODE_ACTIONS_ON_SAVE_KEY: &str = "editor.codeActionsOnSave";
pub const SOURCE_ORGANIZE_IMPORTS_KEY: &str = "source.organizeImports";
pub const EDITOR_DEFAULT_FORMATTER_KEY: &str = "editor.defaultFormatter";
pub const EDITOR_FORMAT_ON_SAVE_KEY: &str = "editor.formatOnSave";

pub const AUTOPEP8_ARGS_KEY: &str = "autopep8.args";
pub const BLACK_FORMATTER_ARGS_KEY: &str = "black-formatter.args";
pub const BLACK_FORMATTER_ARGS_VALUE: &str = "--config=pyproject.toml";
pub const YAPF_ARGS_KEY: &str = "yapf.args";
pub const YAPF_ARGS_VALUE: &str = "--style=pyproject.toml";
pub const FLAKE8_ARGS_KEY: &str = "flake8.args";
pub const FLAKE8_ARGS_VALUE: &str = "--rcfile=.flake8";
pub const ISORT_ARGS_KEY: &str = "isort.args";
pub const ISORT_ARGS_VALUE: &str = "--settings=pyproject.toml";
pub const MYPY_ARGS_KEY: &str = "mypy-type-checker.args";
pub const MYPY_ARGS_VALUE: [&str; 2] = ["--ignore-missing-imports", "--follow-imports=silent"];
pub const PYLINT_ARGS_KEY: &str = "pylint.args";
pub const PYLINT_ARGS_VALUE: &str = "--rcfile=.pylintrc";

pub const AUTOPEP8_FORMATTER: &str = "ms-python.autopep8";
pub const BLACK_FORMATTER: &str = "ms-python.black-formatter";
pub const YAPF_FORMATTER: &str = "eeyore.yapf";
pub const FALLBACK_FORMATTER: &str = "ms-python.python";

/// `python.analysis.*` settings filled in only when the user has not set
/// them. `python.analysis.exclude` is handled separately.
pub const PYTHON_ANALYSIS_DEFAULTS: [(&str, AnalysisDefault); 10] = [
    ("python.analysis.autoImportCompletions", AnalysisDefault::Bool(true)),
    ("python.analysis.autoSearchPaths", AnalysisDefault::Bool(true)),
    ("python.analysis.diagnosticMode", AnalysisDefault::Str("workspace")),
    ("python.analysis.importFormat", AnalysisDefault::Str("absolute")),
    ("python.analysis.indexing", AnalysisDefault::Bool(true)),
    ("python.analysis.inlayHints.functionReturnTypes", AnalysisDefault::Bool(true)),
    ("python.analysis.inlayHints.pytestParameters", AnalysisDefault::Bool(true)),
    ("python.analysis.inlayHints.variableTypes", AnalysisDefault::Bool(true)),
    ("python.analysis.typeCheckingMode", AnalysisDefault::Str("basic")),
    ("python.analysis.useLibraryCodeForTypes", AnalysisDefault::Bool(true)),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisDefault {
    Bool(bool),
    Str(&'static str),
}

impl From<AnalysisDefault> for serde_json::Value {
    fn from(value: AnalysisDefault) -> Self {
        match value {
            AnalysisDefault::Bool(flag) => serde_json::Value::Bool(flag),
            AnalysisDefault::Str(text) => serde_json::Value::from(text),
        }
    }
}

pub const PYTHON_ANALYSIS_EXCLUDE_KEY: &str = "python.analysis.exclude";
pub const PYTHON_ANALYSIS_PACKAGE_INDEX_DEPTHS_KEY: &str = "python.analysis.packageIndexDepths";
pub const PYTHON_DEFAULT_INTERPRETER_KEY: &str = "python.defaultInterpreterPath";
pub const PYENV_VERSIONS_DIR: &str = "~/.pyenv/versions";

pub const PYTHON_TESTING_PYTEST_ARGS_KEY: &str = "python.testing.pytestArgs";
pub const PYTHON_TESTING_PYTEST_ENABLED_KEY: &str = "python.testing.pytestEnabled";
pub const PYTHON_TESTING_UNITTEST_ARGS_KEY: &str = "python.testing.unittestArgs";
pub const PYTHON_TESTING_UNITTEST_ENABLED_KEY: &str = "python.testing.unittestEnabled";
pub const PYTEST_IGNORE_ARG: &str = "--ignore=./utility-repo-scripts";
pub const SEARCH_EXCLUDE_KEY: &str = "search.exclude";

pub const NAME_KEY: &str = "name";
pub const DEPTH_KEY: &str = "depth";
pub const INCLUDE_ALL_SYMBOLS_KEY: &str = "includeAllSymbols";
pub const DEFAULT_DEPTH: u64 = 2;

/// Packages whose symbols Pylance should index deeper than the default.
pub const INDEX_NAMES: [&str; 15] = [
    "alembic",
    "boto3",
    "django",
    "environ",
    "httpx",
    "matplotlib",
    "moto",
    "fastapi",
    "pydantic",
    "requests",
    "rest_framework",
    "scipy",
    "sklearn",
    "sqlalchemy",
    "sqlmodel",
];

pub const SAMPLE: &str = r#"{
  "[python]": {
    "editor.codeActionsOnSave": {
      "source.organizeImports": "explicit"
    },
    "editor.defaultFormatter": "<python_formatter>",
    "editor.formatOnSave": true
  },
  "autopep8.args": [],
  "black-formatter.args": ["--config=pyproject.toml"],
  "flake8.args": ["--rcfile=.flake8"],
  "isort.args": ["--settings=pyproject.toml"],
  "pylint.args": ["--rcfile=.pylintrc"],
  "python.analysis.autoImportCompletions": true,
  "python.analysis.autoSearchPaths": true,
  "python.analysis.diagnosticMode": "workspace",
  "python.analysis.exclude": [
    "**/node_modules",
    "**/__pycache__",
    ".git",
    "./utility-repo-scripts/**"
  ],
  "python.analysis.importFormat": "absolute",
  "python.analysis.indexing": true,
  "python.analysis.inlayHints.functionReturnTypes": true,
  "python.analysis.inlayHints.pytestParameters": true,
  "python.analysis.inlayHints.variableTypes": true,
  "python.analysis.typeCheckingMode": "basic",
  "python.analysis.useLibraryCodeForTypes": true,
  "python.defaultInterpreterPath": "~/.venvs/<project>/bin/python",
  "python.testing.pytestArgs": ["--ignore=./utility-repo-scripts/**"],
  "python.testing.pytestEnabled": false,
  "python.testing.unittestArgs": ["-v", "-s", ".", "-p", "*test*.py"],
  "python.testing.unittestEnabled": false,
  "search.exclude": {
    "**/.git/**": true,
    "**/node_modules/**": true,
    "**/__pycache__/**": true,
    ".coverage": true,
    ".pytest_cache/**": true,
    "htmlcov/**": true,
    "poetry.lock": true,
    "utility-repo-scripts/**": true
  }
}
"#;
