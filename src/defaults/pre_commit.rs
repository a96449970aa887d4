//! `.pre-commit-config.yaml` repos and hooks.
//!
//! Defaults are typed records rather than YAML text so a typo in a field
//! name is a compile error. They are converted to fresh `serde_yaml::Value`s
//! each time a processor needs one.

use serde::Serialize;
use serde_yaml::Value as YamlValue;

use crate::error::Result;

pub const FILENAME: &str = ".pre-commit-config.yaml";

/// Prefix the local pylint hook's `ensure_venv.sh` entry gets by default.
pub const DEFAULT_PYLINT_ENTRY_PREFIX: &str = "utility-repo-scripts/";

/// Script the local pylint hook runs through.
pub const PYLINT_ENTRY_SCRIPT: &str = "ensure_venv.sh";

fn is_empty(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

/// Default fields of one hook entry. Unset fields are not written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HookDefault {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub types: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub args: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub additional_dependencies: &'static [&'static str],
}

impl HookDefault {
    /// A hook with only an id.
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            name: None,
            entry: None,
            language: None,
            types: &[],
            args: &[],
            additional_dependencies: &[],
        }
    }

    pub fn to_value(&self) -> Result<YamlValue> {
        Ok(serde_yaml::to_value(self)?)
    }
}

/// Default form of a whole repo group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RepoDefault {
    pub repo: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<&'static str>,
    pub hooks: &'static [HookDefault],
}

impl RepoDefault {
    pub fn to_value(&self) -> Result<YamlValue> {
        Ok(serde_yaml::to_value(self)?)
    }

    /// The `(id, default)` pairs of every hook this repo owns.
    pub fn hook_values(&self) -> Result<Vec<(&'static str, YamlValue)>> {
        self.hooks
            .iter()
            .map(|hook| Ok((hook.id, hook.to_value()?)))
            .collect()
    }
}

pub const CHECK_YAML: HookDefault = HookDefault::new("check-yaml");
pub const END_OF_FILE_FIXER: HookDefault = HookDefault::new("end-of-file-fixer");
pub const TRAILING_WHITESPACE: HookDefault = HookDefault::new("trailing-whitespace");

pub const PRE_COMMIT_HOOKS: RepoDefault = RepoDefault {
    repo: "https://github.com/pre-commit/pre-commit-hooks",
    rev: Some("v4.4.0"),
    hooks: &[CHECK_YAML, END_OF_FILE_FIXER, TRAILING_WHITESPACE],
};

pub const JUMANJI_HOUSE: RepoDefault = RepoDefault {
    repo: "https://github.com/jumanjihouse/pre-commit-hooks",
    rev: Some("3.0.0"),
    hooks: &[
        HookDefault::new("git-check"),
        HookDefault::new("git-dirty"),
        HookDefault::new("markdownlint"),
        HookDefault::new("shellcheck"),
        HookDefault::new("shfmt"),
    ],
};

/// Prettier's mirror tends to resolve to alpha releases, so its rev is
/// pinned explicitly by `fix-prettier-pre-commit`.
pub const PRETTIER_REV: &str = "v3.1.0";

pub const PRETTIER: RepoDefault = RepoDefault {
    repo: "https://github.com/pre-commit/mirrors-prettier",
    rev: Some(PRETTIER_REV),
    hooks: &[HookDefault {
        args: &["--write", "--config=.prettierrc"],
        ..HookDefault::new("prettier")
    }],
};

pub const ISORT: RepoDefault = RepoDefault {
    repo: "https://github.com/pycqa/isort",
    rev: Some("5.12.0"),
    hooks: &[HookDefault {
        name: Some("isort (python)"),
        args: &["--settings-file=pyproject.toml"],
        ..HookDefault::new("isort")
    }],
};

pub const AUTOPEP8: RepoDefault = RepoDefault {
    repo: "https://github.com/pre-commit/mirrors-autopep8",
    rev: Some("v2.0.1"),
    hooks: &[HookDefault::new("autopep8")],
};

pub const BLACK: RepoDefault = RepoDefault {
    repo: "https://github.com/psf/black",
    rev: Some("23.1.0"),
    hooks: &[HookDefault::new("black")],
};

pub const YAPF: RepoDefault = RepoDefault {
    repo: "https://github.com/google/yapf",
    rev: Some("v0.40.2"),
    hooks: &[HookDefault::new("yapf")],
};

pub const LOCAL_REPO: &str = "local";
pub const PYLINT_HOOK_ID: &str = "pylint";

pub const PYLINT: HookDefault = HookDefault {
    name: Some("pylint"),
    entry: Some(PYLINT_ENTRY_SCRIPT),
    language: Some("script"),
    types: &["python"],
    args: &["pylint", "-v", "--rcfile=.pylintrc"],
    ..HookDefault::new(PYLINT_HOOK_ID)
};

pub const LOCAL: RepoDefault = RepoDefault {
    repo: LOCAL_REPO,
    rev: None,
    hooks: &[PYLINT],
};

pub const FLAKE8: RepoDefault = RepoDefault {
    repo: "https://github.com/pycqa/flake8",
    rev: Some("6.0.0"),
    hooks: &[HookDefault {
        args: &["--config=.flake8"],
        ..HookDefault::new("flake8")
    }],
};

pub const PYDOCSTYLE: RepoDefault = RepoDefault {
    repo: "https://github.com/pycqa/pydocstyle",
    rev: Some("6.3.0"),
    hooks: &[HookDefault {
        additional_dependencies: &["tomli"],
        ..HookDefault::new("pydocstyle")
    }],
};

pub const BANDIT: RepoDefault = RepoDefault {
    repo: "https://github.com/PyCQA/bandit",
    rev: Some("1.7.5"),
    hooks: &[HookDefault {
        args: &["-c", "pyproject.toml"],
        additional_dependencies: &["bandit[toml]"],
        ..HookDefault::new("bandit")
    }],
};

/// Config used when the project has no `.pre-commit-config.yaml` yet.
pub const SAMPLE: &str = r#"
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.4.0
    hooks:
      - id: check-yaml
      - id: end-of-file-fixer
      - id: trailing-whitespace
  - repo: https://github.com/jumanjihouse/pre-commit-hooks
    rev: 3.0.0
    hooks:
      - id: git-check # Configure in .gitattributes
      - id: git-dirty # Configure in .gitignore
      - id: markdownlint # Configure in .mdlrc
      - id: shellcheck
      - id: shfmt
  - repo: https://github.com/pre-commit/mirrors-prettier
    rev: v3.0.0-alpha.4
    hooks:
      - id: prettier
        args: [--write, --config=.prettierrc]
  - repo: https://github.com/pycqa/isort
    rev: 5.12.0
    hooks:
      - id: isort
        name: isort (python)
        args: [--settings-file=pyproject.toml]
  - repo: https://github.com/pre-commit/mirrors-autopep8
    rev: v2.0.1
    hooks:
      - id: autopep8 # Configure in pyproject.toml
  - repo: https://github.com/psf/black
    rev: 23.1.0
    hooks:
      - id: black # Configure in pyproject.toml
  - repo: local
    hooks:
      - id: pylint
        name: pylint
        entry: ensure_venv.sh
        language: script
        types: [python]
        args: [pylint, -v, --rcfile=.pylintrc]
  - repo: https://github.com/pycqa/flake8
    rev: 6.0.0
    hooks:
      - id: flake8
        args: [--config=.flake8]
"#;
