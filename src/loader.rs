//! Loading and rendering configuration documents
//!
//! Every command follows the same pattern: load a document from the project
//! directory (or from a bundled sample when the caller says the file does
//! not exist yet), update it, render it back to text.
//!
//! The project directory comes from the `PWD` environment variable, which is
//! what the shell wrappers around this tool set.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use crate::defaults::PROJECT_DIR_ENV;
use crate::error::{Error, Result};
use crate::merge::ensure_trailing_newline;
use crate::merge::ini::IniDocument;

/// The project directory files are read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the workspace from `PWD`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingEnv` when `PWD` is not set.
    pub fn from_env() -> Result<Self> {
        let root = env::var_os(PROJECT_DIR_ENV).ok_or_else(|| Error::MissingEnv {
            var: PROJECT_DIR_ENV.to_string(),
        })?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Last component of the project directory, used as the virtualenv name.
    pub fn project_name(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn read_source(workspace: &Workspace, filename: &str, exists: bool, sample: &str) -> Result<String> {
    if !exists {
        debug!("{} does not exist yet, starting from the bundled sample", filename);
        return Ok(sample.to_string());
    }

    let path = workspace.path(filename);
    debug!("{} already exists, loading {}", filename, path.display());
    fs::read_to_string(&path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })
}

/// Load a YAML document. An empty file loads as `Null`.
pub fn load_yaml(workspace: &Workspace, filename: &str, exists: bool, sample: &str) -> Result<YamlValue> {
    let text = read_source(workspace, filename, exists, sample)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Load a JSON document. An empty file loads as `Null`.
pub fn load_json(workspace: &Workspace, filename: &str, exists: bool, sample: &str) -> Result<JsonValue> {
    let text = read_source(workspace, filename, exists, sample)?;
    if text.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

pub fn load_toml(workspace: &Workspace, filename: &str, exists: bool, sample: &str) -> Result<toml::Table> {
    let text = read_source(workspace, filename, exists, sample)?;
    Ok(text.parse::<toml::Table>()?)
}

pub fn load_ini(workspace: &Workspace, filename: &str, exists: bool, sample: &str) -> Result<IniDocument> {
    let text = read_source(workspace, filename, exists, sample)?;
    IniDocument::parse(&text)
}

/// Render YAML in block style.
pub fn render_yaml(document: &YamlValue) -> Result<String> {
    Ok(ensure_trailing_newline(serde_yaml::to_string(document)?))
}

/// Render JSON pretty-printed with two-space indentation.
pub fn render_json(document: &JsonValue) -> Result<String> {
    Ok(ensure_trailing_newline(serde_json::to_string_pretty(document)?))
}

/// Render TOML and normalize its layout with taplo.
pub fn render_toml(document: &toml::Table) -> Result<String> {
    let toml_string = toml::to_string_pretty(document)?;
    let formatted = taplo::formatter::format(&toml_string, taplo::formatter::Options::default());
    Ok(ensure_trailing_newline(formatted))
}

pub fn render_ini(document: &IniDocument) -> String {
    ensure_trailing_newline(document.serialize())
}
