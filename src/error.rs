//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `repo-setup` library. It uses the `thiserror` library to create an
//! `Error` enum that covers the failure modes of loading, reconciling and
//! writing tool configuration documents.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the library. Each variant carries enough context to tell
//!   the user which file, key or option was involved.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! Two variants are expected signals rather than failures:
//!
//! - `NotFound` is returned by the locators when a group or entry is absent.
//!   Reconciliation and removal match on it to decide between "insert" and
//!   "already gone".
//! - `InvalidOption` is returned while parsing command-line selectors, before
//!   any document has been loaded, so no partial update can happen.
//!
//! Everything else (missing environment, I/O, parse failures, a document with
//! the wrong shape) is fatal and propagates to the binary.

use thiserror::Error;

/// Main error type for repo-setup operations
#[derive(Error, Debug)]
pub enum Error {
    /// A named group or entry does not exist in a document.
    #[error("Could not find {kind} '{key}'{}", context.as_ref().map(|c| format!(" in {}", c)).unwrap_or_default())]
    NotFound {
        /// What was being looked up, e.g. "repo" or "hook"
        kind: &'static str,
        key: String,
        /// Where it was looked up, e.g. the owning repo
        context: Option<String>,
    },

    /// An operation was called with arguments that can never succeed.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A free-text selector is outside its allow-list.
    #[error("Invalid {option}: {value}. Valid Options are: {valid}")]
    InvalidOption {
        option: String,
        value: String,
        valid: String,
    },

    /// An environment variable required to locate files is not set.
    #[error("{var} environment variable is not set.")]
    MissingEnv { var: String },

    /// A document does not have the shape an operation expects.
    #[error("Document structure error: {message}")]
    Document { message: String },

    /// An INI document could not be parsed.
    #[error("INI parsing error at line {line}: {message}")]
    IniParse { line: usize, message: String },

    /// An error occurred while staging or writing files.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing or serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON parsing or serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A TOML serialization error, wrapped from `toml::ser::Error`.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Returns true for the locator's "absent" signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
