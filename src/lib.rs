//! # Repo Setup Library
//!
//! Creates and updates the tooling configuration of a Python project:
//! `.pre-commit-config.yaml`, `.prettierrc`, `.flake8`, `.pylintrc`,
//! `tox.ini`, `pyproject.toml` and `.vscode/settings.json`. It backs the
//! `repo-setup` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use repo_setup::processors::pre_commit::{process, PreCommitOptions};
//! use repo_setup::options::PythonFormatter;
//!
//! let mut document: serde_yaml::Value = serde_yaml::from_str("repos: []").unwrap();
//! let options = PreCommitOptions {
//!     python_formatter: PythonFormatter::Black,
//!     flake8_enabled: true,
//!     ..PreCommitOptions::default()
//! };
//! process(&mut document, &options).unwrap();
//!
//! let repos = document["repos"].as_sequence().unwrap();
//! assert!(repos.iter().any(|repo| repo["repo"] == "https://github.com/psf/black"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Merge (`merge`)**: format-level update primitives. The YAML module
//!   holds the hook-list engine: locate, deep merge, reconcile and remove
//!   over ordered `repos`/`hooks` lists.
//! - **Defaults (`defaults`)**: filenames, hook repo defaults and bundled
//!   sample documents for every supported tool.
//! - **Processors (`processors`)**: one per file, applying the option-driven
//!   updates in a fixed order.
//! - **Staging (`loader`, `filesystem`, `write`)**: load from the project
//!   directory or a sample, render, stage in memory, then write or print.
//!
//! Every update is idempotent: running a command twice with the same options
//! leaves the file unchanged the second time.

pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod loader;
pub mod merge;
pub mod options;
pub mod output;
pub mod processors;
pub mod write;

#[cfg(test)]
mod merge_proptest;
