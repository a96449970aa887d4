//! Shared test utilities for CLI E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file(".flake8", "[flake8]\n");
//!     fixture.command().args(["flake8", "--exists", "true"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::parse_ini;
    #[allow(unused_imports)]
    pub use super::TestFixture;
}

/// A project directory in a temporary location.
///
/// Commands spawned through [`TestFixture::command`] run with both the
/// working directory and `PWD` pointing at the fixture, colors off, and the
/// option environment variables cleared.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a file written by a command.
    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        self.command_in(self.path())
    }

    /// Create a command running in `dir` (with `PWD` set to it).
    pub fn command_in(&self, dir: &Path) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("repo-setup");
        cmd.current_dir(dir)
            .env("PWD", dir)
            .env("NO_COLOR", "1")
            .env_remove("REPO_SETUP_LINE_LENGTH")
            .env_remove("REPO_SETUP_PYTHON_FORMATTER")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse INI text with an independent parser, to check written files.
#[allow(dead_code)]
pub fn parse_ini(content: &str) -> ini::Ini {
    ini::Ini::load_from_str(content).expect("Written file should be valid INI")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file(".flake8", "[flake8]\n");
        assert!(fixture.path().join(".flake8").exists());
    }
}
