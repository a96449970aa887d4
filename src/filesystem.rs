//! In-memory staging area for rendered files
//!
//! Commands render every file they produce into a [`MemoryFS`] first. The
//! stage is then either written to disk by [`crate::write::execute`] or, in
//! test mode, printed. Removals (an emptied `pyproject.toml`) are staged as
//! deletions so test mode never touches the disk.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Represents a file with content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// File content as bytes
    pub content: Vec<u8>,
}

impl File {
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    pub fn from_string(content: &str) -> Self {
        Self::new(content.as_bytes().to_vec())
    }

    /// Content as UTF-8 text.
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.content).map_err(|err| Error::Filesystem {
            message: format!("File content is not valid UTF-8: {}", err),
        })
    }
}

/// Files to write and files to delete, keyed by path relative to the
/// project directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFS {
    files: BTreeMap<PathBuf, File>,
    deletions: BTreeSet<PathBuf>,
}

impl MemoryFS {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a file. Cancels a staged deletion of the same path.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, file: File) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || path.is_absolute() {
            return Err(Error::Filesystem {
                message: format!("Staged paths must be relative: '{}'", path.display()),
            });
        }
        self.deletions.remove(path);
        self.files.insert(path.to_path_buf(), file);
        Ok(())
    }

    pub fn add_file_string<P: AsRef<Path>>(&mut self, path: P, content: &str) -> Result<()> {
        self.add_file(path, File::from_string(content))
    }

    /// Stage a deletion. Drops any staged content for the same path.
    pub fn delete_file<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref().to_path_buf();
        self.files.remove(&path);
        self.deletions.insert(path);
    }

    pub fn get_file<P: AsRef<Path>>(&self, path: P) -> Option<&File> {
        self.files.get(path.as_ref())
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(path.as_ref())
    }

    pub fn is_deleted<P: AsRef<Path>>(&self, path: P) -> bool {
        self.deletions.contains(path.as_ref())
    }

    /// Iterate over staged files in path order.
    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &File)> {
        self.files.iter()
    }

    /// Iterate over staged deletions in path order.
    pub fn deletions(&self) -> impl Iterator<Item = &PathBuf> {
        self.deletions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.deletions.is_empty()
    }
}
