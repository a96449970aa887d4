//! Writing staged files to disk
//!
//! The last step of every command. For each staged file, parent directories
//! (such as `.vscode/`) are created and the content is written; for each
//! staged deletion, the file is removed if it exists.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;

/// What [`execute`] did, in the order it did it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
}

/// Apply a stage to `output_path`.
pub fn execute(stage: &MemoryFS, output_path: &Path) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    for (relative_path, file) in stage.files() {
        let full_path = output_path.join(relative_path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", parent.display(), e),
            })?;
        }

        debug!("Writing {}", full_path.display());
        fs::write(&full_path, &file.content).map_err(|e| Error::Filesystem {
            message: format!("Failed to write file '{}': {}", full_path.display(), e),
        })?;
        report.written.push(relative_path.clone());
    }

    for relative_path in stage.deletions() {
        let full_path = output_path.join(relative_path);
        if !full_path.exists() {
            continue;
        }
        debug!("Deleting {}", full_path.display());
        fs::remove_file(&full_path).map_err(|e| Error::Filesystem {
            message: format!("Failed to delete file '{}': {}", full_path.display(), e),
        })?;
        report.deleted.push(relative_path.clone());
    }

    Ok(report)
}
