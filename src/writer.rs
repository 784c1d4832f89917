use crate::{
    errors::{FileOperation, IoError},
    plan::FilePlanEntry,
};
use colored::Colorize;
use std::path::Path;

/// Result of a single write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content was written, creating or replacing the file.
    Written,
    /// The file already existed and overwrite was not requested.
    Skipped,
}
impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Writes a planned file unless it already exists and overwrite was not requested.
///
/// Missing parent directories are created first. The content was rendered when the plan was
/// built, so the file is either fully replaced or left alone.
///
/// # Errors
///
/// Returns an [`IoError`] if the existence check, directory creation or the write fails.
pub fn write(entry: &FilePlanEntry) -> Result<WriteOutcome, IoError> {
    let path = entry.target_path.as_path();

    let exists = path
        .try_exists()
        .map_err(|error| IoError::new(FileOperation::Inspect, path.into(), error))?;

    if exists && !entry.overwrite_requested {
        log::info!("{} {}", "skip".yellow(), path.display());

        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    std::fs::write(path, &entry.content)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let verb = if exists {
        "overwrite".blue()
    } else {
        "create".green()
    };
    log::info!("{} {}", verb, path.display());

    Ok(WriteOutcome::Written)
}

/// Creates all directories in the specified path if they do not exist.
///
/// # Errors
///
/// Returns an [`IoError`] if any directory creation fails.
pub fn ensure_dir(path: &Path) -> Result<(), IoError> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }

    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))
}
