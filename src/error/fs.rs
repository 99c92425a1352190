//! File system errors

use std::path::Path;

use super::InstallerError;

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> InstallerError {
    InstallerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory creation failed error
pub fn create_dir_failed(path: &Path, reason: impl ToString) -> InstallerError {
    InstallerError::DirCreateFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
