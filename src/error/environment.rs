//! Host and target-directory errors

use std::path::Path;

use super::InstallerError;

/// Creates an error for running inside an already activated virtualenv
pub fn inside_virtualenv(path: impl Into<String>) -> InstallerError {
    InstallerError::InsideVirtualEnv { path: path.into() }
}

/// Creates an error for a home directory that cannot be determined
pub fn home_not_found() -> InstallerError {
    InstallerError::HomeNotFound
}

/// Creates an error for an existing directory without the installer stamp
pub fn not_owned(path: &Path) -> InstallerError {
    InstallerError::DirectoryNotOwned {
        path: path.display().to_string(),
    }
}

/// Creates an error for a virtualenv without its activation script
pub fn activation_missing(path: &Path) -> InstallerError {
    InstallerError::ActivationScriptMissing {
        path: path.display().to_string(),
    }
}
