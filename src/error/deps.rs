//! Dependency errors

use super::InstallerError;

/// Creates the error reported when neither pip nor virtualenv can be run
pub fn pip_and_virtualenv_not_found() -> InstallerError {
    InstallerError::PipAndVirtualenvNotFound
}

/// Creates the error reported when pip is present but virtualenv is not
pub fn virtualenv_not_found() -> InstallerError {
    InstallerError::VirtualenvNotFound
}
