//! Configuration errors

use super::InstallerError;

/// Creates an error for two options that cannot be combined
pub fn conflicting_options(first: &'static str, second: &'static str) -> InstallerError {
    InstallerError::ConflictingOptions { first, second }
}
