//! Child process errors

use super::InstallerError;

/// Creates an error for a program that could not be started
pub fn spawn_failed(program: impl Into<String>, reason: impl ToString) -> InstallerError {
    InstallerError::SpawnFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a program that exited unsuccessfully
pub fn command_failed(program: impl Into<String>, code: Option<i32>) -> InstallerError {
    InstallerError::CommandFailed {
        program: program.into(),
        code,
    }
}
