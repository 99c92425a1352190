//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Invalid combinations of command-line options
//! - [`environment`]: Problems with the host or the target virtualenv directory
//! - [`deps`]: Missing `pip` / `virtualenv`
//! - [`process`]: Child processes that could not be spawned or failed
//! - [`fs`]: File system errors

pub mod config;
pub mod deps;
pub mod environment;
pub mod fs;
pub mod process;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Configuration errors
    #[error(
        "\"{first}\" and \"{second}\" cannot be used together because they represent two distinct sources of the EBCLI"
    )]
    #[diagnostic(
        code(ebcli_installer::config::conflicting_options),
        help("Pass only one of {first} and {second}")
    )]
    ConflictingOptions {
        first: &'static str,
        second: &'static str,
    },

    // Environment errors
    #[error("This script cannot be executed inside a virtual environment")]
    #[diagnostic(
        code(ebcli_installer::environment::inside_virtualenv),
        help("Run `deactivate` to leave the virtualenv at \"{path}\" and execute the installer again")
    )]
    InsideVirtualEnv { path: String },

    #[error("Could not determine user's HOME directory")]
    #[diagnostic(
        code(ebcli_installer::environment::home_not_found),
        help("Pass a location explicitly using the `--location` argument")
    )]
    HomeNotFound,

    #[error(
        "Installation cannot proceed because \"{path}\" already exists but was not created by this EBCLI installer"
    )]
    #[diagnostic(
        code(ebcli_installer::environment::not_owned),
        help(
            "You can either:\n\n\
             1. Delete \"{path}\" after verifying you don't need it; OR\n\
             2. Specify an alternate location to install the EBCLI and its artifacts in \
             using the `--location` argument"
        )
    )]
    DirectoryNotOwned { path: String },

    #[error("Virtualenv activation script not found: {path}")]
    #[diagnostic(
        code(ebcli_installer::environment::activation_missing),
        help("The virtualenv executable did not produce a usable environment; check its output above")
    )]
    ActivationScriptMissing { path: String },

    // Dependency errors
    #[error("Could not find \"pip\" and \"virtualenv\" installed")]
    #[diagnostic(
        code(ebcli_installer::deps::pip_and_virtualenv_not_found),
        help(
            "Ensure \"pip\" and \"virtualenv\" are installed and that they are in PATH before executing this installer"
        )
    )]
    PipAndVirtualenvNotFound,

    #[error("Could not find \"virtualenv\" installed")]
    #[diagnostic(
        code(ebcli_installer::deps::virtualenv_not_found),
        help(
            "Ensure virtualenv is installed (`pip install virtualenv`) and that it is in PATH before executing this installer, \
             or point at it with `--virtualenv-executable`"
        )
    )]
    VirtualenvNotFound,

    // Process errors
    #[error("Failed to run `{program}`: {reason}")]
    #[diagnostic(code(ebcli_installer::process::spawn_failed))]
    SpawnFailed { program: String, reason: String },

    #[error("`{program}` {}", describe_exit(.code))]
    #[diagnostic(code(ebcli_installer::process::command_failed))]
    CommandFailed { program: String, code: Option<i32> },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(ebcli_installer::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(ebcli_installer::fs::create_dir_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ebcli_installer::fs::io_error))]
    IoError { message: String },
}

impl InstallerError {
    /// Process exit code to terminate with.
    ///
    /// Failed child processes hand their own exit code through; everything
    /// else (including children killed by a signal) exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallerError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Whether a failed child already explained itself on its own output.
    ///
    /// A child killed by a signal may have printed nothing.
    pub fn already_reported(&self) -> bool {
        matches!(
            self,
            InstallerError::CommandFailed { code: Some(code), .. } if *code != 0
        )
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

impl From<std::io::Error> for InstallerError {
    fn from(err: std::io::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;
