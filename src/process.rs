//! Running external programs
//!
//! Every child is awaited without a timeout. Arguments are handed to the
//! program directly, never through a shell.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::error::{Result, process};
use crate::progress::CommandSpinner;

/// Check whether `program --version` can be run and exits with status 0
pub fn probe(program: &OsStr) -> bool {
    let status = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) => {
            tracing::debug!(program = %program.to_string_lossy(), %status, "probed");
            status.success()
        }
        Err(err) => {
            tracing::debug!(program = %program.to_string_lossy(), error = %err, "probe failed to spawn");
            false
        }
    }
}

/// Run `command` to completion
///
/// In quiet mode the child's stdout and stderr are discarded and a spinner
/// labelled `activity` is shown instead. A non-zero exit becomes
/// [`InstallerError::CommandFailed`](crate::error::InstallerError::CommandFailed)
/// carrying the child's exit code.
pub fn run(mut command: Command, quiet: bool, activity: &str) -> Result<()> {
    let program = program_name(&command);
    tracing::debug!(command = %describe(&command), quiet, "running");

    let spinner = if quiet {
        command.stdout(Stdio::null()).stderr(Stdio::null());
        Some(CommandSpinner::start(activity))
    } else {
        None
    };

    let status = match command.status() {
        Ok(status) => status,
        Err(err) => {
            if let Some(spinner) = spinner {
                spinner.abandon(format!("{activity} failed"));
            }
            return Err(process::spawn_failed(program, err));
        }
    };

    if status.success() {
        if let Some(spinner) = spinner {
            spinner.finish();
        }
        return Ok(());
    }

    tracing::debug!(%program, %status, "command failed");
    if let Some(spinner) = spinner {
        spinner.abandon(format!("{activity} failed ({status})"));
    }
    Err(process::command_failed(program, status.code()))
}

/// Program and arguments of `command`, space separated, for logging
pub fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

fn program_name(command: &Command) -> String {
    std::path::Path::new(command.get_program())
        .file_name()
        .unwrap_or_else(|| command.get_program())
        .to_string_lossy()
        .into_owned()
}
