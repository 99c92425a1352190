//! Creating the exclusive virtualenv

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use super::EnvironmentLayout;
use super::stamp::{self, InstallerStamp};
use crate::error::{Result, environment};
use crate::process;

/// Inputs for [`create`]
#[derive(Debug, Clone, Copy)]
pub struct CreateOptions<'a> {
    /// virtualenv executable, a bare name or a path
    pub virtualenv: &'a OsStr,
    /// Interpreter handed to virtualenv with `-p`
    pub python: Option<&'a Path>,
    pub quiet: bool,
}

/// Check that the virtualenv directory is absent or was created by us
///
/// Returns the receipt of the previous installation when one can be read.
pub fn check_reusable(layout: &EnvironmentLayout) -> Result<Option<InstallerStamp>> {
    let root = layout.root();
    if !root.exists() {
        return Ok(None);
    }
    if !stamp::is_stamped(root) {
        return Err(environment::not_owned(root));
    }
    Ok(stamp::read(root))
}

/// Build `<virtualenv> <env dir> [-p <python>]`
pub fn virtualenv_command(options: &CreateOptions<'_>, layout: &EnvironmentLayout) -> Command {
    let mut command = Command::new(options.virtualenv);
    command.arg(layout.root());
    if let Some(python) = options.python {
        command.arg("-p").arg(python);
    }
    command
}

/// Create (or refresh) the virtualenv and stamp it as ours
///
/// Nothing is run when the directory exists without our stamp. A failing
/// virtualenv run leaves the directory unstamped.
pub fn create(
    layout: &EnvironmentLayout,
    options: &CreateOptions<'_>,
    receipt: &InstallerStamp,
) -> Result<()> {
    if let Some(previous) = check_reusable(layout)? {
        tracing::info!(
            installer_version = %previous.installer_version,
            package = %previous.package,
            "reusing virtualenv from a previous installation"
        );
    }

    process::run(
        virtualenv_command(options, layout),
        options.quiet,
        "Creating virtualenv",
    )?;

    stamp::write(layout.root(), receipt)?;
    tracing::info!(
        location = %layout.location().display(),
        stamp = %layout.stamp_path().display(),
        "virtualenv ready"
    );
    Ok(())
}
