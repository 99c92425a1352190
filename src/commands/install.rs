//! Install command implementation
//!
//! The installation process:
//! 1. Refuse to run inside an activated virtualenv
//! 2. Validate option combinations
//! 3. Run the install operation: locate virtualenv, create the exclusive
//!    virtualenv, activate it, install `awsebcli`, generate launchers and
//!    report how to put them on PATH

use crate::cli::Cli;
use crate::environment::{self, VIRTUAL_ENV_VAR};
use crate::error::Result;
use crate::operations::{InstallOperation, InstallOptions};
use crate::platform::Platform;

/// Run the installer
pub fn run(cli: &Cli) -> Result<()> {
    environment::ensure_not_inside_virtualenv(std::env::var_os(VIRTUAL_ENV_VAR))?;
    cli.validate()?;

    let options = InstallOptions::from(cli);
    let platform = Platform::current();
    tracing::debug!(%platform, ?options, "starting installation");

    InstallOperation::new(options, platform, std::env::var_os("PATH")).execute()
}
