//! Ownership marker of the virtualenv directory
//!
//! The marker's presence is what makes a directory ours. Its JSON body is a
//! receipt of the last installation and is never required to parse.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, fs};

/// File name of the marker inside `.ebcli-virtual-env`
pub const STAMP_FILE_NAME: &str = ".ebcli_installer_stamp";

/// Receipt stored in the marker file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerStamp {
    /// Version of the installer that created or last refreshed the virtualenv
    pub installer_version: String,
    /// Requirement handed to pip, e.g. `awsebcli==3.1`
    pub package: String,
}

impl InstallerStamp {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            installer_version: env!("CARGO_PKG_VERSION").to_string(),
            package: package.into(),
        }
    }
}

/// Whether `env_dir` carries the marker
pub fn is_stamped(env_dir: &Path) -> bool {
    env_dir.join(STAMP_FILE_NAME).exists()
}

/// Write (or overwrite) the marker into `env_dir`
pub fn write(env_dir: &Path, stamp: &InstallerStamp) -> Result<()> {
    let path = env_dir.join(STAMP_FILE_NAME);
    let mut body = serde_json::to_string_pretty(stamp).map_err(|e| fs::write_failed(&path, e))?;
    body.push('\n');
    std::fs::write(&path, body).map_err(|e| fs::write_failed(&path, e))?;
    tracing::debug!(path = %path.display(), "wrote installer stamp");
    Ok(())
}

/// Read the receipt, if the marker exists and holds one
pub fn read(env_dir: &Path) -> Option<InstallerStamp> {
    let content = std::fs::read_to_string(env_dir.join(STAMP_FILE_NAME)).ok()?;
    serde_json::from_str(&content).ok()
}
