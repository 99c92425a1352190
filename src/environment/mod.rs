//! The isolated virtualenv the EB CLI is installed into
//!
//! - [`locator`]: find a usable `virtualenv` executable
//! - [`location`]: resolve the install root (defaults to the user's home)
//! - [`creator`]: create or reuse `<location>/.ebcli-virtual-env`
//! - [`stamp`]: the ownership marker written into that directory
//! - [`activation`]: the search-path state children run with once activated

pub mod activation;
pub mod creator;
pub mod location;
pub mod locator;
pub mod stamp;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Result, environment};
use crate::platform::Platform;

/// Name of the virtualenv directory created under the install location
pub const VIRTUALENV_DIR_NAME: &str = ".ebcli-virtual-env";

/// Directory inside the virtualenv holding the generated launchers
pub const LAUNCHER_DIR_NAME: &str = "executables";

/// Environment variable set by an activated virtualenv
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// Paths of one installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentLayout {
    location: PathBuf,
    root: PathBuf,
    platform: Platform,
}

impl EnvironmentLayout {
    pub fn new(location: impl Into<PathBuf>, platform: Platform) -> Self {
        let location = location.into();
        let root = location.join(VIRTUALENV_DIR_NAME);
        Self {
            location,
            root,
            platform,
        }
    }

    /// The install location the virtualenv directory lives in
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// `<location>/.ebcli-virtual-env`
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// `bin` or `Scripts` inside the virtualenv
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(self.platform.bin_dir_name())
    }

    /// Where the `eb` launchers are written
    pub fn launcher_dir(&self) -> PathBuf {
        self.root.join(LAUNCHER_DIR_NAME)
    }

    pub fn stamp_path(&self) -> PathBuf {
        self.root.join(stamp::STAMP_FILE_NAME)
    }

    pub fn activation_script(&self) -> PathBuf {
        self.root.join(self.platform.activation_script())
    }

    /// Path an executable called `stem` has inside the bin directory
    pub fn executable(&self, stem: &str) -> PathBuf {
        self.bin_dir().join(self.platform.executable_name(stem))
    }
}

/// Refuse to run from inside an activated virtualenv
///
/// Activating a virtualenv saves PATH and restores it on deactivation; any
/// change made to PATH in between, including ours, would be lost.
pub fn ensure_not_inside_virtualenv(virtual_env: Option<OsString>) -> Result<()> {
    match virtual_env {
        Some(path) if !path.is_empty() => {
            Err(environment::inside_virtualenv(path.to_string_lossy()))
        }
        _ => Ok(()),
    }
}
