//! Shared context for install operation
//!
//! The [`InstallContext`] is threaded through every step. Values later
//! steps depend on (the virtualenv executable, the layout, the activation)
//! are computed on first use and cached, so each step only asks for what it
//! needs.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::environment::activation::Activation;
use crate::environment::{EnvironmentLayout, location, locator};
use crate::error::Result;
use crate::installer::PackageRequest;
use crate::platform::Platform;

/// Options for installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    pub virtualenv_executable: Option<PathBuf>,
    pub hide_export_recommendation: bool,
    pub location: Option<PathBuf>,
    pub python_installation: Option<PathBuf>,
    pub quiet: bool,
    pub package: PackageRequest,
}

impl From<&Cli> for InstallOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            virtualenv_executable: cli.virtualenv_executable.clone(),
            hide_export_recommendation: cli.hide_export_recommendation,
            location: cli.location.clone(),
            python_installation: cli.python_installation.clone(),
            quiet: cli.quiet,
            package: PackageRequest::new(cli.version.as_deref(), cli.ebcli_source.as_deref()),
        }
    }
}

/// Shared context for install operation
#[derive(Debug)]
pub struct InstallContext {
    pub options: InstallOptions,
    pub platform: Platform,
    /// `PATH` the installer was started with
    pub search_path: Option<OsString>,
    virtualenv: Option<OsString>,
    layout: Option<EnvironmentLayout>,
    activation: Option<Activation>,
}

impl InstallContext {
    pub fn new(options: InstallOptions, platform: Platform, search_path: Option<OsString>) -> Self {
        let virtualenv = options
            .virtualenv_executable
            .as_ref()
            .map(|path| path.clone().into_os_string());
        Self {
            options,
            platform,
            search_path,
            virtualenv,
            layout: None,
            activation: None,
        }
    }

    /// The virtualenv executable, located on PATH unless given explicitly
    pub fn virtualenv(&mut self) -> Result<OsString> {
        if let Some(virtualenv) = &self.virtualenv {
            return Ok(virtualenv.clone());
        }
        let found = OsString::from(locator::locate(self.platform)?);
        self.virtualenv = Some(found.clone());
        Ok(found)
    }

    /// Where the virtualenv goes
    pub fn layout(&mut self) -> Result<EnvironmentLayout> {
        if let Some(layout) = &self.layout {
            return Ok(layout.clone());
        }
        let location = location::resolve(self.options.location.as_deref(), self.platform)?;
        let layout = EnvironmentLayout::new(location, self.platform);
        self.layout = Some(layout.clone());
        Ok(layout)
    }

    /// The activated environment for child processes
    pub fn activation(&mut self) -> Result<Activation> {
        if let Some(activation) = &self.activation {
            return Ok(activation.clone());
        }
        let layout = self.layout()?;
        let activation = Activation::with_search_path(&layout, self.search_path.clone())?;
        self.activation = Some(activation.clone());
        Ok(activation)
    }
}
