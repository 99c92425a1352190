//! Main orchestrator for install operation
//! Runs the planned steps in order, each under a numbered banner

use std::ffi::OsString;

use crate::error::Result;
use crate::platform::Platform;
use crate::ui;

use super::context::{InstallContext, InstallOptions};
use super::steps::{self, Step};

/// Main orchestrator for install operation
#[derive(Debug)]
pub struct InstallOperation {
    context: InstallContext,
    steps: Vec<Step>,
}

impl InstallOperation {
    pub fn new(options: InstallOptions, platform: Platform, search_path: Option<OsString>) -> Self {
        let steps = steps::plan(&options);
        Self {
            context: InstallContext::new(options, platform, search_path),
            steps,
        }
    }

    /// Run every step, stopping at the first failure
    pub fn execute(mut self) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            ui::print_step(index + 1, step.title);
            tracing::debug!(step = step.title, "starting step");
            (step.run)(&mut self.context)?;
        }
        Ok(())
    }
}
