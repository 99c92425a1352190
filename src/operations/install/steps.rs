//! The installation steps, in the order they run

use crate::environment::creator::{self, CreateOptions};
use crate::environment::stamp::InstallerStamp;
use crate::error::Result;
use crate::installer::{launcher, package};
use crate::ui::Message;

use super::completion;
use super::context::{InstallContext, InstallOptions};

/// A titled unit of work run by the orchestrator
#[derive(Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub run: fn(&mut InstallContext) -> Result<()>,
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step").field("title", &self.title).finish()
    }
}

const LOCATE: Step = Step {
    title: "Locating virtualenv installation",
    run: locate_virtualenv,
};

const CREATE: Step = Step {
    title: "Creating exclusive virtualenv for EBCLI",
    run: create_virtualenv,
};

const ACTIVATE: Step = Step {
    title: "Activating virtualenv",
    run: activate_virtualenv,
};

const INSTALL: Step = Step {
    title: "Installing EBCLI",
    run: install_ebcli,
};

const WRAPPERS: Step = Step {
    title: "Creating EB wrappers",
    run: create_wrappers,
};

const FINISH: Step = Step {
    title: "Finishing up",
    run: finish,
};

/// Steps for `options`
///
/// Locating virtualenv is skipped when an executable was given explicitly.
pub fn plan(options: &InstallOptions) -> Vec<Step> {
    let mut steps = Vec::with_capacity(6);
    if options.virtualenv_executable.is_none() {
        steps.push(LOCATE);
    }
    steps.extend([CREATE, ACTIVATE, INSTALL, WRAPPERS, FINISH]);
    steps
}

fn locate_virtualenv(context: &mut InstallContext) -> Result<()> {
    let virtualenv = context.virtualenv()?;
    if !context.options.quiet {
        println!("Found {}", virtualenv.to_string_lossy());
    }
    Ok(())
}

fn create_virtualenv(context: &mut InstallContext) -> Result<()> {
    let virtualenv = context.virtualenv()?;
    let layout = context.layout()?;
    let options = CreateOptions {
        virtualenv: &virtualenv,
        python: context.options.python_installation.as_deref(),
        quiet: context.options.quiet,
    };
    let receipt = InstallerStamp::new(context.options.package.to_string());
    creator::create(&layout, &options, &receipt)
}

fn activate_virtualenv(context: &mut InstallContext) -> Result<()> {
    context.activation().map(|_| ())
}

fn install_ebcli(context: &mut InstallContext) -> Result<()> {
    let activation = context.activation()?;
    package::install(&activation, &context.options.package, context.options.quiet)
}

fn create_wrappers(context: &mut InstallContext) -> Result<()> {
    let layout = context.layout()?;
    for path in launcher::generate(&layout)? {
        tracing::info!(path = %path.display(), "generated launcher");
    }
    Ok(())
}

fn finish(context: &mut InstallContext) -> Result<()> {
    let layout = context.layout()?;
    let messages = completion::report(
        &layout,
        context.search_path.as_deref(),
        context.options.hide_export_recommendation,
    )?;
    messages.iter().for_each(Message::print);
    Ok(())
}
