//! ebcli-installer
//!
//! Installs the Elastic Beanstalk CLI (`awsebcli`) into an isolated
//! virtualenv and generates `eb` launchers that run it from there.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod environment;
mod error;
mod installer;
mod logging;
mod operations;
mod platform;
mod process;
mod progress;
mod ui;

use cli::Cli;
use error::InstallerError;

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell),
        None => commands::install::run(&cli),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "installation failed");
        if !e.already_reported() {
            ui::print_error(&e);
        }
        std::process::exit(e.exit_code());
    }
}
