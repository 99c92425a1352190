//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::error::{self, Result};

/// Installer for the EB CLI
///
/// Creates an isolated virtualenv, installs `awsebcli` into it and generates
/// `eb` launchers that can be put on PATH.
#[derive(Parser, Debug)]
#[command(
    name = "ebcli-installer",
    author,
    version,
    disable_version_flag = true,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer for the Elastic Beanstalk command line interface",
    long_about = "Creates an isolated virtualenv for the EB CLI (awsebcli), installs the \
                  package into it and generates `eb` launchers that activate the virtualenv \
                  before running the real executable.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ebcli-installer                          \x1b[90m# Install the latest EB CLI in the home directory\x1b[0m\n   \
                  ebcli-installer -v 3.20.10               \x1b[90m# Install a specific version\x1b[0m\n   \
                  ebcli-installer -s ./aws-elastic-beanstalk-cli \x1b[90m# Install from source\x1b[0m\n   \
                  ebcli-installer -l /opt/ebcli -q         \x1b[90m# Install elsewhere, without pip output\x1b[0m\n"
)]
pub struct Cli {
    /// Path to the virtualenv installation to use to create the EBCLI's virtualenv
    #[arg(long, short = 'e', value_name = "PATH")]
    pub virtualenv_executable: Option<PathBuf>,

    /// Hide export recommendation
    #[arg(long, short = 'i')]
    pub hide_export_recommendation: bool,

    /// Location to store the awsebcli package and its dependencies in (defaults to the home directory)
    #[arg(long, short = 'l', value_name = "DIR", env = "EBCLI_INSTALL_LOCATION")]
    pub location: Option<PathBuf>,

    /// Python installation to create the virtualenv with
    #[arg(long, short = 'p', value_name = "PATH")]
    pub python_installation: Option<PathBuf>,

    /// Enable quiet mode to display only minimal, necessary output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Filesystem path to a Git repository of the EBCLI, or a .zip or .tar file of the EBCLI source code
    #[arg(long, short = 's', value_name = "SRC")]
    pub ebcli_source: Option<String>,

    /// Version of the awsebcli to install
    #[arg(long, short = 'v', value_name = "VERSION")]
    pub version: Option<String>,

    /// Print the installer's own version
    #[arg(long, short = 'V', action = clap::ArgAction::Version)]
    pub installer_version: Option<bool>,

    /// Print shell completions for the installer and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Reject option combinations clap cannot express with our error messages
    pub fn validate(&self) -> Result<()> {
        if self.version.is_some() && self.ebcli_source.is_some() {
            return Err(error::config::conflicting_options(
                "--version",
                "--ebcli-source",
            ));
        }
        Ok(())
    }
}
