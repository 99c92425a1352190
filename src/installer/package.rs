//! The `pip install` step

use std::fmt;

use crate::environment::activation::Activation;
use crate::error::Result;
use crate::process;

/// Name of the EB CLI on the package index
pub const PACKAGE_NAME: &str = "awsebcli";

/// What to ask pip for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageRequest {
    /// Latest release, upgrading dependencies eagerly
    Latest,
    /// `awsebcli==<version>`
    Pinned(String),
    /// A path, archive or repository handed to pip verbatim
    Source(String),
}

impl PackageRequest {
    /// Build the request from the mutually exclusive `--version` / `--ebcli-source`
    ///
    /// A source wins if both are somehow given; argument validation rejects
    /// that combination before getting here.
    pub fn new(version: Option<&str>, source: Option<&str>) -> Self {
        match (source, version) {
            (Some(source), _) => PackageRequest::Source(source.trim().to_string()),
            (None, Some(version)) => PackageRequest::Pinned(version.trim().to_string()),
            (None, None) => PackageRequest::Latest,
        }
    }

    /// Arguments passed to pip
    pub fn pip_args(&self) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        match self {
            PackageRequest::Source(source) => args.push(source.clone()),
            PackageRequest::Pinned(version) => args.push(format!("{PACKAGE_NAME}=={version}")),
            PackageRequest::Latest => args.extend(
                [PACKAGE_NAME, "--upgrade", "--upgrade-strategy", "eager"]
                    .iter()
                    .map(|s| (*s).to_string()),
            ),
        }
        args
    }
}

impl fmt::Display for PackageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageRequest::Latest => write!(f, "{PACKAGE_NAME}"),
            PackageRequest::Pinned(version) => write!(f, "{PACKAGE_NAME}=={version}"),
            PackageRequest::Source(source) => write!(f, "{source}"),
        }
    }
}

/// Run pip inside the virtualenv
///
/// pip's exit code becomes the installer's on failure.
pub fn install(activation: &Activation, request: &PackageRequest, quiet: bool) -> Result<()> {
    let mut command = activation.command("pip");
    command.args(request.pip_args());
    process::run(command, quiet, &format!("Installing {request}"))
}
