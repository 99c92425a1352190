//! Locating the virtualenv executable

use std::ffi::OsStr;

use crate::error::{Result, deps};
use crate::platform::Platform;
use crate::process;

/// Find the first virtualenv candidate that answers `--version`
///
/// When none does, pip is looked for as well so the error tells the user
/// whether only virtualenv or pip too needs installing.
pub fn locate(platform: Platform) -> Result<String> {
    locate_with(platform, |candidate| process::probe(OsStr::new(candidate)))
}

/// [`locate`] with a custom availability check
pub fn locate_with(platform: Platform, probe: impl Fn(&str) -> bool) -> Result<String> {
    if let Some(found) = platform
        .virtualenv_candidates()
        .into_iter()
        .find(|candidate| probe(candidate.as_str()))
    {
        tracing::debug!(executable = %found, "found virtualenv");
        return Ok(found);
    }

    match platform
        .pip_candidates()
        .into_iter()
        .find(|candidate| probe(candidate.as_str()))
    {
        Some(pip) => {
            tracing::debug!(executable = %pip, "found pip but no virtualenv");
            Err(deps::virtualenv_not_found())
        }
        None => Err(deps::pip_and_virtualenv_not_found()),
    }
}
