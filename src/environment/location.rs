//! Install location resolution

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, environment};
use crate::platform::Platform;

/// Resolve the absolute install location
///
/// An explicit `--location` wins; otherwise the user's home directory is
/// used. Relative paths are resolved against the current directory.
/// Symlinks are kept as given so the launcher directory matches the PATH
/// entries the user writes for it.
pub fn resolve(explicit: Option<&Path>, platform: Platform) -> Result<PathBuf> {
    let location = match explicit {
        Some(path) => path.to_path_buf(),
        None => user_home(platform, |name| std::env::var_os(name), dirs::home_dir)
            .ok_or_else(environment::home_not_found)?,
    };

    absolutize(&location)
}

/// Find the current user's home directory
///
/// POSIX reads `HOME`; Windows tries `USERPROFILE`, `LOCALAPPDATA` and
/// `APPDATA` in that order. Empty values are skipped. `fallback` is asked
/// only when none of the variables is usable.
pub fn user_home(
    platform: Platform,
    lookup: impl Fn(&str) -> Option<OsString>,
    fallback: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    let variables: &[&str] = match platform {
        Platform::Posix => &["HOME"],
        Platform::Windows => &["USERPROFILE", "LOCALAPPDATA", "APPDATA"],
    };

    variables
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(fallback)
}

/// Make `path` absolute and drop `.` and `..` lexically
fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
