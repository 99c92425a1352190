//! Generating the `eb` launchers
//!
//! Launchers live in `<virtualenv>/executables` so that only they, and not
//! the virtualenv's `python`/`pip`, end up on the user's PATH. They are
//! rewritten on every run.

use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::environment::EnvironmentLayout;
use crate::error::Result;
use crate::platform::Launcher;
use crate::platform::templates::render_launcher;

/// Write the platform's launchers, returning their paths
pub fn generate(layout: &EnvironmentLayout) -> Result<Vec<PathBuf>> {
    let launcher_dir = layout.launcher_dir();
    fs::ensure_dir(&launcher_dir)?;

    let bin_dir = layout.bin_dir();
    layout
        .platform()
        .launchers()
        .iter()
        .map(|launcher| write_launcher(&launcher_dir, &bin_dir, launcher))
        .collect()
}

fn write_launcher(launcher_dir: &Path, bin_dir: &Path, launcher: &Launcher) -> Result<PathBuf> {
    let mut contents = render_launcher(launcher.template, bin_dir);
    if launcher.crlf {
        contents = contents.replace('\n', "\r\n");
    }

    let path = launcher_dir.join(launcher.file_name);
    fs::write_text(&path, &contents)?;
    if launcher.executable {
        fs::make_executable(&path)?;
    }
    Ok(path)
}
