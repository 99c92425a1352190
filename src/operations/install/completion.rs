//! Final report of an installation
//!
//! Decides whether the launcher directory still has to be put on PATH and
//! builds the messages shown to the user. On Windows the helper scripts
//! that extend the user's PATH are written here as well.

use std::ffi::OsStr;
use std::path::Path;

use crate::common::fs;
use crate::environment::EnvironmentLayout;
use crate::error::Result;
use crate::platform::Platform;
use crate::platform::templates::{
    MINIMAL_SUCCESS_MESSAGE, SUCCESS_MESSAGE, render_path_exporter_script,
    render_path_exporter_wrapper,
};
use crate::ui::Message;

/// Whether `dir` is one of the entries of `search_path`
pub fn is_on_search_path(platform: Platform, dir: &Path, search_path: Option<&OsStr>) -> bool {
    let Some(search_path) = search_path else {
        return false;
    };
    let dir = dir.to_string_lossy();
    std::env::split_paths(search_path)
        .any(|entry| platform.same_path_entry(&entry.to_string_lossy(), &dir))
}

/// Build the closing messages, writing PATH helpers where the platform uses them
pub fn report(
    layout: &EnvironmentLayout,
    search_path: Option<&OsStr>,
    hide_export_recommendation: bool,
) -> Result<Vec<Message>> {
    let platform = layout.platform();
    let launcher_dir = layout.launcher_dir();

    if is_on_search_path(platform, &launcher_dir, search_path) {
        tracing::debug!(dir = %launcher_dir.display(), "launcher directory already on PATH");
        return Ok(vec![Message::Success(MINIMAL_SUCCESS_MESSAGE.to_string())]);
    }

    if platform.uses_path_exporters() {
        write_path_exporters(platform, &launcher_dir)?;
    }

    let mut messages = vec![Message::Success(SUCCESS_MESSAGE.to_string())];
    if !hide_export_recommendation {
        messages.push(Message::Recommendation(
            platform.export_instructions(&launcher_dir),
        ));
    }
    Ok(messages)
}

fn write_path_exporters(platform: Platform, launcher_dir: &Path) -> Result<()> {
    let exporters = platform.path_exporters(launcher_dir);
    let script = render_path_exporter_script(&launcher_dir.display().to_string());
    let wrapper = render_path_exporter_wrapper(&exporters.script.display().to_string());

    fs::write_text(&exporters.script, &script.replace('\n', "\r\n"))?;
    fs::write_text(&exporters.wrapper, &wrapper.replace('\n', "\r\n"))
}
