//! Common file system operations with unified error handling

use std::path::Path;

use crate::error::{Result, fs};

/// Create `dir` (and its parents) unless it already exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| fs::create_dir_failed(dir, e))
}

/// Write `contents` to `path`, replacing whatever is there
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| fs::write_failed(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Add execute permission for owner, group and others
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)
        .map_err(|e| fs::write_failed(path, e))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    std::fs::set_permissions(path, permissions).map_err(|e| fs::write_failed(path, e))
}

/// Windows has no execute bit; script extensions decide instead
#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
