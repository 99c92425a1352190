//! Virtualenv activation
//!
//! Instead of evaluating the activation script virtualenv generates, the
//! same environment change is applied directly: `VIRTUAL_ENV` points at the
//! virtualenv, its bin directory is put in front of `PATH`, and
//! `PYTHONHOME` is dropped. Every child spawned through an [`Activation`]
//! runs as if the installer itself had been started inside the virtualenv.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use super::{EnvironmentLayout, VIRTUAL_ENV_VAR};
use crate::error::{InstallerError, Result, environment};

/// Activated search-path state for the virtualenv
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    layout: EnvironmentLayout,
    path: OsString,
}

impl Activation {
    /// Activate on top of `search_path`, usually the installer's own `PATH`
    ///
    /// Fails when virtualenv did not leave its activation script behind,
    /// which means the directory is not a usable virtualenv.
    pub fn with_search_path(
        layout: &EnvironmentLayout,
        search_path: Option<OsString>,
    ) -> Result<Self> {
        let script = layout.activation_script();
        if !script.is_file() {
            return Err(environment::activation_missing(&script));
        }

        let bin_dir = layout.bin_dir();
        let mut entries = vec![bin_dir.clone()];
        if let Some(search_path) = search_path {
            entries.extend(std::env::split_paths(&search_path));
        }
        let path = std::env::join_paths(entries).map_err(|e| InstallerError::IoError {
            message: format!("cannot build PATH for {}: {e}", bin_dir.display()),
        })?;

        tracing::debug!(
            virtual_env = %layout.root().display(),
            path = %path.to_string_lossy(),
            "activated virtualenv"
        );

        Ok(Self {
            layout: layout.clone(),
            path,
        })
    }

    pub fn virtual_env(&self) -> &Path {
        self.layout.root()
    }

    /// `PATH` with the virtualenv's bin directory first
    pub fn search_path(&self) -> &OsStr {
        &self.path
    }

    /// Resolve `stem` inside the virtualenv, falling back to a PATH lookup
    pub fn resolve(&self, stem: &str) -> OsString {
        let candidate = self.layout.executable(stem);
        if candidate.is_file() {
            candidate.into_os_string()
        } else {
            OsString::from(stem)
        }
    }

    /// A command for `stem` running inside the virtualenv
    pub fn command(&self, stem: &str) -> Command {
        let mut command = Command::new(self.resolve(stem));
        self.apply(&mut command);
        command
    }

    /// Give `command` the activated environment
    pub fn apply(&self, command: &mut Command) {
        command
            .env(VIRTUAL_ENV_VAR, self.virtual_env())
            .env("PATH", self.search_path())
            .env_remove("PYTHONHOME");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn created_layout(temp: &TempDir, platform: Platform) -> EnvironmentLayout {
        let layout = EnvironmentLayout::new(temp.path(), platform);
        let script = layout.activation_script();
        std::fs::create_dir_all(script.parent().unwrap()).unwrap();
        std::fs::write(&script, "# activate\n").unwrap();
        layout
    }

    #[test]
    fn test_missing_activation_script_is_fatal() {
        let temp = TempDir::new().unwrap();
        let layout = EnvironmentLayout::new(temp.path(), Platform::current());
        std::fs::create_dir_all(layout.root()).unwrap();

        let err = Activation::with_search_path(&layout, None).unwrap_err();
        assert!(matches!(err, InstallerError::ActivationScriptMissing { .. }));
    }

    #[test]
    fn test_bin_dir_prepended_to_search_path() {
        let temp = TempDir::new().unwrap();
        let layout = created_layout(&temp, Platform::current());
        let original = std::env::join_paths([Path::new("/usr/local/bin"), Path::new("/usr/bin")])
            .unwrap();

        let activation = Activation::with_search_path(&layout, Some(original)).unwrap();
        let entries: Vec<PathBuf> = std::env::split_paths(activation.search_path()).collect();

        assert_eq!(
            entries,
            vec![
                layout.bin_dir(),
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/usr/bin"),
            ]
        );
        assert_eq!(activation.virtual_env(), layout.root());
    }

    #[test]
    fn test_activation_without_search_path() {
        let temp = TempDir::new().unwrap();
        let layout = created_layout(&temp, Platform::current());

        let activation = Activation::with_search_path(&layout, None).unwrap();
        let entries: Vec<PathBuf> = std::env::split_paths(activation.search_path()).collect();
        assert_eq!(entries, vec![layout.bin_dir()]);
    }

    #[test]
    fn test_resolve_prefers_virtualenv_executable() {
        let temp = TempDir::new().unwrap();
        let layout = created_layout(&temp, Platform::current());
        let activation = Activation::with_search_path(&layout, None).unwrap();

        assert_eq!(activation.resolve("pip"), OsString::from("pip"));

        std::fs::write(layout.executable("pip"), "").unwrap();
        assert_eq!(activation.resolve("pip"), layout.executable("pip").into_os_string());
    }

    #[test]
    fn test_command_carries_activated_environment() {
        let temp = TempDir::new().unwrap();
        let layout = created_layout(&temp, Platform::current());
        let activation = Activation::with_search_path(&layout, None).unwrap();

        let command = activation.command("pip");
        let envs: Vec<(OsString, Option<OsString>)> = command
            .get_envs()
            .map(|(k, v)| (k.to_os_string(), v.map(OsStr::to_os_string)))
            .collect();

        assert!(envs.contains(&(
            OsString::from("VIRTUAL_ENV"),
            Some(layout.root().as_os_str().to_os_string())
        )));
        assert!(envs.contains(&(OsString::from("PYTHONHOME"), None)));
        assert!(envs.iter().any(|(k, v)| k == "PATH" && v.is_some()));
    }
}
