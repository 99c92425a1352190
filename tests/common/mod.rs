//! Common test utilities for installer integration tests
//!
//! The installer is driven end to end against fake `virtualenv` and `pip`
//! shell scripts. The fake virtualenv lays out `bin/activate` and a fake
//! `bin/pip` in the directory it is asked to create; both append their
//! arguments to log files in [`TestInstall::logs`].

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_VIRTUALENV: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "virtualenv 20.0.0 (fake)"
    exit 0
fi
echo "$@" >> "$EBCLI_TEST_LOGS/virtualenv.log"
if [ -n "$FAKE_VIRTUALENV_SIGNAL" ]; then
    kill -9 $$
fi
if [ -n "$FAKE_VIRTUALENV_EXIT" ]; then
    exit "$FAKE_VIRTUALENV_EXIT"
fi
mkdir -p "$1/bin"
touch "$1/bin/activate"
cat > "$1/bin/pip" <<'PIP'
#!/bin/sh
echo "$@" >> "$EBCLI_TEST_LOGS/pip.log"
echo "$VIRTUAL_ENV" > "$EBCLI_TEST_LOGS/pip.virtual_env"
echo "fake pip output"
exit "${FAKE_PIP_EXIT:-0}"
PIP
chmod +x "$1/bin/pip"
"#;

const FAKE_PIP: &str = "#!/bin/sh\nexit 0\n";

/// A scratch install location plus fake tools on a private PATH
pub struct TestInstall {
    pub temp: TempDir,
    /// Passed to the installer as `--location`
    pub location: PathBuf,
    /// Directory holding the fake tools
    pub tools: PathBuf,
    /// Directory the fake tools log to
    pub logs: PathBuf,
}

impl TestInstall {
    /// Create a location with a fake `virtualenv` on PATH
    pub fn new() -> Self {
        let install = Self::without_tools();
        install.add_tool("virtualenv", FAKE_VIRTUALENV);
        install
    }

    /// Create a location with no tools on PATH at all
    pub fn without_tools() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = std::fs::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        let location = root.join("home");
        let tools = root.join("tools");
        let logs = root.join("logs");
        for dir in [&location, &tools, &logs] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            location,
            tools,
            logs,
        }
    }

    /// Put a fake system `pip` on PATH that answers `--version`
    pub fn add_system_pip(&self) {
        self.add_tool("pip", FAKE_PIP);
    }

    fn add_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools.join(name);
        std::fs::write(&path, body).expect("Failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
    }

    pub fn virtualenv_path(&self) -> PathBuf {
        self.tools.join("virtualenv")
    }

    pub fn env_dir(&self) -> PathBuf {
        self.location.join(".ebcli-virtual-env")
    }

    pub fn launcher_dir(&self) -> PathBuf {
        self.env_dir().join("executables")
    }

    pub fn stamp_path(&self) -> PathBuf {
        self.env_dir().join(".ebcli_installer_stamp")
    }

    /// PATH seen by the installer: the fake tools and the system shell utilities
    pub fn search_path(&self) -> String {
        format!("{}:/usr/bin:/bin", self.tools.display())
    }

    /// Contents of a fake tool's log, empty when it never ran
    pub fn log(&self, name: &str) -> String {
        std::fs::read_to_string(self.logs.join(name)).unwrap_or_default()
    }

    /// Installer command for this location
    pub fn cmd(&self) -> Command {
        let mut cmd = installer_cmd();
        cmd.arg("--location")
            .arg(&self.location)
            .env("PATH", self.search_path())
            .env("EBCLI_TEST_LOGS", &self.logs)
            .env_remove("EBCLI_INSTALL_LOCATION");
        cmd
    }
}

/// The installer binary with a clean environment for these tests
#[allow(deprecated)]
pub fn installer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ebcli-installer").expect("Failed to find installer binary");
    cmd.env_remove("VIRTUAL_ENV")
        .env_remove("EBCLI_INSTALLER_LOG")
        .env("NO_COLOR", "1");
    cmd
}

pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
