//! Host platform profiles
//!
//! Everything that differs between a POSIX and a Windows installation is
//! answered by [`Platform`]: where virtualenv puts its executables, which
//! launchers get generated and what they contain, which executable names to
//! probe for, and how the user is told to extend `PATH`.

pub mod templates;


use std::fmt;
use std::path::{Path, PathBuf};

/// A generated launcher file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher {
    /// File name inside the launcher directory
    pub file_name: &'static str,
    /// Template text, see [`templates`] for placeholders
    pub template: &'static str,
    /// Whether the executable permission bits must be set
    pub executable: bool,
    /// Whether the file is written with CRLF line endings
    pub crlf: bool,
}

/// Helper scripts written next to the launchers so the user can extend PATH
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExporters {
    pub script: PathBuf,
    pub wrapper: PathBuf,
}

const POSIX_LAUNCHERS: &[Launcher] = &[Launcher {
    file_name: "eb",
    template: templates::PYTHON_WRAPPER,
    executable: true,
    crlf: false,
}];

const WINDOWS_LAUNCHERS: &[Launcher] = &[
    Launcher {
        file_name: "eb.ps1",
        template: templates::POWERSHELL_WRAPPER,
        executable: false,
        crlf: true,
    },
    Launcher {
        file_name: "eb.bat",
        template: templates::BATCH_WRAPPER,
        executable: false,
        crlf: true,
    },
];

/// Platform profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Profile of the host the installer runs on
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Directory inside a virtualenv that holds its executables
    pub fn bin_dir_name(self) -> &'static str {
        match self {
            Platform::Posix => "bin",
            Platform::Windows => "Scripts",
        }
    }

    /// Activation script, relative to the virtualenv root
    pub fn activation_script(self) -> PathBuf {
        let name = match self {
            Platform::Posix => "activate",
            Platform::Windows => "activate.bat",
        };
        Path::new(self.bin_dir_name()).join(name)
    }

    /// File name of an executable called `stem` inside the bin directory
    pub fn executable_name(self, stem: &str) -> String {
        match self {
            Platform::Posix => stem.to_string(),
            Platform::Windows => format!("{stem}.exe"),
        }
    }

    /// Names probed, in order, when looking for virtualenv
    pub fn virtualenv_candidates(self) -> Vec<String> {
        let mut candidates = vec!["virtualenv".to_string()];
        if self == Platform::Windows {
            candidates.push("virtualenv.cmd".to_string());
            candidates.push("virtualenv.exe".to_string());
        }
        candidates
    }

    /// Names probed, in order, when looking for pip
    ///
    /// `pip<x.y>` variants are not probed: an interpreter that installed
    /// `pip3.11` without `pip3` is rare enough to ignore.
    pub fn pip_candidates(self) -> Vec<String> {
        let stems = ["pip", "pip2", "pip3"];
        let mut candidates: Vec<String> = stems.iter().map(|s| (*s).to_string()).collect();
        if self == Platform::Windows {
            candidates.extend(stems.iter().map(|s| format!("{s}.exe")));
            candidates.extend(stems.iter().map(|s| format!("{s}.cmd")));
        }
        candidates
    }

    /// Launchers generated for this platform
    pub fn launchers(self) -> &'static [Launcher] {
        match self {
            Platform::Posix => POSIX_LAUNCHERS,
            Platform::Windows => WINDOWS_LAUNCHERS,
        }
    }

    /// Whether this platform needs generated helper scripts to extend PATH
    pub fn uses_path_exporters(self) -> bool {
        self == Platform::Windows
    }

    /// Paths of the PATH helper scripts inside `launcher_dir`
    pub fn path_exporters(self, launcher_dir: &Path) -> PathExporters {
        PathExporters {
            script: launcher_dir.join("path_exporter.vbs"),
            wrapper: launcher_dir.join("path_exporter.bat"),
        }
    }

    /// Instructions printed when `launcher_dir` is not yet on PATH
    pub fn export_instructions(self, launcher_dir: &Path) -> String {
        match self {
            Platform::Posix => {
                templates::render_posix_instructions(&launcher_dir.display().to_string())
            }
            Platform::Windows => {
                let exporters = self.path_exporters(launcher_dir);
                templates::render_windows_instructions(
                    &exporters.wrapper.display().to_string(),
                    &exporters.script.display().to_string(),
                )
            }
        }
    }

    /// Compare two PATH entries the way the platform resolves them
    ///
    /// Trailing separators are ignored; Windows compares case-insensitively.
    pub fn same_path_entry(self, a: &str, b: &str) -> bool {
        let trim = |s: &'_ str| -> String {
            let trimmed = s.trim_end_matches(['/', '\\']);
            if trimmed.is_empty() {
                s.to_string()
            } else {
                trimmed.to_string()
            }
        };
        let (a, b) = (trim(a), trim(b));
        match self {
            Platform::Posix => a == b,
            Platform::Windows => a.replace('/', "\\").eq_ignore_ascii_case(&b.replace('/', "\\")),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => write!(f, "posix"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}
