//! Launcher and PATH helper templates
//!
//! Placeholders are written as `{name}` and filled by plain substitution:
//! - `{bin_location}`: the virtualenv's bin directory
//! - `{bin_location_literal}`: the same path as a quoted Python string literal
//! - `{interpreter}`: the interpreter on the Python wrapper's shebang line
//! - `{installer_version}`: version of this installer

use std::path::Path;

/// POSIX launcher: a Python script that activates the virtualenv in its own
/// process and runs the real `eb`.
///
/// An interrupt delivered to the wrapper also reaches `eb` (same process
/// group), so the wrapper keeps waiting instead of abandoning the child.
pub const PYTHON_WRAPPER: &str = r#"#!{interpreter}
"""Launcher for `eb`, generated by ebcli-installer {installer_version}."""
import os
import subprocess
import sys

BIN_LOCATION = {bin_location_literal}


def _activate():
    os.environ["VIRTUAL_ENV"] = os.path.dirname(BIN_LOCATION)
    os.environ["PATH"] = BIN_LOCATION + os.pathsep + os.environ.get("PATH", "")
    os.environ.pop("PYTHONHOME", None)


def _exec_cmd(args):
    p = subprocess.Popen(args)
    while True:
        try:
            p.wait()
            break
        except KeyboardInterrupt:
            continue

    if p.returncode is None:
        print("Assuming failure because `eb` returned with an indeterminate exit-code.")
        return 1

    if p.returncode < 0:
        return 128 - p.returncode

    return p.returncode


_activate()
sys.exit(_exec_cmd([os.path.join(BIN_LOCATION, "eb")] + sys.argv[1:]))
"#;

/// Windows PowerShell launcher
pub const POWERSHELL_WRAPPER: &str = r#"# Launcher for `eb`, generated by ebcli-installer {installer_version}
& "{bin_location}\activate.ps1"
& "{bin_location}\eb" $args
$ebExitCode = $LASTEXITCODE
deactivate
exit $ebExitCode
"#;

/// Windows CMD Prompt launcher
pub const BATCH_WRAPPER: &str = r#"@echo off
REM Launcher for `eb`, generated by ebcli-installer {installer_version}
REM Safe way to consolidate CMD line arguments to pass to `eb`
set args=%1
shift
:start
if [%1] == [] goto done
set args=%args% %1
shift
goto start
:done

REM activate virtualenv, call eb and deactivate virtualenv
CALL "{bin_location}\activate.bat"
CALL "{bin_location}\eb.exe" %args%
set EB_EXIT_CODE=%ERRORLEVEL%
CALL deactivate
exit /b %EB_EXIT_CODE%
"#;

/// Visual Basic script appending `{new_location}` to the user's persistent Path
pub const PATH_EXPORTER_VBS: &str = r#"Set wshShell = CreateObject( "WScript.Shell" )
Set wshUserEnv = wshShell.Environment( "USER" )
Dim pathVar
pathVar = wshUserEnv( "Path" )

If InStr(pathVar, "{new_location}") = 0 Then
wshUserEnv( "Path" ) = wshUserEnv( "Path" ) + ";{new_location}"
End If

Set wshUserEnv = Nothing
Set wshShell   = Nothing
"#;

/// Batch file invoking the Visual Basic PATH exporter
pub const PATH_EXPORTER_BAT: &str = "WScript \"{path_exporter_script}\"\n";

pub const MINIMAL_SUCCESS_MESSAGE: &str = "Success!\n\nEBCLI has been installed.\n";

pub const SUCCESS_MESSAGE: &str = "Success!";

const POSIX_EXPORT_RECOMMENDATION: &str = r#"
    Note: To complete installation, ensure `eb` is in PATH. You can ensure this by executing:

    1. Bash:

       echo 'export PATH="{eb_location}:$PATH"' >> ~/.bash_profile && source ~/.bash_profile

    2. Zsh:

       echo 'export PATH="{eb_location}:$PATH"' >> ~/.zshenv && source ~/.zshenv
"#;

const WINDOWS_EXPORT_RECOMMENDATION: &str = r#"
To complete installation, ensure `eb` is in PATH. You can ensure this by executing:


    1. CMD Prompt:

        cmd.exe /c "{path_exporter_bat}"

    2. PowerShell:

        & "{path_exporter}"


NOTE: Additionally, you would need to **restart this shell**
"#;

/// Fill a launcher template for the virtualenv whose bin directory is `bin_location`
pub fn render_launcher(template: &str, bin_location: &Path) -> String {
    let bin = bin_location.display().to_string();
    fill(
        template,
        &[
            ("interpreter", &shebang_interpreter(bin_location)),
            ("bin_location_literal", &python_string_literal(&bin)),
            ("bin_location", &bin),
            ("installer_version", env!("CARGO_PKG_VERSION")),
        ],
    )
}

/// Fill the Visual Basic PATH exporter for `new_location`
pub fn render_path_exporter_script(new_location: &str) -> String {
    fill(PATH_EXPORTER_VBS, &[("new_location", new_location)])
}

/// Fill the batch wrapper around the Visual Basic PATH exporter
pub fn render_path_exporter_wrapper(path_exporter_script: &str) -> String {
    fill(
        PATH_EXPORTER_BAT,
        &[("path_exporter_script", path_exporter_script)],
    )
}

pub fn render_posix_instructions(eb_location: &str) -> String {
    fill(POSIX_EXPORT_RECOMMENDATION, &[("eb_location", eb_location)])
}

pub fn render_windows_instructions(path_exporter_bat: &str, path_exporter: &str) -> String {
    fill(
        WINDOWS_EXPORT_RECOMMENDATION,
        &[
            ("path_exporter_bat", path_exporter_bat),
            ("path_exporter", path_exporter),
        ],
    )
}

/// Replace each `{name}` placeholder in one pass over `template`.
///
/// Substituted text is never scanned again, so paths containing braces
/// come out as written. Unknown placeholders are left alone.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = values.iter().find_map(|(name, value)| {
            let after = tail[1..].strip_prefix(name)?.strip_prefix('}')?;
            Some((*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Longest `#!` line the kernel reads in full
const MAX_SHEBANG_LEN: usize = 127;

/// The virtualenv's own interpreter, unless its path cannot appear on a
/// shebang line because of whitespace or length.
fn shebang_interpreter(bin_location: &Path) -> String {
    let python = bin_location.join("python").display().to_string();
    if python.chars().any(char::is_whitespace) || "#!".len() + python.len() > MAX_SHEBANG_LEN {
        "/usr/bin/env python3".to_string()
    } else {
        python
    }
}

/// JSON string syntax is a subset of Python 3 string literal syntax.
fn python_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}
