//! Error type tests
//!
//! Tests for InstallerError and its constructors.

use std::path::Path;

use crate::error::InstallerError;
use crate::error::config::conflicting_options;
use crate::error::deps::{pip_and_virtualenv_not_found, virtualenv_not_found};
use crate::error::environment::{activation_missing, home_not_found, inside_virtualenv, not_owned};
use crate::error::fs::{create_dir_failed, write_failed};
use crate::error::process::{command_failed, spawn_failed};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_code() {
    let err = conflicting_options("--version", "--ebcli-source");
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("ebcli_installer::config::conflicting_options".to_string())
    );
}

test_error_contains!(
    test_conflicting_options_names_both_flags,
    conflicting_options("--version", "--ebcli-source"),
    "\"--version\"",
    "\"--ebcli-source\"",
    "cannot be used together"
);

test_error_contains!(
    test_inside_virtualenv,
    inside_virtualenv("/home/user/venv"),
    "cannot be executed inside a virtual environment"
);

test_error_contains!(
    test_home_not_found,
    home_not_found(),
    "Could not determine user's HOME directory"
);

test_error_contains!(
    test_not_owned,
    not_owned(Path::new("/home/user/.ebcli-virtual-env")),
    "/home/user/.ebcli-virtual-env",
    "was not created by this EBCLI installer"
);

test_error_contains!(
    test_pip_and_virtualenv_not_found,
    pip_and_virtualenv_not_found(),
    "\"pip\" and \"virtualenv\""
);

test_error_contains!(
    test_virtualenv_not_found,
    virtualenv_not_found(),
    "Could not find \"virtualenv\" installed"
);

test_error_contains!(
    test_command_failed_with_code,
    command_failed("pip", Some(2)),
    "`pip`",
    "exited with status 2"
);

test_error_contains!(
    test_command_failed_by_signal,
    command_failed("virtualenv", None),
    "terminated by a signal"
);

test_error_contains!(
    test_spawn_failed,
    spawn_failed("virtualenv", "No such file or directory"),
    "Failed to run `virtualenv`",
    "No such file or directory"
);

test_error_contains!(
    test_write_failed,
    write_failed(Path::new("/tmp/eb"), "permission denied"),
    "Failed to write file: /tmp/eb",
    "permission denied"
);

test_error_contains!(
    test_create_dir_failed,
    create_dir_failed(Path::new("/tmp/executables"), "read-only file system"),
    "Failed to create directory"
);

test_error_contains!(
    test_activation_missing,
    activation_missing(Path::new("/tmp/env/bin/activate")),
    "/tmp/env/bin/activate"
);

#[test]
fn test_not_owned_help_offers_both_remediations() {
    let err = not_owned(Path::new("/srv/.ebcli-virtual-env"));
    let help = err
        .help()
        .map(|h| h.to_string())
        .expect("not_owned should carry help text");
    assert!(help.contains("1. Delete \"/srv/.ebcli-virtual-env\""));
    assert!(help.contains("`--location`"));
}

#[test]
fn test_exit_code_passes_child_code_through() {
    assert_eq!(command_failed("pip", Some(3)).exit_code(), 3);
    assert_eq!(command_failed("pip", Some(127)).exit_code(), 127);
}

#[test]
fn test_exit_code_defaults_to_one() {
    assert_eq!(command_failed("pip", None).exit_code(), 1);
    assert_eq!(home_not_found().exit_code(), 1);
    assert_eq!(
        conflicting_options("--version", "--ebcli-source").exit_code(),
        1
    );
    assert_eq!(not_owned(Path::new("/x")).exit_code(), 1);
}

#[test]
fn test_only_child_exit_codes_count_as_reported() {
    assert!(command_failed("pip", Some(2)).already_reported());
    assert!(!command_failed("virtualenv", None).already_reported());
    assert!(!spawn_failed("pip", "not found").already_reported());
    assert!(!home_not_found().already_reported());
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let installer_err: InstallerError = io_err.into();
    assert!(matches!(installer_err, InstallerError::IoError { .. }));
    assert_eq!(installer_err.exit_code(), 1);
}
