//! Diagnostic logging
//!
//! Structured logs go to stderr through `tracing`, filtered by
//! `EBCLI_INSTALLER_LOG` (EnvFilter syntax, e.g. `ebcli_installer=debug`).
//! Only warnings are shown by default so the step output stays readable.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "EBCLI_INSTALLER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing. Call once at process startup.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();
}
