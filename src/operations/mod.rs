//! High-level operations
//!
//! - [`install`]: the full installation workflow, from locating virtualenv
//!   to reporting how to put `eb` on PATH

pub mod install;

pub use install::{InstallOperation, InstallOptions};
