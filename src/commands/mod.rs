//! Command implementations for the installer CLI

pub mod completions;
pub mod install;
