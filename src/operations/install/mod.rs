//! Install operation submodules
//!
//! - [`context`]: options and state shared by the steps
//! - [`steps`]: the ordered step list
//! - [`completion`]: PATH detection and the closing messages
//! - [`orchestrator`]: runs the steps

pub mod completion;
pub mod context;
pub mod orchestrator;
pub mod steps;

pub use context::InstallOptions;
pub use orchestrator::InstallOperation;
