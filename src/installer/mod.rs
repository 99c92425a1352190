//! Installing the EB CLI into the activated virtualenv
//!
//! - [`package`]: the `pip install` invocation
//! - [`launcher`]: the `eb` launchers in the `executables` directory

pub mod launcher;
pub mod package;

pub use package::PackageRequest;
