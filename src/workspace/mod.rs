//! Discovery of the packages, modules and sources under a workspace directory.
mod loader;
mod model;

pub use loader::*;
pub use model::*;

/// Extension of the files that are loaded as sources.
pub const SOURCE_EXTENSION: &str = "tr";

/// Stem of the source that is accepted directly under a package directory
/// even though it is not a valid name.
pub const ENTRY_POINT: &str = "main";
