//! oidtree: builds a forest of object identifiers from XML definition files.
//!
//! Top-level definition files (`conf/oids_*.xml`) provide roots and their
//! immediate children; code tables (`conf/codes/codes_*.xml`) are matched to
//! nodes by name and expand them recursively.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::registry;
pub use application::services::{CodeTableExpander, DefinitionScanner, DefinitionSources, ForestLoader};
pub use domain::{OidForest, OidNode, Translation};
