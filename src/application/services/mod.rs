//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the [`FileSystem`](crate::infrastructure::traits::FileSystem)
//! boundary trait but are themselves concrete structs, not traits.

mod expander;
mod loader;
mod scanner;

pub use expander::CodeTableExpander;
pub use loader::ForestLoader;
pub use scanner::{DefinitionScanner, DefinitionSources};
