//! Process-wide forest
//!
//! The forest is built once, on first request, and then shared read-only for
//! the rest of the process.

use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::application::services::ForestLoader;
use crate::application::ApplicationResult;
use crate::domain::OidForest;

/// Global forest instance.
static FOREST: OnceLock<OidForest> = OnceLock::new();

/// Serializes the one-time build so concurrent first callers load only once.
static INIT: Mutex<()> = Mutex::new(());

/// Get the global forest, building it from `base_dir` on first access.
///
/// Later calls return the forest built by the first successful call and
/// ignore their arguments. A failed load leaves the registry empty, so the
/// next call tries again.
pub fn init_global(loader: &ForestLoader, base_dir: &Path) -> ApplicationResult<&'static OidForest> {
    if let Some(forest) = FOREST.get() {
        return Ok(forest);
    }

    let _guard = INIT.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(forest) = FOREST.get() {
        return Ok(forest);
    }

    debug!("registry: building forest from {}", base_dir.display());
    let forest = loader.load(base_dir)?;
    Ok(FOREST.get_or_init(|| forest))
}

/// The global forest, if it has been built.
pub fn global() -> Option<&'static OidForest> {
    FOREST.get()
}
