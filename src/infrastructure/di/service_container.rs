//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::registry;
use crate::application::services::{DefinitionScanner, DefinitionSources, ForestLoader};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::OidForest;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    loader: ForestLoader,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let loader = ForestLoader::new(Arc::clone(&fs), settings.layout.clone());

        Self {
            settings,
            fs,
            loader,
        }
    }

    pub fn scanner(&self) -> DefinitionScanner {
        self.loader.scanner()
    }

    /// Files the configured base directory provides.
    pub fn sources(&self) -> ApplicationResult<DefinitionSources> {
        self.scanner().scan(&self.settings.base_dir)
    }

    /// The process-wide forest, built from the configured base directory.
    pub fn forest(&self) -> ApplicationResult<&'static OidForest> {
        registry::init_global(&self.loader, &self.settings.base_dir)
    }
}
