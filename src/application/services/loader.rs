//! Forest loader
//!
//! Scans a base directory, decodes every top-level definition file and runs
//! the code-table expander over each root's children.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::services::expander::CodeTableExpander;
use crate::application::services::scanner::{DefinitionScanner, DefinitionSources};
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::LayoutConfig;
use crate::domain::{OidForest, OidTreeDefinition, XmlDocument};
use crate::infrastructure::traits::FileSystem;

/// Builds an [`OidForest`] from definition files.
pub struct ForestLoader {
    fs: Arc<dyn FileSystem>,
    layout: LayoutConfig,
}

impl ForestLoader {
    pub fn new(fs: Arc<dyn FileSystem>, layout: LayoutConfig) -> Self {
        Self { fs, layout }
    }

    pub fn scanner(&self) -> DefinitionScanner {
        DefinitionScanner::new(Arc::clone(&self.fs), self.layout.clone())
    }

    /// Scan `base_dir` and build the forest.
    ///
    /// The first I/O failure aborts the load; no partial forest is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, base_dir: &Path) -> ApplicationResult<OidForest> {
        let sources = self.scanner().scan(base_dir)?;
        self.build(&sources)
    }

    /// Build the forest from already scanned sources.
    pub fn build(&self, sources: &DefinitionSources) -> ApplicationResult<OidForest> {
        if !sources.has_main_file(&self.layout.main_file) {
            info!(
                "no {}.xml among {} definition files, nothing to load",
                self.layout.main_file,
                sources.oid_files.len()
            );
            return Ok(OidForest::default());
        }

        let mut expander = CodeTableExpander::new(self.fs.as_ref(), &sources.code_files);
        let mut roots = Vec::with_capacity(sources.oid_files.len());

        for file in &sources.oid_files {
            let content = self
                .fs
                .read_to_string(file)
                .with_path_context("read definition file", file)?;

            let definition =
                match XmlDocument::parse(&content).and_then(|doc| OidTreeDefinition::decode(&doc)) {
                    Ok(definition) => definition,
                    Err(e) => {
                        warn!("skipping definition file {}: {}", file.display(), e);
                        continue;
                    }
                };

            let OidTreeDefinition { mut root, children } = definition;
            debug!("load: {} with {} children from {}", root, children.len(), file.display());
            root.assign_children(expander.expand(children)?);
            roots.push(root);
        }

        let forest = OidForest::new(roots);
        info!(
            "loaded {} trees, {} nodes",
            forest.len(),
            forest.node_count()
        );
        Ok(forest)
    }
}
