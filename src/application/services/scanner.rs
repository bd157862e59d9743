//! Definition source scanner
//!
//! Locates top-level definition files and code tables below a base directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::LayoutConfig;
use crate::infrastructure::traits::FileSystem;
use crate::util::path::PathExt;

/// Candidate files found by a scan, each list in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionSources {
    /// Top-level definition files (`conf/*oids_*.xml`)
    pub oid_files: Vec<PathBuf>,
    /// Code-table files (`conf/codes/*codes_*.xml`)
    pub code_files: Vec<PathBuf>,
}

impl DefinitionSources {
    /// True if one of the definition files has exactly the given file stem.
    pub fn has_main_file(&self, main_file: &str) -> bool {
        self.oid_files
            .iter()
            .any(|file| file.file_stem_lossy() == main_file)
    }

    pub fn is_empty(&self) -> bool {
        self.oid_files.is_empty() && self.code_files.is_empty()
    }
}

/// Scans the `conf` and `conf/codes` directories of a base directory.
pub struct DefinitionScanner {
    fs: Arc<dyn FileSystem>,
    layout: LayoutConfig,
}

impl DefinitionScanner {
    pub fn new(fs: Arc<dyn FileSystem>, layout: LayoutConfig) -> Self {
        Self { fs, layout }
    }

    /// Collect definition and code-table files below `base_dir`.
    ///
    /// A missing directory contributes an empty list; listing failures of an
    /// existing directory are returned as I/O errors.
    #[instrument(level = "debug", skip(self))]
    pub fn scan(&self, base_dir: &Path) -> ApplicationResult<DefinitionSources> {
        let oid_files = self.scan_dir(
            &self.layout.conf_path(base_dir),
            &self.layout.oid_file_marker,
        )?;
        let code_files = self.scan_dir(
            &self.layout.codes_path(base_dir),
            &self.layout.codes_file_marker,
        )?;
        debug!(
            "scan: {} definition files, {} code tables",
            oid_files.len(),
            code_files.len()
        );

        Ok(DefinitionSources {
            oid_files,
            code_files,
        })
    }

    fn scan_dir(&self, dir: &Path, marker: &str) -> ApplicationResult<Vec<PathBuf>> {
        if !self.fs.is_dir(dir) {
            debug!("scan: no directory {}", dir.display());
            return Ok(Vec::new());
        }

        let files = self
            .fs
            .list_files(dir)
            .with_path_context("list definition directory", dir)?
            .into_iter()
            .filter(|file| file.is_xml_file() && file.file_name_lossy().contains(marker))
            .collect();
        Ok(files)
    }
}
