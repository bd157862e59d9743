//! I/O boundary traits for testability
//!
//! The loader only ever lists directories and reads whole files; both go
//! through [`FileSystem`] so tests can inject failures.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir` (no recursion), sorted by file name.
    ///
    /// Entries that vanish or point nowhere (dangling symlinks) are skipped.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_not_found(&e) => {
                    debug!("list: skipping unresolvable entry: {}", e);
                    continue;
                }
                Err(e) => return Err(io::Error::from(e)),
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn is_not_found(e: &walkdir::Error) -> bool {
    e.depth() > 0
        && e
            .io_error()
            .is_some_and(|io| io.kind() == io::ErrorKind::NotFound)
}
