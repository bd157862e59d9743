//! Helpers shared by unit and integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install the global tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to debug output for this crate.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oidtree=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Write `content` to `base/relative`, creating parent directories.
pub fn write_file(base: &Path, relative: &str, content: &str) -> PathBuf {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(&path, content).expect("write fixture file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
        init_test_setup();
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = write_file(temp.path(), "conf/codes/codes_x.xml", "<codes/>");
        assert_eq!(path, temp.path().join("conf/codes/codes_x.xml"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<codes/>");
    }
}
