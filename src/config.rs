//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/oidtree/oidtree.toml`
//! 3. Local config: `<base_dir>/.oidtree.toml`
//! 4. Environment variables: `OIDTREE_*` prefix
//! 5. Base directory given on the command line

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Where definition files live below the base directory and how they are named.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory holding top-level definition files
    pub conf_dir: String,
    /// Directory below `conf_dir` holding code tables
    pub codes_dir: String,
    /// Substring a top-level definition file name must contain
    pub oid_file_marker: String,
    /// Substring a code-table file name must contain
    pub codes_file_marker: String,
    /// File stem that must be present for any definitions to load
    pub main_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            conf_dir: "conf".into(),
            codes_dir: "codes".into(),
            oid_file_marker: "oids_".into(),
            codes_file_marker: "codes_".into(),
            main_file: "oids_common".into(),
        }
    }
}

impl LayoutConfig {
    /// Directory of top-level definition files for `base_dir`.
    pub fn conf_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.conf_dir)
    }

    /// Directory of code-table files for `base_dir`.
    pub fn codes_path(&self, base_dir: &Path) -> PathBuf {
        self.conf_path(base_dir).join(&self.codes_dir)
    }

    fn merge(&self, overlay: &RawLayoutConfig) -> Self {
        let pick = |o: &Option<String>, base: &String| o.clone().unwrap_or_else(|| base.clone());
        Self {
            conf_dir: pick(&overlay.conf_dir, &self.conf_dir),
            codes_dir: pick(&overlay.codes_dir, &self.codes_dir),
            oid_file_marker: pick(&overlay.oid_file_marker, &self.oid_file_marker),
            codes_file_marker: pick(&overlay.codes_file_marker, &self.codes_file_marker),
            main_file: pick(&overlay.main_file, &self.main_file),
        }
    }
}

/// Raw layout for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLayoutConfig {
    pub conf_dir: Option<String>,
    pub codes_dir: Option<String>,
    pub oid_file_marker: Option<String>,
    pub codes_file_marker: Option<String>,
    pub main_file: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_dir: Option<PathBuf>,
    pub layout: RawLayoutConfig,
}

/// Unified configuration for oidtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory containing `conf/` (default: current directory)
    pub base_dir: PathBuf,
    /// Definition file layout and naming
    pub layout: LayoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            layout: LayoutConfig::default(),
        }
    }
}

/// Get the XDG config directory for oidtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "oidtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("oidtree.toml"))
}

/// Get the path to the local config file of a base directory.
pub fn local_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(".oidtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; the input is returned unchanged on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in `base_dir`.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.base_dir.to_string_lossy().as_ref());
        self.base_dir = PathBuf::from(expanded);
    }

    /// Merge overlay config onto self: overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            base_dir: overlay
                .base_dir
                .clone()
                .unwrap_or_else(|| self.base_dir.clone()),
            layout: self.layout.merge(&overlay.layout),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `base_dir` - Base directory from the command line; also selects the
    ///   local config file. Falls back to the configured `base_dir`.
    pub fn load(base_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config of the base directory being loaded
        let local_base = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from(expand_env_vars(&current.base_dir.to_string_lossy())),
        };
        let local_path = local_config_path(&local_base);
        if local_path.exists() {
            let raw = load_raw_settings(&local_path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        // 5. Command line
        if let Some(dir) = base_dir {
            current.base_dir = dir.to_path_buf();
        }

        current.expand_paths();
        Ok(current)
    }

    /// Apply OIDTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("OIDTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("base_dir") {
            settings.base_dir = PathBuf::from(val);
        }
        let layout = &mut settings.layout;
        if let Ok(val) = config.get_string("layout.conf_dir") {
            layout.conf_dir = val;
        }
        if let Ok(val) = config.get_string("layout.codes_dir") {
            layout.codes_dir = val;
        }
        if let Ok(val) = config.get_string("layout.oid_file_marker") {
            layout.oid_file_marker = val;
        }
        if let Ok(val) = config.get_string("layout.codes_file_marker") {
            layout.codes_file_marker = val;
        }
        if let Ok(val) = config.get_string("layout.main_file") {
            layout.main_file = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# oidtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/oidtree/oidtree.toml
#   Local:  <base_dir>/.oidtree.toml
#   Env:    OIDTREE_* environment variables, e.g. OIDTREE_LAYOUT__CONF_DIR=conf

# Directory containing the conf/ tree (default: current directory)
# base_dir = "~/snmp"

[layout]
# Top-level definition files: <base_dir>/<conf_dir>/*<oid_file_marker>*.xml
# conf_dir = "conf"
# oid_file_marker = "oids_"

# Code tables: <base_dir>/<conf_dir>/<codes_dir>/*<codes_file_marker>*.xml
# codes_dir = "codes"
# codes_file_marker = "codes_"

# Nothing is loaded unless <main_file>.xml is among the definition files
# main_file = "oids_common"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
