//! Site configuration loading
//!
//! Resolution order, highest priority first:
//! 1. Command-line argument or its `TODDE_*` environment variable
//! 2. TOML config file
//! 3. Compiled default
//!
//! A missing config file is not an error: a warning is logged and defaults
//! apply. A config file that exists but cannot be parsed is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{Error, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5780";
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "/static/images/vehicle-placeholder.svg";
const APP_DIR: &str = "todde";

/// Contents of `config.toml`; every key optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub bind_addr: Option<String>,
    pub database_path: Option<PathBuf>,
    pub placeholder_image_url: Option<String>,
    pub create_database_if_missing: Option<bool>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub bind_addr: Option<String>,
    pub database_path: Option<PathBuf>,
    pub placeholder_image_url: Option<String>,
    pub create_database_if_missing: Option<bool>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub database_path: PathBuf,
    pub placeholder_image_url: String,
    /// Create and initialize the schema when the database file is absent
    pub create_database_if_missing: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            database_path: default_database_path(),
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            create_database_if_missing: true,
        }
    }
}

impl SiteConfig {
    /// Resolve configuration from overrides, the TOML file and defaults
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let toml_config = match overrides.config_path.clone().or_else(default_config_path) {
            Some(path) if path.exists() => {
                info!("Loading config file: {}", path.display());
                load_toml_config(&path)?
            }
            Some(path) => {
                warn!("Config file not found: {} (using defaults)", path.display());
                TomlConfig::default()
            }
            None => {
                warn!("Could not determine config directory (using defaults)");
                TomlConfig::default()
            }
        };

        Ok(Self::merge(overrides, toml_config))
    }

    /// Layer overrides over file values over defaults
    pub fn merge(overrides: &ConfigOverrides, file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: overrides
                .bind_addr
                .clone()
                .or(file.bind_addr)
                .unwrap_or(defaults.bind_addr),
            database_path: overrides
                .database_path
                .clone()
                .or(file.database_path)
                .unwrap_or(defaults.database_path),
            placeholder_image_url: overrides
                .placeholder_image_url
                .clone()
                .or(file.placeholder_image_url)
                .unwrap_or(defaults.placeholder_image_url),
            create_database_if_missing: overrides
                .create_database_if_missing
                .or(file.create_database_if_missing)
                .unwrap_or(defaults.create_database_if_missing),
        }
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

/// `<config_dir>/todde/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// `<data_local_dir>/todde/todde.db`, or `./todde_data/todde.db` when the
/// platform has no data directory
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("./todde_data"))
        .join("todde.db")
}
