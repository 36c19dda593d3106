use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::default_maps::DEFAULT_MAPS_BASE_URL;
use crate::error::{Error, Result};

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "NAVROUTER_CONFIG";

const CONFIG_FILENAME: &str = "config.json";

/// Labels and endpoints used when presenting and launching routes.
///
/// Every field is optional in the JSON file; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Title of the app selection sheet.
    pub sheet_title: String,
    /// Label of the cancel option.
    pub cancel_label: String,
    /// Label of the built-in maps option.
    pub default_maps_label: String,
    /// Base URL of the built-in maps application.
    pub default_maps_base_url: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            sheet_title: "Navigate with".to_string(),
            cancel_label: "Cancel".to_string(),
            default_maps_label: "Plans".to_string(),
            default_maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
        }
    }
}

impl RouterConfig {
    /// Read a configuration file. The file must exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Resolve the configuration for a host.
    ///
    /// Resolution order:
    /// 1. Explicit `path` argument when provided (must exist).
    /// 2. `NAVROUTER_CONFIG` environment variable (must exist).
    /// 3. `config.json` in the platform-specific config directory, if present.
    /// 4. Built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(explicit) = path {
            return Self::from_path(explicit);
        }

        if let Some(env_path) = env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&env_path));
        }

        match default_config_path() {
            Some(default) if default.exists() => Self::from_path(&default),
            _ => {
                debug!("no configuration file found; using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Platform-specific location of the configuration file, when resolvable.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "navrouter", "navrouter")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
