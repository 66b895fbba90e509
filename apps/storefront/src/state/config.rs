//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BIZIDEAS_*`)
//! 2. `catalog.json` in the platform config directory
//! 3. Defaults (this file, built-in seed catalog)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use bizideas_core::money::GROUP_SEPARATOR;
use bizideas_core::{Catalog, CoreError, Money};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// File name looked up in the config directory when no path is set.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (header logo)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Thousands separator used when printing prices
    pub group_separator: char,

    /// Catalog JSON file; `None` means the built-in seed catalog
    pub catalog_path: Option<PathBuf>,
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not read catalog file {path}: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog file {path} is invalid: {source}")]
    CatalogInvalid {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
}

impl Default for ConfigState {
    /// Returns default configuration: "BizIdeas", roubles, built-in catalog.
    fn default() -> Self {
        ConfigState {
            store_name: "BizIdeas".to_string(),
            currency_symbol: "₽".to_string(),
            group_separator: GROUP_SEPARATOR,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BIZIDEAS_STORE_NAME`: Override store name
    /// - `BIZIDEAS_CURRENCY_SYMBOL`: Override currency symbol (non-empty)
    /// - `BIZIDEAS_CATALOG_PATH`: Catalog JSON file to load instead of the seed
    ///
    /// Without `BIZIDEAS_CATALOG_PATH`, `catalog.json` in the user config
    /// directory is used when it exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = |key: &str| std::env::var(key).ok();
        let default_catalog = default_catalog_path().filter(|p| p.is_file());
        Self::from_vars(vars, default_catalog)
    }

    /// Builds configuration from a variable lookup, so tests don't touch
    /// the process environment.
    pub fn from_vars<F>(vars: F, default_catalog: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = vars("BIZIDEAS_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = vars("BIZIDEAS_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "BIZIDEAS_CURRENCY_SYMBOL".to_string(),
                ));
            }
            config.currency_symbol = symbol;
        }

        config.catalog_path = match vars("BIZIDEAS_CATALOG_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("BIZIDEAS_CATALOG_PATH".to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => default_catalog,
        };

        Ok(config)
    }

    /// Loads the catalog: the configured file, or the built-in seed.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => {
                debug!("Using built-in seed catalog");
                Ok(Catalog::seed())
            }
        }
    }

    /// Formats a price for display, e.g. `15 000 ₽`.
    pub fn format_price(&self, price: Money) -> String {
        format!(
            "{} {}",
            price.format_grouped(self.group_separator),
            self.currency_symbol
        )
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::from_json(&json).map_err(|source| ConfigError::CatalogInvalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), items = catalog.len(), "Catalog loaded from file");
    Ok(catalog)
}

/// Platform config location of `catalog.json`.
///
/// - **Linux**: `~/.config/bizideas-storefront/catalog.json`
/// - **macOS**: `~/Library/Application Support/com.bizideas.storefront/catalog.json`
/// - **Windows**: `%APPDATA%\bizideas\storefront\config\catalog.json`
pub fn default_catalog_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "bizideas", "storefront")
        .map(|dirs| dirs.config_dir().join(CATALOG_FILE_NAME))
}
