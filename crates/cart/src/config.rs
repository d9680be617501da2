//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_DIR` - Directory for the file storage backend (default: `.album-viewer`)
//! - `CART_STORAGE_KEY` - Storage key the cart is saved under (default: `album-viewer-cart`)
//! - `CART_SAVE_DEBOUNCE_MS` - Quiet period before a save, in milliseconds (default: 500)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::scheduler::DEFAULT_QUIET_PERIOD;
use crate::storage::validate_key;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "album-viewer-cart";

/// Storage directory used when none is configured.
pub const DEFAULT_STORAGE_DIR: &str = ".album-viewer";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory used by the file storage backend
    pub storage_dir: PathBuf,
    /// Key the serialized cart is stored under
    pub storage_key: String,
    /// Quiet period between the last mutation and the write
    pub save_debounce: Duration,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            save_debounce: DEFAULT_QUIET_PERIOD,
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_dir = lookup("CART_STORAGE_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from);

        let storage_key =
            lookup("CART_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        validate_key(&storage_key).map_err(|e| {
            ConfigError::InvalidEnvVar("CART_STORAGE_KEY".to_string(), e.to_string())
        })?;

        let save_debounce = match lookup("CART_SAVE_DEBOUNCE_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("CART_SAVE_DEBOUNCE_MS".to_string(), e.to_string())
                })?,
            None => DEFAULT_QUIET_PERIOD,
        };

        Ok(Self {
            storage_dir,
            storage_key,
            save_debounce,
        })
    }
}
