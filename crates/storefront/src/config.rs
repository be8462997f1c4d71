//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_CATALOG_URL` - Base URL of the catalog read endpoint
//!   (default: `https://lawebdeperez.es/apidog`)
//!
//! There is no other configuration surface: no CLI flags, no config files.

use thiserror::Error;
use url::Url;

/// Default catalog endpoint used when `STOREFRONT_CATALOG_URL` is unset.
const DEFAULT_CATALOG_URL: &str = "https://lawebdeperez.es/apidog";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog endpoint configuration
    pub catalog: CatalogConfig,
}

/// Catalog read-endpoint configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog endpoint, without a trailing slash
    pub base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog = CatalogConfig::from_env()?;

        Ok(Self { catalog })
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("STOREFRONT_CATALOG_URL", DEFAULT_CATALOG_URL);
        Self::from_base_url("STOREFRONT_CATALOG_URL", &base_url)
    }

    /// Validate and normalize a base URL into a `CatalogConfig`.
    ///
    /// Trailing slashes are trimmed so per-book URLs can be joined with a
    /// plain `/`.
    fn from_base_url(var_name: &str, base_url: &str) -> Result<Self, ConfigError> {
        Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
