//! Storefront configuration

use std::str::FromStr;

use rusty_money::iso::{self, Currency};
use thiserror::Error;
use tracing::Level;

/// Product listing fetched when no other endpoint is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Errors that can occur while building a [`Config`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The log level name is not one of trace, debug, info, warn or error.
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// Storefront configuration
///
/// The storefront has no runtime configuration surface; the hosting app
/// builds one of these at mount time, usually from [`Config::default`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint returning the product listing as a JSON array
    pub catalog_url: String,

    /// Currency catalog prices are expressed in
    pub currency: &'static Currency,

    /// Most verbose level the log subscriber emits
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            currency: iso::USD,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Replace the catalog endpoint.
    #[must_use]
    pub fn with_catalog_url(mut self, catalog_url: impl Into<String>) -> Self {
        self.catalog_url = catalog_url.into();
        self
    }

    /// Replace the log level.
    #[must_use]
    pub fn with_log_level(mut self, log_level: Level) -> Self {
        self.log_level = log_level;
        self
    }

    /// Replace the log level from its name, ignoring case and surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLogLevel`] if `name` is not a level.
    pub fn with_log_level_name(self, name: &str) -> Result<Self, ConfigError> {
        let log_level = Level::from_str(name.trim())
            .map_err(|_parse_error| ConfigError::UnknownLogLevel(name.to_string()))?;

        Ok(self.with_log_level(log_level))
    }
}
