//! Product catalog loading
//!
//! The catalog is read once from a remote listing. Consumers observe the
//! outcome through [`CatalogState`], which is `Pending` until the read
//! resolves and then either `Ready` or `Failed`.

use std::sync::Arc;

use reqwest::Client;
use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::Config,
    products::{Product, ProductId},
};

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or its body could not be read.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The listing endpoint answered with a non-success status.
    #[error("catalog request returned status {0}")]
    Status(u16),

    /// The body was not a JSON array of products.
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),

    /// A product carried a price below zero.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),

    /// Two products shared an identifier.
    #[error("product {0} appears more than once in the catalog")]
    DuplicateId(ProductId),
}

/// Decode a catalog listing.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of products, if any
/// product has a negative price, or if two products share an id. There is no
/// partial result: one bad element fails the whole listing.
pub fn parse_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(body)?;

    let mut seen = FxHashSet::default();

    for product in &products {
        if product.price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice(product.id));
        }

        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
    }

    Ok(products)
}

/// HTTP client for the product listing.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    endpoint: String,
    http: Client,
}

impl CatalogClient {
    /// Create a client for the endpoint named in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.catalog_url.clone(),
            http: Client::new(),
        }
    }

    /// Create a client for the endpoint named in `config` using a prepared
    /// HTTP client.
    pub fn with_http_client(config: &Config, http: Client) -> Self {
        Self {
            endpoint: config.catalog_url.clone(),
            http,
        }
    }

    /// Endpoint this client reads from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the full product listing.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// [`parse_products`] rejects.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(endpoint = %self.endpoint, "fetching catalog");

        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let products = parse_products(&body)?;

        info!(count = products.len(), "catalog loaded");

        Ok(products)
    }
}

/// Progress of the catalog read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// No result yet.
    #[default]
    Pending,

    /// The read failed; holds the error description.
    Failed(String),

    /// The read succeeded.
    Ready(Arc<[Product]>),
}

impl CatalogState {
    /// Products, once the catalog is ready.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Ready(products) => Some(products),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Check whether the read is still outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Check whether the read failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Check whether products are available.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl From<Result<Vec<Product>, CatalogError>> for CatalogState {
    fn from(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self::Ready(products.into()),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}
