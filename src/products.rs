//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Product identifier as issued by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
///
/// Mirrors one element of the catalog listing. Fields the storefront does not
/// use (ratings and the like) are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: ProductId,

    /// Product category
    pub category: String,

    /// Long-form description
    pub description: String,

    /// Image URL
    pub image: String,

    /// Unit price, kept at the precision the catalog sent
    pub price: Decimal,

    /// Display title
    pub title: String,
}
