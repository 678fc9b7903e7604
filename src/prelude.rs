//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartEntry},
    catalog::{CatalogClient, CatalogError, CatalogState, parse_products},
    config::{Config, ConfigError},
    pricing::{format_price, round_for_display},
    products::{Product, ProductId},
    session::{Command, Session},
};
