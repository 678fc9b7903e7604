//! Trolley
//!
//! Trolley is the state layer behind a small storefront: a product catalog
//! fetched from a remote listing, an in-memory cart with quantity bookkeeping,
//! and the session commands a UI dispatches against them.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod session;
