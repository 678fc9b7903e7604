//! Cart
//!
//! A cart is an ordered list of entries, one per product. Every transition
//! returns a new cart and leaves the receiver untouched, so callers can keep
//! earlier values around for comparison or undo.

use rust_decimal::Decimal;

use crate::products::{Product, ProductId};

/// A product held in the cart together with its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    product: Product,
    amount: u32,
}

impl CartEntry {
    fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    fn with_amount(&self, amount: u32) -> Self {
        Self {
            product: self.product.clone(),
            amount,
        }
    }

    /// The product this entry holds.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Identifier of the held product.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Quantity held, always at least one.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// `amount × price` at full precision.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.amount)
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// An existing entry for the same id is incremented in place; otherwise a
    /// new entry with amount 1 is appended.
    #[must_use]
    pub fn add_item(&self, product: &Product) -> Self {
        if self.contains(product.id) {
            let entries = self
                .entries
                .iter()
                .map(|entry| {
                    if entry.id() == product.id {
                        entry.with_amount(entry.amount.saturating_add(1))
                    } else {
                        entry.clone()
                    }
                })
                .collect();

            return Self { entries };
        }

        let mut entries = self.entries.clone();
        entries.push(CartEntry::new(product.clone()));

        Self { entries }
    }

    /// Remove one unit of the product with `id`.
    ///
    /// An entry at amount 1 is dropped. Unknown ids leave the cart unchanged.
    #[must_use]
    pub fn remove_item(&self, id: ProductId) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                if entry.id() != id {
                    return Some(entry.clone());
                }

                (entry.amount > 1).then(|| entry.with_amount(entry.amount - 1))
            })
            .collect();

        Self { entries }
    }

    /// Sum of all entry amounts.
    pub fn total_item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.amount))
            .sum()
    }

    /// Sum of all line totals, unrounded.
    pub fn total_cost(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Look up the entry for `id`.
    pub fn entry(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Amount held for `id`, zero when absent.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.entry(id).map_or(0, CartEntry::amount)
    }

    /// Check whether the cart holds `id`.
    pub fn contains(&self, id: ProductId) -> bool {
        self.entry(id).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
