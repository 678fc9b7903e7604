//! Session state and commands
//!
//! A [`Session`] is everything the storefront UI mutates: the cart and whether
//! the cart panel is open. User intents arrive as [`Command`]s and are applied
//! one at a time, each producing the next session value.

use tracing::debug;

use crate::{
    cart::Cart,
    products::{Product, ProductId},
};

/// A user intent routed from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one unit of a product to the cart.
    AddItem(Product),

    /// Remove one unit of a product from the cart.
    RemoveItem(ProductId),

    /// Show the cart panel.
    OpenPanel,

    /// Hide the cart panel.
    ClosePanel,

    /// Flip cart panel visibility.
    TogglePanel,
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddItem(_) => "add_item",
            Self::RemoveItem(_) => "remove_item",
            Self::OpenPanel => "open_panel",
            Self::ClosePanel => "close_panel",
            Self::TogglePanel => "toggle_panel",
        }
    }
}

/// Session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    cart: Cart,
    panel_open: bool,
}

impl Session {
    /// Create a session with an empty cart and the panel closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the cart panel is shown.
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Apply `command`, returning the next session.
    #[must_use]
    pub fn apply(&self, command: &Command) -> Self {
        let next = match command {
            Command::AddItem(product) => Self {
                cart: self.cart.add_item(product),
                panel_open: self.panel_open,
            },
            Command::RemoveItem(id) => Self {
                cart: self.cart.remove_item(*id),
                panel_open: self.panel_open,
            },
            Command::OpenPanel => self.with_panel(true),
            Command::ClosePanel => self.with_panel(false),
            Command::TogglePanel => self.with_panel(!self.panel_open),
        };

        debug!(
            command = command.name(),
            entries = next.cart.len(),
            items = next.cart.total_item_count(),
            panel_open = next.panel_open,
            "applied command"
        );

        next
    }

    fn with_panel(&self, panel_open: bool) -> Self {
        Self {
            cart: self.cart.clone(),
            panel_open,
        }
    }
}
