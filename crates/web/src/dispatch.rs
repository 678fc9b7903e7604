//! Routing of UI intents into the session.

use leptos::prelude::*;
use rusty_money::iso::Currency;

use trolley::{
    pricing::format_price,
    session::{Command, Session},
};

use crate::announce;

/// Applies commands to the shared session and narrates cart changes to the
/// live region.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dispatcher {
    session: RwSignal<Session>,
    live_message: RwSignal<(u64, String)>,
    currency: &'static Currency,
}

impl Dispatcher {
    pub(crate) fn new(
        session: RwSignal<Session>,
        live_message: RwSignal<(u64, String)>,
        currency: &'static Currency,
    ) -> Self {
        Self {
            session,
            live_message,
            currency,
        }
    }

    pub(crate) fn session(&self) -> RwSignal<Session> {
        self.session
    }

    pub(crate) fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Apply `command` and announce the new cart total for cart changes.
    pub(crate) fn send(&self, command: Command) {
        let title = match &command {
            Command::AddItem(product) => Some(product.title.clone()),
            Command::RemoveItem(id) => self.session.with_untracked(|session| {
                session
                    .cart()
                    .entry(*id)
                    .map(|entry| entry.product().title.clone())
            }),
            Command::OpenPanel | Command::ClosePanel | Command::TogglePanel => None,
        };

        self.session
            .update(|session| *session = session.apply(&command));

        let total = self
            .session
            .with_untracked(|session| format_price(session.cart().total_cost(), self.currency));

        if let Some(message) = title.and_then(|title| cart_message(&command, &title, &total)) {
            announce(self.live_message, message);
        }
    }
}

pub(crate) fn cart_message(command: &Command, title: &str, total: &str) -> Option<String> {
    match command {
        Command::AddItem(_) => Some(format!("Added {title} to cart, total {total}.")),
        Command::RemoveItem(_) => Some(format!("Removed {title} from cart, total {total}.")),
        Command::OpenPanel | Command::ClosePanel | Command::TogglePanel => None,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use trolley::products::{Product, ProductId};

    use super::*;

    fn product(id: u64, price_minor: i64) -> Product {
        Product {
            id: ProductId(id),
            category: "test".to_string(),
            description: String::new(),
            image: String::new(),
            price: Decimal::new(price_minor, 2),
            title: format!("Product {id}"),
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            RwSignal::new(Session::new()),
            RwSignal::new((0_u64, String::new())),
            iso::USD,
        )
    }

    #[test]
    fn send_add_updates_session_and_announces_total() {
        let dispatcher = dispatcher();

        dispatcher.send(Command::AddItem(product(1, 1000)));
        dispatcher.send(Command::AddItem(product(1, 1000)));

        let session = dispatcher.session().get_untracked();
        let (id, message) = dispatcher.live_message.get_untracked();

        assert_eq!(session.cart().amount_of(ProductId(1)), 2);
        assert_eq!(id, 2);
        assert_eq!(message, "Added Product 1 to cart, total $20.00.");
    }

    #[test]
    fn send_remove_announces_title_of_removed_entry() {
        let dispatcher = dispatcher();

        dispatcher.send(Command::AddItem(product(3, 550)));
        dispatcher.send(Command::RemoveItem(ProductId(3)));

        let session = dispatcher.session().get_untracked();
        let (_, message) = dispatcher.live_message.get_untracked();

        assert!(session.cart().is_empty());
        assert_eq!(message, "Removed Product 3 from cart, total $0.00.");
    }

    #[test]
    fn send_remove_of_absent_id_is_silent() {
        let dispatcher = dispatcher();

        dispatcher.send(Command::RemoveItem(ProductId(9)));

        let (id, message) = dispatcher.live_message.get_untracked();

        assert_eq!(id, 0);
        assert!(message.is_empty());
        assert!(dispatcher.session().get_untracked().cart().is_empty());
    }

    #[test]
    fn send_toggle_flips_panel_without_announcing() {
        let dispatcher = dispatcher();

        dispatcher.send(Command::TogglePanel);

        assert!(dispatcher.session().get_untracked().panel_open());
        assert_eq!(dispatcher.live_message.get_untracked().0, 0);

        dispatcher.send(Command::ClosePanel);

        assert!(!dispatcher.session().get_untracked().panel_open());
    }

    #[test]
    fn cart_message_ignores_panel_commands() {
        assert_eq!(cart_message(&Command::OpenPanel, "Hat", "$1.00"), None);
    }
}
