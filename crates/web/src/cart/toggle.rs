use leptos::prelude::*;

use trolley::session::{Command, Session};

use crate::dispatch::Dispatcher;

pub(super) fn badge_label(item_count: u64, panel_open: bool) -> String {
    let action = if panel_open { "Close cart" } else { "Open cart" };

    match item_count {
        0 => format!("{action}, empty"),
        1 => format!("{action}, 1 item"),
        count => format!("{action}, {count} items"),
    }
}

/// Header button that opens and closes the cart panel, badged with the
/// number of items held.
#[component]
pub(crate) fn CartToggle(
    /// Command router holding the shared session.
    dispatcher: Dispatcher,
) -> impl IntoView {
    let session = dispatcher.session();
    let item_count = move || session.with(|session| session.cart().total_item_count());
    let panel_open = move || session.with(Session::panel_open);

    view! {
        <button
            type="button"
            class="cart-toggle"
            aria-controls="cart-panel"
            aria-expanded=move || panel_open().to_string()
            aria-label=move || badge_label(item_count(), panel_open())
            on:click=move |_| dispatcher.send(Command::TogglePanel)
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="lucide lucide-shopping-cart-icon lucide-shopping-cart"
                aria-hidden="true"
            >
                <circle cx="8" cy="21" r="1"></circle>
                <circle cx="19" cy="21" r="1"></circle>
                <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"></path>
            </svg>
            <span
                class="cart-badge"
                class:cart-badge-empty=move || item_count() == 0
                aria-hidden="true"
            >
                {item_count}
            </span>
        </button>
    }
}
