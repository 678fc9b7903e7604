use leptos::prelude::*;
use rusty_money::iso::Currency;

use trolley::{
    cart::Cart,
    pricing::format_price,
    products::Product,
    session::{Command, Session},
};

use crate::dispatch::Dispatcher;

pub(super) mod line_item;
pub(super) mod summary;
pub(super) mod toggle;

use line_item::CartLine;
use summary::CartSummary;

pub(crate) use toggle::CartToggle;

/// Render model for one entry in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartLineItem {
    /// Product held by the entry (used for add actions on this line).
    product: Product,

    /// Quantity held.
    amount: u32,

    /// Formatted unit price.
    unit_price: String,

    /// Formatted `amount × price`.
    line_total: String,
}

/// Render model for the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CartViewModel {
    /// Entries in insertion order.
    lines: Vec<CartLineItem>,

    /// Sum of entry amounts.
    item_count: u64,

    /// Formatted cart total.
    total: String,
}

fn build_cart_view(cart: &Cart, currency: &'static Currency) -> CartViewModel {
    let lines = cart
        .iter()
        .map(|entry| CartLineItem {
            product: entry.product().clone(),
            amount: entry.amount(),
            unit_price: format_price(entry.product().price, currency),
            line_total: format_price(entry.line_total(), currency),
        })
        .collect();

    CartViewModel {
        lines,
        item_count: cart.total_item_count(),
        total: format_price(cart.total_cost(), currency),
    }
}

#[component]
fn CartBody(cart: CartViewModel, dispatcher: Dispatcher) -> impl IntoView {
    let summary = view! { <CartSummary item_count=cart.item_count total=cart.total.clone() /> };

    if cart.lines.is_empty() {
        view! {
            <div>
                <p class="cart-empty">"No items in the cart."</p>
                {summary}
            </div>
        }
        .into_any()
    } else {
        view! {
            <div>
                <ul class="cart-lines">
                    {cart
                        .lines
                        .into_iter()
                        .map(|line| view! { <CartLine line=line dispatcher=dispatcher /> })
                        .collect_view()}
                </ul>
                {summary}
            </div>
        }
        .into_any()
    }
}

#[component]
fn CartPanelHeading(dispatcher: Dispatcher) -> impl IntoView {
    view! {
        <div class="panel-header">
            <h2 class="panel-title">"Your Shopping Cart"</h2>
            <button
                type="button"
                class="icon-button icon-button-secondary"
                aria-label="Close cart"
                on:click=move |_| dispatcher.send(Command::ClosePanel)
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
                    class="lucide lucide-x-icon lucide-x"
                    aria-hidden="true"
                >
                    <path d="M18 6 6 18"></path>
                    <path d="m6 6 12 12"></path>
                </svg>
            </button>
        </div>
    }
}

fn render_cart_panel_content(dispatcher: Dispatcher) -> AnyView {
    let cart = dispatcher
        .session()
        .with(|session| build_cart_view(session.cart(), dispatcher.currency()));

    view! { <CartBody cart=cart dispatcher=dispatcher /> }.into_any()
}

/// Slide-out cart panel.
#[component]
pub(crate) fn CartPanel(
    /// Command router holding the shared session.
    dispatcher: Dispatcher,
) -> impl IntoView {
    let session = dispatcher.session();
    let is_open = move || session.with(Session::panel_open);

    view! {
        <div
            class="cart-backdrop"
            class:cart-backdrop-visible=is_open
            on:click=move |_| dispatcher.send(Command::ClosePanel)
        ></div>
        <aside
            id="cart-panel"
            class="cart-panel"
            class:cart-panel-open=is_open
            aria-label="Shopping cart"
            aria-hidden=move || (!is_open()).to_string()
        >
            <CartPanelHeading dispatcher=dispatcher />
            <div class="panel-card">{move || render_cart_panel_content(dispatcher)}</div>
        </aside>
    }
}
