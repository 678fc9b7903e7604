use leptos::prelude::*;

use trolley::{
    products::{Product, ProductId},
    session::Command,
};

use crate::dispatch::Dispatcher;

use super::CartLineItem;

pub(super) fn format_amount(amount: u32) -> String {
    format!("× {amount}")
}

#[component]
fn RemoveLineButton(
    product_id: ProductId,
    title: String,
    unit_price: String,
    dispatcher: Dispatcher,
) -> impl IntoView {
    let remove_button_label = format!("Remove one {title} ({unit_price}) from cart");

    view! {
        <button
            type="button"
            aria-label=remove_button_label
            class="icon-button icon-button-secondary icon-button-compact"
            on:click=move |_| dispatcher.send(Command::RemoveItem(product_id))
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
                class="lucide lucide-minus-icon lucide-minus"
            >
                <path d="M5 12h14"></path>
            </svg>
        </button>
    }
}

#[component]
fn AddLineButton(product: Product, unit_price: String, dispatcher: Dispatcher) -> impl IntoView {
    let add_button_label = format!("Add another {} ({unit_price}) to cart", product.title);

    view! {
        <button
            type="button"
            aria-label=add_button_label
            class="icon-button icon-button-primary icon-button-compact"
            on:click=move |_| dispatcher.send(Command::AddItem(product.clone()))
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
                class="lucide lucide-plus-icon lucide-plus"
            >
                <path d="M5 12h14"></path>
                <path d="M12 5v14"></path>
            </svg>
        </button>
    }
}

#[component]
pub(super) fn CartLine(line: CartLineItem, dispatcher: Dispatcher) -> impl IntoView {
    let CartLineItem {
        product,
        amount,
        unit_price,
        line_total,
    } = line;

    let product_id = product.id;
    let name = product.title.clone();
    let title = product.title.clone();
    let alt_text = product.title.clone();
    let image = product.image.clone();
    let unit_price_text = format!("Price: {unit_price}");
    let line_total_text = format!("Total: {line_total}");
    let remove_unit_price = unit_price.clone();

    view! {
        <li class="cart-line">
            <div class="cart-line-content">
                <div>
                    <p class="cart-line-name">{name}</p>
                    <div class="cart-line-prices">
                        <span class="cart-line-unit-price">{unit_price_text}</span>
                        <span class="cart-line-total">{line_total_text}</span>
                    </div>
                    <div class="cart-line-controls">
                        <RemoveLineButton
                            product_id=product_id
                            title=title
                            unit_price=remove_unit_price
                            dispatcher=dispatcher
                        />
                        <span class="cart-line-amount">{format_amount(amount)}</span>
                        <AddLineButton product=product unit_price=unit_price dispatcher=dispatcher />
                    </div>
                </div>
                <img class="cart-line-image" src=image alt=alt_text />
            </div>
        </li>
    }
}
