use leptos::prelude::*;

pub(super) fn format_item_count(item_count: u64) -> String {
    let item_label = if item_count == 1 { "item" } else { "items" };

    format!("{item_count} {item_label}")
}

#[component]
pub(super) fn CartSummary(item_count: u64, total: String) -> impl IntoView {
    view! {
        <div class="cart-summary">
            <p class="cart-summary-row">
                <span>"Items"</span>
                <span>{format_item_count(item_count)}</span>
            </p>
            <p class="cart-total-row">
                <span>"Total cost:"</span>
                <span>{total}</span>
            </p>
        </div>
    }
}
