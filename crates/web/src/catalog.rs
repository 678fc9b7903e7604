use std::time::Duration;

use humanize_duration::{Truncate, prelude::DurationExt};
use leptos::prelude::*;

use trolley::{
    catalog::CatalogState,
    pricing::format_price,
    products::Product,
    session::Command,
};

use crate::dispatch::Dispatcher;

/// Render a load duration at millisecond resolution.
pub(crate) fn format_load_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        return "< 1ms".to_string();
    }

    let whole_millis =
        Duration::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));

    format!("{}", whole_millis.human(Truncate::Nano))
}

pub(crate) fn format_load_note(count: usize, elapsed: Option<Duration>) -> String {
    let noun = if count == 1 { "product" } else { "products" };

    match elapsed {
        Some(duration) => format!("{count} {noun} loaded in {}", format_load_duration(duration)),
        None => format!("{count} {noun} loaded"),
    }
}

#[component]
fn LoadingBar() -> impl IntoView {
    view! {
        <div class="loading-bar" role="progressbar" aria-label="Loading products">
            <div class="loading-bar-fill"></div>
        </div>
    }
}

#[component]
fn ProductCard(product: Product, dispatcher: Dispatcher) -> impl IntoView {
    let price = format_price(product.price, dispatcher.currency());
    let add_button_label = format!("Add {} ({price}) to cart", product.title);
    let alt_text = product.title.clone();
    let title = product.title.clone();
    let description = product.description.clone();
    let image = product.image.clone();

    view! {
        <li class="product-card">
            <img class="product-image" src=image alt=alt_text />
            <div class="product-body">
                <h3 class="product-title">{title}</h3>
                <p class="product-description">{description}</p>
                <p class="product-price">{price}</p>
            </div>
            <button
                type="button"
                class="product-add-button"
                aria-label=add_button_label
                on:click=move |_| dispatcher.send(Command::AddItem(product.clone()))
            >
                "Add to cart"
            </button>
        </li>
    }
}

#[component]
fn ProductGrid(products: Vec<Product>, dispatcher: Dispatcher) -> impl IntoView {
    view! {
        <ul class="product-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product dispatcher=dispatcher /> })
                .collect_view()}
        </ul>
    }
}

/// Catalog area: progress bar, failure notice or product grid.
#[component]
pub(crate) fn CatalogView(
    /// Loader state to render.
    state: CatalogState,
    /// How long the catalog read took, once it resolved.
    elapsed: Option<Duration>,
    /// Command router for add-to-cart clicks.
    dispatcher: Dispatcher,
) -> impl IntoView {
    match state {
        CatalogState::Pending => view! { <LoadingBar /> }.into_any(),
        CatalogState::Failed(_) => view! {
            <div class="error-panel" role="alert">
                <p class="error-text">"Something went wrong"</p>
            </div>
        }
        .into_any(),
        CatalogState::Ready(products) => {
            let note = format_load_note(products.len(), elapsed);

            view! {
                <section class="catalog">
                    <ProductGrid products=products.to_vec() dispatcher=dispatcher />
                    <p class="panel-meta">{note}</p>
                </section>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_load_duration_sub_millisecond() {
        let result = format_load_duration(Duration::from_nanos(999_999));

        assert_eq!(result, "< 1ms");
    }

    #[test]
    fn test_format_load_duration_one_millisecond() {
        let result = format_load_duration(Duration::from_millis(1));

        assert_eq!(result, "1ms");
    }

    #[test]
    fn test_format_load_duration_drops_sub_millisecond_part() {
        let result = format_load_duration(Duration::from_micros(85_400));

        assert_eq!(result, "85ms");
    }

    #[test]
    fn test_format_load_note_plural_with_duration() {
        let result = format_load_note(20, Some(Duration::from_millis(1)));

        assert_eq!(result, "20 products loaded in 1ms");
    }

    #[test]
    fn test_format_load_note_singular_without_duration() {
        let result = format_load_note(1, None);

        assert_eq!(result, "1 product loaded");
    }
}
