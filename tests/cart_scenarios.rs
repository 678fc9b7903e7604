//! Integration tests walking a session through realistic shopping flows.
//!
//! The fixture listing mirrors the shape of the public product endpoint, so
//! these tests exercise decode, cart bookkeeping and display formatting
//! together.

use rust_decimal::Decimal;
use rusty_money::iso;
use testresult::TestResult;

use trolley::prelude::*;

const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

fn ten_dollar_product() -> Product {
    Product {
        id: ProductId(1),
        category: "test".to_string(),
        description: "A product costing ten dollars".to_string(),
        image: String::new(),
        price: Decimal::new(10, 0),
        title: "Ten".to_string(),
    }
}

fn total(cart: &Cart) -> String {
    format_price(cart.total_cost(), iso::USD)
}

#[test]
fn add_add_remove_remove_walks_totals_back_to_zero() {
    let product = ten_dollar_product();

    let cart = Cart::new().add_item(&product);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(product.id), 1);
    assert_eq!(total(&cart), "$10.00");

    let cart = cart.add_item(&product);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(product.id), 2);
    assert_eq!(total(&cart), "$20.00");

    let cart = cart.remove_item(product.id);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(product.id), 1);
    assert_eq!(total(&cart), "$10.00");

    let cart = cart.remove_item(product.id);

    assert!(cart.is_empty());
    assert_eq!(total(&cart), "$0.00");
}

#[test]
fn empty_cart_has_zero_count_and_cost() {
    let cart = Cart::new();

    assert_eq!(cart.total_item_count(), 0);
    assert_eq!(cart.total_cost(), Decimal::ZERO);
    assert_eq!(total(&cart), "$0.00");
}

#[test]
fn shopping_from_fixture_listing() -> TestResult {
    let state = CatalogState::from(parse_products(CATALOG_JSON));
    let products = state.products().ok_or("catalog should be ready")?;

    let backpack = products.first().ok_or("fixture has a first product")?;
    let shirt = products.get(1).ok_or("fixture has a second product")?;

    let session = Session::new()
        .apply(&Command::AddItem(backpack.clone()))
        .apply(&Command::AddItem(shirt.clone()))
        .apply(&Command::AddItem(shirt.clone()))
        .apply(&Command::OpenPanel);

    let cart = session.cart();

    assert!(session.panel_open());
    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_cost(), Decimal::new(15455, 2));
    assert_eq!(total(cart), "$154.55");

    let titles: Vec<&str> = cart
        .iter()
        .map(|entry| entry.product().title.as_str())
        .collect();

    assert_eq!(titles, vec![backpack.title.as_str(), shirt.title.as_str()]);

    Ok(())
}

#[test]
fn cart_stays_usable_after_catalog_failure() {
    let product = ten_dollar_product();

    let before_failure = Session::new().apply(&Command::AddItem(product.clone()));

    let state = CatalogState::from(Err(CatalogError::Status(500)));

    assert!(state.is_failed());
    assert!(state.products().is_none());

    let session = before_failure
        .apply(&Command::AddItem(product.clone()))
        .apply(&Command::TogglePanel)
        .apply(&Command::RemoveItem(product.id));

    assert!(session.panel_open());
    assert_eq!(session.cart().amount_of(product.id), 1);
    assert_eq!(total(session.cart()), "$10.00");
}

#[test]
fn cart_is_usable_while_catalog_is_pending() {
    let state = CatalogState::default();
    let product = ten_dollar_product();

    let session = Session::new()
        .apply(&Command::OpenPanel)
        .apply(&Command::AddItem(product.clone()));

    assert!(state.is_pending());
    assert_eq!(session.cart().total_item_count(), 1);
}

#[test]
fn earlier_cart_values_survive_later_commands() {
    let product = ten_dollar_product();

    let history: Vec<Cart> = [1, 2, 3]
        .iter()
        .scan(Cart::new(), |cart, _| {
            *cart = cart.add_item(&product);
            Some(cart.clone())
        })
        .collect();

    let amounts: Vec<u32> = history
        .iter()
        .map(|cart| cart.amount_of(product.id))
        .collect();

    assert_eq!(amounts, vec![1, 2, 3]);
}
