//! Demo storefront session over the compiled-in sample catalog.
//!
//! Runs a short scripted session (filter, search, cart edits) and prints the
//! resulting state as JSON. Logging is configurable via `RUST_LOG`.

use anyhow::Context;

use shophub_catalog::{Catalog, CategoryFilter, PriceRange};
use shophub_core::ProductId;
use shophub_storefront::Session;

fn main() -> anyhow::Result<()> {
    shophub_observability::init();

    let catalog = Catalog::sample();
    tracing::info!(products = catalog.len(), "catalog loaded");

    let mut session = Session::new(catalog);

    // Browse electronics under 6000 and search for headphones.
    session.set_category(CategoryFilter::only("Электроника"));
    session.set_price_range(PriceRange::new(0, 6000));
    session.set_search("наушники");
    for product in session.visible_products() {
        tracing::info!(%product.id, name = %product.name, price = product.price, "visible");
    }

    // Fill the cart: headphones twice, a mug, then drop the mug again.
    session.add_to_cart(ProductId::new(1));
    session.add_to_cart(ProductId::new(1));
    session.add_to_cart(ProductId::new(4));
    session.increment(ProductId::new(4));
    session.remove_from_cart(ProductId::new(4));

    let summary = session.summary();
    let json = serde_json::to_string_pretty(&summary)
        .context("serializing session summary")?;
    println!("{json}");

    Ok(())
}
