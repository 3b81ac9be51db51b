//! Storefront session: catalog + current cart + current filter criteria.

use serde::Serialize;

use shophub_cart::{Cart, CartTotals};
use shophub_catalog::{Catalog, CategoryFilter, FilterCriteria, PriceRange, Product};
use shophub_core::ProductId;

/// One user session over the storefront.
///
/// The session holds the single source of truth for the cart and the filter
/// criteria. Cart changes go through the pure engine operations; the session
/// substitutes the returned cart value for the old one and emits a tracing
/// event, which is where a UI would hook its re-render.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    criteria: FilterCriteria,
}

/// Serializable snapshot of the session state (cart lines + totals +
/// currently visible product ids).
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub visible_products: Vec<u32>,
    pub cart_lines: Vec<(u32, u32)>,
    pub totals: CartTotals,
}

impl Session {
    /// Start a session: empty cart, criteria that match the whole catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::empty(),
            criteria: FilterCriteria::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Category chips for the UI, in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        self.catalog.categories()
    }

    /// The product subset matching the current criteria, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.criteria)
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!(?category, "filter category changed");
        self.criteria.category = category;
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        tracing::debug!(min = range.min, max = range.max, "filter price range changed");
        self.criteria.price = range;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        tracing::debug!(%query, "search query changed");
        self.criteria.query = query;
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Returns `false` for an id not in the catalog (logged no-op; the UI
    /// only offers products it can see, so this is a caller bug).
    pub fn add_to_cart(&mut self, product_id: ProductId) -> bool {
        let Some(product) = self.catalog.get(product_id) else {
            tracing::warn!(%product_id, "add_to_cart ignored: id not in catalog");
            return false;
        };
        self.cart = self.cart.add(product);
        let totals = self.cart.totals();
        tracing::info!(%product_id, total_items = totals.total_items, "product added to cart");
        true
    }

    /// Set a cart line to an explicit quantity (0 removes the line).
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.cart = self.cart.update_quantity(product_id, quantity);
        tracing::info!(%product_id, quantity, "cart quantity updated");
    }

    /// The UI's "+" button: one more unit of an existing line.
    pub fn increment(&mut self, product_id: ProductId) {
        if let Some(item) = self.cart.get(product_id) {
            let next = item.quantity.saturating_add(1);
            self.update_quantity(product_id, next);
        }
    }

    /// The UI's "−" button: one unit less; at quantity 1 the line is removed.
    pub fn decrement(&mut self, product_id: ProductId) {
        if let Some(item) = self.cart.get(product_id) {
            let next = item.quantity - 1;
            self.update_quantity(product_id, next);
        }
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart = self.cart.remove(product_id);
        tracing::info!(%product_id, "product removed from cart");
    }

    /// Snapshot for logging or a JSON surface.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            visible_products: self
                .visible_products()
                .iter()
                .map(|p| p.id.value())
                .collect(),
            cart_lines: self
                .cart
                .items()
                .iter()
                .map(|item| (item.product_id().value(), item.quantity))
                .collect(),
            totals: self.cart.totals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session::new(Catalog::sample())
    }

    #[test]
    fn new_session_shows_whole_catalog_and_empty_cart() {
        let session = sample_session();
        assert_eq!(session.visible_products().len(), 8);
        assert!(session.cart().is_empty());
        assert_eq!(session.totals(), CartTotals::default());
    }

    #[test]
    fn criteria_changes_narrow_the_visible_subset() {
        let mut session = sample_session();

        session.set_category(CategoryFilter::only("Посуда"));
        session.set_price_range(PriceRange::new(0, 1000));
        let visible = session.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].price, 890);

        session.set_search("наушники");
        // Search AND category now disagree: nothing matches.
        assert!(session.visible_products().is_empty());
    }

    #[test]
    fn filtering_never_touches_the_cart() {
        let mut session = sample_session();
        session.add_to_cart(ProductId::new(1));

        session.set_category(CategoryFilter::only("Посуда"));
        session.set_search("кружка");

        assert_eq!(session.totals().total_items, 1);
    }

    #[test]
    fn add_to_cart_rejects_unknown_id() {
        let mut session = sample_session();
        assert!(!session.add_to_cart(ProductId::new(99)));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn increment_and_decrement_mirror_the_ui_buttons() {
        let mut session = sample_session();
        let id = ProductId::new(4);
        session.add_to_cart(id);

        session.increment(id);
        session.increment(id);
        assert_eq!(session.cart().get(id).map(|i| i.quantity), Some(3));

        session.decrement(id);
        assert_eq!(session.cart().get(id).map(|i| i.quantity), Some(2));

        // Decrementing down to zero removes the line entirely.
        session.decrement(id);
        session.decrement(id);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn increment_of_absent_line_is_a_noop() {
        let mut session = sample_session();
        session.increment(ProductId::new(1));
        session.decrement(ProductId::new(1));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn summary_reflects_cart_and_visible_state() {
        let mut session = sample_session();
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(1));
        session.set_category(CategoryFilter::only("Интерьер"));

        let summary = session.summary();
        assert_eq!(summary.visible_products, vec![8]);
        assert_eq!(summary.cart_lines, vec![(1, 2)]);
        assert_eq!(summary.totals.total_price, 11980);
    }
}
