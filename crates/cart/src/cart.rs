use serde::{Deserialize, Serialize};

use shophub_catalog::Product;
use shophub_core::{ProductId, ValueObject};

/// Cart line: a product plus the selected quantity.
///
/// Invariant: `quantity >= 1` while the item is in a cart. A quantity of
/// zero never exists as a line; [`Cart::update_quantity`] turns it into a
/// removal instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// `price * quantity` for this line, widened so large carts cannot
    /// overflow the item types.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Cart totals: item count and monetary sum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    pub total_items: u64,
    pub total_price: u64,
}

impl ValueObject for CartTotals {}

/// The session cart: an ordered collection of lines, at most one per
/// product id.
///
/// A pure value. Operations never mutate in place; each returns the next
/// cart value and the caller replaces the old one. Created empty at session
/// start and discarded at session end (never persisted).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct product lines (not summed quantities).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|item| item.product.id == product_id)
    }

    /// Upsert keyed by product id: an existing line gains quantity 1 in
    /// place, otherwise a new line with quantity 1 is appended last.
    ///
    /// Adds exactly 1 per call; arbitrary adjustments go through
    /// [`Cart::update_quantity`].
    #[must_use]
    pub fn add(&self, product: &Product) -> Cart {
        if self.contains(product.id) {
            let items = self
                .items
                .iter()
                .map(|item| {
                    if item.product.id == product.id {
                        CartItem {
                            product: item.product.clone(),
                            quantity: item.quantity.saturating_add(1),
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect();
            Cart { items }
        } else {
            let mut items = self.items.clone();
            items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
            Cart { items }
        }
    }

    /// Replace the matching line's quantity, preserving order.
    ///
    /// Quantity 0 behaves exactly like [`Cart::remove`]. An unknown id is a
    /// no-op, not an error.
    #[must_use]
    pub fn update_quantity(&self, product_id: ProductId, quantity: u32) -> Cart {
        if quantity == 0 {
            return self.remove(product_id);
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.product.id == product_id {
                    CartItem {
                        product: item.product.clone(),
                        quantity,
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Exclude the matching line, preserving the order of the rest.
    ///
    /// An unknown id is a no-op; removal is idempotent.
    #[must_use]
    pub fn remove(&self, product_id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|item| item.product.id != product_id)
            .cloned()
            .collect();
        Cart { items }
    }

    /// Summed quantities and `price * quantity` across all lines.
    ///
    /// Both totals are 0 for an empty cart.
    pub fn totals(&self) -> CartTotals {
        self.items.iter().fold(CartTotals::default(), |acc, item| {
            CartTotals {
                total_items: acc.total_items + u64::from(item.quantity),
                total_price: acc.total_price.saturating_add(item.line_total()),
            }
        })
    }
}
