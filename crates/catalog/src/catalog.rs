//! Fixed product catalog and its filter operation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use shophub_core::{DomainError, DomainResult, ProductId};

use crate::filter::FilterCriteria;
use crate::product::Product;

/// The fixed, ordered set of products for the process lifetime.
///
/// Built once at startup; there is no create/update/delete of entries
/// afterwards. Construction enforces the unique-id invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {} in catalog",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look a product up by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category names in first-occurrence order.
    ///
    /// The storefront renders these as filter chips, prefixed by an
    /// "any category" option it supplies itself.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(c))
            .collect()
    }

    /// Products satisfying all of the criteria's predicates, in catalog order.
    ///
    /// Stable filter: the result is a subsequence of [`Catalog::products`],
    /// never reordered. An empty result is a valid outcome.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        self.products.iter().filter(|p| criteria.matches(p)).collect()
    }

    /// The compiled-in demo catalog (8 products across 4 categories).
    pub fn sample() -> Self {
        let products = vec![
            Product::new(
                ProductId::new(1),
                "Беспроводные наушники",
                5990,
                "Электроника",
                "🎧",
                "Качественный звук и долгая автономность",
            ),
            Product::new(
                ProductId::new(2),
                "Смарт-часы",
                12990,
                "Электроника",
                "⌚",
                "Фитнес-трекер с GPS",
            ),
            Product::new(
                ProductId::new(3),
                "Рюкзак городской",
                3490,
                "Аксессуары",
                "🎒",
                "Вместительный и стильный",
            ),
            Product::new(
                ProductId::new(4),
                "Термокружка",
                890,
                "Посуда",
                "☕",
                "Сохраняет температуру 6 часов",
            ),
            Product::new(
                ProductId::new(5),
                "Портативная колонка",
                4990,
                "Электроника",
                "🔊",
                "Мощный звук 360°",
            ),
            Product::new(
                ProductId::new(6),
                "Фитнес-браслет",
                2490,
                "Электроника",
                "📱",
                "Отслеживание активности 24/7",
            ),
            Product::new(
                ProductId::new(7),
                "Солнцезащитные очки",
                1990,
                "Аксессуары",
                "🕶️",
                "UV400 защита",
            ),
            Product::new(
                ProductId::new(8),
                "Настольная лампа",
                2990,
                "Интерьер",
                "💡",
                "LED с регулировкой яркости",
            ),
        ];

        // Sample ids are distinct by construction.
        Self::new(products).unwrap_or_else(|_| unreachable!("sample catalog has unique ids"))
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = DomainError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}
