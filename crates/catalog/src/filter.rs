//! Filter criteria for the visible product subset.
//!
//! Criteria are ephemeral values recomputed on every change by the caller.
//! All three predicates are combined conjunctively; the engine never
//! validates the range (`min > max` simply matches nothing).

use serde::{Deserialize, Serialize};

use shophub_core::ValueObject;

use crate::product::Product;

/// Category predicate: either "any category" or one exact category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Matches every product (the storefront's "Все" chip).
    Any,
    /// Matches products whose category equals the given name exactly.
    Only(String),
}

impl CategoryFilter {
    pub fn only(name: impl Into<String>) -> Self {
        Self::Only(name.into())
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(name) => name == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::Any
    }
}

impl ValueObject for CategoryFilter {}

/// Inclusive price window `[min, max]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// The full `u64` range; matches every price.
    pub const fn unbounded() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }

    pub const fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ValueObject for PriceRange {}

/// Conjunction of category, price window and free-text search.
///
/// The default value matches the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub price: PriceRange,
    /// Case-insensitive substring match against the product name only.
    /// An empty query matches everything.
    pub query: String,
}

impl FilterCriteria {
    /// True when every predicate accepts the product.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
            && self.price.contains(product.price)
            && matches_query(&self.query, &product.name)
    }
}

impl ValueObject for FilterCriteria {}

/// Unicode-lowercased substring match (covers the Cyrillic sample data).
fn matches_query(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_core::ProductId;

    fn test_product(price: u64, category: &str, name: &str) -> Product {
        Product::new(
            ProductId::new(1),
            name,
            price,
            category,
            "🎧",
            "test product",
        )
    }

    #[test]
    fn any_category_matches_every_product() {
        let product = test_product(100, "Посуда", "Термокружка");
        assert!(CategoryFilter::Any.matches(&product.category));
    }

    #[test]
    fn only_category_requires_exact_match() {
        let filter = CategoryFilter::only("Электроника");
        assert!(filter.matches("Электроника"));
        assert!(!filter.matches("Аксессуары"));
        // No case folding on categories, they come from a fixed set.
        assert!(!filter.matches("электроника"));
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let range = PriceRange::new(890, 2990);
        assert!(range.contains(890));
        assert!(range.contains(2990));
        assert!(!range.contains(889));
        assert!(!range.contains(2991));
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let range = PriceRange::new(1000, 0);
        assert!(!range.contains(0));
        assert!(!range.contains(500));
        assert!(!range.contains(1000));
    }

    #[test]
    fn empty_query_matches_every_name() {
        let product = test_product(100, "Посуда", "Термокружка");
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&product));
    }

    #[test]
    fn query_is_case_insensitive_substring_on_name() {
        let product = test_product(5990, "Электроника", "Беспроводные наушники");
        let criteria = FilterCriteria {
            query: "НАУШНИКИ".to_string(),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&product));

        let miss = FilterCriteria {
            query: "колонка".to_string(),
            ..FilterCriteria::default()
        };
        assert!(!miss.matches(&product));
    }

    #[test]
    fn query_matches_name_only_not_description_or_category() {
        let product = test_product(100, "Посуда", "Термокружка");
        let criteria = FilterCriteria {
            query: "посуда".to_string(),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&product));
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let product = test_product(890, "Посуда", "Термокружка");

        let all_match = FilterCriteria {
            category: CategoryFilter::only("Посуда"),
            price: PriceRange::new(0, 1000),
            query: "термо".to_string(),
        };
        assert!(all_match.matches(&product));

        // One failing predicate rejects the product even if the others pass.
        let wrong_price = FilterCriteria {
            price: PriceRange::new(1000, 2000),
            ..all_match.clone()
        };
        assert!(!wrong_price.matches(&product));
    }
}
