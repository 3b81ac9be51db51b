//! Catalog domain module.
//!
//! This crate contains the fixed product catalog and its filtering rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The catalog is supplied once at startup and never mutated; the
//! only operation over it is a stable, conjunctive filter.

pub mod catalog;
pub mod filter;
pub mod product;

pub use catalog::Catalog;
pub use filter::{CategoryFilter, FilterCriteria, PriceRange};
pub use product::Product;
