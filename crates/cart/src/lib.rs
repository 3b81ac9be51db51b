//! Shopping cart domain module.
//!
//! This crate contains the session cart and its transformations, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! cart is a plain value: every operation takes the current cart and returns
//! a new one, and the caller substitutes it as the single source of truth.

pub mod cart;

pub use cart::{Cart, CartItem, CartTotals};
