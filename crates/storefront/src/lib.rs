//! `shophub-storefront`
//!
//! **Responsibility:** session layer between a presentation surface and the
//! pure catalog/cart engine.
//!
//! This crate provides:
//! - `Session`: owns the catalog, the current cart value and the current
//!   filter criteria
//! - Value substitution: every cart operation replaces the old cart with the
//!   new one returned by the engine
//! - `tracing` events on each state change (the engine itself stays silent)
//!
//! The storefront is a **thin shell** around the engine; rendering, routing
//! and formatting stay with the caller.

pub mod session;

pub use session::{Session, SessionSummary};
