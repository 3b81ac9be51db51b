//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new value with the new attributes; this keeps them safe to share
/// and gives them primitive-like copy/compare semantics.
///
/// Example:
/// - `PriceRange { min: 0, max: 1000 }` is a value object
/// - `Product { id: ProductId(4), name: "..." }` is an entity
///
/// The trait requires:
/// - **Clone**: value objects are values, not references
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
