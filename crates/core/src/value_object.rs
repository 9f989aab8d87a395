//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attribute values are the same value. Entities, by contrast,
/// are identified by their id regardless of attribute values.
///
/// To "modify" a value object, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
