//! Entity trait: objects identified by id rather than by value.

/// Marker + minimal interface for domain entities.
///
/// Two entities with the same id are the same entity, whatever their
/// attribute values currently are.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
