//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A car is the canonical entity in this domain: its reservation set changes
/// over time, but it stays the same car.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
