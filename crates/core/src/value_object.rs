//! Value object trait: equality by value, not identity.
//!
//! Quotes, reservations and reservation constraints are value objects: once
//! created they never change, and they flow unchanged between the engine and
//! its callers.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Immutability is what lets the engine hand the same record
/// to several threads without coordination.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Interval {
///     start: DateTime<Utc>,
///     end: DateTime<Utc>,
/// }
///
/// impl ValueObject for Interval {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
