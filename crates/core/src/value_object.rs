//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter, only the values: an aggregated
/// stock reading `{ total_quantity: 70.0, min_threshold: 20.0 }` is the same
/// reading wherever it was computed, while a `Material` with an id is not.
///
/// To "modify" a value object, create a new one with the new values. Derived
/// readings in this system (aggregates, alert levels) are recomputed on every
/// fetch and never written back, so value semantics fit them exactly.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
