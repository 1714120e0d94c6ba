//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and defined entirely by their attribute
/// values; to "modify" one, construct a new value. Identity never enters the
/// comparison — `Money { 100, "USD" }` equals any other `Money { 100, "USD" }`,
/// while two `Offer`s are only the same offer if their ids match.
///
/// The supertraits encode the contract: cheap to copy around (`Clone`),
/// compared by value (`PartialEq`), debuggable (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
