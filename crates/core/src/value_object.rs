//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values; identity doesn't exist for them. A `Party` block or a `Totals`
/// triple is a value object, an `Invoice` (which has a document id) is not.
///
/// To "modify" a value object, build a new one. The trait bounds keep value
/// objects cloneable, comparable and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
