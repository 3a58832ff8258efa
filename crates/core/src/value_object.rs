//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects (slugs, image references, filter selections, shipping details)
/// have no identity of their own and are compared by their attribute values. They
/// are immutable: to "modify" one, build a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
