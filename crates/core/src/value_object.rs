//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances holding the same attribute
/// values are interchangeable. They are immutable; "changing" one means
/// building a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemNumber { prefix: String, month: u32, year: i32, sequence: u32 }
///
/// impl ValueObject for ItemNumber {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
