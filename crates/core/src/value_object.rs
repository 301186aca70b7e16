//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Order
/// lines and the tracking records derived from an order are value objects: two
/// lines with the same SKU, price and quantity are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
