//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Filter
/// criteria (date ranges, numeric bounds, month selectors) are value objects:
/// two criteria with the same bounds select the same records.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
