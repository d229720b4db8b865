//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `OrderLine { order_reference: "order-1", sku: "LAMP", quantity: 2 }` is a value object
/// - `Batch { reference: "batch-001", .. }` is an entity
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: Value objects are values, not references
/// - **Eq + Hash**: Equal values must collapse to one member of a set
/// - **Debug**: Value objects should be debuggable (helpful for logging, testing)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Demand {
///     sku: Sku,
///     quantity: u64,
/// }
///
/// impl ValueObject for Demand {}
///
/// let mut set = HashSet::new();
/// set.insert(Demand { sku: Sku::new("LAMP"), quantity: 2 });
/// set.insert(Demand { sku: Sku::new("LAMP"), quantity: 2 });
/// assert_eq!(set.len(), 1);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
