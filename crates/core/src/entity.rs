//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products, categories, reviews and orders are entities: two snapshots with the
/// same id describe the same document, whatever their field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both values refer to the same document.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
