//! Entity trait: identity + continuity across the catalog lifetime.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Linear lookup of an entity by identifier.
///
/// Catalog collections are small and stored in insertion order, so a scan is
/// all the indexing they need.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Thing {
        id: u32,
        label: &'static str,
    }

    impl Entity for Thing {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let items = [
            Thing { id: 1, label: "a" },
            Thing { id: 2, label: "b" },
        ];

        assert_eq!(find_by_id(&items, &2).map(|t| t.label), Some("b"));
        assert!(find_by_id(&items, &3).is_none());
    }
}
