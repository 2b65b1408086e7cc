// FILE: src/core/id_map.rs

use super::properties::Identifier;
use crate::error::{Result, SpecError};
use std::collections::HashMap;

/// Bidirectional mapping between names and compact identifiers.
///
/// Identifiers index `names` directly; `None` marks a slot no name is bound to.
/// The map is append-only: once a name is bound it keeps its identifier for the
/// lifetime of the map.
#[derive(Debug, Clone)]
pub struct IdNameMap<Id: Identifier> {
    names: Vec<Option<String>>,
    ids: HashMap<String, Id>,
}

impl<Id: Identifier> IdNameMap<Id> {
    pub fn new(reserve: usize) -> Self {
        let mut map = Self {
            names: Vec::with_capacity(reserve),
            ids: HashMap::with_capacity(reserve),
        };
        map.names.push(Some(Id::INVALID_NAME.to_string()));
        map.ids.insert(Id::INVALID_NAME.to_string(), Id::INVALID);
        map
    }

    /// Binds an externally chosen identifier to `name`.
    ///
    /// Binding the same pair twice is accepted. Rebinding either side to
    /// something else is an [`SpecError::IdentifierConflict`].
    pub fn add_pair(&mut self, id: Id, name: &str) -> Result<()> {
        let index = id.index();

        if let Some(existing) = self.ids.get(name) {
            if *existing == id {
                return Ok(());
            }
            return Err(SpecError::IdentifierConflict {
                message: format!(
                    "'{}' is already bound to identifier {}, cannot bind it to {}",
                    name,
                    existing.index(),
                    index
                ),
            });
        }

        if let Some(Some(bound)) = self.names.get(index) {
            return Err(SpecError::IdentifierConflict {
                message: format!(
                    "identifier {} is already bound to '{}', cannot bind it to '{}'",
                    index, bound, name
                ),
            });
        }

        if index >= self.names.len() {
            self.names.resize(index + 1, None);
        }
        self.names[index] = Some(name.to_string());
        self.ids.insert(name.to_string(), id);
        Ok(())
    }

    pub fn get_id(&self, name: &str) -> Id {
        self.ids.get(name).copied().unwrap_or(Id::INVALID)
    }

    /// Empty string for identifiers that were never bound.
    pub fn get_name(&self, id: Id) -> &str {
        self.names
            .get(id.index())
            .and_then(Option::as_deref)
            .unwrap_or("")
    }

    /// Returns the identifier for `name`, allocating the next free one if unseen.
    pub fn get_or_create_id(&mut self, name: &str) -> Result<Id> {
        if let Some(id) = self.ids.get(name) {
            return Ok(*id);
        }

        let index = self.names.len();
        let id = Id::from_index(index).ok_or_else(|| SpecError::IdentifierOverflow {
            name: name.to_string(),
            index,
        })?;

        self.names.push(Some(name.to_string()));
        self.ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Pre-assigned identifiers below `count` that have no name bound yet.
    pub fn missing_ids(&self, count: usize) -> Vec<usize> {
        (0..count)
            .filter(|&i| self.names.get(i).map_or(true, Option::is_none))
            .collect()
    }

    /// Number of identifier slots, including the invalid one and any unbound gaps.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.len() <= 1
    }
}

impl<Id: Identifier> Default for IdNameMap<Id> {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::{PropertyId, ShorthandId};

    #[test]
    fn test_get_or_create_is_stable() {
        let mut map: IdNameMap<PropertyId> = IdNameMap::new(4);
        let a = map.get_or_create_id("width").unwrap();
        let b = map.get_or_create_id("height").unwrap();

        assert_ne!(a, b);
        assert_eq!(map.get_or_create_id("width").unwrap(), a);
        assert_eq!(map.get_id("height"), b);
        assert_eq!(map.get_name(a), "width");
    }

    #[test]
    fn test_invalid_is_reserved() {
        let map: IdNameMap<ShorthandId> = IdNameMap::default();
        assert_eq!(map.get_id("invalid_shorthand"), ShorthandId::INVALID);
        assert_eq!(map.get_id("missing"), ShorthandId::INVALID);
        assert!(map.is_empty());
    }

    #[test]
    fn test_add_pair_then_create_skips_bound_slots() {
        let mut map: IdNameMap<PropertyId> = IdNameMap::new(0);
        map.add_pair(PropertyId::MARGIN_LEFT, "margin-left").unwrap();

        assert_eq!(map.get_id("margin-left"), PropertyId::MARGIN_LEFT);
        assert_eq!(map.missing_ids(5), vec![1, 2, 3]);

        let next = map.get_or_create_id("custom").unwrap();
        assert_eq!(next.index(), PropertyId::MARGIN_LEFT.index() + 1);
    }

    #[test]
    fn test_add_pair_conflicts() {
        let mut map: IdNameMap<PropertyId> = IdNameMap::new(0);
        map.add_pair(PropertyId::MARGIN_TOP, "margin-top").unwrap();
        assert!(map.add_pair(PropertyId::MARGIN_TOP, "margin-top").is_ok());
        assert!(map.add_pair(PropertyId::MARGIN_TOP, "padding-top").is_err());
        assert!(map.add_pair(PropertyId::MARGIN_RIGHT, "margin-top").is_err());
        assert_eq!(map.get_name(PropertyId::MARGIN_TOP), "margin-top");
    }

    #[test]
    fn test_empty_name_still_owns_its_identifier() {
        let mut map: IdNameMap<PropertyId> = IdNameMap::new(0);
        let empty = map.get_or_create_id("").unwrap();
        assert_eq!(empty, PropertyId::MARGIN_TOP);

        let result = map.add_pair(empty, "other");
        assert!(matches!(result, Err(SpecError::IdentifierConflict { .. })));
        assert_eq!(map.get_id("other"), PropertyId::INVALID);
        assert_eq!(map.get_id(""), empty);
        assert!(map.missing_ids(2).is_empty());
    }

    #[test]
    fn test_unbound_name_is_empty() {
        let map: IdNameMap<PropertyId> = IdNameMap::new(0);
        assert_eq!(map.get_name(PropertyId::WIDTH), "");
    }
}
