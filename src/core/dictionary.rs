// FILE: src/core/dictionary.rs

use super::properties::PropertyId;
use super::types::Property;
use std::collections::HashMap;

/// Resolved values keyed by property identifier.
///
/// A later `set_property` for the same identifier replaces the earlier value.
#[derive(Debug, Clone, Default)]
pub struct PropertyDictionary {
    properties: HashMap<PropertyId, Property>,
}

impl PropertyDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_property(&mut self, id: PropertyId, property: Property) {
        self.properties.insert(id, property);
    }

    pub fn get_property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.get(&id)
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.properties.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Property)> {
        let mut entries: Vec<_> = self.properties.iter().map(|(id, p)| (*id, p)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }
}
