//! Property and shorthand registries, and declaration parsing
//!
//! Definitions live in sparse arrays indexed by their identifier. Parsing a
//! declaration tokenizes the value, resolves the name to a property or a
//! shorthand, and writes the validated values into a [`PropertyDictionary`].
//!
//! Shorthand expansion is not atomic: when a later item fails, values already
//! written for earlier items stay in the dictionary.

use crate::core::{Identifier, IdNameMap, Property, PropertyDictionary, PropertyId, ShorthandId};
use crate::definition::{PropertyDefinition, ShorthandDefinition, ShorthandItem, ShorthandType};
use crate::error::{Result, SpecError};
use crate::lexer::parse_property_values;

/// Side index (top, right, bottom, left) to value index, for one to three values.
const BOX_VALUE_INDICES: [[usize; 4]; 3] = [[0, 0, 0, 0], [0, 1, 0, 1], [0, 1, 2, 1]];

fn slot_for<T>(slots: &mut Vec<Option<T>>, index: usize) -> &mut Option<T> {
    if index >= slots.len() {
        slots.resize_with(index * 3 / 2 + 1, || None);
    }
    &mut slots[index]
}

fn is_occupied<T>(slots: &[Option<T>], index: usize) -> bool {
    slots.get(index).map_or(false, Option::is_some)
}

#[derive(Debug, Clone)]
pub struct PropertySpecification {
    properties: Vec<Option<PropertyDefinition>>,
    shorthands: Vec<Option<ShorthandDefinition>>,
    property_map: IdNameMap<PropertyId>,
    shorthand_map: IdNameMap<ShorthandId>,
}

impl PropertySpecification {
    pub fn new(reserve_properties: usize, reserve_shorthands: usize) -> Self {
        let mut properties = Vec::new();
        properties.resize_with(reserve_properties, || None);
        let mut shorthands = Vec::new();
        shorthands.resize_with(reserve_shorthands, || None);

        Self {
            properties,
            shorthands,
            property_map: IdNameMap::new(reserve_properties),
            shorthand_map: IdNameMap::new(reserve_shorthands),
        }
    }

    /// Registers a property under a freshly allocated (or previously seen) identifier.
    pub fn register_property(
        &mut self,
        name: &str,
        default_value: &str,
        inherited: bool,
        forces_layout: bool,
    ) -> Result<&PropertyDefinition> {
        self.register_property_with_id(name, default_value, inherited, forces_layout, PropertyId::INVALID)
    }

    /// Registers a property, binding `id` to `name` unless `id` is invalid.
    ///
    /// A property that is already registered is left untouched and returned as is.
    pub fn register_property_with_id(
        &mut self,
        name: &str,
        default_value: &str,
        inherited: bool,
        forces_layout: bool,
        id: PropertyId,
    ) -> Result<&PropertyDefinition> {
        let (definition, _) = self.insert_property(name, default_value, inherited, forces_layout, id)?;
        Ok(&*definition)
    }

    /// Like `register_property_with_id`, also reporting whether the definition was created.
    ///
    /// Only a freshly created definition may have parsers attached.
    pub(crate) fn insert_property(
        &mut self,
        name: &str,
        default_value: &str,
        inherited: bool,
        forces_layout: bool,
        id: PropertyId,
    ) -> Result<(&mut PropertyDefinition, bool)> {
        let id = if id.is_valid() {
            self.property_map.add_pair(id, name)?;
            id
        } else {
            self.property_map.get_or_create_id(name)?
        };
        let index = id.index();

        let created = !is_occupied(&self.properties, index);
        if created {
            log::debug!("Registered property '{}' as {}", name, id);
        } else {
            log::error!(
                "While registering property '{}': The property is already registered, ignoring.",
                self.property_map.get_name(id)
            );
        }

        let slot = slot_for(&mut self.properties, index);
        let definition = slot.get_or_insert_with(|| {
            PropertyDefinition::new(id, default_value, inherited, forces_layout)
        });
        Ok((definition, created))
    }

    pub fn get_property(&self, id: PropertyId) -> Option<&PropertyDefinition> {
        if !id.is_valid() {
            return None;
        }
        self.properties.get(id.index())?.as_ref()
    }

    pub fn get_property_by_name(&self, name: &str) -> Option<&PropertyDefinition> {
        self.get_property(self.property_map.get_id(name))
    }

    pub fn register_shorthand(
        &mut self,
        name: &str,
        property_names: &str,
        shorthand_type: ShorthandType,
    ) -> Result<()> {
        self.register_shorthand_with_id(name, property_names, shorthand_type, ShorthandId::INVALID)
    }

    /// Registers a shorthand over the whitespace (or comma) separated `property_names`.
    ///
    /// Names resolve to properties first; only a [`ShorthandType::Recursive`]
    /// shorthand may name other shorthands. Nothing is stored unless every name
    /// resolves to a registered definition.
    pub fn register_shorthand_with_id(
        &mut self,
        name: &str,
        property_names: &str,
        shorthand_type: ShorthandType,
        id: ShorthandId,
    ) -> Result<()> {
        let id = if id.is_valid() {
            self.shorthand_map.add_pair(id, name)?;
            id
        } else {
            self.shorthand_map.get_or_create_id(name)?
        };

        let names: Vec<String> = property_names
            .to_lowercase()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            log::error!("Shorthand '{}' was registered without any properties.", name);
            return Err(SpecError::EmptyShorthand {
                shorthand: name.to_string(),
            });
        }

        let mut items = Vec::with_capacity(names.len());
        for item_name in &names {
            let item = self.resolve_item(item_name, shorthand_type);
            if item == ShorthandItem::Invalid {
                log::error!(
                    "Shorthand property '{}' was registered with invalid property '{}'.",
                    self.shorthand_map.get_name(id),
                    item_name
                );
                return Err(SpecError::InvalidShorthandItem {
                    shorthand: name.to_string(),
                    property: item_name.clone(),
                });
            }
            items.push(item);
        }

        let index = id.index();
        if is_occupied(&self.shorthands, index) {
            log::error!(
                "While registering shorthand '{}': The shorthand is already registered, ignoring.",
                self.shorthand_map.get_name(id)
            );
            return Err(SpecError::DuplicateShorthand {
                shorthand: name.to_string(),
            });
        }

        log::debug!("Registered {} shorthand '{}' with {} items", shorthand_type, name, items.len());
        *slot_for(&mut self.shorthands, index) = Some(ShorthandDefinition {
            id,
            items,
            shorthand_type,
        });
        Ok(())
    }

    fn resolve_item(&self, name: &str, shorthand_type: ShorthandType) -> ShorthandItem {
        let property_id = self.property_map.get_id(name);
        if property_id.is_valid() {
            return match self.get_property(property_id) {
                Some(_) => ShorthandItem::Property(property_id),
                None => ShorthandItem::Invalid,
            };
        }

        let shorthand_id = self.shorthand_map.get_id(name);
        if shorthand_id.is_valid()
            && shorthand_type == ShorthandType::Recursive
            && self.get_shorthand(shorthand_id).is_some()
        {
            return ShorthandItem::Shorthand(shorthand_id);
        }

        ShorthandItem::Invalid
    }

    pub fn get_shorthand(&self, id: ShorthandId) -> Option<&ShorthandDefinition> {
        if !id.is_valid() {
            return None;
        }
        self.shorthands.get(id.index())?.as_ref()
    }

    pub fn get_shorthand_by_name(&self, name: &str) -> Option<&ShorthandDefinition> {
        self.get_shorthand(self.shorthand_map.get_id(name))
    }

    pub fn property_id(&self, name: &str) -> PropertyId {
        self.property_map.get_id(name)
    }

    pub fn shorthand_id(&self, name: &str) -> ShorthandId {
        self.shorthand_map.get_id(name)
    }

    pub fn property_name(&self, id: PropertyId) -> &str {
        self.property_map.get_name(id)
    }

    pub fn shorthand_name(&self, id: ShorthandId) -> &str {
        self.shorthand_map.get_name(id)
    }

    pub(crate) fn property_map(&self) -> &IdNameMap<PropertyId> {
        &self.property_map
    }

    pub(crate) fn shorthand_map(&self) -> &IdNameMap<ShorthandId> {
        &self.shorthand_map
    }

    /// Registered property definitions in identifier order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.properties.iter().flatten()
    }

    /// Registered shorthand definitions in identifier order.
    pub fn shorthands(&self) -> impl Iterator<Item = &ShorthandDefinition> {
        self.shorthands.iter().flatten()
    }

    pub fn registered_properties(&self) -> Vec<&str> {
        self.properties().map(|p| self.property_name(p.id())).collect()
    }

    pub fn inherited_properties(&self) -> Vec<&str> {
        self.properties()
            .filter(|p| p.is_inherited())
            .map(|p| self.property_name(p.id()))
            .collect()
    }

    pub fn layout_properties(&self) -> Vec<&str> {
        self.properties()
            .filter(|p| p.forces_layout())
            .map(|p| self.property_name(p.id()))
            .collect()
    }

    pub fn registered_shorthands(&self) -> Vec<&str> {
        self.shorthands().map(|s| self.shorthand_name(s.id())).collect()
    }

    /// Parses `name: value`, trying `name` as a property first and then as a shorthand.
    pub fn parse_declaration(
        &self,
        dictionary: &mut PropertyDictionary,
        name: &str,
        value: &str,
        source_file: &str,
        source_line: usize,
    ) -> Result<()> {
        let property_id = self.property_map.get_id(name);
        if property_id.is_valid() {
            return self.parse_property_declaration(dictionary, property_id, value, source_file, source_line);
        }

        let shorthand_id = self.shorthand_map.get_id(name);
        if shorthand_id.is_valid() {
            return self.parse_shorthand_declaration(dictionary, shorthand_id, value, source_file, source_line);
        }

        Err(SpecError::unknown(name))
    }

    /// Parses a single-property value. Only the first `;`-separated value is used.
    pub fn parse_property_declaration(
        &self,
        dictionary: &mut PropertyDictionary,
        id: PropertyId,
        value: &str,
        source_file: &str,
        source_line: usize,
    ) -> Result<()> {
        let definition = self
            .get_property(id)
            .ok_or_else(|| SpecError::unknown(self.property_name(id)))?;

        let values = parse_property_values(value, false);
        let first = values
            .first()
            .ok_or_else(|| SpecError::empty_value(self.property_name(id), source_file, source_line))?;

        let property = definition.parse_value(first).ok_or_else(|| {
            SpecError::invalid_value(self.property_name(id), first.as_str(), source_file, source_line)
        })?;

        dictionary.set_property(id, property.with_source(source_file, source_line));
        Ok(())
    }

    /// Expands a shorthand value into its underlying properties.
    pub fn parse_shorthand_declaration(
        &self,
        dictionary: &mut PropertyDictionary,
        id: ShorthandId,
        value: &str,
        source_file: &str,
        source_line: usize,
    ) -> Result<()> {
        let values = parse_property_values(value, true);
        if values.is_empty() {
            return Err(SpecError::empty_value(self.shorthand_name(id), source_file, source_line));
        }

        let shorthand = self
            .get_shorthand(id)
            .ok_or_else(|| SpecError::unknown(self.shorthand_name(id)))?;

        let context = Expansion {
            shorthand,
            source_file,
            source_line,
        };

        match shorthand.shorthand_type {
            ShorthandType::Box if values.len() < 4 => self.expand_box(dictionary, &context, &values),
            ShorthandType::Recursive => self.expand_recursive(dictionary, &context, value),
            _ => self.expand_sequence(dictionary, &context, &values),
        }
    }

    fn expand_box(
        &self,
        dictionary: &mut PropertyDictionary,
        context: &Expansion<'_>,
        values: &[String],
    ) -> Result<()> {
        let items = &context.shorthand.items;
        if items.len() != 4 {
            log::error!(
                "Box shorthand '{}' has {} items, expected 4.",
                self.shorthand_name(context.shorthand.id),
                items.len()
            );
            return Err(SpecError::BoxArity {
                shorthand: self.shorthand_name(context.shorthand.id).to_string(),
                count: items.len(),
            });
        }

        let value_indices = BOX_VALUE_INDICES[values.len() - 1];
        for (item, value_index) in items.iter().zip(value_indices) {
            let (property_id, property) = self.parse_item(*item, &values[value_index], context)?;
            dictionary.set_property(property_id, property);
        }

        Ok(())
    }

    fn expand_recursive(
        &self,
        dictionary: &mut PropertyDictionary,
        context: &Expansion<'_>,
        value: &str,
    ) -> Result<()> {
        let mut result = Ok(());

        // Every item is attempted; the first failure is reported.
        for item in &context.shorthand.items {
            let outcome = match *item {
                ShorthandItem::Property(id) => self.parse_property_declaration(
                    dictionary,
                    id,
                    value,
                    context.source_file,
                    context.source_line,
                ),
                ShorthandItem::Shorthand(id) => self.parse_shorthand_declaration(
                    dictionary,
                    id,
                    value,
                    context.source_file,
                    context.source_line,
                ),
                ShorthandItem::Invalid => Err(context.invalid(self, value)),
            };

            if let Err(error) = outcome {
                if result.is_ok() {
                    result = Err(error);
                }
            }
        }

        result
    }

    fn expand_sequence(
        &self,
        dictionary: &mut PropertyDictionary,
        context: &Expansion<'_>,
        values: &[String],
    ) -> Result<()> {
        let items = &context.shorthand.items;
        let shorthand_type = context.shorthand.shorthand_type;
        let mut value_index = 0;
        let mut item_index = 0;

        while value_index < values.len() && item_index < items.len() {
            match self.parse_item(items[item_index], &values[value_index], context) {
                Ok((property_id, property)) => {
                    dictionary.set_property(property_id, property);

                    // Replicate keeps feeding the last value to the remaining items.
                    if shorthand_type != ShorthandType::Replicate || value_index + 1 < values.len() {
                        value_index += 1;
                    }
                }
                Err(error) => {
                    if shorthand_type == ShorthandType::FallThrough && item_index + 1 < items.len() {
                        item_index += 1;
                        continue;
                    }
                    return Err(error);
                }
            }
            item_index += 1;
        }

        Ok(())
    }

    /// Parses one token for a property item, stamping the declaration's provenance.
    fn parse_item(
        &self,
        item: ShorthandItem,
        value: &str,
        context: &Expansion<'_>,
    ) -> Result<(PropertyId, Property)> {
        let ShorthandItem::Property(property_id) = item else {
            return Err(context.invalid(self, value));
        };

        self.get_property(property_id)
            .and_then(|definition| definition.parse_value(value))
            .map(|property| {
                (
                    property_id,
                    property.with_source(context.source_file, context.source_line),
                )
            })
            .ok_or_else(|| {
                SpecError::invalid_value(
                    self.property_name(property_id),
                    value,
                    context.source_file,
                    context.source_line,
                )
            })
    }

    /// Fills in the default of every registered property missing from `dictionary`.
    pub fn set_property_defaults(&self, dictionary: &mut PropertyDictionary) {
        for definition in self.properties() {
            if !dictionary.contains(definition.id()) {
                dictionary.set_property(definition.id(), definition.default_value().clone());
            }
        }
    }
}

impl Default for PropertySpecification {
    fn default() -> Self {
        Self::new(PropertyId::NUM_DEFINED, ShorthandId::NUM_DEFINED)
    }
}

/// The shorthand being expanded and where its declaration came from.
struct Expansion<'a> {
    shorthand: &'a ShorthandDefinition,
    source_file: &'a str,
    source_line: usize,
}

impl Expansion<'_> {
    fn invalid(&self, spec: &PropertySpecification, value: &str) -> SpecError {
        SpecError::invalid_value(
            spec.shorthand_name(self.shorthand.id),
            value,
            self.source_file,
            self.source_line,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PropertyValue, Unit};
    use crate::parsers::{ColorParser, KeywordParser, NumberParser};
    use std::sync::Arc;

    fn length(spec: &mut PropertySpecification, name: &str) -> PropertyId {
        let (definition, _) = spec.insert_property(name, "0px", false, true, PropertyId::INVALID).unwrap();
        definition.add_parser(Arc::new(NumberParser::lengths(true, false)), "");
        definition.id()
    }

    fn keyword(spec: &mut PropertySpecification, name: &str, keywords: &str) -> PropertyId {
        let default = keywords.split(',').next().unwrap().trim().to_string();
        let (definition, _) = spec.insert_property(name, &default, false, false, PropertyId::INVALID).unwrap();
        definition.add_parser(Arc::new(KeywordParser), keywords);
        definition.id()
    }

    fn color(spec: &mut PropertySpecification, name: &str) -> PropertyId {
        let (definition, _) = spec.insert_property(name, "black", true, false, PropertyId::INVALID).unwrap();
        definition.add_parser(Arc::new(ColorParser), "");
        definition.id()
    }

    fn px(n: f32) -> PropertyValue {
        PropertyValue::Number(n, Unit::Px)
    }

    fn value_of(dictionary: &PropertyDictionary, id: PropertyId) -> Option<PropertyValue> {
        dictionary.get_property(id).map(|p| p.value.clone())
    }

    fn box_spec() -> (PropertySpecification, [PropertyId; 4]) {
        let mut spec = PropertySpecification::new(0, 0);
        let ids = [
            length(&mut spec, "margin-top"),
            length(&mut spec, "margin-right"),
            length(&mut spec, "margin-bottom"),
            length(&mut spec, "margin-left"),
        ];
        spec.register_shorthand(
            "margin",
            "margin-top margin-right margin-bottom margin-left",
            ShorthandType::Box,
        )
        .unwrap();
        (spec, ids)
    }

    fn box_values(spec: &PropertySpecification, ids: &[PropertyId; 4], value: &str) -> Vec<PropertyValue> {
        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "margin", value, "test.rcss", 1).unwrap();
        ids.iter().map(|id| value_of(&dictionary, *id).unwrap()).collect()
    }

    #[test]
    fn test_register_and_lookup_round_trip() {
        let mut spec = PropertySpecification::new(0, 0);
        let id = length(&mut spec, "width");

        let definition = spec.get_property_by_name("width").unwrap();
        assert_eq!(definition.id(), id);
        assert_eq!(spec.property_name(definition.id()), "width");
        assert_eq!(spec.property_id("width"), id);
    }

    #[test]
    fn test_duplicate_registration_returns_existing() {
        let mut spec = PropertySpecification::new(0, 0);
        let first = spec.register_property("width", "0px", false, true).unwrap() as *const _;
        let second = spec.register_property("width", "10px", true, false).unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(!second.is_inherited());
        assert_eq!(second.default_value(), &Property::unparsed("0px"));
        assert_eq!(spec.properties().count(), 1);
    }

    #[test]
    fn test_insert_reports_whether_created() {
        let mut spec = PropertySpecification::new(0, 0);
        let (_, created) = spec.insert_property("width", "0px", false, true, PropertyId::INVALID).unwrap();
        assert!(created);
        let (definition, created) = spec.insert_property("width", "1px", false, true, PropertyId::INVALID).unwrap();
        assert!(!created);
        assert_eq!(definition.default_value(), &Property::unparsed("0px"));
    }

    #[test]
    fn test_identifier_of_empty_name_is_not_rebound() {
        let mut spec = PropertySpecification::new(0, 0);
        let id = spec.register_property("", "0px", false, false).unwrap().id();
        assert_eq!(id, PropertyId::MARGIN_TOP);

        let result = spec.register_property_with_id("other", "0px", false, false, id);
        assert!(matches!(result, Err(SpecError::IdentifierConflict { .. })));
        assert_eq!(spec.property_id("other"), PropertyId::INVALID);
    }

    #[test]
    fn test_storage_grows_for_explicit_ids() {
        let mut spec = PropertySpecification::new(2, 0);
        let id = PropertyId::from_index(40).unwrap();
        spec.register_property_with_id("far-away", "x", false, false, id).unwrap();

        assert_eq!(spec.properties.len(), 40 * 3 / 2 + 1);
        assert!(spec.get_property(id).is_some());
        assert!(spec.get_property(PropertyId::from_index(39).unwrap()).is_none());
        assert!(spec.get_property(PropertyId::from_index(1000).unwrap()).is_none());
        assert!(spec.get_property(PropertyId::INVALID).is_none());
    }

    #[test]
    fn test_explicit_id_conflict_is_an_error() {
        let mut spec = PropertySpecification::new(0, 0);
        spec.register_property_with_id("margin-top", "0px", false, true, PropertyId::MARGIN_TOP)
            .unwrap();
        let result = spec.register_property_with_id("padding-top", "0px", false, true, PropertyId::MARGIN_TOP);
        assert!(matches!(result, Err(SpecError::IdentifierConflict { .. })));
    }

    #[test]
    fn test_unknown_lookups_have_no_side_effects() {
        let spec = PropertySpecification::new(0, 0);
        assert!(spec.get_property_by_name("nonexistent").is_none());
        assert!(spec.get_shorthand_by_name("nonexistent").is_none());
        assert_eq!(spec.property_map.len(), 1);
        assert_eq!(spec.shorthand_map.len(), 1);
    }

    #[test]
    fn test_box_expansion() {
        let (spec, ids) = box_spec();

        assert_eq!(box_values(&spec, &ids, "1px"), vec![px(1.0), px(1.0), px(1.0), px(1.0)]);
        assert_eq!(box_values(&spec, &ids, "1px 2px"), vec![px(1.0), px(2.0), px(1.0), px(2.0)]);
        assert_eq!(
            box_values(&spec, &ids, "1px 2px 3px"),
            vec![px(1.0), px(2.0), px(3.0), px(2.0)]
        );
        assert_eq!(
            box_values(&spec, &ids, "1px 2px 3px 4px"),
            vec![px(1.0), px(2.0), px(3.0), px(4.0)]
        );
    }

    #[test]
    fn test_box_failure_keeps_earlier_sides() {
        let (spec, ids) = box_spec();
        let mut dictionary = PropertyDictionary::new();

        let result = spec.parse_declaration(&mut dictionary, "margin", "1px red", "test.rcss", 3);
        assert!(matches!(result, Err(SpecError::InvalidValue { .. })));
        // Known non-atomic: the top side was committed before the right side failed.
        assert_eq!(value_of(&dictionary, ids[0]), Some(px(1.0)));
        assert_eq!(value_of(&dictionary, ids[1]), None);
    }

    #[test]
    fn test_box_with_wrong_arity_fails() {
        let mut spec = PropertySpecification::new(0, 0);
        length(&mut spec, "a");
        length(&mut spec, "b");
        spec.register_shorthand("pair", "a b", ShorthandType::Box).unwrap();

        let mut dictionary = PropertyDictionary::new();
        let result = spec.parse_declaration(&mut dictionary, "pair", "1px", "test.rcss", 1);
        assert!(matches!(result, Err(SpecError::BoxArity { count: 2, .. })));
    }

    #[test]
    fn test_provenance_is_recorded() {
        let (spec, ids) = box_spec();
        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "margin", "5px", "layout.rcss", 12).unwrap();

        let source = dictionary.get_property(ids[2]).unwrap().source.clone().unwrap();
        assert_eq!(source.file, "layout.rcss");
        assert_eq!(source.line, 12);
    }

    #[test]
    fn test_replicate() {
        let mut spec = PropertySpecification::new(0, 0);
        let x = keyword(&mut spec, "overflow-x", "visible, hidden, auto, scroll");
        let y = keyword(&mut spec, "overflow-y", "visible, hidden, auto, scroll");
        spec.register_shorthand("overflow", "overflow-x overflow-y", ShorthandType::Replicate)
            .unwrap();

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "overflow", "hidden", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, x), Some(PropertyValue::Keyword(1)));
        assert_eq!(value_of(&dictionary, y), Some(PropertyValue::Keyword(1)));

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "overflow", "auto scroll hidden", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, x), Some(PropertyValue::Keyword(2)));
        assert_eq!(value_of(&dictionary, y), Some(PropertyValue::Keyword(3)));

        let mut dictionary = PropertyDictionary::new();
        assert!(spec.parse_declaration(&mut dictionary, "overflow", "sideways", "t", 1).is_err());
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_replicate_last_value_fills_remaining_items() {
        let mut spec = PropertySpecification::new(0, 0);
        let ids = [length(&mut spec, "a"), length(&mut spec, "b"), length(&mut spec, "c")];
        spec.register_shorthand("abc", "a b c", ShorthandType::Replicate).unwrap();

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "abc", "1px 2px", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, ids[0]), Some(px(1.0)));
        assert_eq!(value_of(&dictionary, ids[1]), Some(px(2.0)));
        assert_eq!(value_of(&dictionary, ids[2]), Some(px(2.0)));
    }

    #[test]
    fn test_fall_through() {
        let mut spec = PropertySpecification::new(0, 0);
        let width = length(&mut spec, "border-top-width");
        let color = color(&mut spec, "border-top-color");
        spec.register_shorthand(
            "border-top",
            "border-top-width border-top-color",
            ShorthandType::FallThrough,
        )
        .unwrap();

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "border-top", "red", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, width), None);
        assert_eq!(
            value_of(&dictionary, color),
            Some(PropertyValue::Color(Color::new(255, 0, 0, 255)))
        );

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "border-top", "2px blue", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, width), Some(px(2.0)));
        assert_eq!(
            value_of(&dictionary, color),
            Some(PropertyValue::Color(Color::new(0, 0, 255, 255)))
        );

        let mut dictionary = PropertyDictionary::new();
        assert!(spec.parse_declaration(&mut dictionary, "border-top", "dashed", "t", 1).is_err());
    }

    #[test]
    fn test_fall_through_does_not_revisit_skipped_items() {
        let mut spec = PropertySpecification::new(0, 0);
        let width = length(&mut spec, "w");
        let color = color(&mut spec, "c");
        spec.register_shorthand("wc", "w c", ShorthandType::FallThrough).unwrap();

        // "red" skips past `w`; "3px" is then offered to nothing and ignored.
        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "wc", "red 3px", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, width), None);
        assert!(value_of(&dictionary, color).is_some());
    }

    #[test]
    fn test_positional_ignores_extra_and_leaves_missing() {
        let mut spec = PropertySpecification::new(0, 0);
        let ids = [length(&mut spec, "a"), length(&mut spec, "b"), length(&mut spec, "c")];
        spec.register_shorthand("abc", "a b c", ShorthandType::Positional).unwrap();

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "abc", "1px 2px", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, ids[0]), Some(px(1.0)));
        assert_eq!(value_of(&dictionary, ids[1]), Some(px(2.0)));
        assert_eq!(value_of(&dictionary, ids[2]), None);

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "abc", "1px 2px 3px 4px", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, ids[2]), Some(px(3.0)));

        let mut dictionary = PropertyDictionary::new();
        assert!(spec.parse_declaration(&mut dictionary, "abc", "1px x 3px", "t", 1).is_err());
        assert_eq!(value_of(&dictionary, ids[0]), Some(px(1.0)));
        assert_eq!(value_of(&dictionary, ids[2]), None);
    }

    #[test]
    fn test_recursive_forwards_whole_value() {
        let mut spec = PropertySpecification::new(0, 0);
        let top_width = length(&mut spec, "top-width");
        let top_color = color(&mut spec, "top-color");
        let left_width = length(&mut spec, "left-width");
        let left_color = color(&mut spec, "left-color");
        spec.register_shorthand("top", "top-width top-color", ShorthandType::FallThrough)
            .unwrap();
        spec.register_shorthand("left", "left-width left-color", ShorthandType::FallThrough)
            .unwrap();
        spec.register_shorthand("all", "top left", ShorthandType::Recursive).unwrap();

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "all", "4px green", "t", 1).unwrap();
        for id in [top_width, left_width] {
            assert_eq!(value_of(&dictionary, id), Some(px(4.0)));
        }
        for id in [top_color, left_color] {
            assert_eq!(
                value_of(&dictionary, id),
                Some(PropertyValue::Color(Color::new(0, 128, 0, 255)))
            );
        }
    }

    #[test]
    fn test_recursive_applies_every_item_despite_failure() {
        let mut spec = PropertySpecification::new(0, 0);
        let width = length(&mut spec, "width");
        let shade = color(&mut spec, "shade");
        spec.register_shorthand("both", "width shade", ShorthandType::Recursive).unwrap();

        let mut dictionary = PropertyDictionary::new();
        let result = spec.parse_declaration(&mut dictionary, "both", "red", "t", 1);
        assert!(result.is_err());
        // Known non-atomic: the colour item still committed.
        assert_eq!(value_of(&dictionary, width), None);
        assert!(value_of(&dictionary, shade).is_some());
    }

    #[test]
    fn test_nested_shorthand_needs_recursive_type() {
        let (mut spec, _) = box_spec();
        let result = spec.register_shorthand("outer", "margin", ShorthandType::Replicate);
        assert!(matches!(result, Err(SpecError::InvalidShorthandItem { .. })));
        assert!(spec.get_shorthand_by_name("outer").is_none());
        assert!(spec.register_shorthand("outer", "margin", ShorthandType::Recursive).is_ok());
    }

    #[test]
    fn test_shorthand_registration_failures() {
        let (mut spec, _) = box_spec();

        assert!(matches!(
            spec.register_shorthand("nothing", "   ", ShorthandType::Positional),
            Err(SpecError::EmptyShorthand { .. })
        ));
        assert!(matches!(
            spec.register_shorthand("partial", "margin-top bogus", ShorthandType::Positional),
            Err(SpecError::InvalidShorthandItem { .. })
        ));
        assert!(spec.get_shorthand_by_name("partial").is_none());
        assert!(matches!(
            spec.register_shorthand("margin", "margin-top", ShorthandType::Positional),
            Err(SpecError::DuplicateShorthand { .. })
        ));
        assert_eq!(
            spec.get_shorthand_by_name("margin").unwrap().shorthand_type(),
            ShorthandType::Box
        );
    }

    #[test]
    fn test_shorthand_names_are_lowercased() {
        let (mut spec, ids) = box_spec();
        spec.register_shorthand("vertical", "MARGIN-TOP, Margin-Bottom", ShorthandType::Replicate)
            .unwrap();
        let items = spec.get_shorthand_by_name("vertical").unwrap().items().to_vec();
        assert_eq!(items, vec![ShorthandItem::Property(ids[0]), ShorthandItem::Property(ids[2])]);
    }

    #[test]
    fn test_property_declaration_uses_first_value() {
        let mut spec = PropertySpecification::new(0, 0);
        let id = length(&mut spec, "width");

        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "width", "10px; 20px", "t", 1).unwrap();
        assert_eq!(value_of(&dictionary, id), Some(px(10.0)));

        assert!(matches!(
            spec.parse_declaration(&mut dictionary, "width", " ; ", "t", 2),
            Err(SpecError::EmptyValue { .. })
        ));
        assert!(matches!(
            spec.parse_declaration(&mut dictionary, "width", "wide", "t", 3),
            Err(SpecError::InvalidValue { .. })
        ));
        assert!(matches!(
            spec.parse_declaration(&mut dictionary, "height", "1px", "t", 4),
            Err(SpecError::UnknownDeclaration { .. })
        ));
        assert_eq!(value_of(&dictionary, id), Some(px(10.0)));
    }

    #[test]
    fn test_empty_shorthand_value_fails() {
        let (spec, _) = box_spec();
        let mut dictionary = PropertyDictionary::new();
        assert!(matches!(
            spec.parse_declaration(&mut dictionary, "margin", "  ", "t", 1),
            Err(SpecError::EmptyValue { .. })
        ));
    }

    #[test]
    fn test_set_property_defaults_only_fills_missing() {
        let (spec, ids) = box_spec();
        let mut dictionary = PropertyDictionary::new();
        spec.parse_declaration(&mut dictionary, "margin-left", "7px", "t", 1).unwrap();

        spec.set_property_defaults(&mut dictionary);
        assert_eq!(dictionary.len(), 4);
        assert_eq!(value_of(&dictionary, ids[3]), Some(px(7.0)));
        assert_eq!(value_of(&dictionary, ids[0]), Some(px(0.0)));
        assert!(dictionary.get_property(ids[0]).unwrap().source.is_none());
    }

    #[test]
    fn test_property_listings() {
        let mut spec = PropertySpecification::new(0, 0);
        length(&mut spec, "width");
        color(&mut spec, "color");
        keyword(&mut spec, "display", "inline, block");

        assert_eq!(spec.registered_properties(), vec!["width", "color", "display"]);
        assert_eq!(spec.inherited_properties(), vec!["color"]);
        assert_eq!(spec.layout_properties(), vec!["width"]);
    }
}
