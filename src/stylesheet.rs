//! The style sheet specification context
//!
//! Owns the named value parsers and the property/shorthand registries. One
//! instance is built at startup, then shared read-only by declaration parsing.

use crate::core::{PropertyDictionary, PropertyId, ShorthandId};
use crate::definition::{PropertyDefinition, ShorthandType};
use crate::error::Result;
use crate::parsers::{ParserRegistry, PropertyParser};
use crate::specification::PropertySpecification;
use std::sync::Arc;

/// Attaches parsers to a freshly registered property by name.
///
/// Built for a property that was already registered, it attaches nothing and
/// leaves the existing value grammar as it is.
pub struct PropertyBuilder<'a> {
    name: String,
    id: PropertyId,
    definition: Option<&'a mut PropertyDefinition>,
    parsers: &'a ParserRegistry,
}

impl<'a> PropertyBuilder<'a> {
    /// Adds the parser registered as `parser_name`; unknown names are logged and skipped.
    pub fn add_parser(mut self, parser_name: &str, parameters: &str) -> Self {
        let parser = self.parsers.get(parser_name);
        match (self.definition.as_deref_mut(), parser) {
            (Some(definition), Some(parser)) => {
                definition.add_parser(parser, parameters);
            }
            (Some(_), None) => log::error!(
                "Property '{}' was registered with invalid parser '{}'.",
                self.name,
                parser_name
            ),
            (None, _) => log::warn!(
                "Property '{}' is already registered, not adding parser '{}'.",
                self.name,
                parser_name
            ),
        }
        self
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// The property name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The definition being built, or `None` when the property already existed.
    pub fn definition(&self) -> Option<&PropertyDefinition> {
        self.definition.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct StyleSheetSpecification {
    parsers: ParserRegistry,
    specification: PropertySpecification,
}

impl StyleSheetSpecification {
    /// A specification with the built-in parsers and no properties.
    pub fn new() -> Self {
        Self {
            parsers: ParserRegistry::default(),
            specification: PropertySpecification::default(),
        }
    }

    /// A specification with the default property and shorthand tables registered.
    pub fn with_defaults() -> Result<Self> {
        let mut spec = Self::new();
        crate::defaults::register_default_properties(&mut spec)?;
        Ok(spec)
    }

    pub fn register_parser(&mut self, name: &str, parser: Arc<dyn PropertyParser>) -> bool {
        self.parsers.register(name, parser)
    }

    pub fn parsers(&self) -> &ParserRegistry {
        &self.parsers
    }

    pub fn register_property(
        &mut self,
        name: &str,
        default_value: &str,
        inherited: bool,
        forces_layout: bool,
    ) -> Result<PropertyBuilder<'_>> {
        self.register_property_with_id(name, default_value, inherited, forces_layout, PropertyId::default())
    }

    pub fn register_property_with_id(
        &mut self,
        name: &str,
        default_value: &str,
        inherited: bool,
        forces_layout: bool,
        id: PropertyId,
    ) -> Result<PropertyBuilder<'_>> {
        let (definition, created) = self
            .specification
            .insert_property(name, default_value, inherited, forces_layout, id)?;
        Ok(PropertyBuilder {
            name: name.to_string(),
            id: definition.id(),
            definition: created.then_some(definition),
            parsers: &self.parsers,
        })
    }

    pub fn register_shorthand(
        &mut self,
        name: &str,
        property_names: &str,
        shorthand_type: ShorthandType,
    ) -> Result<()> {
        self.specification
            .register_shorthand(name, property_names, shorthand_type)
    }

    pub fn register_shorthand_with_id(
        &mut self,
        name: &str,
        property_names: &str,
        shorthand_type: ShorthandType,
        id: ShorthandId,
    ) -> Result<()> {
        self.specification
            .register_shorthand_with_id(name, property_names, shorthand_type, id)
    }

    /// The property and shorthand registries.
    pub fn properties(&self) -> &PropertySpecification {
        &self.specification
    }

    pub fn parse_declaration(
        &self,
        dictionary: &mut PropertyDictionary,
        name: &str,
        value: &str,
        source_file: &str,
        source_line: usize,
    ) -> Result<()> {
        self.specification
            .parse_declaration(dictionary, name, value, source_file, source_line)
    }

    pub fn set_property_defaults(&self, dictionary: &mut PropertyDictionary) {
        self.specification.set_property_defaults(dictionary);
    }
}

impl Default for StyleSheetSpecification {
    fn default() -> Self {
        Self::new()
    }
}
