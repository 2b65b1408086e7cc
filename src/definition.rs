//! Property and shorthand definitions

use crate::core::{Property, PropertyId, PropertyValue, ShorthandId};
use crate::parsers::{ParserParameters, PropertyParser};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct ParserEntry {
    parser: Arc<dyn PropertyParser>,
    parameters: ParserParameters,
}

/// A registered property: its default, flags and value grammar.
#[derive(Debug, Clone)]
pub struct PropertyDefinition {
    id: PropertyId,
    default_value: Property,
    inherited: bool,
    forces_layout: bool,
    parsers: Vec<ParserEntry>,
}

impl PropertyDefinition {
    pub fn new(id: PropertyId, default_value: &str, inherited: bool, forces_layout: bool) -> Self {
        Self {
            id,
            default_value: Property::unparsed(default_value),
            inherited,
            forces_layout,
            parsers: Vec::new(),
        }
    }

    /// Appends a parser to the value grammar.
    ///
    /// A default value that no earlier parser accepted is re-parsed through the new one.
    pub fn add_parser(&mut self, parser: Arc<dyn PropertyParser>, parameters: &str) -> &mut Self {
        let entry = ParserEntry {
            parser,
            parameters: ParserParameters::parse(parameters),
        };

        let reparsed = match &self.default_value.value {
            PropertyValue::Unparsed(text) => entry.parser.parse_value(text, &entry.parameters),
            _ => None,
        };
        if let Some(value) = reparsed {
            self.default_value.value = value;
            self.default_value.parser_index = Some(self.parsers.len());
        }

        self.parsers.push(entry);
        self
    }

    /// Parses a raw token with the first parser that accepts it.
    pub fn parse_value(&self, value: &str) -> Option<Property> {
        self.parsers.iter().enumerate().find_map(|(index, entry)| {
            entry
                .parser
                .parse_value(value, &entry.parameters)
                .map(|value| Property {
                    value,
                    parser_index: Some(index),
                    source: None,
                })
        })
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn default_value(&self) -> &Property {
        &self.default_value
    }

    pub fn is_inherited(&self) -> bool {
        self.inherited
    }

    pub fn forces_layout(&self) -> bool {
        self.forces_layout
    }

    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }
}

/// How a shorthand value is spread over its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShorthandType {
    /// Values are assigned to items in order; extra values are ignored.
    Positional,
    /// A value an item rejects is offered to the following item instead.
    FallThrough,
    /// Items beyond the last value reuse the last value.
    Replicate,
    /// Top/right/bottom/left expansion of one to three values.
    Box,
    /// The unsplit value is handed to every item, which may be a shorthand itself.
    Recursive,
}

impl ShorthandType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "positional" => Some(Self::Positional),
            "fall_through" | "fallthrough" => Some(Self::FallThrough),
            "replicate" => Some(Self::Replicate),
            "box" => Some(Self::Box),
            "recursive" => Some(Self::Recursive),
            _ => None,
        }
    }
}

impl fmt::Display for ShorthandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positional => "positional",
            Self::FallThrough => "fall_through",
            Self::Replicate => "replicate",
            Self::Box => "box",
            Self::Recursive => "recursive",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShorthandItem {
    #[default]
    Invalid,
    Property(PropertyId),
    Shorthand(ShorthandId),
}

#[derive(Debug, Clone)]
pub struct ShorthandDefinition {
    pub(crate) id: ShorthandId,
    pub(crate) items: Vec<ShorthandItem>,
    pub(crate) shorthand_type: ShorthandType,
}

impl ShorthandDefinition {
    pub fn id(&self) -> ShorthandId {
        self.id
    }

    pub fn items(&self) -> &[ShorthandItem] {
        &self.items
    }

    pub fn shorthand_type(&self) -> ShorthandType {
        self.shorthand_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Unit;
    use crate::parsers::{KeywordParser, NumberParser};

    #[test]
    fn test_default_reparsed_by_later_parser() {
        let mut definition = PropertyDefinition::new(PropertyId::WIDTH, "auto", false, true);
        assert!(!definition.default_value().is_parsed());

        definition.add_parser(Arc::new(NumberParser::lengths(true, false)), "");
        assert!(!definition.default_value().is_parsed());

        definition.add_parser(Arc::new(KeywordParser), "auto");
        assert_eq!(definition.default_value().value, PropertyValue::Keyword(0));
        assert_eq!(definition.default_value().parser_index, Some(1));
    }

    #[test]
    fn test_first_accepting_parser_wins() {
        let mut definition = PropertyDefinition::new(PropertyId::WIDTH, "0px", false, true);
        definition
            .add_parser(Arc::new(NumberParser::lengths(true, false)), "")
            .add_parser(Arc::new(KeywordParser), "auto");

        let parsed = definition.parse_value("auto").unwrap();
        assert_eq!(parsed.value, PropertyValue::Keyword(0));
        assert_eq!(parsed.parser_index, Some(1));

        let parsed = definition.parse_value("10%").unwrap();
        assert_eq!(parsed.value, PropertyValue::Number(10.0, Unit::Percent));
        assert!(definition.parse_value("red").is_none());
    }

    #[test]
    fn test_without_parsers_nothing_parses() {
        let definition = PropertyDefinition::new(PropertyId::COLOR, "black", true, false);
        assert!(definition.parse_value("black").is_none());
        assert_eq!(definition.parser_count(), 0);
    }

    #[test]
    fn test_shorthand_type_names() {
        assert_eq!(ShorthandType::from_name("FallThrough"), Some(ShorthandType::FallThrough));
        assert_eq!(ShorthandType::from_name("box").unwrap().to_string(), "box");
        assert!(ShorthandType::from_name("spiral").is_none());
    }
}
