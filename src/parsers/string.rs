use super::{ParserParameters, PropertyParser};
use crate::core::PropertyValue;

/// Accepts any value verbatim.
#[derive(Debug, Default)]
pub struct StringParser;

impl PropertyParser for StringParser {
    fn parse_value(&self, value: &str, _parameters: &ParserParameters) -> Option<PropertyValue> {
        Some(PropertyValue::String(value.to_string()))
    }
}
