use super::{ParserParameters, PropertyParser};
use crate::core::PropertyValue;

/// Matches a value against the keyword list given as parser parameters.
#[derive(Debug, Default)]
pub struct KeywordParser;

impl PropertyParser for KeywordParser {
    fn parse_value(&self, value: &str, parameters: &ParserParameters) -> Option<PropertyValue> {
        parameters
            .keyword_index(&value.trim().to_lowercase())
            .map(PropertyValue::Keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        let parameters = ParserParameters::parse("visible, hidden, auto");
        assert_eq!(KeywordParser.parse_value("Hidden", &parameters), Some(PropertyValue::Keyword(1)));
        assert_eq!(KeywordParser.parse_value("scroll", &parameters), None);
        assert_eq!(KeywordParser.parse_value("auto", &ParserParameters::default()), None);
    }
}
