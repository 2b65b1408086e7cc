//! Value parsers that give property definitions their grammar

mod color;
mod keyword;
mod number;
mod string;

pub use color::{parse_color, ColorParser};
pub use keyword::KeywordParser;
pub use number::NumberParser;
pub use string::StringParser;

use crate::core::{PropertyValue, Unit};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Parses one raw value token into a typed value.
///
/// Implementations are shared between many definitions, so they must not
/// keep per-call state.
pub trait PropertyParser: Send + Sync + fmt::Debug {
    fn parse_value(&self, value: &str, parameters: &ParserParameters) -> Option<PropertyValue>;
}

/// Keyword parameters attached to a parser when a definition adds it.
///
/// Built from a comma-separated list; each keyword maps to its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserParameters {
    keywords: HashMap<String, usize>,
}

impl ParserParameters {
    pub fn parse(parameters: &str) -> Self {
        let keywords = parameters
            .split(',')
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .enumerate()
            .map(|(index, keyword)| (keyword, index))
            .collect();
        Self { keywords }
    }

    pub fn keyword_index(&self, keyword: &str) -> Option<usize> {
        self.keywords.get(keyword).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Named parsers available to property registration.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn PropertyParser>>,
}

impl ParserRegistry {
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, parser: Arc<dyn PropertyParser>) -> bool {
        if self.parsers.contains_key(name) {
            log::error!("Parser '{}' is already registered, ignoring.", name);
            return false;
        }
        self.parsers.insert(name.to_string(), parser);
        true
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn PropertyParser>> {
        self.parsers.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.parsers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("number", Arc::new(NumberParser::new(&[Unit::Number])));
        registry.register("length", Arc::new(NumberParser::lengths(false, false)));
        registry.register("length_percent", Arc::new(NumberParser::lengths(true, false)));
        registry.register("number_length_percent", Arc::new(NumberParser::lengths(true, true)));
        registry.register("angle", Arc::new(NumberParser::angles()));
        registry.register("keyword", Arc::new(KeywordParser));
        registry.register("string", Arc::new(StringParser));
        registry.register("color", Arc::new(ColorParser));
        registry
    }
}
