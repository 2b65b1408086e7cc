// FILE: src/core/mod.rs

pub mod dictionary;
pub mod id_map;
pub mod properties;
pub mod types;

pub use dictionary::PropertyDictionary;
pub use id_map::IdNameMap;
pub use properties::{Identifier, PropertyId, ShorthandId, MAX_IDENTIFIER_INDEX};
pub use types::{Color, Property, PropertyValue, SourceLocation, Unit};
