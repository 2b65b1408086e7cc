//! Style Property Specification
//!
//! A registry of style properties and shorthands, plus the declaration parser
//! that turns `name: value` pairs into typed property values.
//!
//! # Features
//!
//! - Bidirectional name/identifier maps with pre-assigned and dynamic identifiers
//! - Named value parsers (lengths, keywords, colours, strings) attached per property
//! - Shorthand expansion: box, recursive, replicate, fall-through and positional
//! - Source file and line provenance on every parsed value
//! - Declaration file reader and a command line checker
//!
//! # Basic Usage
//!
//! ```rust
//! use stylespec::{PropertyDictionary, PropertyId, Result, StyleSheetSpecification};
//!
//! fn main() -> Result<()> {
//!     let spec = StyleSheetSpecification::with_defaults()?;
//!     let mut dictionary = PropertyDictionary::new();
//!     spec.parse_declaration(&mut dictionary, "margin", "1px 2px", "inline", 1)?;
//!     assert!(dictionary.contains(PropertyId::MARGIN_LEFT));
//!     Ok(())
//! }
//! ```
//!
//! # Parsing Pipeline
//!
//! 1. **Lookup**: the declaration name resolves to a property or shorthand identifier
//! 2. **Tokenize**: the value text is split into value tokens
//! 3. **Expand**: shorthand tokens are distributed over the underlying properties
//! 4. **Parse**: each property runs its parsers in order until one accepts the token

pub mod cli;
pub mod core;
pub mod declaration;
pub mod defaults;
pub mod definition;
pub mod error;
pub mod lexer;
pub mod parsers;
pub mod specification;
pub mod stylesheet;

// Re-export commonly used types and functions
pub use crate::core::{
    Color, IdNameMap, Identifier, Property, PropertyDictionary, PropertyId, PropertyValue,
    ShorthandId, SourceLocation, Unit,
};
pub use cli::SpecCli;
pub use declaration::{parse_declaration_block, parse_declaration_file, DeclarationBlock, DeclarationStats};
pub use definition::{PropertyDefinition, ShorthandDefinition, ShorthandItem, ShorthandType};
pub use error::{Result, SpecError};
pub use lexer::parse_property_values;
pub use parsers::{ParserParameters, ParserRegistry, PropertyParser};
pub use specification::PropertySpecification;
pub use stylesheet::{PropertyBuilder, StyleSheetSpecification};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
