// FILE: src/core/types.rs

use serde::Serialize;
use std::fmt;

// Units a parsed value can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    Number,
    Px,
    Dp,
    Em,
    Rem,
    Percent,
    Inch,
    Cm,
    Mm,
    Pt,
    Pc,
    Deg,
    Rad,
}

impl Unit {
    pub const ALL: [Unit; 13] = [
        Self::Number,
        Self::Px,
        Self::Dp,
        Self::Em,
        Self::Rem,
        Self::Percent,
        Self::Inch,
        Self::Cm,
        Self::Mm,
        Self::Pt,
        Self::Pc,
        Self::Deg,
        Self::Rad,
    ];

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Self::Number),
            "px" => Some(Self::Px),
            "dp" => Some(Self::Dp),
            "em" => Some(Self::Em),
            "rem" => Some(Self::Rem),
            "%" => Some(Self::Percent),
            "in" => Some(Self::Inch),
            "cm" => Some(Self::Cm),
            "mm" => Some(Self::Mm),
            "pt" => Some(Self::Pt),
            "pc" => Some(Self::Pc),
            "deg" => Some(Self::Deg),
            "rad" => Some(Self::Rad),
            _ => None,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Number => "",
            Self::Px => "px",
            Self::Dp => "dp",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Percent => "%",
            Self::Inch => "in",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Deg => "deg",
            Self::Rad => "rad",
        }
    }

    pub fn is_length(self) -> bool {
        matches!(
            self,
            Self::Px | Self::Dp | Self::Em | Self::Rem | Self::Inch | Self::Cm | Self::Mm | Self::Pt | Self::Pc
        )
    }

    pub fn is_angle(self) -> bool {
        matches!(self, Self::Deg | Self::Rad)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// A typed property value as produced by a value parser.
///
/// `Unparsed` holds a default value that no parser has accepted yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Unparsed(String),
    Keyword(usize),
    Number(f32, Unit),
    Color(Color),
    String(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Unparsed(s) => write!(f, "unparsed({})", s),
            PropertyValue::Keyword(k) => write!(f, "keyword({})", k),
            PropertyValue::Number(n, unit) => write!(f, "{}{}", n, unit.suffix()),
            PropertyValue::Color(c) => write!(f, "{}", c),
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Where a value was declared, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A parsed property value plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub value: PropertyValue,
    /// Index of the parser in the owning definition that accepted the value.
    pub parser_index: Option<usize>,
    pub source: Option<SourceLocation>,
}

impl Property {
    pub fn unparsed(text: impl Into<String>) -> Self {
        Self {
            value: PropertyValue::Unparsed(text.into()),
            parser_index: None,
            source: None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        !matches!(self.value, PropertyValue::Unparsed(_))
    }

    pub fn with_source(mut self, file: &str, line: usize) -> Self {
        self.source = Some(SourceLocation::new(file, line));
        self
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{} ({})", self.value, source),
            None => write!(f, "{}", self.value),
        }
    }
}
