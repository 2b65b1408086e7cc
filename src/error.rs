//! Error types for the style specification

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Identifier conflict: {message}")]
    IdentifierConflict { message: String },

    #[error("Identifier {index} for '{name}' exceeds the identifier range")]
    IdentifierOverflow { name: String, index: usize },

    #[error("Shorthand '{shorthand}' was registered without any properties")]
    EmptyShorthand { shorthand: String },

    #[error("Shorthand '{shorthand}' was registered with invalid property '{property}'")]
    InvalidShorthandItem { shorthand: String, property: String },

    #[error("Shorthand '{shorthand}' is already registered")]
    DuplicateShorthand { shorthand: String },

    #[error("Unknown property or shorthand '{name}'")]
    UnknownDeclaration { name: String },

    #[error("Empty value for '{name}' in {file} at line {line}")]
    EmptyValue { name: String, file: String, line: usize },

    #[error("Invalid value '{value}' for '{name}' in {file} at line {line}")]
    InvalidValue {
        name: String,
        value: String,
        file: String,
        line: usize,
    },

    #[error("Box shorthand '{shorthand}' needs four properties, has {count}")]
    BoxArity { shorthand: String, count: usize },

    #[error("Declaration syntax error in {file} at line {line}: {message}")]
    Syntax { file: String, line: usize, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

pub type Result<T> = std::result::Result<T, SpecError>;

impl SpecError {
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        file: impl Into<String>,
        line: usize,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            file: file.into(),
            line,
        }
    }

    pub fn empty_value(name: impl Into<String>, file: impl Into<String>, line: usize) -> Self {
        Self::EmptyValue {
            name: name.into(),
            file: file.into(),
            line,
        }
    }

    pub fn syntax(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownDeclaration { name: name.into() }
    }
}
