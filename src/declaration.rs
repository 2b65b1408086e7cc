//! Declaration file reader
//!
//! Reads plain `name: value;` declaration lists. Declarations are separated
//! by `;` or by line breaks, and lines starting with `#` or `//` are comments.
//! Every declaration is handed to the specification; failures are collected
//! rather than aborting the block.

use crate::core::PropertyDictionary;
use crate::error::{Result, SpecError};
use crate::stylesheet::StyleSheetSpecification;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclarationStats {
    pub parsed: usize,
    pub failed: usize,
    pub unknown: usize,
}

impl DeclarationStats {
    pub fn total(&self) -> usize {
        self.parsed + self.failed + self.unknown
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.unknown > 0
    }
}

/// The outcome of reading one declaration block.
#[derive(Debug, Default)]
pub struct DeclarationBlock {
    pub dictionary: PropertyDictionary,
    pub stats: DeclarationStats,
    pub failures: Vec<SpecError>,
}

impl DeclarationBlock {
    /// Adds the default of every property the block did not set.
    pub fn fill_defaults(&mut self, spec: &StyleSheetSpecification) {
        spec.set_property_defaults(&mut self.dictionary);
    }

    fn record(&mut self, outcome: Result<()>) {
        match outcome {
            Ok(()) => self.stats.parsed += 1,
            Err(e) => {
                log::warn!("{}", e);
                match e {
                    SpecError::UnknownDeclaration { .. } => self.stats.unknown += 1,
                    _ => self.stats.failed += 1,
                }
                self.failures.push(e);
            }
        }
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("//")
}

/// Splits a line on `;`, ignoring semicolons inside quotes or parentheses.
fn split_statements(line: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut previous = None;

    for (i, ch) in line.char_indices() {
        let escaped = previous == Some('/');
        match ch {
            '"' if !escaped => in_quotes = !in_quotes,
            '(' if !in_quotes && !escaped => depth += 1,
            ')' if !in_quotes && !escaped => depth = depth.saturating_sub(1),
            ';' if !in_quotes && depth == 0 => {
                statements.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        previous = Some(ch);
    }
    statements.push(&line[start..]);

    statements
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses every declaration in `text` against `spec`.
pub fn parse_declaration_block(
    spec: &StyleSheetSpecification,
    text: &str,
    source_file: &str,
) -> DeclarationBlock {
    let mut block = DeclarationBlock::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        for statement in split_statements(line) {
            let outcome = match statement.split_once(':') {
                Some((name, value)) if !name.trim().is_empty() => spec.parse_declaration(
                    &mut block.dictionary,
                    &name.trim().to_lowercase(),
                    value.trim(),
                    source_file,
                    line_number,
                ),
                Some(_) => Err(SpecError::syntax(source_file, line_number, "missing property name")),
                None => Err(SpecError::syntax(
                    source_file,
                    line_number,
                    format!("expected 'name: value', found '{}'", statement),
                )),
            };
            block.record(outcome);
        }
    }

    log::debug!(
        "{}: {} declarations, {} parsed, {} failed, {} unknown",
        source_file,
        block.stats.total(),
        block.stats.parsed,
        block.stats.failed,
        block.stats.unknown
    );

    block
}

/// Reads and parses a declaration file.
pub fn parse_declaration_file(
    spec: &StyleSheetSpecification,
    path: &Path,
    fill_defaults: bool,
) -> Result<DeclarationBlock> {
    let text = fs::read_to_string(path).map_err(|e| SpecError::FileNotFound {
        path: format!("{}: {}", path.display(), e),
    })?;

    let mut block = parse_declaration_block(spec, &text, &path.to_string_lossy());
    if fill_defaults {
        block.fill_defaults(spec);
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PropertyId, PropertyValue, SourceLocation, Unit};
    use std::io::Write;

    fn spec() -> StyleSheetSpecification {
        StyleSheetSpecification::with_defaults().unwrap()
    }

    #[test]
    fn test_split_statements() {
        assert_eq!(split_statements("a: 1; b: 2;"), vec!["a: 1", "b: 2"]);
        assert_eq!(
            split_statements("color: rgba(1; 2); font-family: \"a;b\""),
            vec!["color: rgba(1; 2)", "font-family: \"a;b\""]
        );
        assert!(split_statements(" ; ;").is_empty());
    }

    #[test]
    fn test_block_with_comments_and_lines() {
        let spec = spec();
        let text = "# layout\nwidth: 100px;\n\n// paint\ncolor: red; margin: 1px 2px\n";
        let block = parse_declaration_block(&spec, text, "main.rcss");

        assert_eq!(block.stats, DeclarationStats { parsed: 3, failed: 0, unknown: 0 });
        assert!(block.failures.is_empty());

        let width = block.dictionary.get_property(PropertyId::WIDTH).unwrap();
        assert_eq!(width.value, PropertyValue::Number(100.0, Unit::Px));
        assert_eq!(width.source, Some(SourceLocation::new("main.rcss", 2)));

        let color = block.dictionary.get_property(PropertyId::COLOR).unwrap();
        assert_eq!(color.value, PropertyValue::Color(Color::new(255, 0, 0, 255)));
        assert_eq!(color.source.as_ref().unwrap().line, 5);

        let left = block.dictionary.get_property(PropertyId::MARGIN_LEFT).unwrap();
        assert_eq!(left.value, PropertyValue::Number(2.0, Unit::Px));
    }

    #[test]
    fn test_failures_are_counted_and_kept() {
        let spec = spec();
        let text = "width: banana\nfrobnicate: 3\nno colon here\nheight: 5px\nmargin:\n";
        let block = parse_declaration_block(&spec, text, "bad.rcss");

        assert_eq!(block.stats.parsed, 1);
        assert_eq!(block.stats.unknown, 1);
        assert_eq!(block.stats.failed, 3);
        assert!(block.stats.has_failures());
        assert_eq!(block.failures.len(), 4);

        assert!(matches!(
            &block.failures[0],
            SpecError::InvalidValue { line: 1, .. }
        ));
        assert!(matches!(&block.failures[1], SpecError::UnknownDeclaration { name } if name == "frobnicate"));
        assert!(matches!(&block.failures[2], SpecError::Syntax { line: 3, .. }));
        assert!(matches!(&block.failures[3], SpecError::EmptyValue { line: 5, .. }));
        assert!(block.dictionary.contains(PropertyId::HEIGHT));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let spec = spec();
        let block = parse_declaration_block(&spec, "Z-Index: 4", "t");
        assert_eq!(block.stats.parsed, 1);
        assert_eq!(
            block.dictionary.get_property(PropertyId::Z_INDEX).unwrap().value,
            PropertyValue::Number(4.0, Unit::Number)
        );
    }

    #[test]
    fn test_declaration_file_with_defaults() {
        let spec = spec();
        let mut file = tempfile::Builder::new().suffix(".rcss").tempfile().unwrap();
        writeln!(file, "padding: 4px;").unwrap();

        let block = parse_declaration_file(&spec, file.path(), false).unwrap();
        assert_eq!(block.dictionary.len(), 4);

        let block = parse_declaration_file(&spec, file.path(), true).unwrap();
        assert_eq!(block.dictionary.len(), spec.properties().registered_properties().len());
        assert_eq!(
            block.dictionary.get_property(PropertyId::PADDING_TOP).unwrap().value,
            PropertyValue::Number(4.0, Unit::Px)
        );
    }

    #[test]
    fn test_missing_file() {
        let spec = spec();
        let result = parse_declaration_file(&spec, Path::new("/no/such/file.rcss"), false);
        assert!(matches!(result, Err(SpecError::FileNotFound { .. })));
    }
}
