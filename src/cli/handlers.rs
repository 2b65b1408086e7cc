// FILE: src/cli/handlers.rs
use crate::{
    cli::OutputFormat,
    core::{PropertyValue, SourceLocation},
    declaration::{parse_declaration_file, DeclarationBlock},
    definition::ShorthandItem,
    Result, SpecError, StyleSheetSpecification,
};

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DECLARATION_EXTENSIONS: [&str; 2] = ["rcss", "decl"];

#[derive(Serialize)]
struct ResolvedProperty<'a> {
    name: &'a str,
    value: &'a PropertyValue,
    source: Option<&'a SourceLocation>,
}

#[derive(Serialize)]
struct ParseReport<'a> {
    file: &'a str,
    properties: Vec<ResolvedProperty<'a>>,
    failures: Vec<String>,
}

// --- PARSE ---
pub fn handle_parse_command(
    cli: &super::SpecCli,
    spec: &StyleSheetSpecification,
    matches: &clap::ArgMatches,
) -> Result<()> {
    let input_path = required_arg(matches, "input")?;
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Text);

    let block = parse_declaration_file(spec, Path::new(input_path), cli.fill_defaults(matches))?;

    match format {
        OutputFormat::Text => print_block_text(spec, &block),
        OutputFormat::Json => print_block_json(spec, input_path, &block)?,
    }

    Ok(())
}

fn print_block_text(spec: &StyleSheetSpecification, block: &DeclarationBlock) {
    for (id, property) in block.dictionary.iter() {
        println!("{}: {}", spec.properties().property_name(id), property);
    }
    for failure in &block.failures {
        eprintln!("❌ {}", failure);
    }
}

fn print_block_json(spec: &StyleSheetSpecification, file: &str, block: &DeclarationBlock) -> Result<()> {
    let report = ParseReport {
        file,
        properties: block
            .dictionary
            .iter()
            .map(|(id, property)| ResolvedProperty {
                name: spec.properties().property_name(id),
                value: &property.value,
                source: property.source.as_ref(),
            })
            .collect(),
        failures: block.failures.iter().map(|e| e.to_string()).collect(),
    };

    let json = serde_json::to_string_pretty(&report).map_err(|e| SpecError::InvalidFormat {
        message: format!("JSON serialization failed: {}", e),
    })?;
    println!("{}", json);
    Ok(())
}

// --- CHECK ---
pub fn handle_check_command(spec: &StyleSheetSpecification, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = Path::new(required_arg(matches, "input")?);
    let recursive = matches.get_flag("recursive");

    if input_path.is_dir() {
        check_directory(spec, input_path, recursive)
    } else {
        check_single_file(spec, input_path)
    }
}

fn check_single_file(spec: &StyleSheetSpecification, path: &Path) -> Result<()> {
    println!("🔍 Checking {}", path.display());
    let block = parse_declaration_file(spec, path, false)?;

    if !block.stats.has_failures() {
        println!("✅ {} - {} declarations, no issues found", path.display(), block.stats.parsed);
        return Ok(());
    }

    for failure in &block.failures {
        println!("❌ {}", failure);
    }
    Err(SpecError::InvalidFormat {
        message: format!(
            "{}: {} invalid and {} unknown declarations",
            path.display(),
            block.stats.failed,
            block.stats.unknown
        ),
    })
}

fn collect_declaration_files(dir_path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir_path).max_depth(max_depth).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            SpecError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Directory traversal error: {}", e),
            ))
        })?;
        let is_declaration_file = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| DECLARATION_EXTENSIONS.contains(&ext));
        if entry.file_type().is_file() && is_declaration_file {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn check_directory(spec: &StyleSheetSpecification, dir_path: &Path, recursive: bool) -> Result<()> {
    let start = Instant::now();
    let files = collect_declaration_files(dir_path, recursive)?;
    let total_files = files.len();
    let mut error_files = 0;

    for file in &files {
        if let Err(e) = check_single_file(spec, file) {
            log::debug!("{}", e);
            error_files += 1;
        }
    }

    println!("\n📊 Check Summary:");
    println!("   Total files: {}", total_files);
    println!("   Files with errors: {}", error_files);
    println!("   Time: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    if error_files > 0 {
        return Err(SpecError::InvalidFormat {
            message: format!("{} of {} files failed the check", error_files, total_files),
        });
    }
    Ok(())
}

// --- LIST ---
pub fn handle_list_command(spec: &StyleSheetSpecification, matches: &clap::ArgMatches) -> Result<()> {
    let properties = spec.properties();
    let only_inherited = matches.get_flag("inherited");
    let only_layout = matches.get_flag("layout");

    println!("Properties:");
    for definition in properties.properties() {
        if (only_inherited && !definition.is_inherited()) || (only_layout && !definition.forces_layout()) {
            continue;
        }
        let mut flags = Vec::new();
        if definition.is_inherited() {
            flags.push("inherited");
        }
        if definition.forces_layout() {
            flags.push("layout");
        }
        println!(
            "  {:<28} {:<14} default {} [{}]",
            properties.property_name(definition.id()),
            definition.id().to_string(),
            definition.default_value().value,
            flags.join(", ")
        );
    }

    if only_inherited || only_layout {
        return Ok(());
    }

    println!("\nShorthands:");
    for shorthand in properties.shorthands() {
        let items: Vec<&str> = shorthand
            .items()
            .iter()
            .map(|item| match item {
                ShorthandItem::Property(id) => properties.property_name(*id),
                ShorthandItem::Shorthand(id) => properties.shorthand_name(*id),
                ShorthandItem::Invalid => "?",
            })
            .collect();
        println!(
            "  {:<28} {:<12} {}",
            properties.shorthand_name(shorthand.id()),
            shorthand.shorthand_type().to_string(),
            items.join(" ")
        );
    }

    Ok(())
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| SpecError::InvalidFormat {
            message: format!("Missing required argument '{}'", name),
        })
}
