use super::{ParserParameters, PropertyParser};
use crate::core::{Color, PropertyValue};
use crate::error::{Result, SpecError};

/// Parses colours: hex notation, `rgb()`/`rgba()` and a handful of names.
#[derive(Debug, Default)]
pub struct ColorParser;

impl PropertyParser for ColorParser {
    fn parse_value(&self, value: &str, _parameters: &ParserParameters) -> Option<PropertyValue> {
        parse_color(value).ok().map(PropertyValue::Color)
    }
}

fn invalid(color_str: &str, reason: &str) -> SpecError {
    SpecError::InvalidFormat {
        message: format!("Invalid color '{}': {}", color_str, reason),
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "transparent" => Color::new(0, 0, 0, 0),
        "black" => Color::new(0, 0, 0, 255),
        "white" => Color::new(255, 255, 255, 255),
        "red" => Color::new(255, 0, 0, 255),
        "green" => Color::new(0, 128, 0, 255),
        "lime" => Color::new(0, 255, 0, 255),
        "blue" => Color::new(0, 0, 255, 255),
        "yellow" => Color::new(255, 255, 0, 255),
        "cyan" | "aqua" => Color::new(0, 255, 255, 255),
        "magenta" | "fuchsia" => Color::new(255, 0, 255, 255),
        "gray" | "grey" => Color::new(128, 128, 128, 255),
        "silver" => Color::new(192, 192, 192, 255),
        "maroon" => Color::new(128, 0, 0, 255),
        "navy" => Color::new(0, 0, 128, 255),
        "olive" => Color::new(128, 128, 0, 255),
        "purple" => Color::new(128, 0, 128, 255),
        "teal" => Color::new(0, 128, 128, 255),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(color_str: &str, hex_str: &str) -> Result<Color> {
    if !hex_str.is_ascii() {
        return Err(invalid(color_str, "non-ASCII hex digits"));
    }

    // Short forms repeat each digit: #RGB -> #RRGGBB
    let expanded: String = match hex_str.len() {
        3 | 4 => hex_str.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex_str.to_string(),
        _ => return Err(invalid(color_str, "expected 3, 4, 6, or 8 hex digits")),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16)
            .map_err(|_| invalid(color_str, "bad hex digit"))
    };

    let alpha = if expanded.len() == 8 { channel(3)? } else { 255 };
    Ok(Color::new(channel(0)?, channel(1)?, channel(2)?, alpha))
}

fn parse_functional(color_str: &str, arguments: &str, with_alpha: bool) -> Result<Color> {
    let parts: Vec<&str> = arguments.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(invalid(color_str, &format!("expected {} components", expected)));
    }

    let mut channels = [0u8; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        let value = match part.strip_suffix('%') {
            Some(percent) => percent.trim().parse::<f32>().map(|p| p * 2.55),
            None => part.parse::<f32>(),
        }
        .map_err(|_| invalid(color_str, "bad colour component"))?;
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }

    let alpha = if with_alpha {
        let a: f32 = parts[3]
            .parse()
            .map_err(|_| invalid(color_str, "bad alpha component"))?;
        // Alpha is accepted both as a fraction and as a byte value.
        let a = if a <= 1.0 { a * 255.0 } else { a };
        a.round().clamp(0.0, 255.0) as u8
    } else {
        255
    };

    Ok(Color::new(channels[0], channels[1], channels[2], alpha))
}

pub fn parse_color(color_str: &str) -> Result<Color> {
    let trimmed = color_str.trim().to_lowercase();

    if let Some(hex_str) = trimmed.strip_prefix('#') {
        return parse_hex(color_str, hex_str);
    }

    if let Some(arguments) = trimmed.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        return parse_functional(color_str, arguments, true);
    }

    if let Some(arguments) = trimmed.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_functional(color_str, arguments, false);
    }

    named_color(&trimmed).ok_or_else(|| invalid(color_str, "unknown colour name"))
}
