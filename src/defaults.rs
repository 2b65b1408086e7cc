//! The default property and shorthand tables
//!
//! Every entry binds a pre-assigned identifier, so lookups of the common
//! properties never depend on registration order.

use crate::core::{PropertyId, ShorthandId};
use crate::definition::ShorthandType;
use crate::error::{Result, SpecError};
use crate::stylesheet::StyleSheetSpecification;

const LENGTH_PERCENT_AUTO: [(&str, &str); 2] = [("length_percent", ""), ("keyword", "auto")];
const LENGTH_PERCENT: [(&str, &str); 1] = [("length_percent", "")];
const NUMBER_LENGTH_PERCENT: [(&str, &str); 1] = [("number_length_percent", "")];
const LENGTH: [(&str, &str); 1] = [("length", "")];
const COLOR: [(&str, &str); 1] = [("color", "")];

fn register(
    spec: &mut StyleSheetSpecification,
    id: PropertyId,
    name: &str,
    default_value: &str,
    inherited: bool,
    forces_layout: bool,
    parsers: &[(&str, &str)],
) -> Result<()> {
    let mut builder = spec.register_property_with_id(name, default_value, inherited, forces_layout, id)?;
    for (parser, parameters) in parsers {
        builder = builder.add_parser(parser, parameters);
    }
    Ok(())
}

fn keyword(
    spec: &mut StyleSheetSpecification,
    id: PropertyId,
    name: &str,
    default_value: &str,
    inherited: bool,
    forces_layout: bool,
    keywords: &str,
) -> Result<()> {
    register(spec, id, name, default_value, inherited, forces_layout, &[("keyword", keywords)])
}

fn register_box_model(spec: &mut StyleSheetSpecification) -> Result<()> {
    register(spec, PropertyId::MARGIN_TOP, "margin-top", "0px", false, true, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::MARGIN_RIGHT, "margin-right", "0px", false, true, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::MARGIN_BOTTOM, "margin-bottom", "0px", false, true, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::MARGIN_LEFT, "margin-left", "0px", false, true, &LENGTH_PERCENT_AUTO)?;

    register(spec, PropertyId::PADDING_TOP, "padding-top", "0px", false, true, &LENGTH_PERCENT)?;
    register(spec, PropertyId::PADDING_RIGHT, "padding-right", "0px", false, true, &LENGTH_PERCENT)?;
    register(spec, PropertyId::PADDING_BOTTOM, "padding-bottom", "0px", false, true, &LENGTH_PERCENT)?;
    register(spec, PropertyId::PADDING_LEFT, "padding-left", "0px", false, true, &LENGTH_PERCENT)?;

    register(spec, PropertyId::BORDER_TOP_WIDTH, "border-top-width", "0px", false, true, &LENGTH)?;
    register(spec, PropertyId::BORDER_RIGHT_WIDTH, "border-right-width", "0px", false, true, &LENGTH)?;
    register(spec, PropertyId::BORDER_BOTTOM_WIDTH, "border-bottom-width", "0px", false, true, &LENGTH)?;
    register(spec, PropertyId::BORDER_LEFT_WIDTH, "border-left-width", "0px", false, true, &LENGTH)?;

    register(spec, PropertyId::BORDER_TOP_COLOR, "border-top-color", "black", false, false, &COLOR)?;
    register(spec, PropertyId::BORDER_RIGHT_COLOR, "border-right-color", "black", false, false, &COLOR)?;
    register(spec, PropertyId::BORDER_BOTTOM_COLOR, "border-bottom-color", "black", false, false, &COLOR)?;
    register(spec, PropertyId::BORDER_LEFT_COLOR, "border-left-color", "black", false, false, &COLOR)?;

    register(spec, PropertyId::BORDER_TOP_LEFT_RADIUS, "border-top-left-radius", "0px", false, false, &LENGTH)?;
    register(spec, PropertyId::BORDER_TOP_RIGHT_RADIUS, "border-top-right-radius", "0px", false, false, &LENGTH)?;
    register(spec, PropertyId::BORDER_BOTTOM_RIGHT_RADIUS, "border-bottom-right-radius", "0px", false, false, &LENGTH)?;
    register(spec, PropertyId::BORDER_BOTTOM_LEFT_RADIUS, "border-bottom-left-radius", "0px", false, false, &LENGTH)?;

    Ok(())
}

fn register_layout(spec: &mut StyleSheetSpecification) -> Result<()> {
    keyword(spec, PropertyId::DISPLAY, "display", "inline", false, true, "none, block, inline, inline-block, flex, table")?;
    keyword(spec, PropertyId::POSITION, "position", "static", false, true, "static, relative, absolute, fixed")?;

    register(spec, PropertyId::TOP, "top", "auto", false, false, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::RIGHT, "right", "auto", false, false, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::BOTTOM, "bottom", "auto", false, false, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::LEFT, "left", "auto", false, false, &LENGTH_PERCENT_AUTO)?;

    register(spec, PropertyId::Z_INDEX, "z-index", "auto", false, false, &[("number", ""), ("keyword", "auto")])?;

    register(spec, PropertyId::WIDTH, "width", "auto", false, true, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::MIN_WIDTH, "min-width", "0px", false, true, &LENGTH_PERCENT)?;
    register(spec, PropertyId::MAX_WIDTH, "max-width", "none", false, true, &[("length_percent", ""), ("keyword", "none")])?;
    register(spec, PropertyId::HEIGHT, "height", "auto", false, true, &LENGTH_PERCENT_AUTO)?;
    register(spec, PropertyId::MIN_HEIGHT, "min-height", "0px", false, true, &LENGTH_PERCENT)?;
    register(spec, PropertyId::MAX_HEIGHT, "max-height", "none", false, true, &[("length_percent", ""), ("keyword", "none")])?;

    register(spec, PropertyId::LINE_HEIGHT, "line-height", "1.2", true, true, &NUMBER_LENGTH_PERCENT)?;

    keyword(spec, PropertyId::OVERFLOW_X, "overflow-x", "visible", false, true, "visible, hidden, auto, scroll")?;
    keyword(spec, PropertyId::OVERFLOW_Y, "overflow-y", "visible", false, true, "visible, hidden, auto, scroll")?;

    register(spec, PropertyId::ROW_GAP, "row-gap", "0px", false, true, &LENGTH_PERCENT)?;
    register(spec, PropertyId::COLUMN_GAP, "column-gap", "0px", false, true, &LENGTH_PERCENT)?;

    Ok(())
}

fn register_visual(spec: &mut StyleSheetSpecification) -> Result<()> {
    keyword(spec, PropertyId::VISIBILITY, "visibility", "visible", false, false, "visible, hidden")?;
    register(spec, PropertyId::BACKGROUND_COLOR, "background-color", "transparent", false, false, &COLOR)?;
    register(spec, PropertyId::COLOR, "color", "white", true, false, &COLOR)?;
    register(spec, PropertyId::OPACITY, "opacity", "1", true, false, &[("number", "")])?;
    register(spec, PropertyId::CURSOR, "cursor", "", true, false, &[("string", "")])?;

    let origin = [("number_length_percent", ""), ("keyword", "left, center, right")];
    register(spec, PropertyId::PERSPECTIVE_ORIGIN_X, "perspective-origin-x", "50%", false, false, &origin)?;
    let origin = [("number_length_percent", ""), ("keyword", "top, center, bottom")];
    register(spec, PropertyId::PERSPECTIVE_ORIGIN_Y, "perspective-origin-y", "50%", false, false, &origin)?;

    Ok(())
}

fn register_typography(spec: &mut StyleSheetSpecification) -> Result<()> {
    register(spec, PropertyId::FONT_FAMILY, "font-family", "", true, true, &[("string", "")])?;
    keyword(spec, PropertyId::FONT_STYLE, "font-style", "normal", true, true, "normal, italic")?;
    keyword(spec, PropertyId::FONT_WEIGHT, "font-weight", "normal", true, true, "normal, bold")?;
    register(spec, PropertyId::FONT_SIZE, "font-size", "12px", true, true, &LENGTH)?;

    keyword(spec, PropertyId::TEXT_ALIGN, "text-align", "left", true, true, "left, right, center, justify")?;
    keyword(spec, PropertyId::TEXT_DECORATION, "text-decoration", "none", false, false, "none, underline, overline, line-through")?;
    keyword(spec, PropertyId::TEXT_TRANSFORM, "text-transform", "none", true, true, "none, capitalize, uppercase, lowercase")?;
    keyword(spec, PropertyId::WHITE_SPACE, "white-space", "normal", true, true, "normal, pre, nowrap, pre-wrap, pre-line")?;

    Ok(())
}

fn register_shorthands(spec: &mut StyleSheetSpecification) -> Result<()> {
    let shorthands: [(ShorthandId, &str, &str, ShorthandType); 14] = [
        (ShorthandId::MARGIN, "margin", "margin-top margin-right margin-bottom margin-left", ShorthandType::Box),
        (ShorthandId::PADDING, "padding", "padding-top padding-right padding-bottom padding-left", ShorthandType::Box),
        (
            ShorthandId::BORDER_WIDTH,
            "border-width",
            "border-top-width border-right-width border-bottom-width border-left-width",
            ShorthandType::Box,
        ),
        (
            ShorthandId::BORDER_COLOR,
            "border-color",
            "border-top-color border-right-color border-bottom-color border-left-color",
            ShorthandType::Box,
        ),
        (ShorthandId::BORDER_TOP, "border-top", "border-top-width border-top-color", ShorthandType::FallThrough),
        (ShorthandId::BORDER_RIGHT, "border-right", "border-right-width border-right-color", ShorthandType::FallThrough),
        (ShorthandId::BORDER_BOTTOM, "border-bottom", "border-bottom-width border-bottom-color", ShorthandType::FallThrough),
        (ShorthandId::BORDER_LEFT, "border-left", "border-left-width border-left-color", ShorthandType::FallThrough),
        (ShorthandId::BORDER, "border", "border-top border-right border-bottom border-left", ShorthandType::Recursive),
        (
            ShorthandId::BORDER_RADIUS,
            "border-radius",
            "border-top-left-radius border-top-right-radius border-bottom-right-radius border-bottom-left-radius",
            ShorthandType::Box,
        ),
        (ShorthandId::OVERFLOW, "overflow", "overflow-x overflow-y", ShorthandType::Replicate),
        (ShorthandId::GAP, "gap", "row-gap column-gap", ShorthandType::Replicate),
        (ShorthandId::FONT, "font", "font-style font-weight font-size font-family", ShorthandType::FallThrough),
        (
            ShorthandId::PERSPECTIVE_ORIGIN,
            "perspective-origin",
            "perspective-origin-x perspective-origin-y",
            ShorthandType::FallThrough,
        ),
    ];

    for (id, name, property_names, shorthand_type) in shorthands {
        spec.register_shorthand_with_id(name, property_names, shorthand_type, id)?;
    }

    Ok(())
}

/// Registers the default tables and checks every pre-assigned identifier got a name.
pub fn register_default_properties(spec: &mut StyleSheetSpecification) -> Result<()> {
    register_box_model(spec)?;
    register_layout(spec)?;
    register_visual(spec)?;
    register_typography(spec)?;
    register_shorthands(spec)?;

    let missing_properties = spec.properties().property_map().missing_ids(PropertyId::NUM_DEFINED);
    let missing_shorthands = spec.properties().shorthand_map().missing_ids(ShorthandId::NUM_DEFINED);
    if !missing_properties.is_empty() || !missing_shorthands.is_empty() {
        return Err(SpecError::IdentifierConflict {
            message: format!(
                "pre-assigned identifiers without a definition: properties {:?}, shorthands {:?}",
                missing_properties, missing_shorthands
            ),
        });
    }

    log::debug!(
        "Registered {} default properties and {} default shorthands",
        PropertyId::NUM_DEFINED - 1,
        ShorthandId::NUM_DEFINED - 1
    );
    Ok(())
}
