// FILE: src/core/properties.rs

use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Identifiers are indices into sparse arrays, so they must stay below this bound.
pub const MAX_IDENTIFIER_INDEX: usize = i16::MAX as usize;

/// Common behaviour of the compact handles handed out by an [`IdNameMap`](super::IdNameMap).
pub trait Identifier: Copy + Eq + Hash + fmt::Debug {
    /// The reserved "no such identifier" handle; always index 0.
    const INVALID: Self;
    /// Name bound to [`Identifier::INVALID`] in every map.
    const INVALID_NAME: &'static str;

    /// Builds a handle from a raw index, `None` when the index is out of range.
    fn from_index(index: usize) -> Option<Self>;

    fn index(self) -> usize;

    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PropertyId(u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ShorthandId(u16);

impl Identifier for PropertyId {
    const INVALID: Self = PropertyId(0);
    const INVALID_NAME: &'static str = "invalid_property";

    fn from_index(index: usize) -> Option<Self> {
        (index < MAX_IDENTIFIER_INDEX).then(|| PropertyId(index as u16))
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl Identifier for ShorthandId {
    const INVALID: Self = ShorthandId(0);
    const INVALID_NAME: &'static str = "invalid_shorthand";

    fn from_index(index: usize) -> Option<Self> {
        (index < MAX_IDENTIFIER_INDEX).then(|| ShorthandId(index as u16))
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl Default for ShorthandId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property#{}", self.0)
    }
}

impl fmt::Display for ShorthandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shorthand#{}", self.0)
    }
}

// Pre-assigned property IDs for the default property table
impl PropertyId {
    pub const MARGIN_TOP: Self = Self(0x01);
    pub const MARGIN_RIGHT: Self = Self(0x02);
    pub const MARGIN_BOTTOM: Self = Self(0x03);
    pub const MARGIN_LEFT: Self = Self(0x04);
    pub const PADDING_TOP: Self = Self(0x05);
    pub const PADDING_RIGHT: Self = Self(0x06);
    pub const PADDING_BOTTOM: Self = Self(0x07);
    pub const PADDING_LEFT: Self = Self(0x08);
    pub const BORDER_TOP_WIDTH: Self = Self(0x09);
    pub const BORDER_RIGHT_WIDTH: Self = Self(0x0A);
    pub const BORDER_BOTTOM_WIDTH: Self = Self(0x0B);
    pub const BORDER_LEFT_WIDTH: Self = Self(0x0C);
    pub const BORDER_TOP_COLOR: Self = Self(0x0D);
    pub const BORDER_RIGHT_COLOR: Self = Self(0x0E);
    pub const BORDER_BOTTOM_COLOR: Self = Self(0x0F);
    pub const BORDER_LEFT_COLOR: Self = Self(0x10);
    pub const BORDER_TOP_LEFT_RADIUS: Self = Self(0x11);
    pub const BORDER_TOP_RIGHT_RADIUS: Self = Self(0x12);
    pub const BORDER_BOTTOM_RIGHT_RADIUS: Self = Self(0x13);
    pub const BORDER_BOTTOM_LEFT_RADIUS: Self = Self(0x14);

    // Layout
    pub const DISPLAY: Self = Self(0x15);
    pub const POSITION: Self = Self(0x16);
    pub const TOP: Self = Self(0x17);
    pub const RIGHT: Self = Self(0x18);
    pub const BOTTOM: Self = Self(0x19);
    pub const LEFT: Self = Self(0x1A);
    pub const Z_INDEX: Self = Self(0x1B);
    pub const WIDTH: Self = Self(0x1C);
    pub const MIN_WIDTH: Self = Self(0x1D);
    pub const MAX_WIDTH: Self = Self(0x1E);
    pub const HEIGHT: Self = Self(0x1F);
    pub const MIN_HEIGHT: Self = Self(0x20);
    pub const MAX_HEIGHT: Self = Self(0x21);
    pub const LINE_HEIGHT: Self = Self(0x22);
    pub const OVERFLOW_X: Self = Self(0x23);
    pub const OVERFLOW_Y: Self = Self(0x24);
    pub const ROW_GAP: Self = Self(0x25);
    pub const COLUMN_GAP: Self = Self(0x26);

    // Visual
    pub const VISIBILITY: Self = Self(0x27);
    pub const BACKGROUND_COLOR: Self = Self(0x28);
    pub const COLOR: Self = Self(0x29);
    pub const OPACITY: Self = Self(0x2A);
    pub const CURSOR: Self = Self(0x2B);
    pub const PERSPECTIVE_ORIGIN_X: Self = Self(0x2C);
    pub const PERSPECTIVE_ORIGIN_Y: Self = Self(0x2D);

    // Typography
    pub const FONT_FAMILY: Self = Self(0x2E);
    pub const FONT_STYLE: Self = Self(0x2F);
    pub const FONT_WEIGHT: Self = Self(0x30);
    pub const FONT_SIZE: Self = Self(0x31);
    pub const TEXT_ALIGN: Self = Self(0x32);
    pub const TEXT_DECORATION: Self = Self(0x33);
    pub const TEXT_TRANSFORM: Self = Self(0x34);
    pub const WHITE_SPACE: Self = Self(0x35);

    /// Number of pre-assigned IDs, counting [`Identifier::INVALID`].
    pub const NUM_DEFINED: usize = 0x36;
}

// Pre-assigned shorthand IDs for the default shorthand table
impl ShorthandId {
    pub const MARGIN: Self = Self(0x01);
    pub const PADDING: Self = Self(0x02);
    pub const BORDER_WIDTH: Self = Self(0x03);
    pub const BORDER_COLOR: Self = Self(0x04);
    pub const BORDER_TOP: Self = Self(0x05);
    pub const BORDER_RIGHT: Self = Self(0x06);
    pub const BORDER_BOTTOM: Self = Self(0x07);
    pub const BORDER_LEFT: Self = Self(0x08);
    pub const BORDER: Self = Self(0x09);
    pub const BORDER_RADIUS: Self = Self(0x0A);
    pub const OVERFLOW: Self = Self(0x0B);
    pub const GAP: Self = Self(0x0C);
    pub const FONT: Self = Self(0x0D);
    pub const PERSPECTIVE_ORIGIN: Self = Self(0x0E);

    pub const NUM_DEFINED: usize = 0x0F;
}
