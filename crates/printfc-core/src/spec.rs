//! Per-directive format specification.

/// Alignment of the rendered value inside its field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Pad on the left (printf default).
    #[default]
    Right,
    /// Pad on the right (`-` flag).
    Left,
    /// Zero padding between sign/prefix and digits (`0` flag on an
    /// arithmetic argument).
    Numeric,
}

/// Sign display mode for numeric conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sign {
    /// Only negative values carry a sign.
    #[default]
    None,
    /// `+` flag: positive values carry an explicit `+`.
    Plus,
    /// Space flag: positive values carry a leading space.
    Space,
}

/// Layout state for a single directive.
///
/// Built fresh per directive by the parser, adjusted by the dispatcher,
/// consumed by the renderer, and discarded. Never retained across
/// directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub align: Align,
    pub sign: Sign,
    /// Fill byte for width padding.
    pub fill: u8,
    /// `#` flag: conversion-specific decoration (`0`, `0x`, `0X` prefixes,
    /// retained decimal points). Cleared for integral zero values.
    pub alt: bool,
    /// Minimum field width.
    pub width: u32,
    /// Minimum digits for integers, fraction digits for floats, maximum
    /// bytes for strings. Unset unless the directive names one.
    pub precision: Option<u32>,
    /// Thousands-separator byte for decimal integer conversions.
    pub thousands: Option<u8>,
    /// Conversion character; 0 once cleared (null pointers, textual
    /// booleans).
    pub conv: u8,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            align: Align::Right,
            sign: Sign::None,
            fill: b' ',
            alt: false,
            width: 0,
            precision: None,
            thousands: None,
            conv: 0,
        }
    }
}
