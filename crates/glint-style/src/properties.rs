//! CSS Property Definitions
//!
//! The subset of properties the image engine writes as inline styles.
//! Uses enums for property identity to keep style maps comparable.

use std::fmt;

/// Property identifier - uses enum for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    // Box model
    Width,
    Height,
    MaxWidth,
    Display,

    // Positioning
    Position,
    Top,
    Right,
    Bottom,
    Left,

    // Reveal
    Opacity,
    Transition,
    Transform,
    WillChange,

    // Cropping
    ObjectFit,
    ObjectPosition,

    // Background
    BackgroundColor,
}

impl PropertyId {
    /// CSS name of the property
    pub fn name(&self) -> &'static str {
        match self {
            PropertyId::Width => "width",
            PropertyId::Height => "height",
            PropertyId::MaxWidth => "max-width",
            PropertyId::Display => "display",
            PropertyId::Position => "position",
            PropertyId::Top => "top",
            PropertyId::Right => "right",
            PropertyId::Bottom => "bottom",
            PropertyId::Left => "left",
            PropertyId::Opacity => "opacity",
            PropertyId::Transition => "transition",
            PropertyId::Transform => "transform",
            PropertyId::WillChange => "will-change",
            PropertyId::ObjectFit => "object-fit",
            PropertyId::ObjectPosition => "object-position",
            PropertyId::BackgroundColor => "background-color",
        }
    }
}

/// Property value
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Pixel length (e.g. 400px)
    Px(f32),
    /// Percentage (e.g. 100%)
    Percent(f32),
    /// Unitless number (e.g. opacity 0..1)
    Number(f32),
    /// Fixed keyword (e.g. absolute, inline-block, cover)
    Keyword(&'static str),
    /// Free-form value (colors, transition shorthands, positions)
    Raw(String),
}

impl StyleValue {
    /// CSS serialization of the value
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Px(v) => write!(f, "{}px", trim_float(*v)),
            StyleValue::Percent(v) => write!(f, "{}%", trim_float(*v)),
            StyleValue::Number(v) => write!(f, "{}", trim_float(*v)),
            StyleValue::Keyword(k) => f.write_str(k),
            StyleValue::Raw(s) => f.write_str(s),
        }
    }
}

/// Render without a trailing ".0" for whole values
fn trim_float(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
