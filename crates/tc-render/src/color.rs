//! SVG color values and their input-document encoding.
//!
//! A color arrives as a JSON string (used verbatim), a 3-array of integer
//! channels, or a 4-array whose last element is a floating-point alpha.
//! The untagged serde form tries the widest shape first.

use std::fmt;

use serde::Deserialize;

/// A paint value for `fill`/`stroke` attributes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Rgba(u8, u8, u8, f64),
    Rgb(u8, u8, u8),
    Named(String),
}

impl Color {
    pub fn named(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}
