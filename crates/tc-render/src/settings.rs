//! Map-rendering parameters, deserialized straight from the input document.

use serde::Deserialize;

use crate::color::Color;

/// One drawable layer of the map.  The input lists layers bottom-up; later
/// entries draw over earlier ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    BusLines,
    BusLabels,
    StopPoints,
    StopLabels,
}

/// The `render_settings` object of the input document, field for field.
#[derive(Clone, Debug, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
    pub layers: Vec<Layer>,
}
