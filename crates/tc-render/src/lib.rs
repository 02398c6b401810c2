//! `tc-render` — projecting the network onto a canvas and composing the SVG.
//!
//! # Crate layout
//!
//! | Module         | Contents                                           |
//! |----------------|----------------------------------------------------|
//! | [`color`]      | `Color` (named / rgb / rgba), input encoding       |
//! | [`shapes`]     | `Polyline`, `Circle`, `Text`, `SvgDocument`        |
//! | [`projection`] | `Projector`: (lat, lon) → canvas coordinates       |
//! | [`settings`]   | `RenderSettings`, `Layer`                          |
//! | [`map`]        | `MapRenderer`: layered network drawing             |

pub mod color;
pub mod map;
pub mod projection;
pub mod settings;
pub mod shapes;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use map::MapRenderer;
pub use projection::Projector;
pub use settings::{Layer, RenderSettings};
pub use shapes::{Circle, Polyline, SvgDocument, SvgPoint, Text};
