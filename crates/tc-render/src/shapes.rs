//! SVG shape primitives and the document that collects them.
//!
//! Shapes are configured with consuming fluent setters and pushed into an
//! [`SvgDocument`] in draw order.  Rendering is plain string assembly; the
//! attribute layout (paint attributes after the geometry, font attributes
//! after the paint) is fixed.
//!
//! Unset paints render as `none`; an unset stroke width renders as `1`.

use std::fmt::Write;

use crate::color::Color;

// ── SvgPoint ──────────────────────────────────────────────────────────────────

/// A canvas coordinate (pixels, y grows downward).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SvgPoint {
    pub x: f64,
    pub y: f64,
}

// ── Shared paint attributes ───────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct Paint {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
    stroke_linecap: Option<&'static str>,
    stroke_linejoin: Option<&'static str>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            stroke_linecap: None,
            stroke_linejoin: None,
        }
    }
}

impl Paint {
    fn render(&self, out: &mut String) {
        write_attr(out, "fill", &display_or_none(&self.fill));
        write_attr(out, "stroke", &display_or_none(&self.stroke));
        write_attr(out, "stroke-width", &self.stroke_width.to_string());
        if let Some(cap) = self.stroke_linecap {
            write_attr(out, "stroke-linecap", cap);
        }
        if let Some(join) = self.stroke_linejoin {
            write_attr(out, "stroke-linejoin", join);
        }
    }
}

fn display_or_none(color: &Option<Color>) -> String {
    match color {
        Some(c) => c.to_string(),
        None => "none".to_string(),
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    // Infallible for String targets.
    let _ = write!(out, "{name}=\"{value}\" ");
}

/// Generate the paint setters shared by every shape.
macro_rules! paint_setters {
    () => {
        pub fn fill(mut self, color: Color) -> Self {
            self.paint.fill = Some(color);
            self
        }

        pub fn stroke(mut self, color: Color) -> Self {
            self.paint.stroke = Some(color);
            self
        }

        pub fn stroke_width(mut self, width: f64) -> Self {
            self.paint.stroke_width = width;
            self
        }

        /// Round line caps and joins, the only cap/join style the map uses.
        pub fn rounded(mut self) -> Self {
            self.paint.stroke_linecap = Some("round");
            self.paint.stroke_linejoin = Some("round");
            self
        }
    };
}

// ── Polyline ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Polyline {
    points: Vec<SvgPoint>,
    paint: Paint,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(mut self, p: SvgPoint) -> Self {
        self.points.push(p);
        self
    }

    paint_setters!();

    fn render(&self, out: &mut String) {
        out.push_str("<polyline points=\"");
        for p in &self.points {
            let _ = write!(out, "{},{} ", p.x, p.y);
        }
        out.push_str("\" ");
        self.paint.render(out);
        out.push_str("/>");
    }
}

// ── Circle ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Circle {
    center: SvgPoint,
    radius: f64,
    paint: Paint,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, p: SvgPoint) -> Self {
        self.center = p;
        self
    }

    pub fn radius(mut self, r: f64) -> Self {
        self.radius = r;
        self
    }

    paint_setters!();

    fn render(&self, out: &mut String) {
        out.push_str("<circle ");
        write_attr(out, "cx", &self.center.x.to_string());
        write_attr(out, "cy", &self.center.y.to_string());
        write_attr(out, "r", &self.radius.to_string());
        self.paint.render(out);
        out.push_str("/>");
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Text {
    position: SvgPoint,
    offset: SvgPoint,
    font_size: u32,
    font_family: Option<&'static str>,
    font_weight: Option<&'static str>,
    content: String,
    paint: Paint,
}

impl Text {
    pub fn new() -> Self {
        Self {
            font_size: 1,
            ..Self::default()
        }
    }

    pub fn position(mut self, p: SvgPoint) -> Self {
        self.position = p;
        self
    }

    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = SvgPoint { x: dx, y: dy };
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: &'static str) -> Self {
        self.font_family = Some(family);
        self
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = Some("bold");
        self
    }

    pub fn content(mut self, text: &str) -> Self {
        self.content = text.to_string();
        self
    }

    paint_setters!();

    fn render(&self, out: &mut String) {
        out.push_str("<text ");
        write_attr(out, "x", &self.position.x.to_string());
        write_attr(out, "y", &self.position.y.to_string());
        write_attr(out, "dx", &self.offset.x.to_string());
        write_attr(out, "dy", &self.offset.y.to_string());
        write_attr(out, "font-size", &self.font_size.to_string());
        self.paint.render(out);
        if let Some(family) = self.font_family {
            write_attr(out, "font-family", family);
        }
        if let Some(weight) = self.font_weight {
            write_attr(out, "font-weight", weight);
        }
        let _ = write!(out, ">{}</text>", self.content);
    }
}

// ── SvgDocument ───────────────────────────────────────────────────────────────

/// An ordered collection of shapes; later shapes draw over earlier ones.
#[derive(Default)]
pub struct SvgDocument {
    shapes: Vec<SvgShape>,
}

pub enum SvgShape {
    Polyline(Polyline),
    Circle(Circle),
    Text(Text),
}

impl From<Polyline> for SvgShape {
    fn from(s: Polyline) -> Self {
        SvgShape::Polyline(s)
    }
}

impl From<Circle> for SvgShape {
    fn from(s: Circle) -> Self {
        SvgShape::Circle(s)
    }
}

impl From<Text> for SvgShape {
    fn from(s: Text) -> Self {
        SvgShape::Text(s)
    }
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: impl Into<SvgShape>) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialise the document with the fixed XML/svg framing.
    pub fn render(&self) -> String {
        let mut out = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">",
        );
        for shape in &self.shapes {
            match shape {
                SvgShape::Polyline(s) => s.render(&mut out),
                SvgShape::Circle(s) => s.render(&mut out),
                SvgShape::Text(s) => s.render(&mut out),
            }
        }
        out.push_str("</svg>");
        out
    }
}
