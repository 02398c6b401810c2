//! Layered rendering of the whole network.
//!
//! Buses and stops are drawn in registry (lexicographic name) order.  The
//! palette is a circular iterator restarted at its head for each layer
//! pass and advanced once per bus, so `bus_lines` and `bus_labels` agree
//! on every bus's color.  Labels are drawn twice: a wide underlayer
//! "shadow" in a fixed color for legibility, then the foreground glyphs.

use tc_catalogue::{Bus, Catalogue, Stop};

use crate::color::Color;
use crate::projection::Projector;
use crate::settings::{Layer, RenderSettings};
use crate::shapes::{Circle, Polyline, SvgDocument, Text};

/// Draws a [`Catalogue`] into an [`SvgDocument`] according to the
/// configured layer order.
pub struct MapRenderer<'a> {
    catalogue: &'a Catalogue,
    settings: &'a RenderSettings,
    projector: Projector,
}

impl<'a> MapRenderer<'a> {
    pub fn new(catalogue: &'a Catalogue, settings: &'a RenderSettings) -> Self {
        let projector = Projector::new(
            catalogue.geo_bounds(),
            settings.width,
            settings.height,
            settings.padding,
        );
        Self {
            catalogue,
            settings,
            projector,
        }
    }

    pub fn render(&self) -> SvgDocument {
        let mut doc = SvgDocument::new();
        for layer in &self.settings.layers {
            match layer {
                Layer::BusLines => self.draw_bus_lines(&mut doc),
                Layer::BusLabels => self.draw_bus_labels(&mut doc),
                Layer::StopPoints => self.draw_stop_points(&mut doc),
                Layer::StopLabels => self.draw_stop_labels(&mut doc),
            }
        }
        doc
    }

    // ── Layers ────────────────────────────────────────────────────────────

    fn draw_bus_lines(&self, doc: &mut SvgDocument) {
        let mut palette = self.settings.color_palette.iter().cycle();
        for bus in self.catalogue.buses().iter() {
            let color = palette.next().cloned();
            let mut line = Polyline::new()
                .stroke_width(self.settings.line_width)
                .rounded();
            if let Some(color) = color {
                line = line.stroke(color);
            }
            for stop in self.route_stops(bus) {
                line = line.point(self.projector.project(stop.position()));
            }
            if !bus.is_looped() {
                for stop in self.route_stops(bus).rev().skip(1) {
                    line = line.point(self.projector.project(stop.position()));
                }
            }
            doc.push(line);
        }
    }

    fn draw_bus_labels(&self, doc: &mut SvgDocument) {
        let mut palette = self.settings.color_palette.iter().cycle();
        for bus in self.catalogue.buses().iter() {
            let color = palette.next().cloned();
            let stops: Vec<&Stop> = self.route_stops(bus).collect();
            let Some(&first) = stops.first() else { continue };

            self.push_bus_label(doc, bus, first, color.clone());

            if let Some(&last) = stops.last() {
                if !bus.is_looped() && last.name() != first.name() {
                    self.push_bus_label(doc, bus, last, color);
                }
            }
        }
    }

    fn draw_stop_points(&self, doc: &mut SvgDocument) {
        for stop in self.catalogue.stops().iter() {
            doc.push(
                Circle::new()
                    .center(self.projector.project(stop.position()))
                    .radius(self.settings.stop_radius)
                    .fill(Color::named("white")),
            );
        }
    }

    fn draw_stop_labels(&self, doc: &mut SvgDocument) {
        for stop in self.catalogue.stops().iter() {
            let base = Text::new()
                .position(self.projector.project(stop.position()))
                .offset(
                    self.settings.stop_label_offset[0],
                    self.settings.stop_label_offset[1],
                )
                .font_size(self.settings.stop_label_font_size)
                .font_family("Verdana")
                .content(stop.name());

            doc.push(self.underlay(base.clone()));
            doc.push(base.fill(Color::named("black")));
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// The declared stop sequence of `bus`, resolved against the registry.
    fn route_stops(
        &self,
        bus: &'a Bus,
    ) -> impl DoubleEndedIterator<Item = &'a Stop> + '_ {
        bus.stops()
            .iter()
            .filter_map(|name| self.catalogue.stop(name))
    }

    fn push_bus_label(
        &self,
        doc: &mut SvgDocument,
        bus: &Bus,
        stop: &Stop,
        color: Option<Color>,
    ) {
        let base = Text::new()
            .position(self.projector.project(stop.position()))
            .offset(
                self.settings.bus_label_offset[0],
                self.settings.bus_label_offset[1],
            )
            .font_size(self.settings.bus_label_font_size)
            .font_family("Verdana")
            .bold()
            .content(bus.name());

        doc.push(self.underlay(base.clone()));
        let mut foreground = base;
        if let Some(color) = color {
            foreground = foreground.fill(color);
        }
        doc.push(foreground);
    }

    /// The shadow twin of a label: underlayer paint on both fill and
    /// stroke, widened and rounded.
    fn underlay(&self, label: Text) -> Text {
        label
            .fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .rounded()
    }
}
