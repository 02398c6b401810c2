//! Linear map from geographic space to canvas space.
//!
//! One uniform scale factor serves both axes so shapes keep their aspect
//! ratio; the factor is chosen as the tighter of the two padded fits.
//! Latitude grows northward but canvas y grows downward, hence the
//! `max_lat − lat` flip.

use tc_core::{GeoBounds, GeoPoint};

use crate::shapes::SvgPoint;

/// Projects radian coordinates onto a `width × height` canvas with
/// `padding` kept clear on every side.
#[derive(Copy, Clone, Debug)]
pub struct Projector {
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
    padding: f64,
}

impl Projector {
    /// Fit `bounds` into the canvas.  With no bounds (an empty network)
    /// every point collapses onto the padding corner.
    pub fn new(bounds: Option<GeoBounds>, width: f64, height: f64, padding: f64) -> Self {
        let Some(bounds) = bounds else {
            return Self {
                min_lon: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
                padding,
            };
        };

        let lat_span = bounds.lat_span();
        let lon_span = bounds.lon_span();

        let zoom = if lat_span == 0.0 && lon_span == 0.0 {
            0.0
        } else if lon_span == 0.0 {
            (height - 2.0 * padding) / lat_span
        } else if lat_span == 0.0 {
            (width - 2.0 * padding) / lon_span
        } else {
            let by_height = (height - 2.0 * padding) / lat_span;
            let by_width = (width - 2.0 * padding) / lon_span;
            by_height.min(by_width)
        };

        Self {
            min_lon: bounds.min_lon,
            max_lat: bounds.max_lat,
            zoom,
            padding,
        }
    }

    pub fn project(&self, p: GeoPoint) -> SvgPoint {
        SvgPoint {
            x: (p.lon - self.min_lon) * self.zoom + self.padding,
            y: (self.max_lat - p.lat) * self.zoom + self.padding,
        }
    }
}
