//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` stores latitude/longitude in **radians** — every consumer
//! (length derivations, travel-time edges, the map projection) works in
//! radian space, so the degree→radian conversion happens exactly once, at
//! input time.  Double precision throughout: travel times and curvature
//! ratios end up in query responses and must not drift.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate stored in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from degree coordinates, as they appear in input documents.
    #[inline]
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
        }
    }

    /// Great-circle distance in metres, by the spherical law of cosines:
    ///
    /// ```text
    /// acos(sin φ₁·sin φ₂ + cos φ₁·cos φ₂·cos(λ₂−λ₁)) · R
    /// ```
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let cos_arc = self.lat.sin() * other.lat.sin()
            + self.lat.cos() * other.lat.cos() * (other.lon - self.lon).cos();
        // Rounding can push the cosine a hair outside acos's domain.
        cos_arc.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── GeoBounds ─────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box over a set of coordinates, in radians.
///
/// Grown point by point with [`extend`](Self::extend); a box over an empty
/// set does not exist, so construction starts from a first point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// A degenerate box containing exactly `p`.
    pub fn at(p: GeoPoint) -> Self {
        Self {
            min_lat: p.lat,
            max_lat: p.lat,
            min_lon: p.lon,
            max_lon: p.lon,
        }
    }

    /// Grow the box to contain `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lat = self.max_lat.max(p.lat);
        self.min_lon = self.min_lon.min(p.lon);
        self.max_lon = self.max_lon.max(p.lon);
    }

    /// Bounding box of all points in `iter`, or `None` for an empty iterator.
    pub fn from_points(iter: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        let mut iter = iter.into_iter();
        let mut bounds = Self::at(iter.next()?);
        for p in iter {
            bounds.extend(p);
        }
        Some(bounds)
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}
