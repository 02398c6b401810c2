//! Stop registry: named points with road distances and graph identities.
//!
//! # Vertex ids
//!
//! Every stop owns two transfer-graph vertices, assigned at insertion: the
//! `k`-th inserted stop gets `main_vertex = 2k` ("in transit here") and
//! `wait_vertex = 2k + 1` ("waiting to board here").  Routing queries enter
//! and leave through wait vertices; the boarding edge between the pair is
//! what prices the wait.
//!
//! # Road distances
//!
//! Distances are declared per direction.  A distance from A to B stands in
//! for B to A only while B→A is undeclared, so asymmetric one-way data
//! overrides the symmetric default.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use tc_core::{GeoBounds, GeoPoint, VertexId};

// ── Stop ──────────────────────────────────────────────────────────────────────

/// A named stop with its coordinates, declared road distances, the buses
/// serving it, and its two transfer-graph vertices.
pub struct Stop {
    name: Arc<str>,
    position: GeoPoint,
    /// Declared road distances to neighbours, metres, keyed by stop name.
    /// Unordered — only ever probed by key.
    road_distances: FxHashMap<Arc<str>, f64>,
    /// Names of buses serving this stop, kept sorted: the Stop query answer
    /// is this set, verbatim.
    buses: BTreeSet<Arc<str>>,
    main_vertex: VertexId,
    wait_vertex: VertexId,
}

impl Stop {
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Buses serving this stop, lexicographically ascending.
    pub fn buses(&self) -> impl Iterator<Item = &Arc<str>> {
        self.buses.iter()
    }

    pub fn main_vertex(&self) -> VertexId {
        self.main_vertex
    }

    pub fn wait_vertex(&self) -> VertexId {
        self.wait_vertex
    }
}

// ── StopRegistry ──────────────────────────────────────────────────────────────

/// All stops, keyed by name.  Iteration order is lexicographic by name —
/// the map rendering and response contracts depend on it.
#[derive(Default)]
pub struct StopRegistry {
    stops: BTreeMap<Arc<str>, Stop>,
    /// Insertion counter; `stops.len()` cannot serve because names decide
    /// map position, not arrival order.
    inserted: u32,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop and assign its vertex pair.  Returns its shared name.
    pub fn add_stop(&mut self, name: &str, position: GeoPoint) -> Arc<str> {
        let name: Arc<str> = Arc::from(name);
        let k = self.inserted;
        self.inserted += 1;
        self.stops.insert(
            Arc::clone(&name),
            Stop {
                name: Arc::clone(&name),
                position,
                road_distances: FxHashMap::default(),
                buses: BTreeSet::new(),
                main_vertex: VertexId(2 * k),
                wait_vertex: VertexId(2 * k + 1),
            },
        );
        name
    }

    /// Declare the road distance `from → to` in metres.  `to` need not be
    /// registered yet.  No-op if `from` is unknown.
    pub fn add_distance(&mut self, from: &str, to: &str, metres: f64) {
        if let Some(stop) = self.stops.get_mut(from) {
            stop.road_distances.insert(Arc::from(to), metres);
        }
    }

    /// Road distance from `a` to `b`: the declared `a → b` distance, else
    /// the declared `b → a` distance, else unknown.
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        if let Some(d) = self.stops.get(a).and_then(|s| s.road_distances.get(b)) {
            return Some(*d);
        }
        self.stops.get(b).and_then(|s| s.road_distances.get(a)).copied()
    }

    /// Record that `bus` serves `stop`.  No-op if the stop is unknown.
    pub fn attach_bus(&mut self, stop: &str, bus: &Arc<str>) {
        if let Some(s) = self.stops.get_mut(stop) {
            s.buses.insert(Arc::clone(bus));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    /// Stops in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Transfer-graph vertex count: two per stop.
    pub fn vertex_count(&self) -> usize {
        self.stops.len() * 2
    }

    /// Bounding box over all stop coordinates, or `None` with no stops.
    pub fn geo_bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.stops.values().map(|s| s.position))
    }
}
