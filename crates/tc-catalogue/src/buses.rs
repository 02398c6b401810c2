//! Bus registry: named routes and their memoized length statistics.
//!
//! A bus is either **looped** (the declared stop sequence closes on itself
//! and is ridden one way) or **linear** (ridden to the far terminus and
//! back).  All derived quantities honour that duality:
//!
//! | Quantity            | Looped        | Linear                          |
//! |---------------------|---------------|---------------------------------|
//! | stop count          | `n`           | `2n − 1`                        |
//! | real length         | forward sum   | forward sum + reverse sum       |
//! | great-circle length | forward sum   | forward sum × 2                 |
//!
//! The road sums differ per direction because road distances may be
//! declared asymmetrically; the great-circle sum is symmetric, so the
//! return leg is a plain doubling.
//!
//! `real_length`, `global_length`, and `unique_stop_count` populate once on
//! first read and are never invalidated — the registries are immutable
//! after the build phase.

use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::stops::StopRegistry;

// ── Bus ───────────────────────────────────────────────────────────────────────

/// A named route over stops, referenced by name.
pub struct Bus {
    name: Arc<str>,
    is_looped: bool,
    stops: Vec<Arc<str>>,
    real_length: OnceCell<f64>,
    global_length: OnceCell<f64>,
    unique_stops: OnceCell<usize>,
}

impl Bus {
    pub fn new(name: Arc<str>, stops: Vec<Arc<str>>, is_looped: bool) -> Self {
        Self {
            name,
            is_looped,
            stops,
            real_length: OnceCell::new(),
            global_length: OnceCell::new(),
            unique_stops: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn is_looped(&self) -> bool {
        self.is_looped
    }

    /// The declared stop sequence.  For a looped bus the first and last
    /// entries coincide.
    pub fn stops(&self) -> &[Arc<str>] {
        &self.stops
    }

    /// Stops visited over a full traversal: the declared count for a looped
    /// bus, out-and-back for a linear one.
    pub fn stop_count(&self) -> usize {
        if self.is_looped {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }

    /// Number of distinct stop names in the declared sequence.
    pub fn unique_stop_count(&self) -> usize {
        *self.unique_stops.get_or_init(|| {
            self.stops.iter().collect::<BTreeSet<_>>().len()
        })
    }

    /// Road length of a full traversal in metres.  Consecutive pairs with
    /// no declared distance contribute nothing.
    pub fn real_length(&self, registry: &StopRegistry) -> f64 {
        *self.real_length.get_or_init(|| {
            let forward = self.road_sum(registry, self.stops.iter());
            if self.is_looped {
                forward
            } else {
                forward + self.road_sum(registry, self.stops.iter().rev())
            }
        })
    }

    /// Great-circle length of a full traversal in metres.
    pub fn global_length(&self, registry: &StopRegistry) -> f64 {
        *self.global_length.get_or_init(|| {
            let forward: f64 = self
                .stops
                .windows(2)
                .filter_map(|pair| {
                    let a = registry.get(&pair[0])?;
                    let b = registry.get(&pair[1])?;
                    Some(a.position().distance_m(b.position()))
                })
                .sum();
            if self.is_looped { forward } else { forward * 2.0 }
        })
    }

    /// Ratio of road length to great-circle length.  At least 1 whenever
    /// every consecutive road distance is declared.
    pub fn curvature(&self, registry: &StopRegistry) -> f64 {
        self.real_length(registry) / self.global_length(registry)
    }

    fn road_sum<'a>(
        &self,
        registry: &StopRegistry,
        stops: impl Iterator<Item = &'a Arc<str>>,
    ) -> f64 {
        let names: Vec<&Arc<str>> = stops.collect();
        names
            .windows(2)
            .filter_map(|pair| registry.distance(pair[0], pair[1]))
            .sum()
    }
}

// ── BusRegistry ───────────────────────────────────────────────────────────────

/// All buses, keyed by name.  Iteration order is lexicographic by name; the
/// palette cycling in the map renderer is defined in terms of it.
#[derive(Default)]
pub struct BusRegistry {
    buses: BTreeMap<Arc<str>, Bus>,
}

impl BusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bus: Bus) {
        self.buses.insert(Arc::clone(bus.name()), bus);
    }

    pub fn get(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    /// Buses in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Bus> {
        self.buses.values()
    }

    pub fn len(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}
