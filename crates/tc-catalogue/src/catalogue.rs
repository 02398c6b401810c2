//! The `Catalogue` facade: both registries plus cross-reference wiring.

use std::sync::Arc;

use tc_core::{GeoBounds, GeoPoint};

use crate::buses::{Bus, BusRegistry};
use crate::error::{CatalogueError, CatalogueResult};
use crate::stops::{Stop, StopRegistry};

/// The whole static network: stops and buses, cross-linked by name.
///
/// Built in two passes — every stop first, then every bus — so a route may
/// reference any stop regardless of declaration order.  Read-only once
/// built.
#[derive(Default)]
pub struct Catalogue {
    stops: StopRegistry,
    buses: BusRegistry,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop together with its declared road distances.
    pub fn add_stop<'a>(
        &mut self,
        name: &str,
        position: GeoPoint,
        road_distances: impl IntoIterator<Item = (&'a str, f64)>,
    ) {
        self.stops.add_stop(name, position);
        for (neighbour, metres) in road_distances {
            self.stops.add_distance(name, neighbour, metres);
        }
    }

    /// Register a bus and attach it to every stop it serves.
    ///
    /// Every name in `stop_names` must already be registered.
    pub fn add_bus(
        &mut self,
        name: &str,
        stop_names: &[String],
        is_looped: bool,
    ) -> CatalogueResult<()> {
        // Resolve names up front so a bad route leaves no partial wiring.
        let mut stops = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            let stop = self.stops.get(stop_name).ok_or_else(|| CatalogueError::UnknownStop {
                bus: name.to_string(),
                stop: stop_name.clone(),
            })?;
            stops.push(Arc::clone(stop.name()));
        }

        let bus = Bus::new(Arc::from(name), stops, is_looped);
        for stop_name in stop_names {
            self.stops.attach_bus(stop_name, bus.name());
        }
        self.buses.add(bus);
        Ok(())
    }

    pub fn stops(&self) -> &StopRegistry {
        &self.stops
    }

    pub fn buses(&self) -> &BusRegistry {
        &self.buses
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    /// Road distance between two stops, with the reverse-declaration
    /// fallback.
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        self.stops.distance(a, b)
    }

    /// Bounding box over all stop coordinates.
    pub fn geo_bounds(&self) -> Option<GeoBounds> {
        self.stops.geo_bounds()
    }
}
