//! Lowering the catalogue into the transfer graph.
//!
//! # Edge inventory
//!
//! Per stop `s`: one boarding edge `wait(s) → main(s)` costing the
//! configured wait.  Per bus: one ride edge `main(a) → wait(b)` for every
//! ordered pair of stops a ride can connect, with the accumulated travel
//! time and hop count.  For a linear bus that means three families of ride
//! edges per start stop: forward along the sequence, onward through the
//! terminus turn-around, and (from the reverse pass) backward along the
//! sequence.  Some of those coincide; they stay as parallel edges and the
//! router keeps whichever is cheapest.
//!
//! # Units
//!
//! Wait time is minutes; velocity is converted from the input's km/h to
//! metres per minute once, here, so every edge weight is in minutes.
//!
//! A consecutive pair with no declared road distance contributes 0 m — a
//! zero-time hop.  Length statistics skip such pairs instead; the two
//! sites differ.

use std::sync::Arc;

use tc_catalogue::{Catalogue, Stop};

use crate::graph::{Edge, WeightedDigraph};
use crate::path_item::PathItem;

// ── RoutingSettings ───────────────────────────────────────────────────────────

/// Wait and speed parameters, normalised to the minute/metre unit system.
#[derive(Copy, Clone, Debug)]
pub struct RoutingSettings {
    /// Boarding wait at every stop, minutes.
    pub wait_minutes: f64,
    /// Average bus speed, metres per minute.
    pub velocity_m_per_min: f64,
}

impl RoutingSettings {
    /// Build from raw input-document values: wait in whole minutes, speed
    /// in km/h.
    pub fn from_input(bus_wait_time: f64, bus_velocity_kmh: f64) -> Self {
        Self {
            wait_minutes: bus_wait_time,
            velocity_m_per_min: bus_velocity_kmh * 1000.0 / 60.0,
        }
    }
}

// ── Lowering ──────────────────────────────────────────────────────────────────

/// Build the transfer graph for `catalogue` under `settings`.
pub fn build_transfer_graph(
    catalogue: &Catalogue,
    settings: RoutingSettings,
) -> WeightedDigraph<PathItem> {
    let mut graph = WeightedDigraph::new(catalogue.stops().vertex_count());

    for stop in catalogue.stops().iter() {
        graph.add_edge(Edge {
            from: stop.wait_vertex(),
            to: stop.main_vertex(),
            weight: PathItem::Wait {
                stop: stop.name().clone(),
                time: settings.wait_minutes,
            },
        });
    }

    for bus in catalogue.buses().iter() {
        let stops: Vec<&Stop> = bus
            .stops()
            .iter()
            .filter_map(|name| catalogue.stop(name))
            .collect();
        if stops.is_empty() {
            continue;
        }
        let last = stops.len() - 1;

        // Rides starting anywhere in the declared direction.  For a linear
        // bus the accumulation runs on through the terminus, covering rides
        // that turn around without leaving the vehicle.
        for i in 0..stops.len() {
            let mut time = 0.0;
            let mut spans = 0;
            for j in i + 1..stops.len() {
                time += hop_minutes(catalogue, stops[j - 1], stops[j], settings);
                spans += 1;
                graph.add_edge(ride(bus.name(), stops[i], stops[j], time, spans));
            }
            if !bus.is_looped() {
                for j in (0..last).rev() {
                    time += hop_minutes(catalogue, stops[j + 1], stops[j], settings);
                    spans += 1;
                    graph.add_edge(ride(bus.name(), stops[i], stops[j], time, spans));
                }
            }
        }

        // Rides starting anywhere in the return direction.
        if !bus.is_looped() {
            for i in (0..stops.len()).rev() {
                let mut time = 0.0;
                let mut spans = 0;
                for j in (0..i).rev() {
                    time += hop_minutes(catalogue, stops[j + 1], stops[j], settings);
                    spans += 1;
                    graph.add_edge(ride(bus.name(), stops[i], stops[j], time, spans));
                }
            }
        }
    }

    log::debug!(
        "transfer graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    graph
}

fn hop_minutes(catalogue: &Catalogue, from: &Stop, to: &Stop, settings: RoutingSettings) -> f64 {
    catalogue.distance(from.name(), to.name()).unwrap_or(0.0) / settings.velocity_m_per_min
}

fn ride(
    bus: &Arc<str>,
    from: &Stop,
    to: &Stop,
    time: f64,
    span_count: usize,
) -> Edge<PathItem> {
    Edge {
        from: from.main_vertex(),
        to: to.wait_vertex(),
        weight: PathItem::Ride {
            bus: bus.clone(),
            time,
            span_count,
        },
    }
}
