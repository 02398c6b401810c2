//! Response shapes, one per query kind plus the shared error form.
//!
//! The output document is a JSON array of these, in input order.  Field
//! declaration order is the emission order; it is not semantically
//! significant but keeps diffs against known-good outputs readable.

use serde::Serialize;

use tc_routing::PathItem;

/// One response of the output array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Stop(StopResponse),
    Bus(BusResponse),
    Route(RouteResponse),
    Map(MapResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Serialize)]
pub struct StopResponse {
    /// Buses serving the stop, lexicographically ascending.
    pub buses: Vec<String>,
    pub request_id: i64,
}

#[derive(Debug, Serialize)]
pub struct BusResponse {
    /// Road length of the full traversal, whole metres.
    pub route_length: u64,
    pub request_id: i64,
    pub curvature: f64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Minutes.
    pub total_time: f64,
    pub request_id: i64,
    /// Wait/ride steps in traversal order; empty for a same-stop route.
    pub items: Vec<RouteItem>,
}

/// One step of a Route response.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait { stop_name: String, time: f64 },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    /// Convert a graph edge weight.  Accumulated totals carry no
    /// provenance and never sit on an edge, so they convert to nothing.
    pub fn from_edge_weight(weight: &PathItem) -> Option<RouteItem> {
        match weight {
            PathItem::Wait { stop, time } => Some(RouteItem::Wait {
                stop_name: stop.to_string(),
                time: *time,
            }),
            PathItem::Ride {
                bus,
                time,
                span_count,
            } => Some(RouteItem::Bus {
                bus: bus.to_string(),
                span_count: *span_count,
                time: *time,
            }),
            PathItem::Total { .. } => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub request_id: i64,
    /// The rendered SVG document; JSON string escaping happens on write.
    pub map: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}

impl ErrorResponse {
    /// The standard shape for an unknown entity or unreachable route.
    pub fn not_found(request_id: i64) -> Response {
        Response::Error(ErrorResponse {
            request_id,
            error_message: "not found".to_string(),
        })
    }
}
