//! The input document, field for field.
//!
//! Coordinates arrive in degrees and are converted to radians at the
//! [`BaseRequest::Stop`] boundary; nothing downstream ever sees a degree.
//! `routing_settings` and `render_settings` are optional: a document
//! without them can still answer Stop and Bus queries, and Route/Map
//! queries degrade to the not-found response.

use std::collections::BTreeMap;

use serde::Deserialize;

use tc_render::RenderSettings;

/// The whole input document.
#[derive(Debug, Deserialize)]
pub struct InputDocument {
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettingsInput>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
    pub stat_requests: Vec<StatRequest>,
}

/// One entry of `base_requests`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        /// Degrees.
        latitude: f64,
        /// Degrees.
        longitude: f64,
        /// Declared road distances to neighbours, metres.
        #[serde(default)]
        road_distances: BTreeMap<String, f64>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        /// `true` ⇒ looped: the sequence closes on itself and is ridden one
        /// way only.
        is_roundtrip: bool,
    },
}

/// The `routing_settings` object: wait in whole minutes, speed in km/h.
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct RoutingSettingsInput {
    pub bus_wait_time: f64,
    pub bus_velocity: f64,
}

/// One entry of `stat_requests`.  `id` is echoed back as `request_id`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Stop { id, .. }
            | StatRequest::Bus { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
