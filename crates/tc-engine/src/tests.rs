//! End-to-end tests: whole input documents in, response values out.

#[cfg(test)]
mod helpers {
    use serde_json::Value;

    use crate::{InputDocument, TransitEngine};

    /// Run a full document through the engine and return the response
    /// array as a JSON value.
    pub fn run(document: Value) -> Value {
        let document: InputDocument = serde_json::from_value(document).unwrap();
        let mut engine = TransitEngine::new(&document.base_requests).unwrap();
        if let Some(settings) = document.routing_settings {
            engine.apply_routing_settings(settings);
        }
        if let Some(settings) = document.render_settings {
            engine.apply_render_settings(settings);
        }
        serde_json::to_value(engine.execute_queries(&document.stat_requests)).unwrap()
    }

    /// Standard render settings for the map scenarios.
    pub fn render_settings(layers: &[&str]) -> Value {
        serde_json::json!({
            "width": 400.0,
            "height": 400.0,
            "padding": 50.0,
            "line_width": 14.0,
            "stop_radius": 5.0,
            "stop_label_font_size": 20,
            "stop_label_offset": [7.0, -3.0],
            "bus_label_font_size": 20,
            "bus_label_offset": [7.0, 15.0],
            "underlayer_color": [255, 255, 255, 0.85],
            "underlayer_width": 3.0,
            "color_palette": ["green", [255, 160, 0], "red"],
            "layers": layers,
        })
    }
}

// ── Bus statistics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod bus_queries {
    use serde_json::json;
    use tc_core::GeoPoint;

    use super::helpers::run;

    #[test]
    fn looped_two_stop_bus() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {"B": 100}},
                {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 1.0,
                 "road_distances": {}},
                {"type": "Bus", "name": "7", "stops": ["A", "B", "A"], "is_roundtrip": true}
            ],
            "stat_requests": [{"type": "Bus", "id": 1, "name": "7"}]
        }));

        let bus = &responses[0];
        assert_eq!(bus["request_id"], 1);
        assert_eq!(bus["route_length"], 200);
        assert_eq!(bus["stop_count"], 3);
        assert_eq!(bus["unique_stop_count"], 2);

        let geo = GeoPoint::from_degrees(0.0, 0.0).distance_m(GeoPoint::from_degrees(0.0, 1.0));
        let expected = 200.0 / (2.0 * geo);
        assert!((bus["curvature"].as_f64().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn linear_three_stop_bus() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {"B": 50}},
                {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 1.0,
                 "road_distances": {"C": 70}},
                {"type": "Stop", "name": "C", "latitude": 0.0, "longitude": 2.0,
                 "road_distances": {}},
                {"type": "Bus", "name": "L", "stops": ["A", "B", "C"], "is_roundtrip": false}
            ],
            "stat_requests": [{"type": "Bus", "id": 5, "name": "L"}]
        }));

        let bus = &responses[0];
        assert_eq!(bus["route_length"], 240);
        assert_eq!(bus["stop_count"], 5);
        assert_eq!(bus["unique_stop_count"], 3);
    }

    #[test]
    fn unknown_bus_is_not_found() {
        let responses = run(json!({
            "base_requests": [],
            "stat_requests": [{"type": "Bus", "id": 2, "name": "ghost"}]
        }));
        assert_eq!(responses[0], json!({"request_id": 2, "error_message": "not found"}));
    }
}

// ── Stop queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_queries {
    use serde_json::json;

    use super::helpers::run;

    #[test]
    fn buses_are_sorted_lexicographically() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {}},
                {"type": "Bus", "name": "9", "stops": ["A", "A"], "is_roundtrip": true},
                {"type": "Bus", "name": "14", "stops": ["A", "A"], "is_roundtrip": true}
            ],
            "stat_requests": [{"type": "Stop", "id": 3, "name": "A"}]
        }));
        assert_eq!(responses[0], json!({"buses": ["14", "9"], "request_id": 3}));
    }

    #[test]
    fn stop_served_by_nothing_has_empty_buses() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {}}
            ],
            "stat_requests": [{"type": "Stop", "id": 1, "name": "A"}]
        }));
        assert_eq!(responses[0], json!({"buses": [], "request_id": 1}));
    }

    #[test]
    fn unknown_stop_is_not_found() {
        let responses = run(json!({
            "base_requests": [],
            "stat_requests": [{"type": "Stop", "id": 9, "name": "ghost"}]
        }));
        assert_eq!(responses[0], json!({"request_id": 9, "error_message": "not found"}));
    }
}

// ── Route queries ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_queries {
    use serde_json::json;

    use super::helpers::run;

    fn document(stat_requests: serde_json::Value) -> serde_json::Value {
        json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {"B": 100}},
                {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 1.0,
                 "road_distances": {}},
                {"type": "Stop", "name": "Island", "latitude": 5.0, "longitude": 5.0,
                 "road_distances": {}},
                {"type": "Bus", "name": "7", "stops": ["A", "B", "A"], "is_roundtrip": true}
            ],
            "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
            "stat_requests": stat_requests
        })
    }

    #[test]
    fn single_ride_route() {
        let responses = run(document(json!([
            {"type": "Route", "id": 11, "from": "A", "to": "B"}
        ])));

        let route = &responses[0];
        assert_eq!(route["request_id"], 11);

        // 6 min wait + 100 m at 40 km/h (666.67 m/min).
        let ride_minutes = 100.0 / (40.0 * 1000.0 / 60.0);
        let total = route["total_time"].as_f64().unwrap();
        assert!((total - (6.0 + ride_minutes)).abs() < 1e-9);

        let items = route["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], "Wait");
        assert_eq!(items[0]["stop_name"], "A");
        assert_eq!(items[0]["time"], 6.0);
        assert_eq!(items[1]["type"], "Bus");
        assert_eq!(items[1]["bus"], "7");
        assert_eq!(items[1]["span_count"], 1);
        assert!((items[1]["time"].as_f64().unwrap() - ride_minutes).abs() < 1e-9);
    }

    #[test]
    fn same_stop_route_is_empty() {
        let responses = run(document(json!([
            {"type": "Route", "id": 12, "from": "A", "to": "A"}
        ])));
        assert_eq!(responses[0], json!({"total_time": 0.0, "request_id": 12, "items": []}));
    }

    #[test]
    fn disconnected_stops_are_not_found() {
        let responses = run(document(json!([
            {"type": "Route", "id": 13, "from": "A", "to": "Island"}
        ])));
        assert_eq!(responses[0], json!({"request_id": 13, "error_message": "not found"}));
    }

    #[test]
    fn route_without_routing_settings_is_not_found() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {}}
            ],
            "stat_requests": [{"type": "Route", "id": 1, "from": "A", "to": "A"}]
        }));
        assert_eq!(responses[0], json!({"request_id": 1, "error_message": "not found"}));
    }

    #[test]
    fn responses_preserve_request_order() {
        let responses = run(document(json!([
            {"type": "Route", "id": 21, "from": "A", "to": "B"},
            {"type": "Stop", "id": 22, "name": "B"},
            {"type": "Route", "id": 23, "from": "B", "to": "A"}
        ])));
        let ids: Vec<i64> = responses
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["request_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [21, 22, 23]);
    }
}

// ── Map queries ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod map_queries {
    use serde_json::json;

    use super::helpers::{render_settings, run};

    #[test]
    fn stop_points_only_map() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {"B": 50}},
                {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 1.0,
                 "road_distances": {"C": 70}},
                {"type": "Stop", "name": "C", "latitude": 0.0, "longitude": 2.0,
                 "road_distances": {}},
                {"type": "Bus", "name": "L", "stops": ["A", "B", "C"], "is_roundtrip": false}
            ],
            "render_settings": render_settings(&["stop_points"]),
            "stat_requests": [{"type": "Map", "id": 7}]
        }));

        let map = responses[0]["map"].as_str().unwrap();
        assert!(map.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
        assert!(map.ends_with("</svg>"));
        assert_eq!(map.matches("<circle").count(), 3);
        assert!(!map.contains("<polyline"));
        assert!(!map.contains("<text"));
        assert_eq!(responses[0]["request_id"], 7);
    }

    #[test]
    fn map_is_cached_across_queries() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {}}
            ],
            "render_settings": render_settings(&["stop_points", "stop_labels"]),
            "stat_requests": [{"type": "Map", "id": 1}, {"type": "Map", "id": 2}]
        }));
        assert_eq!(responses[0]["map"], responses[1]["map"]);
        assert_eq!(responses[1]["request_id"], 2);
    }

    #[test]
    fn escaped_quotes_survive_the_json_round_trip() {
        let responses = run(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {}}
            ],
            "render_settings": render_settings(&["stop_points"]),
            "stat_requests": [{"type": "Map", "id": 1}]
        }));
        let serialized = serde_json::to_string(&responses).unwrap();
        // The SVG's quotes must appear escaped inside the JSON string.
        assert!(serialized.contains("<?xml version=\\\"1.0\\\""));
    }

    #[test]
    fn map_without_render_settings_is_not_found() {
        let responses = run(json!({
            "base_requests": [],
            "stat_requests": [{"type": "Map", "id": 4}]
        }));
        assert_eq!(responses[0], json!({"request_id": 4, "error_message": "not found"}));
    }
}

// ── Whole-document driver ─────────────────────────────────────────────────────

#[cfg(test)]
mod documents {
    use crate::run_document;

    use super::helpers::render_settings;

    fn answer(document: &str) -> Vec<u8> {
        let mut out = Vec::new();
        run_document(document.as_bytes(), &mut out).unwrap();
        out
    }

    #[test]
    fn two_runs_are_byte_identical() {
        let document = serde_json::json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 43.6, "longitude": 39.7,
                 "road_distances": {"B": 1300}},
                {"type": "Stop", "name": "B", "latitude": 43.61, "longitude": 39.72,
                 "road_distances": {}},
                {"type": "Bus", "name": "114", "stops": ["A", "B"], "is_roundtrip": false}
            ],
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
            "render_settings": render_settings(&["bus_lines", "bus_labels", "stop_points", "stop_labels"]),
            "stat_requests": [
                {"type": "Bus", "id": 1, "name": "114"},
                {"type": "Stop", "id": 2, "name": "B"},
                {"type": "Route", "id": 3, "from": "A", "to": "B"},
                {"type": "Map", "id": 4}
            ]
        })
        .to_string();

        assert_eq!(answer(&document), answer(&document));
    }

    #[test]
    fn output_is_one_json_array_in_input_order() {
        let document = r#"{
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {}}
            ],
            "stat_requests": [
                {"type": "Stop", "id": 10, "name": "A"},
                {"type": "Stop", "id": 20, "name": "missing"}
            ]
        }"#;

        let out = answer(document);
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let responses = parsed.as_array().unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["request_id"], 10);
        assert_eq!(responses[1]["error_message"], "not found");
    }

    #[test]
    fn malformed_document_is_an_error() {
        let mut out = Vec::new();
        let result = run_document("{not json".as_bytes(), &mut out);
        assert!(result.is_err());
    }
}
