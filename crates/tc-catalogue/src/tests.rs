//! Unit tests for tc-catalogue.
//!
//! All tests use tiny hand-written networks with degree coordinates on the
//! equator so great-circle spans are easy to reason about.

#[cfg(test)]
mod helpers {
    use tc_core::GeoPoint;

    use crate::Catalogue;

    /// A single looped bus "7" over stops A(0,0) and B(0,1), 100 m apart by
    /// road, declared as [A, B, A].
    pub fn two_stop_loop() -> Catalogue {
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::from_degrees(0.0, 0.0), [("B", 100.0)]);
        cat.add_stop("B", GeoPoint::from_degrees(0.0, 1.0), []);
        cat.add_bus("7", &names(["A", "B", "A"]), true).unwrap();
        cat
    }

    /// A linear bus "L" over three collinear stops with road distances
    /// 50 m and 70 m.
    pub fn linear_three() -> Catalogue {
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::from_degrees(0.0, 0.0), [("B", 50.0)]);
        cat.add_stop("B", GeoPoint::from_degrees(0.0, 1.0), [("C", 70.0)]);
        cat.add_stop("C", GeoPoint::from_degrees(0.0, 2.0), []);
        cat.add_bus("L", &names(["A", "B", "C"]), false).unwrap();
        cat
    }

    pub fn names<const N: usize>(strs: [&str; N]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }
}

// ── Stop registry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod stops {
    use tc_core::{GeoPoint, VertexId};

    use crate::StopRegistry;

    #[test]
    fn vertex_ids_follow_insertion_order() {
        let mut reg = StopRegistry::new();
        // Insert in non-alphabetical order: ids track arrival, not name.
        reg.add_stop("zebra", GeoPoint::from_degrees(0.0, 0.0));
        reg.add_stop("apple", GeoPoint::from_degrees(0.0, 1.0));

        let zebra = reg.get("zebra").unwrap();
        assert_eq!(zebra.main_vertex(), VertexId(0));
        assert_eq!(zebra.wait_vertex(), VertexId(1));

        let apple = reg.get("apple").unwrap();
        assert_eq!(apple.main_vertex(), VertexId(2));
        assert_eq!(apple.wait_vertex(), VertexId(3));

        assert_eq!(reg.vertex_count(), 4);
    }

    #[test]
    fn iteration_is_lexicographic() {
        let mut reg = StopRegistry::new();
        reg.add_stop("b", GeoPoint::from_degrees(0.0, 0.0));
        reg.add_stop("a", GeoPoint::from_degrees(0.0, 1.0));
        reg.add_stop("c", GeoPoint::from_degrees(0.0, 2.0));
        let order: Vec<&str> = reg.iter().map(|s| s.name().as_ref()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn undeclared_direction_falls_back() {
        let mut reg = StopRegistry::new();
        reg.add_stop("A", GeoPoint::from_degrees(0.0, 0.0));
        reg.add_stop("B", GeoPoint::from_degrees(0.0, 1.0));
        reg.add_distance("A", "B", 100.0);

        assert_eq!(reg.distance("A", "B"), Some(100.0));
        assert_eq!(reg.distance("B", "A"), Some(100.0));
    }

    #[test]
    fn declared_direction_wins_over_fallback() {
        let mut reg = StopRegistry::new();
        reg.add_stop("A", GeoPoint::from_degrees(0.0, 0.0));
        reg.add_stop("B", GeoPoint::from_degrees(0.0, 1.0));
        reg.add_distance("A", "B", 100.0);
        reg.add_distance("B", "A", 120.0);

        assert_eq!(reg.distance("A", "B"), Some(100.0));
        assert_eq!(reg.distance("B", "A"), Some(120.0));
    }

    #[test]
    fn unknown_pair_has_no_distance() {
        let mut reg = StopRegistry::new();
        reg.add_stop("A", GeoPoint::from_degrees(0.0, 0.0));
        reg.add_stop("B", GeoPoint::from_degrees(0.0, 1.0));
        assert_eq!(reg.distance("A", "B"), None);
    }
}

// ── Bus derivations ───────────────────────────────────────────────────────────

#[cfg(test)]
mod buses {
    use super::helpers;

    #[test]
    fn looped_real_length_uses_fallback_for_return_pair() {
        let cat = helpers::two_stop_loop();
        let bus = cat.bus("7").unwrap();
        // [A, B, A]: A→B declared 100, B→A falls back to the same 100.
        assert_eq!(bus.real_length(cat.stops()), 200.0);
    }

    #[test]
    fn looped_counts() {
        let cat = helpers::two_stop_loop();
        let bus = cat.bus("7").unwrap();
        assert_eq!(bus.stop_count(), 3);
        assert_eq!(bus.unique_stop_count(), 2);
    }

    #[test]
    fn looped_curvature_is_real_over_global() {
        let cat = helpers::two_stop_loop();
        let bus = cat.bus("7").unwrap();
        let a = cat.stop("A").unwrap().position();
        let b = cat.stop("B").unwrap().position();
        let expected = 200.0 / (2.0 * a.distance_m(b));
        assert!((bus.curvature(cat.stops()) - expected).abs() < 1e-12);
    }

    #[test]
    fn linear_real_length_is_out_and_back() {
        let cat = helpers::linear_three();
        let bus = cat.bus("L").unwrap();
        assert_eq!(bus.real_length(cat.stops()), 240.0);
    }

    #[test]
    fn linear_counts() {
        let cat = helpers::linear_three();
        let bus = cat.bus("L").unwrap();
        assert_eq!(bus.stop_count(), 5);
        assert_eq!(bus.unique_stop_count(), 3);
    }

    #[test]
    fn linear_global_length_doubles_forward_sum() {
        let cat = helpers::linear_three();
        let bus = cat.bus("L").unwrap();
        let a = cat.stop("A").unwrap().position();
        let b = cat.stop("B").unwrap().position();
        let c = cat.stop("C").unwrap().position();
        let forward = a.distance_m(b) + b.distance_m(c);
        assert!((bus.global_length(cat.stops()) - 2.0 * forward).abs() < 1e-6);
    }

    #[test]
    fn missing_distances_contribute_nothing() {
        use tc_core::GeoPoint;

        use crate::Catalogue;

        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::from_degrees(0.0, 0.0), []);
        cat.add_stop("B", GeoPoint::from_degrees(0.0, 1.0), []);
        cat.add_bus("X", &helpers::names(["A", "B"]), false).unwrap();
        assert_eq!(cat.bus("X").unwrap().real_length(cat.stops()), 0.0);
    }

    #[test]
    fn derivations_are_idempotent() {
        let cat = helpers::linear_three();
        let bus = cat.bus("L").unwrap();
        let first = bus.real_length(cat.stops());
        assert_eq!(bus.real_length(cat.stops()), first);
        let unique = bus.unique_stop_count();
        assert_eq!(bus.unique_stop_count(), unique);
    }
}

// ── Catalogue wiring ──────────────────────────────────────────────────────────

#[cfg(test)]
mod catalogue {
    use tc_core::GeoPoint;

    use super::helpers;
    use crate::{Catalogue, CatalogueError};

    #[test]
    fn buses_attach_to_their_stops_sorted() {
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::from_degrees(0.0, 0.0), []);
        cat.add_stop("B", GeoPoint::from_degrees(0.0, 1.0), []);
        cat.add_bus("9", &helpers::names(["A", "B", "A"]), true).unwrap();
        cat.add_bus("14", &helpers::names(["A", "B"]), false).unwrap();

        let at_a: Vec<&str> = cat.stop("A").unwrap().buses().map(|b| b.as_ref()).collect();
        assert_eq!(at_a, ["14", "9"]);
    }

    #[test]
    fn route_over_unknown_stop_is_rejected() {
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::from_degrees(0.0, 0.0), []);
        let err = cat.add_bus("1", &helpers::names(["A", "Ghost"]), false).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop { .. }));
        // The failed route must not have been attached anywhere.
        assert_eq!(cat.stop("A").unwrap().buses().count(), 0);
        assert!(cat.bus("1").is_none());
    }

    #[test]
    fn geo_bounds_cover_all_stops() {
        let cat = helpers::linear_three();
        let bounds = cat.geo_bounds().unwrap();
        assert_eq!(bounds.min_lon, cat.stop("A").unwrap().position().lon);
        assert_eq!(bounds.max_lon, cat.stop("C").unwrap().position().lon);
        assert_eq!(bounds.lat_span(), 0.0);
    }
}
