//! The engine: build phase, settings application, and query dispatch.

use std::cell::OnceCell;
use std::io::{Read, Write};

use tc_catalogue::Catalogue;
use tc_core::GeoPoint;
use tc_render::{MapRenderer, RenderSettings};
use tc_routing::{build_transfer_graph, AllPairsRouter, PathItem, RoutingSettings};

use crate::error::EngineResult;
use crate::input::{BaseRequest, InputDocument, RoutingSettingsInput, StatRequest};
use crate::response::{
    BusResponse, ErrorResponse, MapResponse, Response, RouteItem, RouteResponse, StopResponse,
};

/// The batch query engine.  Owns the catalogue, the router (once routing
/// settings arrive), and the lazily rendered map.
pub struct TransitEngine {
    catalogue: Catalogue,
    router: Option<AllPairsRouter<PathItem>>,
    render_settings: Option<RenderSettings>,
    rendered_map: OnceCell<String>,
}

impl TransitEngine {
    /// Build the catalogue from `base_requests`.
    ///
    /// Two passes: every Stop entry first (coordinates, distances, vertex
    /// ids), then every Bus entry, so routes may reference stops declared
    /// after them.
    pub fn new(base_requests: &[BaseRequest]) -> EngineResult<Self> {
        let mut catalogue = Catalogue::new();

        for request in base_requests {
            if let BaseRequest::Stop {
                name,
                latitude,
                longitude,
                road_distances,
            } = request
            {
                catalogue.add_stop(
                    name,
                    GeoPoint::from_degrees(*latitude, *longitude),
                    road_distances.iter().map(|(to, metres)| (to.as_str(), *metres)),
                );
            }
        }

        for request in base_requests {
            if let BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } = request
            {
                catalogue.add_bus(name, stops, *is_roundtrip)?;
            }
        }

        log::info!(
            "catalogue built: {} stops, {} buses",
            catalogue.stops().len(),
            catalogue.buses().len()
        );

        Ok(Self {
            catalogue,
            router: None,
            render_settings: None,
            rendered_map: OnceCell::new(),
        })
    }

    /// Construct the transfer graph and the all-pairs router.
    pub fn apply_routing_settings(&mut self, input: RoutingSettingsInput) {
        let settings = RoutingSettings::from_input(input.bus_wait_time, input.bus_velocity);
        let graph = build_transfer_graph(&self.catalogue, settings);
        self.router = Some(AllPairsRouter::new(graph));
    }

    pub fn apply_render_settings(&mut self, settings: RenderSettings) {
        self.render_settings = Some(settings);
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Answer every request, in order.
    pub fn execute_queries(&mut self, requests: &[StatRequest]) -> Vec<Response> {
        requests.iter().map(|req| self.dispatch(req)).collect()
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    fn dispatch(&mut self, request: &StatRequest) -> Response {
        let answer = match request {
            StatRequest::Stop { id, name } => self.stop_response(*id, name),
            StatRequest::Bus { id, name } => self.bus_response(*id, name),
            StatRequest::Route { id, from, to } => self.route_response(*id, from, to),
            StatRequest::Map { id } => self.map_response(*id),
        };
        answer.unwrap_or_else(|| ErrorResponse::not_found(request.id()))
    }

    fn stop_response(&self, id: i64, name: &str) -> Option<Response> {
        let stop = self.catalogue.stop(name)?;
        Some(Response::Stop(StopResponse {
            buses: stop.buses().map(|b| b.to_string()).collect(),
            request_id: id,
        }))
    }

    fn bus_response(&self, id: i64, name: &str) -> Option<Response> {
        let bus = self.catalogue.bus(name)?;
        let stops = self.catalogue.stops();
        Some(Response::Bus(BusResponse {
            route_length: bus.real_length(stops) as u64,
            request_id: id,
            curvature: bus.curvature(stops),
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
        }))
    }

    fn route_response(&mut self, id: i64, from: &str, to: &str) -> Option<Response> {
        // Journeys begin and end waiting at a stop, so both endpoints are
        // wait vertices.
        let from = self.catalogue.stop(from)?.wait_vertex();
        let to = self.catalogue.stop(to)?.wait_vertex();

        let router = self.router.as_mut()?;
        let summary = router.build_route(from, to)?;

        let items: Vec<RouteItem> = router
            .route_edges(summary.id)
            .into_iter()
            .flatten()
            .filter_map(|edge_id| RouteItem::from_edge_weight(&router.graph().edge(*edge_id).weight))
            .collect();

        Some(Response::Route(RouteResponse {
            total_time: summary.weight.time(),
            request_id: id,
            items,
        }))
    }

    fn map_response(&self, id: i64) -> Option<Response> {
        let settings = self.render_settings.as_ref()?;
        let svg = self.rendered_map.get_or_init(|| {
            log::debug!("rendering map on first request");
            MapRenderer::new(&self.catalogue, settings).render().render()
        });
        Some(Response::Map(MapResponse {
            request_id: id,
            map: svg.clone(),
        }))
    }
}

// ── One-shot document driver ──────────────────────────────────────────────────

/// Read one input document from `reader`, answer its queries, and write the
/// response array to `writer`.
pub fn run_document(reader: impl Read, writer: impl Write) -> EngineResult<()> {
    let document: InputDocument = serde_json::from_reader(reader)?;

    let mut engine = TransitEngine::new(&document.base_requests)?;
    if let Some(settings) = document.routing_settings {
        engine.apply_routing_settings(settings);
    }
    if let Some(settings) = document.render_settings {
        engine.apply_render_settings(settings);
    }

    let responses = engine.execute_queries(&document.stat_requests);
    serde_json::to_writer(writer, &responses)?;
    Ok(())
}
