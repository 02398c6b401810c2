//! All-pairs shortest paths with on-demand route expansion.
//!
//! Floyd–Warshall over any [`RouteWeight`].  The table is built once, up
//! front, at `O(V³)` time and `O(V²)` space; every subsequent query is a
//! table probe plus an `O(path)` back-trace.  Suits this workload — the
//! vertex count is two per stop and the query phase may ask for any pair.
//!
//! # The `prev_edge` convention
//!
//! `table[i][j]` stores the id of the **last** edge on the best known
//! `i → j` path.  On relaxation through `k` the carried id is the `k → j`
//! half's if that half has one, else the `i → k` half's (a `k == j` pivot
//! leaves the right half empty).  Back-tracing therefore jumps from an
//! edge to the best path ending at that edge's source until the chain runs
//! out at `i`.

use rustc_hash::FxHashMap;

use tc_core::{EdgeId, RouteId, VertexId};

use crate::graph::WeightedDigraph;
use crate::path_item::RouteWeight;

// ── Internal table ────────────────────────────────────────────────────────────

#[derive(Clone)]
struct RouteRecord<W> {
    weight: W,
    prev_edge: Option<EdgeId>,
}

// ── RouteSummary ──────────────────────────────────────────────────────────────

/// The result of a successful route query.  The expanded edge sequence is
/// held by the router; fetch it with [`AllPairsRouter::route_edges`].
#[derive(Clone, Debug)]
pub struct RouteSummary<W> {
    pub id: RouteId,
    pub weight: W,
    pub edge_count: usize,
}

// ── AllPairsRouter ────────────────────────────────────────────────────────────

/// All-pairs router over an owned transfer graph.
pub struct AllPairsRouter<W> {
    graph: WeightedDigraph<W>,
    table: Vec<Vec<Option<RouteRecord<W>>>>,
    next_route_id: u64,
    expanded: FxHashMap<RouteId, Vec<EdgeId>>,
}

impl<W: RouteWeight> AllPairsRouter<W> {
    /// Take ownership of `graph` and run the all-pairs computation.
    pub fn new(graph: WeightedDigraph<W>) -> Self {
        let n = graph.vertex_count();
        let mut table: Vec<Vec<Option<RouteRecord<W>>>> = vec![vec![None; n]; n];

        // Base cases: the empty route at every vertex, then the single-edge
        // routes, keeping the cheapest of any parallel bundle.
        for v in 0..n {
            table[v][v] = Some(RouteRecord {
                weight: W::zero(),
                prev_edge: None,
            });
            for edge_id in graph.incident_edges(VertexId(v as u32)) {
                let edge = graph.edge(edge_id);
                let entry = &mut table[v][edge.to.index()];
                let improves = match entry {
                    None => true,
                    Some(record) => edge.weight < record.weight,
                };
                if improves {
                    *entry = Some(RouteRecord {
                        weight: edge.weight.clone(),
                        prev_edge: Some(edge_id),
                    });
                }
            }
        }

        // Relaxation.  Row k is stable during pivot k (a candidate through
        // the zero diagonal never strictly improves), so a snapshot of it
        // is exact.
        for k in 0..n {
            let pivot_row = table[k].clone();
            for i in 0..n {
                let Some(route_from) = table[i][k].clone() else {
                    continue;
                };
                for (j, route_to) in pivot_row.iter().enumerate() {
                    let Some(route_to) = route_to else { continue };
                    let candidate = route_from.weight.clone() + route_to.weight.clone();
                    let entry = &mut table[i][j];
                    let improves = match entry {
                        None => true,
                        Some(record) => candidate < record.weight,
                    };
                    if improves {
                        *entry = Some(RouteRecord {
                            weight: candidate,
                            prev_edge: route_to.prev_edge.or(route_from.prev_edge),
                        });
                    }
                }
            }
        }

        log::debug!("all-pairs table ready over {n} vertices");

        Self {
            graph,
            table,
            next_route_id: 0,
            expanded: FxHashMap::default(),
        }
    }

    pub fn graph(&self) -> &WeightedDigraph<W> {
        &self.graph
    }

    /// Expand the cheapest `from → to` route, cache its edge sequence under
    /// a fresh id, and summarise it.  `None` if `to` is unreachable.
    ///
    /// `from == to` succeeds with zero edges.
    pub fn build_route(&mut self, from: VertexId, to: VertexId) -> Option<RouteSummary<W>> {
        let record = self.table[from.index()][to.index()].as_ref()?;
        let weight = record.weight.clone();

        let mut edges = Vec::new();
        let mut next = record.prev_edge;
        while let Some(edge_id) = next {
            edges.push(edge_id);
            let source = self.graph.edge(edge_id).from;
            next = self.table[from.index()][source.index()]
                .as_ref()
                .and_then(|r| r.prev_edge);
        }
        edges.reverse();

        let id = RouteId(self.next_route_id);
        self.next_route_id += 1;
        let edge_count = edges.len();
        self.expanded.insert(id, edges);

        Some(RouteSummary {
            id,
            weight,
            edge_count,
        })
    }

    /// The expanded edge sequence of a previously built route, source to
    /// destination.
    pub fn route_edges(&self, id: RouteId) -> Option<&[EdgeId]> {
        self.expanded.get(&id).map(Vec::as_slice)
    }
}
