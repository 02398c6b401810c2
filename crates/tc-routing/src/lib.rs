//! `tc-routing` — the time-weighted transfer graph and shortest-path engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`path_item`] | `PathItem` composite weight, `RouteWeight` trait        |
//! | [`graph`]     | `WeightedDigraph<W>`, `Edge<W>`                         |
//! | [`transfer`]  | `RoutingSettings`, catalogue → transfer-graph lowering  |
//! | [`router`]    | `AllPairsRouter<W>`: all-pairs table + route expansion  |
//!
//! # The two-vertex trick
//!
//! Each stop contributes two graph vertices so that boarding is priced
//! separately from riding: a fixed-cost edge `wait → main` models the wait
//! for a bus, and every ride edge runs `main(a) → wait(b)`.  A journey
//! therefore alternates wait/ride items, and both endpoints of a query are
//! wait vertices.

pub mod graph;
pub mod path_item;
pub mod router;
pub mod transfer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use graph::{Edge, WeightedDigraph};
pub use path_item::{PathItem, RouteWeight};
pub use router::{AllPairsRouter, RouteSummary};
pub use transfer::{build_transfer_graph, RoutingSettings};
