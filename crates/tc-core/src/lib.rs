//! `tc-core` — foundational types for the `transit_catalogue` workspace.
//!
//! This crate is a dependency of every other `tc-*` crate.  It intentionally
//! has no `tc-*` dependencies and no external ones.
//!
//! # What lives here
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`ids`]  | `VertexId`, `EdgeId`, `RouteId`           |
//! | [`geo`]  | `GeoPoint`, great-circle distance         |

pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoBounds, GeoPoint};
pub use ids::{EdgeId, RouteId, VertexId};
