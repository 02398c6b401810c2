//! `tc-engine` — the query engine over one input/output document pair.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`input`]    | `InputDocument`, base/stat request models             |
//! | [`response`] | Response shapes, route item serialization             |
//! | [`engine`]   | `TransitEngine`: build, settings, query dispatch      |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                      |
//!
//! # Lifecycle
//!
//! One run is strictly phased: build the catalogue from `base_requests`
//! (stops first, then buses), apply routing settings (which constructs the
//! transfer graph and the all-pairs router), apply render settings, then
//! answer `stat_requests` in order.  Nothing mutates the model afterwards
//! except the router's route cache and the lazily rendered map.

pub mod engine;
pub mod error;
pub mod input;
pub mod response;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{run_document, TransitEngine};
pub use error::{EngineError, EngineResult};
pub use input::{BaseRequest, InputDocument, RoutingSettingsInput, StatRequest};
pub use response::{Response, RouteItem};
