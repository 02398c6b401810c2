//! `tc-catalogue` — the static transit network model.
//!
//! Two registries keyed by entity name, plus a facade that keeps their
//! cross-references consistent:
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`stops`]     | `Stop`, `StopRegistry` (vertex ids, road distances) |
//! | [`buses`]     | `Bus`, `BusRegistry` (memoized length statistics)   |
//! | [`catalogue`] | `Catalogue` facade wiring stops ↔ buses             |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`              |
//!
//! Cross-references between the registries are name keys, never owning
//! handles; every lookup passes through the owning registry.  The whole
//! model is built once and read-only afterwards — the memoized statistics
//! rely on that.

pub mod buses;
pub mod catalogue;
pub mod error;
pub mod stops;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use buses::{Bus, BusRegistry};
pub use catalogue::Catalogue;
pub use error::{CatalogueError, CatalogueResult};
pub use stops::{Stop, StopRegistry};
