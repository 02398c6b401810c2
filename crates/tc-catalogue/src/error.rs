//! Catalogue error type.

use thiserror::Error;

/// Errors produced while building the network model.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("bus {bus:?} references unknown stop {stop:?}")]
    UnknownStop { bus: String, stop: String },
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
