//! Engine error type.

use thiserror::Error;

/// Unrecoverable failures of a run.  Per-query misses are not errors —
/// they become `error_message` responses.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalogue(#[from] tc_catalogue::CatalogueError),

    #[error("malformed input document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
