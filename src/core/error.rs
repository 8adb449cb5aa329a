use thiserror::Error;

use super::geom::Point;

#[derive(Debug, Error)]
pub enum CollisionError {
    /// Empty space. Callers treat this as "no swatch here", never as a failure.
    #[error("no swatch at {0}")]
    NotFound(Point),

    #[error("unknown swatch index {0}")]
    UnknownSwatch(usize),

    #[error("invalid collision config: {0}")]
    InvalidConfig(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CollisionError> = std::result::Result<T, E>;
