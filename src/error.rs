use thiserror::Error;

use crate::disc::state::Side;

#[derive(Debug, Error)]
pub enum FluxError {
    #[error("non-positive density {value} on {side} side")]
    NonPositiveDensity { side: Side, value: f64 },
    #[error("non-positive speed of sound {value} on {side} side")]
    NonPositiveSoundSpeed { side: Side, value: f64 },
    #[error("scalar count mismatch: expected {expected}, found {found}")]
    ScalarCountMismatch { expected: usize, found: usize },
    #[error("unknown transported scalar '{0}'")]
    UnknownScalar(String),
    #[error("transported scalar '{0}' registered twice")]
    DuplicateScalar(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, FluxError>;
