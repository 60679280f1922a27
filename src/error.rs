use thiserror::Error;

use crate::path::Path;
use crate::value::Kind;

/// Result alias used across the crate.
pub type SborResult<T> = Result<T, SborError>;

/// Error variants surfaced by schema validation and parsing.
///
/// Every shape-validation variant carries the [`Path`] to the node that
/// failed; [`SborError::path`] gives uniform access to it.
#[derive(Debug, Error)]
pub enum SborError {
    #[error("expected kind {expected:?} at {path}, found {actual}")]
    KindMismatch {
        expected: &'static [Kind],
        actual: Kind,
        path: Path,
    },
    #[error("expected {expected} fields at {path}, found {actual}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        path: Path,
    },
    #[error("missing required fields at {path}: {names}", names = .missing.join(", "))]
    MissingFields { missing: Vec<String>, path: Path },
    #[error("unknown variant '{variant}' at {path}, expected one of {expected:?}")]
    UnknownVariant {
        variant: String,
        expected: Vec<String>,
        path: Path,
    },
    #[error("invalid integer literal '{value}' at {path}")]
    InvalidNumber { value: String, path: Path },
    #[error("number {value} at {path} cannot be represented without loss")]
    NumberOutOfRange { value: String, path: Path },
    #[error("invalid hex payload at {path}")]
    InvalidHex {
        path: Path,
        #[source]
        source: hex::FromHexError,
    },
    #[error("no value to parse")]
    Empty,
    #[error("value tree exceeds maximum depth {limit} at {path}")]
    TooDeep { limit: usize, path: Path },
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    #[error("invalid SBOR JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SborError {
    /// Path to the offending node, for the variants that carry one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SborError::KindMismatch { path, .. }
            | SborError::ArityMismatch { path, .. }
            | SborError::MissingFields { path, .. }
            | SborError::UnknownVariant { path, .. }
            | SborError::InvalidNumber { path, .. }
            | SborError::NumberOutOfRange { path, .. }
            | SborError::InvalidHex { path, .. }
            | SborError::TooDeep { path, .. } => Some(path),
            SborError::Empty | SborError::InvalidSchema(_) | SborError::Json(_) => None,
        }
    }
}
