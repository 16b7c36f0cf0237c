//! Error types for speako-core.
//!
//! Transcript analysis itself never fails: malformed but well-typed input
//! degrades to baseline values. Errors exist only at the configuration and
//! classifier boundaries.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors reported by an external CEFR classifier.
///
/// These never escape an assessment: the heuristic estimate is used instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// The classifier has not finished loading.
    #[error("classifier is not ready")]
    NotReady,

    /// The classifier ran but failed to produce a prediction.
    #[error("classifier prediction failed: {0}")]
    Failed(String),

    /// The classifier returned scores that do not name a CEFR level.
    #[error("classifier returned an unusable prediction: {0}")]
    InvalidPrediction(String),
}

/// A label that does not name a CEFR level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown CEFR level: {0:?}")]
pub struct ParseLevelError(pub String);
