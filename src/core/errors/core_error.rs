//! Crate-level error type

use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{ConfigError, FilterError, ModelError};

/// Umbrella error for callers that do not care which layer failed
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum VectorStoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
}
