//! Crate error type.
//!
//! Business outcomes (conflicts, overloads, template warnings) are data,
//! not errors. `EngineError` covers collaborator failures and rejected
//! configuration only.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the engines and their configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The schedule store could not serve a query.
    #[error("schedule store unavailable: {0}")]
    StoreUnavailable(String),

    /// Workload thresholds are inconsistent.
    #[error("invalid workload limits: recommended {recommended}h exceeds maximum {maximum}h")]
    InvalidLimits { recommended: i32, maximum: i32 },

    /// Configuration JSON could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
