//! Error types for the analysis core.

/// Errors surfaced by the analysis core.
///
/// Degenerate aggregates (empty buckets, zero pass attempts) are never
/// errors: they resolve to explicit defaults inside the metrics engine.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("no turning point within {tolerance} minutes of minute {minute}")]
    TurningPointNotFound { minute: u8, tolerance: u8 },

    #[error("JSON serialization failed: {0}")]
    Serialization(String),

    #[error("JSON deserialization failed: {0}")]
    Deserialization(String),

    #[error("file read failed: {0}")]
    FileRead(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
