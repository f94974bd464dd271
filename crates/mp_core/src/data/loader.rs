//! Match document loading.
//!
//! The core requires only a fully populated [`MatchData`]; where it comes
//! from is the caller's concern. Event ordering in the document does not
//! matter — the detector buckets by minute regardless of list order.

use std::path::Path;

use crate::error::{AnalysisError, Result};
use crate::models::MatchData;

/// Parse a match document from its JSON representation.
pub fn parse_match_json(json: &str) -> Result<MatchData> {
    serde_json::from_str(json).map_err(|e| AnalysisError::Deserialization(e.to_string()))
}

/// Load a match document from a JSON file.
pub fn load_match_json<P: AsRef<Path>>(path: P) -> Result<MatchData> {
    let json = std::fs::read_to_string(path.as_ref())
        .map_err(|e| AnalysisError::FileRead(e.to_string()))?;
    parse_match_json(&json)
}
