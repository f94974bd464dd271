//! # API Module
//!
//! JSON-in/JSON-out entry points for embedding layers (HTTP services,
//! CLIs, notebooks). Routing, status codes and envelopes beyond these
//! payloads belong to the embedding layer.

pub mod analysis_json;

pub use analysis_json::{
    analyze_match, analyze_match_json, analyze_players, analyze_players_json, AnalyzeRequest,
    KeyPlayerEntry, MatchAnalysis, PassPath, PlayerAnalysisRequest, PlayerAnalysisResponse,
    TurningPointHeader,
};
