//! # mp_core - Match Momentum & Turning Point Analysis
//!
//! Batch analysis of football match event logs: per-bucket momentum
//! scoring, turning-point detection with multi-indicator corroboration,
//! and player-level impact attribution, with a JSON API for easy
//! integration into serving layers.
//!
//! ## Features
//! - Deterministic detection (same events = same turning points)
//! - Seedable, reproducible explanation prose
//! - Pure, stateless pipeline safe to call from concurrent requests

pub mod analysis;
pub mod api;
pub mod data;
pub mod error;
pub mod explanation;
pub mod models;

// Re-export main API functions
pub use api::{
    analyze_match, analyze_match_json, analyze_players, analyze_players_json, AnalyzeRequest,
    MatchAnalysis, PlayerAnalysisRequest, PlayerAnalysisResponse,
};
pub use error::{AnalysisError, Result};

// Re-export the analysis pipeline
pub use analysis::metrics::{compute_momentum, compute_window_metrics};
pub use analysis::pass_network::{build_pass_network, PassNetwork};
pub use analysis::player_impact::{
    average_positions, extract_player_activities, impact_score, rank_key_players,
    summarize_activity, PlayerActivity, PlayerSummary, DEFAULT_TIME_WINDOW,
};
pub use analysis::turning_point::{
    build_momentum_series, detect_turning_points, find_turning_point, MINUTE_TOLERANCE,
};

// Re-export model types
pub use models::{
    ChangeType, EventKind, FinalScore, Indicator, MatchData, MatchEvent, MomentumSample, TeamSide,
    TurningPoint, WindowMetrics,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
