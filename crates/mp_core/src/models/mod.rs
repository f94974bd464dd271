//! # Data Models
//!
//! Canonical in-memory representation of a match and the analysis results
//! derived from it. All types serialize with serde; the analysis core only
//! ever reads a loaded match.

pub mod event;
pub mod metrics;
pub mod turning_point;

pub use event::{EventKind, FinalScore, MatchData, MatchEvent, TeamSide};
pub use metrics::{MomentumSample, WindowMetrics};
pub use turning_point::{ChangeType, Indicator, TurningPoint};
