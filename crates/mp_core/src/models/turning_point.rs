//! Turning point result types.

use serde::{Deserialize, Serialize};

use super::metrics::WindowMetrics;
use super::event::TeamSide;

/// One of the five boolean signals that corroborate a turning point.
///
/// Serde labels match the indicator names exposed to downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "xG_change")]
    XgChange,
    #[serde(rename = "shots_surge")]
    ShotsSurge,
    #[serde(rename = "attack_zone_change")]
    AttackZoneChange,
    #[serde(rename = "defense_line_shift")]
    DefenseLineShift,
    #[serde(rename = "pass_pattern_change")]
    PassPatternChange,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::XgChange => "xG_change",
            Indicator::ShotsSurge => "shots_surge",
            Indicator::AttackZoneChange => "attack_zone_change",
            Indicator::DefenseLineShift => "defense_line_shift",
            Indicator::PassPatternChange => "pass_pattern_change",
        }
    }
}

/// How a confirmed shift is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    AttackSurge,
    DefenseBreakdown,
    MomentumShift,
}

/// A detected significant shift in match control.
///
/// `minute` is the start minute of the later bucket of the adjacent pair
/// that triggered detection. `metrics_before`/`metrics_after` belong to the
/// advantaged side only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurningPoint {
    pub minute: u8,
    pub team_advantage: TeamSide,
    pub change_type: ChangeType,
    /// Indicators that fired, in evaluation order.
    pub indicators: Vec<Indicator>,
    /// Fan-facing explanation. The detector attaches a baseline string; a
    /// richer generator may overwrite it once after detection.
    pub explanation: String,
    pub metrics_before: WindowMetrics,
    pub metrics_after: WindowMetrics,
}
