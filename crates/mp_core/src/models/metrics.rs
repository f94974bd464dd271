//! Aggregate metric types produced by the window metrics engine.

use serde::{Deserialize, Serialize};

/// Aggregate statistics for one team over one time bucket
/// `[minute_start, minute_end)`.
///
/// Buckets are independent computations: a value is built once per bucket
/// and never mutated, and there is no rolling state between buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowMetrics {
    pub minute_start: u8,
    pub minute_end: u8,
    pub team: String,
    /// Share of both teams' events in the bucket, 0-100. An event-count
    /// proxy, not true ball-possession time.
    pub possession: f32,
    pub shots: u16,
    pub xg: f32,
    pub forward_passes: u16,
    /// Events with a defined x strictly beyond the halfway line (x > 50).
    pub opponent_half_events: u16,
    /// Mean x of defensive events; 50.0 (the halfway line) when the bucket
    /// has none.
    pub defense_avg_x: f32,
    /// Completed passes over attempted passes, 0-100; 0 with no attempts.
    pub pass_success_rate: f32,
}

impl WindowMetrics {
    /// Degenerate bucket with no events for the team.
    pub fn empty(team: &str, minute_start: u8, minute_end: u8) -> Self {
        Self {
            minute_start,
            minute_end,
            team: team.to_string(),
            possession: 0.0,
            shots: 0,
            xg: 0.0,
            forward_passes: 0,
            opponent_half_events: 0,
            defense_avg_x: 50.0,
            pass_success_rate: 0.0,
        }
    }
}

/// One entry of the per-bucket momentum series.
///
/// Positive momentum favors the home side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumSample {
    /// Start minute of the bucket.
    pub minute: u8,
    pub home: WindowMetrics,
    pub away: WindowMetrics,
    /// Signed momentum in [-100, 100].
    pub momentum: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics_defaults() {
        let metrics = WindowMetrics::empty("Ulsan", 10, 15);

        assert_eq!(metrics.team, "Ulsan");
        assert_eq!(metrics.possession, 0.0);
        assert_eq!(metrics.shots, 0);
        assert_eq!(metrics.xg, 0.0);
        assert_eq!(metrics.forward_passes, 0);
        assert_eq!(metrics.opponent_half_events, 0);
        assert_eq!(metrics.defense_avg_x, 50.0);
        assert_eq!(metrics.pass_success_rate, 0.0);
    }
}
