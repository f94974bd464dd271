//! # Window Metrics Engine & Momentum Scorer
//!
//! Aggregates raw events into fixed 5-minute buckets per team and combines
//! the two teams' bucket metrics into one signed momentum scalar.
//!
//! Both entry points are pure functions: every degenerate case (empty
//! bucket, zero pass attempts) resolves to an explicit default instead of
//! an error.

use crate::models::{EventKind, MatchEvent, WindowMetrics};

/// Momentum weight for the possession difference channel.
const POSSESSION_WEIGHT: f32 = 20.0;
/// Raw xG differences are scaled directly, without normalization.
const XG_SCALE: f32 = 10.0;
/// Momentum weight for the forward-pass count difference channel.
const FORWARD_PASS_WEIGHT: f32 = 15.0;
/// Momentum weight for the attacking-half event count difference channel.
const OPPONENT_HALF_WEIGHT: f32 = 20.0;
/// Momentum weight for the pass success rate difference channel.
const PASS_SUCCESS_WEIGHT: f32 = 15.0;

/// Compute one team's aggregate statistics over `[minute_start, minute_end)`.
///
/// Team matching is exact string equality. An empty window returns the
/// degenerate defaults (possession 0, defense_avg_x 50.0, rate 0.0) rather
/// than dividing by zero.
pub fn compute_window_metrics(
    events: &[MatchEvent],
    team: &str,
    minute_start: u8,
    minute_end: u8,
) -> WindowMetrics {
    let in_bucket = |e: &MatchEvent| e.minute >= minute_start && e.minute < minute_end;

    let window: Vec<&MatchEvent> =
        events.iter().filter(|e| e.team == team && in_bucket(e)).collect();

    if window.is_empty() {
        return WindowMetrics::empty(team, minute_start, minute_end);
    }

    // Event-count possession proxy over both teams' events in the bucket.
    let bucket_total = events.iter().filter(|e| in_bucket(e)).count();
    let possession = if bucket_total > 0 {
        window.len() as f32 / bucket_total as f32 * 100.0
    } else {
        0.0
    };

    let shots = window.iter().filter(|e| e.kind == EventKind::Shot).count() as u16;
    let xg: f32 = window
        .iter()
        .filter(|e| e.kind == EventKind::Shot)
        .map(|e| e.xg.unwrap_or(0.0))
        .sum();

    let mut forward_passes = 0u16;
    for pass in window.iter().filter(|e| e.kind == EventKind::Pass) {
        let Some(x) = pass.x else { continue };
        match pass.end_x {
            Some(end_x) => {
                if end_x > x {
                    forward_passes += 1;
                }
            }
            // No trajectory data: a completed pass stands in for forward
            // intent. A failed pass without end_x is never counted.
            None => {
                if pass.success == Some(true) {
                    forward_passes += 1;
                }
            }
        }
    }

    // Strictly beyond the halfway line; x == 50 does not count.
    let opponent_half_events =
        window.iter().filter(|e| e.x.is_some_and(|x| x > 50.0)).count() as u16;

    let defense_xs: Vec<f32> = window
        .iter()
        .filter(|e| e.kind == EventKind::Defense)
        .filter_map(|e| e.x)
        .collect();
    let defense_avg_x = if defense_xs.is_empty() {
        50.0
    } else {
        defense_xs.iter().sum::<f32>() / defense_xs.len() as f32
    };

    // Unknown outcomes count as attempts but not completions.
    let pass_attempts = window.iter().filter(|e| e.kind == EventKind::Pass).count();
    let pass_completions = window
        .iter()
        .filter(|e| e.kind == EventKind::Pass && e.success == Some(true))
        .count();
    let pass_success_rate = if pass_attempts > 0 {
        pass_completions as f32 / pass_attempts as f32 * 100.0
    } else {
        0.0
    };

    WindowMetrics {
        minute_start,
        minute_end,
        team: team.to_string(),
        possession,
        shots,
        xg,
        forward_passes,
        opponent_half_events,
        defense_avg_x,
        pass_success_rate,
    }
}

/// Combine two teams' bucket metrics into one signed momentum scalar.
///
/// Weighted sum of five normalized differences (home - away), clamped to
/// [-100, 100]. Positive values favor the home side. The weights are fixed
/// design constants; downstream explanation text depends on them staying
/// as-is.
pub fn compute_momentum(home: &WindowMetrics, away: &WindowMetrics) -> f32 {
    let possession_term = (home.possession - away.possession) / 100.0 * POSSESSION_WEIGHT;
    let xg_term = (home.xg - away.xg) * XG_SCALE;
    let forward_pass_term =
        (home.forward_passes as f32 - away.forward_passes as f32) / 10.0 * FORWARD_PASS_WEIGHT;
    let opponent_half_term = (home.opponent_half_events as f32 - away.opponent_half_events as f32)
        / 10.0
        * OPPONENT_HALF_WEIGHT;
    let pass_success_term =
        (home.pass_success_rate - away.pass_success_rate) / 100.0 * PASS_SUCCESS_WEIGHT;

    let momentum =
        possession_term + xg_term + forward_pass_term + opponent_half_term + pass_success_term;

    momentum.clamp(-100.0, 100.0)
}
