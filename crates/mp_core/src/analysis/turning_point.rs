//! # Turning Point Detector
//!
//! Scans the per-bucket momentum series for sharp swings, cross-checks each
//! candidate against the underlying metric deltas, and emits classified
//! turning points in ascending minute order.
//!
//! One deterministic pass per match; no state survives between matches.

use crate::error::{AnalysisError, Result};
use crate::models::{
    ChangeType, Indicator, MatchData, MomentumSample, TeamSide, TurningPoint, WindowMetrics,
};

use super::metrics::{compute_momentum, compute_window_metrics};

/// Bucket width in minutes.
const BUCKET_MINUTES: u8 = 5;
/// Bucketed span of the match; the last bucket is capped here.
const MATCH_MINUTES: u8 = 90;
/// Minimum absolute momentum swing between adjacent buckets for a candidate.
const MOMENTUM_DELTA_THRESHOLD: f32 = 20.0;
/// Per-team xG delta that fires the xG indicator.
const XG_DELTA_THRESHOLD: f32 = 0.3;
/// Per-team shot count delta that fires the shot surge indicator.
const SHOTS_DELTA_THRESHOLD: i32 = 2;
/// Per-team attacking-half event delta that fires the zone indicator.
const OPPONENT_HALF_DELTA_THRESHOLD: i32 = 3;
/// Per-team defensive-line x delta that fires the line shift indicator.
const DEFENSE_LINE_DELTA_THRESHOLD: f32 = 5.0;
/// Per-team pass success rate delta that fires the pattern indicator.
const PASS_RATE_DELTA_THRESHOLD: f32 = 15.0;
/// A single firing indicator is treated as noise, not a structural shift.
const MIN_INDICATORS: usize = 2;
/// Lookup tolerance for minute-based turning point queries.
pub const MINUTE_TOLERANCE: u8 = 5;

/// Compute the full per-bucket momentum series for a match.
///
/// Minutes [0, 90) partition into consecutive 5-minute buckets. Exposed for
/// presentation layers that render the momentum curve; the detector reuses
/// it internally.
pub fn build_momentum_series(match_data: &MatchData) -> Vec<MomentumSample> {
    let mut series = Vec::with_capacity((MATCH_MINUTES / BUCKET_MINUTES) as usize);

    let mut minute = 0u8;
    while minute < MATCH_MINUTES {
        let minute_end = (minute + BUCKET_MINUTES).min(MATCH_MINUTES);
        let home =
            compute_window_metrics(&match_data.events, &match_data.home_team, minute, minute_end);
        let away =
            compute_window_metrics(&match_data.events, &match_data.away_team, minute, minute_end);
        let momentum = compute_momentum(&home, &away);

        series.push(MomentumSample { minute, home, away, momentum });
        minute = minute_end;
    }

    series
}

/// Detect all turning points in a match.
///
/// Adjacent momentum samples whose swing reaches the threshold become
/// candidates; a candidate is confirmed when at least two independent
/// indicators corroborate it. Confirmed points carry a baseline explanation
/// that a richer generator may overwrite once. Matches shorter than two
/// buckets yield no turning points.
pub fn detect_turning_points(match_data: &MatchData) -> Vec<TurningPoint> {
    let series = build_momentum_series(match_data);
    let mut turning_points = Vec::new();

    for pair in series.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);

        let momentum_delta = (curr.momentum - prev.momentum).abs();
        if momentum_delta < MOMENTUM_DELTA_THRESHOLD {
            continue;
        }

        let indicators = fired_indicators(prev, curr);
        if indicators.len() < MIN_INDICATORS {
            continue;
        }

        // Momentum of exactly zero resolves to the away side; the strict
        // comparison is long-standing behavior relied on downstream.
        let team_advantage =
            if curr.momentum > 0.0 { TeamSide::Home } else { TeamSide::Away };
        let change_type = classify(&indicators);

        let (metrics_before, metrics_after) = match team_advantage {
            TeamSide::Home => (prev.home.clone(), curr.home.clone()),
            TeamSide::Away => (prev.away.clone(), curr.away.clone()),
        };

        let explanation = baseline_explanation(
            curr.minute,
            match_data.team_name(team_advantage),
            &indicators,
            &metrics_before,
            &metrics_after,
        );

        turning_points.push(TurningPoint {
            minute: curr.minute,
            team_advantage,
            change_type,
            indicators,
            explanation,
            metrics_before,
            metrics_after,
        });
    }

    turning_points
}

/// Find the turning point nearest to `minute` within the lookup tolerance.
///
/// The earlier point wins distance ties. A miss is a distinct not-found
/// error, never a silent default.
pub fn find_turning_point<'a>(
    turning_points: &'a [TurningPoint],
    minute: u8,
) -> Result<&'a TurningPoint> {
    let mut best: Option<(&TurningPoint, i32)> = None;

    for tp in turning_points {
        let distance = (tp.minute as i32 - minute as i32).abs();
        if distance > MINUTE_TOLERANCE as i32 {
            continue;
        }
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((tp, distance));
        }
    }

    best.map(|(tp, _)| tp).ok_or(AnalysisError::TurningPointNotFound {
        minute,
        tolerance: MINUTE_TOLERANCE,
    })
}

/// Evaluate the five indicators for an adjacent bucket pair.
///
/// An indicator fires when either team's change crosses its threshold.
fn fired_indicators(prev: &MomentumSample, curr: &MomentumSample) -> Vec<Indicator> {
    let mut indicators = Vec::new();

    let home_xg_delta = curr.home.xg - prev.home.xg;
    let away_xg_delta = curr.away.xg - prev.away.xg;
    if home_xg_delta.abs() >= XG_DELTA_THRESHOLD || away_xg_delta.abs() >= XG_DELTA_THRESHOLD {
        indicators.push(Indicator::XgChange);
    }

    let home_shots_delta = curr.home.shots as i32 - prev.home.shots as i32;
    let away_shots_delta = curr.away.shots as i32 - prev.away.shots as i32;
    if home_shots_delta.abs() >= SHOTS_DELTA_THRESHOLD
        || away_shots_delta.abs() >= SHOTS_DELTA_THRESHOLD
    {
        indicators.push(Indicator::ShotsSurge);
    }

    let home_zone_delta =
        curr.home.opponent_half_events as i32 - prev.home.opponent_half_events as i32;
    let away_zone_delta =
        curr.away.opponent_half_events as i32 - prev.away.opponent_half_events as i32;
    if home_zone_delta.abs() >= OPPONENT_HALF_DELTA_THRESHOLD
        || away_zone_delta.abs() >= OPPONENT_HALF_DELTA_THRESHOLD
    {
        indicators.push(Indicator::AttackZoneChange);
    }

    let home_line_delta = (curr.home.defense_avg_x - prev.home.defense_avg_x).abs();
    let away_line_delta = (curr.away.defense_avg_x - prev.away.defense_avg_x).abs();
    if home_line_delta >= DEFENSE_LINE_DELTA_THRESHOLD
        || away_line_delta >= DEFENSE_LINE_DELTA_THRESHOLD
    {
        indicators.push(Indicator::DefenseLineShift);
    }

    let home_rate_delta = (curr.home.pass_success_rate - prev.home.pass_success_rate).abs();
    let away_rate_delta = (curr.away.pass_success_rate - prev.away.pass_success_rate).abs();
    if home_rate_delta >= PASS_RATE_DELTA_THRESHOLD || away_rate_delta >= PASS_RATE_DELTA_THRESHOLD
    {
        indicators.push(Indicator::PassPatternChange);
    }

    indicators
}

/// Classify a confirmed shift. First match wins: an attack surge outranks a
/// defensive breakdown even when both indicator sets fired.
fn classify(indicators: &[Indicator]) -> ChangeType {
    if indicators.contains(&Indicator::XgChange) || indicators.contains(&Indicator::ShotsSurge) {
        ChangeType::AttackSurge
    } else if indicators.contains(&Indicator::DefenseLineShift) {
        ChangeType::DefenseBreakdown
    } else {
        ChangeType::MomentumShift
    }
}

/// Baseline explanation attached at detection time.
fn baseline_explanation(
    minute: u8,
    team_name: &str,
    indicators: &[Indicator],
    before: &WindowMetrics,
    after: &WindowMetrics,
) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if indicators.contains(&Indicator::XgChange) || indicators.contains(&Indicator::ShotsSurge) {
        if after.shots > before.shots {
            clauses.push(format!("{team_name} sharply increased their shot volume"));
        } else {
            clauses.push(format!("{team_name}'s shot attempts dried up"));
        }
    }

    if indicators.contains(&Indicator::AttackZoneChange) {
        if after.opponent_half_events > before.opponent_half_events {
            clauses.push("activity in the opposition half picked up".to_string());
        } else {
            clauses.push("activity in the opposition half fell away".to_string());
        }
    }

    if indicators.contains(&Indicator::DefenseLineShift) {
        if after.defense_avg_x > before.defense_avg_x {
            clauses.push("the defensive line pushed up and the press intensified".to_string());
        } else {
            clauses.push("the defensive line dropped into passive defending".to_string());
        }
    }

    if indicators.contains(&Indicator::PassPatternChange) {
        if after.pass_success_rate > before.pass_success_rate {
            clauses.push("pass accuracy improved markedly".to_string());
        } else {
            clauses.push("pass accuracy collapsed and attacking moves broke down".to_string());
        }
    }

    if clauses.is_empty() {
        format!("From minute {minute}, the flow of the match changed.")
    } else {
        format!("From minute {minute}, {}.", clauses.join(", "))
    }
}
