//! # Player Impact Analyzer
//!
//! Localizes a detected turning point to the players behind it: extracts
//! the advantaged team's player activity in the surrounding window, scores
//! each player's contribution, and ranks the key players.
//!
//! Activities live in an insertion-ordered map so that score ties resolve
//! to discovery order on every run.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{EventKind, MatchData, MatchEvent, TurningPoint};

/// Minutes scanned on each side of a turning point.
pub const DEFAULT_TIME_WINDOW: u8 = 5;
/// Bucketed span of the match; activity windows are capped here.
const MATCH_MINUTES: u8 = 90;
/// Impact weight of the (uncapped) xG contribution channel.
const XG_WEIGHT: f32 = 40.0;
/// Impact weight of the forward-pass channel, saturating at 5 passes.
const FORWARD_PASS_WEIGHT: f32 = 25.0;
/// Impact weight of the attacking-half channel, saturating at 10 events.
const OPPONENT_HALF_WEIGHT: f32 = 20.0;
/// Impact weight of the defensive channel, saturating at 5 actions.
const DEFENSE_WEIGHT: f32 = 15.0;
/// Positions returned in a player summary are truncated to this many.
const MAX_SUMMARY_POSITIONS: usize = 50;

/// Per-player aggregate within a turning point's surrounding window.
///
/// Built fresh per query; nothing is cached between calls.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerActivity {
    pub player_name: String,
    pub team: String,
    /// Raw events attributed to the player, in match order.
    pub events: Vec<MatchEvent>,
    /// Observed (x, y) positions; recorded only when both coordinates are
    /// present.
    pub positions: Vec<(f32, f32)>,
    pub shots: u16,
    pub passes: u16,
    pub successful_passes: u16,
    pub defense_actions: u16,
    pub xg_contribution: f32,
    pub forward_passes: u16,
    pub opponent_half_events: u16,
}

impl PlayerActivity {
    fn new(player_name: &str, team: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            team: team.to_string(),
            events: Vec::new(),
            positions: Vec::new(),
            shots: 0,
            passes: 0,
            successful_passes: 0,
            defense_actions: 0,
            xg_contribution: 0.0,
            forward_passes: 0,
            opponent_half_events: 0,
        }
    }

    fn record(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());

        if let (Some(x), Some(y)) = (event.x, event.y) {
            self.positions.push((x, y));
        }

        match event.kind {
            EventKind::Shot => {
                self.shots += 1;
                self.xg_contribution += event.xg.unwrap_or(0.0);
            }
            EventKind::Pass => {
                self.passes += 1;
                if event.success == Some(true) {
                    self.successful_passes += 1;
                }
                // Forward credit here requires trajectory data. Unlike the
                // team-level metric, a completed pass without end_x earns
                // nothing.
                if let (Some(x), Some(end_x)) = (event.x, event.end_x) {
                    if end_x > x {
                        self.forward_passes += 1;
                    }
                }
            }
            EventKind::Defense => self.defense_actions += 1,
            EventKind::Possession => {}
        }

        if event.x.is_some_and(|x| x > 50.0) {
            self.opponent_half_events += 1;
        }
    }
}

/// Extract per-player activity around a turning point.
///
/// The window is `[max(0, minute - w), min(90, minute + w))`, restricted to
/// the advantaged team. Events without an attributable player name are
/// excluded entirely.
pub fn extract_player_activities(
    match_data: &MatchData,
    turning_point: &TurningPoint,
    time_window: u8,
) -> IndexMap<String, PlayerActivity> {
    let minute_start = turning_point.minute.saturating_sub(time_window);
    let minute_end = (turning_point.minute + time_window).min(MATCH_MINUTES);
    let target_team = match_data.team_name(turning_point.team_advantage);

    let mut activities: IndexMap<String, PlayerActivity> = IndexMap::new();

    for event in match_data
        .events
        .iter()
        .filter(|e| e.minute >= minute_start && e.minute < minute_end && e.team == target_team)
    {
        let Some(player) = event.attributed_player() else { continue };

        activities
            .entry(player.to_string())
            .or_insert_with(|| PlayerActivity::new(player, target_team))
            .record(event);
    }

    activities
}

/// Score one player's contribution to a turning point.
///
/// The three volume channels saturate at their weight; the xG channel is
/// deliberately uncapped so a single high-quality chance can outweigh
/// volume stats. Rounded to two decimals.
pub fn impact_score(activity: &PlayerActivity) -> f32 {
    let xg_term = activity.xg_contribution * XG_WEIGHT;
    let forward_term = (activity.forward_passes as f32 / 5.0).min(1.0) * FORWARD_PASS_WEIGHT;
    let opponent_half_term =
        (activity.opponent_half_events as f32 / 10.0).min(1.0) * OPPONENT_HALF_WEIGHT;
    let defense_term = (activity.defense_actions as f32 / 5.0).min(1.0) * DEFENSE_WEIGHT;

    round2(xg_term + forward_term + opponent_half_term + defense_term)
}

/// Rank players by impact score, descending, at most `top_n` entries.
///
/// The sort is stable: equal scores keep the activity map's insertion
/// order.
pub fn rank_key_players<'a>(
    activities: &'a IndexMap<String, PlayerActivity>,
    top_n: usize,
) -> Vec<(&'a str, &'a PlayerActivity, f32)> {
    let mut ranked: Vec<(&str, &PlayerActivity, f32)> = activities
        .iter()
        .map(|(name, activity)| (name.as_str(), activity, impact_score(activity)))
        .collect();

    ranked.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}

/// Mean pitch position.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PitchPoint {
    pub x: f32,
    pub y: f32,
}

/// Display-ready summary of one player's windowed activity.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub player_name: String,
    pub team: String,
    pub total_events: usize,
    pub shots: u16,
    pub xg_contribution: f32,
    pub passes: u16,
    pub successful_passes: u16,
    pub pass_success_rate: f32,
    pub forward_passes: u16,
    pub defense_actions: u16,
    pub opponent_half_events: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_position: Option<PitchPoint>,
    pub positions: Vec<(f32, f32)>,
}

/// Build the display summary for one activity record.
pub fn summarize_activity(activity: &PlayerActivity) -> PlayerSummary {
    let pass_success_rate = if activity.passes > 0 {
        round1(activity.successful_passes as f32 / activity.passes as f32 * 100.0)
    } else {
        0.0
    };

    let avg_position = mean_position(&activity.positions)
        .map(|(x, y)| PitchPoint { x: round1(x), y: round1(y) });

    let mut positions = activity.positions.clone();
    positions.truncate(MAX_SUMMARY_POSITIONS);

    PlayerSummary {
        player_name: activity.player_name.clone(),
        team: activity.team.clone(),
        total_events: activity.events.len(),
        shots: activity.shots,
        xg_contribution: round2(activity.xg_contribution),
        passes: activity.passes,
        successful_passes: activity.successful_passes,
        pass_success_rate,
        forward_passes: activity.forward_passes,
        defense_actions: activity.defense_actions,
        opponent_half_events: activity.opponent_half_events,
        avg_position,
        positions,
    }
}

/// Mean (x, y) per player, for players with at least one observed position.
pub fn average_positions(
    activities: &IndexMap<String, PlayerActivity>,
) -> IndexMap<String, (f32, f32)> {
    activities
        .iter()
        .filter_map(|(name, activity)| {
            mean_position(&activity.positions).map(|mean| (name.clone(), mean))
        })
        .collect()
}

fn mean_position(positions: &[(f32, f32)]) -> Option<(f32, f32)> {
    if positions.is_empty() {
        return None;
    }
    let count = positions.len() as f32;
    let sum_x: f32 = positions.iter().map(|p| p.0).sum();
    let sum_y: f32 = positions.iter().map(|p| p.1).sum();
    Some((sum_x / count, sum_y / count))
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
