//! Match analysis JSON API.
//!
//! The typed functions run the full pipeline over one immutable match
//! snapshot and return freshly built results; the `_json` wrappers add
//! serde at the boundary. No state survives between calls, so concurrent
//! embedding layers may call these freely with their own snapshots.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::pass_network::build_pass_network;
use crate::analysis::player_impact::{
    extract_player_activities, rank_key_players, summarize_activity, PlayerSummary,
    DEFAULT_TIME_WINDOW,
};
use crate::analysis::turning_point::{detect_turning_points, find_turning_point};
use crate::error::{AnalysisError, Result};
use crate::explanation::ExplanationGenerator;
use crate::models::{ChangeType, FinalScore, MatchData, TeamSide, TurningPoint};

/// Seed used when a request does not pin the paraphrase stream.
const DEFAULT_EXPLANATION_SEED: u64 = 0;

/// Request envelope for [`analyze_match_json`].
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub match_data: MatchData,
    /// Seed for explanation paraphrase selection; a fixed seed makes the
    /// prose reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Full match analysis payload.
#[derive(Debug, Serialize)]
pub struct MatchAnalysis {
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<FinalScore>,
    pub summary: String,
    pub turning_points_count: usize,
    pub turning_points: Vec<TurningPoint>,
}

/// Run the full turning-point pipeline over one match.
///
/// Detection attaches baseline explanations; this pass overwrites each one
/// once with the richer generated prose before the results leave the core.
pub fn analyze_match(match_data: &MatchData, seed: u64) -> MatchAnalysis {
    let mut turning_points = detect_turning_points(match_data);
    debug!("detected {} turning point(s) for match {}", turning_points.len(), match_data.match_id);

    let mut generator = ExplanationGenerator::seeded(seed);
    for tp in &mut turning_points {
        let team_name = match_data.team_name(tp.team_advantage);
        tp.explanation = generator.generate_explanation(tp, team_name);
    }

    let summary =
        generator.generate_summary(&turning_points, &match_data.home_team, &match_data.away_team);

    info!(
        "match {} analyzed: {} turning point(s)",
        match_data.match_id,
        turning_points.len()
    );

    MatchAnalysis {
        match_id: match_data.match_id.clone(),
        home_team: match_data.home_team.clone(),
        away_team: match_data.away_team.clone(),
        match_date: match_data.match_date.to_rfc3339(),
        final_score: match_data.final_score,
        summary,
        turning_points_count: turning_points.len(),
        turning_points,
    }
}

/// JSON wrapper around [`analyze_match`].
pub fn analyze_match_json(request_json: &str) -> Result<String> {
    let request: AnalyzeRequest = serde_json::from_str(request_json)
        .map_err(|e| AnalysisError::Deserialization(e.to_string()))?;

    let analysis =
        analyze_match(&request.match_data, request.seed.unwrap_or(DEFAULT_EXPLANATION_SEED));

    serde_json::to_string(&analysis).map_err(|e| AnalysisError::Serialization(e.to_string()))
}

/// Request envelope for [`analyze_players_json`].
#[derive(Debug, Deserialize)]
pub struct PlayerAnalysisRequest {
    pub match_data: MatchData,
    /// Minute to look up; the nearest turning point within 5 minutes is
    /// analyzed.
    pub minute: u8,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    5
}

/// Turning point header echoed in player analysis responses.
#[derive(Debug, Serialize)]
pub struct TurningPointHeader {
    pub minute: u8,
    pub team_advantage: TeamSide,
    pub change_type: ChangeType,
    pub explanation: String,
}

/// One ranked player entry.
#[derive(Debug, Serialize)]
pub struct KeyPlayerEntry {
    pub impact_score: f32,
    #[serde(flatten)]
    pub summary: PlayerSummary,
}

/// One directed pass path.
#[derive(Debug, Serialize)]
pub struct PassPath {
    pub from: String,
    pub to: String,
    pub count: u32,
}

/// Player analysis payload for one turning point.
#[derive(Debug, Serialize)]
pub struct PlayerAnalysisResponse {
    pub turning_point: TurningPointHeader,
    pub key_players: Vec<KeyPlayerEntry>,
    pub total_players_analyzed: usize,
    pub top_pass_paths: Vec<PassPath>,
}

/// Analyze the players behind the turning point nearest to `minute`.
///
/// Fails with a not-found error when no turning point lies within the
/// lookup tolerance — a miss is never a zero-activity result.
pub fn analyze_players(
    match_data: &MatchData,
    minute: u8,
    top_n: usize,
) -> Result<PlayerAnalysisResponse> {
    let turning_points = detect_turning_points(match_data);
    let target = find_turning_point(&turning_points, minute)?;

    let activities = extract_player_activities(match_data, target, DEFAULT_TIME_WINDOW);
    let ranked = rank_key_players(&activities, top_n);
    let network = build_pass_network(match_data, target, DEFAULT_TIME_WINDOW);

    debug!(
        "player analysis at minute {}: {} player(s), {} pass path(s)",
        target.minute,
        activities.len(),
        network.ranked_paths.len()
    );

    let key_players = ranked
        .into_iter()
        .map(|(_, activity, impact_score)| KeyPlayerEntry {
            impact_score,
            summary: summarize_activity(activity),
        })
        .collect();

    let top_pass_paths = network
        .ranked_paths
        .into_iter()
        .map(|(from, to, count)| PassPath { from, to, count })
        .collect();

    Ok(PlayerAnalysisResponse {
        turning_point: TurningPointHeader {
            minute: target.minute,
            team_advantage: target.team_advantage,
            change_type: target.change_type,
            explanation: target.explanation.clone(),
        },
        key_players,
        total_players_analyzed: activities.len(),
        top_pass_paths,
    })
}

/// JSON wrapper around [`analyze_players`].
pub fn analyze_players_json(request_json: &str) -> Result<String> {
    let request: PlayerAnalysisRequest = serde_json::from_str(request_json)
        .map_err(|e| AnalysisError::Deserialization(e.to_string()))?;

    let response = analyze_players(&request.match_data, request.minute, request.top_n)?;

    serde_json::to_string(&response).map_err(|e| AnalysisError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, MatchEvent};
    use chrono::Utc;

    fn make_event(minute: u8, team: &str, kind: EventKind) -> MatchEvent {
        MatchEvent {
            minute,
            team: team.to_string(),
            kind,
            x: None,
            y: None,
            success: None,
            xg: None,
            player_name: None,
            receiver_name: None,
            end_x: None,
            end_y: None,
            raw_type: None,
            raw_result: None,
        }
    }

    /// A home-dominant opening collapsing into an away surge at minute 5,
    /// with named players on the away side.
    fn swing_match() -> MatchData {
        let mut events = Vec::new();

        for i in 0..5u8 {
            let mut shot = make_event(i, "Ulsan", EventKind::Shot);
            shot.x = Some(85.0);
            shot.xg = Some(0.2);
            shot.player_name = Some("Hwang".to_string());
            events.push(shot);
        }
        for i in 0..10u8 {
            let mut pass = make_event(i % 5, "Ulsan", EventKind::Pass);
            pass.x = Some(60.0);
            pass.end_x = Some(75.0);
            pass.success = Some(true);
            pass.player_name = Some("Hwang".to_string());
            events.push(pass);
        }

        for i in 0..5u8 {
            let mut shot = make_event(5 + i, "Jeonbuk", EventKind::Shot);
            shot.x = Some(85.0);
            shot.y = Some(40.0);
            shot.xg = Some(0.2);
            shot.player_name = Some("Cho".to_string());
            events.push(shot);
        }
        for i in 0..10u8 {
            let mut pass = make_event(5 + (i % 5), "Jeonbuk", EventKind::Pass);
            pass.x = Some(60.0);
            pass.y = Some(34.0);
            pass.end_x = Some(75.0);
            pass.success = Some(true);
            pass.player_name = Some("Baek".to_string());
            pass.receiver_name = Some("Cho".to_string());
            events.push(pass);
        }

        MatchData {
            match_id: "2024-r12-1001".to_string(),
            home_team: "Ulsan".to_string(),
            away_team: "Jeonbuk".to_string(),
            match_date: Utc::now(),
            events,
            final_score: Some(FinalScore { home: 1, away: 2 }),
        }
    }

    #[test]
    fn test_analyze_match_regenerates_explanations() {
        let match_data = swing_match();
        let analysis = analyze_match(&match_data, 42);

        assert_eq!(analysis.match_id, "2024-r12-1001");
        assert!(analysis.turning_points_count >= 1);
        assert_eq!(analysis.turning_points_count, analysis.turning_points.len());

        let tp = &analysis.turning_points[0];
        assert_eq!(tp.minute, 5);
        assert_eq!(tp.team_advantage, TeamSide::Away);
        // The generated prose names the advantaged team.
        assert!(tp.explanation.contains("Jeonbuk"), "prose: {}", tp.explanation);
        assert!(!analysis.summary.is_empty());
    }

    #[test]
    fn test_analyze_match_seed_reproducibility() {
        let match_data = swing_match();

        let first = analyze_match(&match_data, 9);
        let second = analyze_match(&match_data, 9);
        for (a, b) in first.turning_points.iter().zip(&second.turning_points) {
            assert_eq!(a.explanation, b.explanation);
        }
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_analyze_match_json_roundtrip() {
        let match_data = swing_match();
        let request = serde_json::json!({
            "match_data": serde_json::to_value(&match_data).unwrap(),
            "seed": 11,
        });

        let response = analyze_match_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["home_team"], "Ulsan");
        assert_eq!(parsed["turning_points_count"], parsed["turning_points"].as_array().unwrap().len());
        assert_eq!(parsed["turning_points"][0]["team_advantage"], "away");
        assert_eq!(parsed["turning_points"][0]["change_type"], "attack_surge");
        assert!(parsed["turning_points"][0]["indicators"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("xG_change")));
    }

    #[test]
    fn test_analyze_match_json_rejects_bad_request() {
        let result = analyze_match_json("{\"match_data\": 3}");
        assert!(matches!(result, Err(AnalysisError::Deserialization(_))));
    }

    #[test]
    fn test_analyze_players_ranks_and_networks() {
        let match_data = swing_match();
        let response = analyze_players(&match_data, 5, 5).unwrap();

        assert_eq!(response.turning_point.minute, 5);
        assert_eq!(response.turning_point.team_advantage, TeamSide::Away);
        assert_eq!(response.total_players_analyzed, 2);

        // Cho's shots (xG 1.0 total) outscore Baek's passing volume.
        assert_eq!(response.key_players[0].summary.player_name, "Cho");
        assert!(response.key_players[0].impact_score > response.key_players[1].impact_score);

        assert_eq!(response.top_pass_paths.len(), 1);
        assert_eq!(response.top_pass_paths[0].from, "Baek");
        assert_eq!(response.top_pass_paths[0].to, "Cho");
        assert_eq!(response.top_pass_paths[0].count, 10);
    }

    #[test]
    fn test_analyze_players_respects_top_n() {
        let match_data = swing_match();
        let response = analyze_players(&match_data, 5, 1).unwrap();
        assert_eq!(response.key_players.len(), 1);
        // The cap limits the ranking, not the analyzed population.
        assert_eq!(response.total_players_analyzed, 2);
    }

    #[test]
    fn test_analyze_players_not_found() {
        let match_data = swing_match();
        let result = analyze_players(&match_data, 60, 5);
        assert!(matches!(result, Err(AnalysisError::TurningPointNotFound { minute: 60, .. })));
    }

    #[test]
    fn test_analyze_players_json_defaults_top_n() {
        let match_data = swing_match();
        let request = serde_json::json!({
            "match_data": serde_json::to_value(&match_data).unwrap(),
            "minute": 5,
        });

        let response = analyze_players_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["turning_point"]["minute"], 5);
        assert!(parsed["key_players"].as_array().unwrap().len() <= 5);
        assert!(parsed["key_players"][0]["impact_score"].is_number());
        // Flattened summary fields sit beside the score.
        assert!(parsed["key_players"][0]["player_name"].is_string());
    }
}
