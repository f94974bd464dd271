//! Match event model.
//!
//! Events are produced once by an ingestion collaborator and never mutated
//! afterwards. Coordinates live in the normalized 0-100 pitch space with x
//! growing toward the opponent goal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of observed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Shot,
    Pass,
    Defense,
    Possession,
}

/// Which side of the fixture a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

/// One observed action in a match.
///
/// `x` and `y` are independently optional: vendor feeds sometimes carry one
/// coordinate without the other, so consumers must not assume both are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Match minute (0-90+).
    pub minute: u8,
    /// Team identifier, compared by exact string equality.
    pub team: String,
    #[serde(rename = "event_type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Outcome; `None` when the source result label is ambiguous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Expected goals, present only for shots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xg: Option<f32>,
    /// Acting player, when the feed attributes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    /// Receiving player, for passes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
    /// Pass end x coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_x: Option<f32>,
    /// Pass end y coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_y: Option<f32>,
    /// Raw source type label, kept for provenance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_type: Option<String>,
    /// Raw source result label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_result: Option<String>,
}

impl MatchEvent {
    /// Attributed acting player, treating an empty string as absent.
    pub fn attributed_player(&self) -> Option<&str> {
        self.player_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Attributed receiving player, treating an empty string as absent.
    pub fn receiver(&self) -> Option<&str> {
        self.receiver_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Final score of a completed match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FinalScore {
    pub home: u8,
    pub away: u8,
}

/// A fully materialized match: teams, date, final score, ordered event log.
///
/// The detector buckets events by minute itself, so the event list does not
/// have to be minute-ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchData {
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub match_date: DateTime<Utc>,
    pub events: Vec<MatchEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<FinalScore>,
}

impl MatchData {
    /// Resolve a side to the fixture's display name.
    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_event_kind_serde_labels() {
        let event = make_event(12, "Ulsan", EventKind::Shot);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event_type\":\"shot\""));

        let parsed: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind, EventKind::Shot);
        assert_eq!(parsed.minute, 12);
    }

    #[test]
    fn test_event_optional_fields_roundtrip() {
        let mut event = make_event(30, "Jeonbuk", EventKind::Pass);
        event.x = Some(40.0);
        event.end_x = Some(62.5);
        event.success = Some(true);
        event.player_name = Some("Kim".to_string());
        event.receiver_name = Some("Lee".to_string());

        let json = serde_json::to_string(&event).unwrap();
        let parsed: MatchEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.x, Some(40.0));
        assert_eq!(parsed.y, None);
        assert_eq!(parsed.end_x, Some(62.5));
        assert_eq!(parsed.receiver(), Some("Lee"));
    }

    #[test]
    fn test_event_parses_with_missing_optionals() {
        let json = r#"{"minute":5,"team":"Ulsan","event_type":"defense"}"#;
        let parsed: MatchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, EventKind::Defense);
        assert_eq!(parsed.x, None);
        assert_eq!(parsed.attributed_player(), None);
    }

    #[test]
    fn test_attributed_player_empty_string_is_absent() {
        let mut event = make_event(5, "Ulsan", EventKind::Pass);
        event.player_name = Some(String::new());
        assert_eq!(event.attributed_player(), None);

        event.player_name = Some("Park".to_string());
        assert_eq!(event.attributed_player(), Some("Park"));
    }

    #[test]
    fn test_team_name_resolution() {
        let match_data = MatchData {
            match_id: "1001".to_string(),
            home_team: "Ulsan".to_string(),
            away_team: "Jeonbuk".to_string(),
            match_date: Utc::now(),
            events: vec![],
            final_score: Some(FinalScore { home: 2, away: 1 }),
        };

        assert_eq!(match_data.team_name(TeamSide::Home), "Ulsan");
        assert_eq!(match_data.team_name(TeamSide::Away), "Jeonbuk");
    }

    #[test]
    fn test_team_side_serde_labels() {
        assert_eq!(serde_json::to_string(&TeamSide::Home).unwrap(), "\"home\"");
        assert_eq!(serde_json::to_string(&TeamSide::Away).unwrap(), "\"away\"");
    }
}
