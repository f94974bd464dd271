//! # Pass Network
//!
//! Derives the advantaged team's pass-connectivity graph around a turning
//! point. Connections are directed: A passing to B and B passing to A
//! accumulate separately.

use indexmap::IndexMap;

use crate::models::{EventKind, MatchData, TurningPoint};

/// Bucketed span of the match; network windows are capped here.
const MATCH_MINUTES: u8 = 90;

/// Directed pass connectivity around a turning point.
#[derive(Debug, Clone, Default)]
pub struct PassNetwork {
    /// Directed (passer, receiver) pairs to completed pass count, in
    /// discovery order.
    pub connections: IndexMap<(String, String), u32>,
    /// (passer, receiver, count) triples sorted by count descending;
    /// ties retain discovery order.
    pub ranked_paths: Vec<(String, String, u32)>,
}

/// Build the pass network for the advantaged team around a turning point.
///
/// Only completed passes (outcome exactly true) with distinct, non-empty
/// passer and receiver names count; self-passes are data artifacts and are
/// dropped.
pub fn build_pass_network(
    match_data: &MatchData,
    turning_point: &TurningPoint,
    time_window: u8,
) -> PassNetwork {
    let minute_start = turning_point.minute.saturating_sub(time_window);
    let minute_end = (turning_point.minute + time_window).min(MATCH_MINUTES);
    let target_team = match_data.team_name(turning_point.team_advantage);

    let mut connections: IndexMap<(String, String), u32> = IndexMap::new();

    for event in match_data.events.iter().filter(|e| {
        e.minute >= minute_start
            && e.minute < minute_end
            && e.team == target_team
            && e.kind == EventKind::Pass
            && e.success == Some(true)
    }) {
        let Some(passer) = event.attributed_player() else { continue };
        let Some(receiver) = event.receiver() else { continue };
        if passer == receiver {
            continue;
        }

        *connections.entry((passer.to_string(), receiver.to_string())).or_insert(0) += 1;
    }

    let mut ranked_paths: Vec<(String, String, u32)> = connections
        .iter()
        .map(|((passer, receiver), count)| (passer.clone(), receiver.clone(), *count))
        .collect();
    // Stable sort keeps discovery order between equal counts.
    ranked_paths.sort_by(|a, b| b.2.cmp(&a.2));

    PassNetwork { connections, ranked_paths }
}
