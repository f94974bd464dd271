//! Turning point explanation generator.
//!
//! Renders every applicable paraphrase for a turning point and lets an
//! injected selection strategy pick one. Randomness is never hidden global
//! state: callers choose a seeded stream (or a fixed pick) explicitly, so
//! identical seeds yield identical prose.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{ChangeType, TurningPoint};

/// Strategy for picking one paraphrase out of `count` candidates.
pub trait TemplateSelector {
    /// Pick an index in `0..count`. `count` is always at least 1.
    fn select(&mut self, count: usize) -> usize;
}

/// Seeded selector backed by the engine-standard ChaCha8 stream.
pub struct SeededSelector {
    rng: ChaCha8Rng,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl TemplateSelector for SeededSelector {
    fn select(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Always picks the first paraphrase. Used where byte-stable prose matters
/// more than variety.
pub struct FirstSelector;

impl TemplateSelector for FirstSelector {
    fn select(&mut self, _count: usize) -> usize {
        0
    }
}

/// Fan-facing explanation generator.
pub struct ExplanationGenerator<S: TemplateSelector> {
    selector: S,
}

impl ExplanationGenerator<SeededSelector> {
    /// Generator with a seeded paraphrase stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededSelector::new(seed))
    }
}

impl<S: TemplateSelector> ExplanationGenerator<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    /// Generate prose for one turning point.
    ///
    /// Callers may assign the result back to the turning point's
    /// explanation field; that overwrite happens at most once per point.
    pub fn generate_explanation(&mut self, turning_point: &TurningPoint, team_name: &str) -> String {
        let improved = momentum_improved(turning_point);
        let candidates = render_candidates(turning_point, team_name, improved);
        let index = self.selector.select(candidates.len());
        candidates.into_iter().nth(index).unwrap_or_else(|| {
            format!(
                "After minute {}, the flow of the match shifted around {}.",
                turning_point.minute, team_name
            )
        })
    }

    /// One-paragraph match summary built around the biggest turning point,
    /// measured by absolute possession swing.
    pub fn generate_summary(
        &mut self,
        turning_points: &[TurningPoint],
        home_team: &str,
        away_team: &str,
    ) -> String {
        let mut key_point: Option<(&TurningPoint, f32)> = None;
        for tp in turning_points {
            let swing = (tp.metrics_after.possession - tp.metrics_before.possession).abs();
            if key_point.map_or(true, |(_, best)| swing > best) {
                key_point = Some((tp, swing));
            }
        }

        let Some((tp, _)) = key_point else {
            return "This match kept a fairly steady rhythm from start to finish.".to_string();
        };

        let team_name = match tp.team_advantage {
            crate::models::TeamSide::Home => home_team,
            crate::models::TeamSide::Away => away_team,
        };

        format!(
            "The match's biggest turning point came in minute {}. {} From that point on, \
             the balance of the game changed decisively.",
            tp.minute,
            self.generate_explanation(tp, team_name)
        )
    }
}

/// Direction of the shift for the advantaged side: improved when any of
/// possession, xG or shot volume rose across the boundary.
fn momentum_improved(turning_point: &TurningPoint) -> bool {
    let before = &turning_point.metrics_before;
    let after = &turning_point.metrics_after;
    after.possession > before.possession || after.xg > before.xg || after.shots > before.shots
}

/// All paraphrases applicable to the turning point's classification and
/// direction, fully rendered.
fn render_candidates(tp: &TurningPoint, team: &str, improved: bool) -> Vec<String> {
    let before = &tp.metrics_before;
    let after = &tp.metrics_after;
    let minute = tp.minute;

    match (tp.change_type, improved) {
        (ChangeType::AttackSurge, true) => vec![
            format!(
                "{team}'s attack came alive after minute {minute}. Shot attempts climbed \
                 from {} to {}, and with more of the play inside the opposition half they \
                 took a grip on the game.",
                before.shots, after.shots
            ),
            format!(
                "Minute {minute} sparked an attacking burst from {team}. Expected goals \
                 rose from {:.2} to {:.2} — chances of the kind that turn into goals.",
                before.xg, after.xg
            ),
        ],
        (ChangeType::AttackSurge, false) => vec![format!(
            "{team}'s attack went quiet after minute {minute}. Shots dried up, their \
             presence in the opposition half shrank, and the initiative began to slip away."
        )],
        (ChangeType::DefenseBreakdown, true) => vec![format!(
            "After minute {minute}, {team} defended on the front foot. The back line \
             pushed higher and pressed harder, and attacking chances followed."
        )],
        (ChangeType::DefenseBreakdown, false) => vec![format!(
            "From minute {minute}, {team}'s defensive line started dropping. They settled \
             into passive defending and holding off the opposition became a struggle."
        )],
        (ChangeType::MomentumShift, true) => vec![format!(
            "The game tilted toward {team} after minute {minute}. Pass accuracy improved \
             from {:.1}% to {:.1}%, their build-up smoothed out, and possession followed.",
            before.pass_success_rate, after.pass_success_rate
        )],
        (ChangeType::MomentumShift, false) => vec![format!(
            "Minute {minute} marked a slump for {team}. Pass accuracy fell from {:.1}% \
             to {:.1}%, moves kept breaking down, and the opponent took over the game.",
            before.pass_success_rate, after.pass_success_rate
        )],
    }
}
