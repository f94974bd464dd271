//! Positional expected-goals placeholder.
//!
//! A crude stand-in used by ingestion when the vendor feed carries no xG of
//! its own: distance to goal plus the raw shot result label. Deliberately
//! not a calibrated model.

/// Estimate xG for a shot from its x coordinate and raw result label.
///
/// x grows toward the opponent goal, so the base estimate scales linearly
/// with x and never drops below 0.01. Known result labels adjust it;
/// anything else is treated as a blocked or scrambled attempt.
pub fn estimate_xg(x: Option<f32>, raw_result: Option<&str>) -> f32 {
    let x = x.unwrap_or(50.0);
    let base = (x / 100.0 * 0.5).max(0.01);

    match raw_result {
        Some("Goal") => 1.0,
        Some("On Target") => base * 0.8,
        Some("Off Target") => base * 0.3,
        _ => base * 0.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_certain() {
        assert_eq!(estimate_xg(Some(90.0), Some("Goal")), 1.0);
        assert_eq!(estimate_xg(None, Some("Goal")), 1.0);
    }

    #[test]
    fn test_on_target_beats_off_target() {
        let on = estimate_xg(Some(80.0), Some("On Target"));
        let off = estimate_xg(Some(80.0), Some("Off Target"));
        assert!(on > off);
        // base = 0.4 at x = 80
        assert!((on - 0.32).abs() < 1e-6);
        assert!((off - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_closer_shots_score_higher() {
        let near = estimate_xg(Some(95.0), Some("On Target"));
        let far = estimate_xg(Some(30.0), Some("On Target"));
        assert!(near > far);
    }

    #[test]
    fn test_unknown_result_floor() {
        // Even a shot from the goal line keeps a tiny nonzero estimate.
        let estimate = estimate_xg(Some(0.0), None);
        assert!((estimate - 0.001).abs() < 1e-6);
    }

    #[test]
    fn test_missing_x_defaults_to_midfield() {
        let with_default = estimate_xg(None, Some("On Target"));
        let explicit = estimate_xg(Some(50.0), Some("On Target"));
        assert_eq!(with_default, explicit);
    }
}
