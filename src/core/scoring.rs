use crate::core::{distance::round_to, filters::matches_pitch_type};
use crate::models::{PitchRecord, PitchType, Profile, ScoringRules, TravelMode};

/// Calculate a suitability score (0-100) and star rating (0-5) for a pitch
///
/// Scoring formula:
/// score = 100
///     - distance_penalty_per_km * distance_km   # closer = higher score
///     + selected_type_bonus                      # matches the selected type
///     + preference_bonus per preferred category  # stacks with the above
///     - paid_penalty                             # fee tag says paid
///
/// The result is clamped to [0, 100] and rounded to one decimal.
pub fn score_pitch(
    pitch: &PitchRecord,
    profile: &Profile,
    selected: PitchType,
    rules: &ScoringRules,
) -> (f64, u8) {
    let mut score = 100.0 - rules.distance_penalty_per_km * pitch.distance_km;

    if selected != PitchType::All && matches_pitch_type(pitch, selected) {
        score += rules.selected_type_bonus;
    }

    for category in profile.preferred {
        // `All` is not a category; it would match every pitch
        if *category != PitchType::All && matches_pitch_type(pitch, *category) {
            score += rules.preference_bonus;
        }
    }

    if pitch.is_paid() {
        score -= rules.paid_penalty;
    }

    let score_raw = round_to(score.clamp(0.0, 100.0), 1);
    (score_raw, stars_for(score_raw))
}

/// Star rating (0-5) for a raw score
#[inline]
pub fn stars_for(score_raw: f64) -> u8 {
    (score_raw / 20.0).round_ties_even().clamp(0.0, 5.0) as u8
}

/// Estimated travel time in whole minutes
#[inline]
pub fn eta_minutes(distance_km: f64, mode: TravelMode) -> u32 {
    (distance_km / mode.speed_kmh() * 60.0).round_ties_even().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileName, Provider};

    fn create_test_pitch(distance_km: f64, surface: &str, fee: &str) -> PitchRecord {
        PitchRecord {
            id: "44.840000,-0.580000".to_string(),
            name: "Stade".to_string(),
            lat: 44.84,
            lon: -0.58,
            distance_km,
            surface: surface.to_string(),
            access: String::new(),
            fee: fee.to_string(),
            indoor: String::new(),
            provider: Provider::PublicOther,
            eta_minutes: 0,
            score_raw: 0.0,
            stars: 0,
        }
    }

    #[test]
    fn test_distance_penalty() {
        let walking = ProfileName::Walking.profile();
        let pitch = create_test_pitch(1.0, "grass", "");

        let (score, stars) = score_pitch(&pitch, &walking, PitchType::All, &ScoringRules::default());

        assert_eq!(score, 90.0);
        assert_eq!(stars, 4);
    }

    #[test]
    fn test_paid_penalty() {
        let walking = ProfileName::Walking.profile();
        let pitch = create_test_pitch(1.0, "grass", "yes");

        let (score, stars) = score_pitch(&pitch, &walking, PitchType::All, &ScoringRules::default());

        assert_eq!(score, 75.0);
        assert_eq!(stars, 4);
    }

    #[test]
    fn test_selected_and_preferred_bonuses_stack() {
        // Walking prefers synthetic, so selecting synthetic yields +6 and +4
        let walking = ProfileName::Walking.profile();
        let pitch = create_test_pitch(2.0, "artificial_turf", "");

        let (score, _) = score_pitch(&pitch, &walking, PitchType::Synthetic, &ScoringRules::default());

        assert_eq!(score, 90.0);
    }

    #[test]
    fn test_preference_bonus_only() {
        let car = ProfileName::Car.profile();
        let pitch = create_test_pitch(3.0, "grass", "");

        let (score, _) = score_pitch(&pitch, &car, PitchType::All, &ScoringRules::default());

        assert_eq!(score, 74.0);
    }

    #[test]
    fn test_score_clamped() {
        let walking = ProfileName::Walking.profile();
        let far = create_test_pitch(12.0, "", "yes");
        let (score, stars) = score_pitch(&far, &walking, PitchType::All, &ScoringRules::default());
        assert_eq!(score, 0.0);
        assert_eq!(stars, 0);

        let on_top = create_test_pitch(0.0, "synthetic", "");
        let (score, stars) = score_pitch(&on_top, &walking, PitchType::Synthetic, &ScoringRules::default());
        assert_eq!(score, 100.0);
        assert_eq!(stars, 5);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars_for(90.0), 4);
        assert_eq!(stars_for(75.0), 4);
        assert_eq!(stars_for(50.0), 2);
        assert_eq!(stars_for(100.0), 5);
        assert_eq!(stars_for(9.9), 0);
    }

    #[test]
    fn test_eta_minutes() {
        assert_eq!(eta_minutes(1.0, TravelMode::Walk), 12);
        assert_eq!(eta_minutes(1.0, TravelMode::Car), 2);
        assert_eq!(eta_minutes(0.0, TravelMode::Walk), 0);
        assert_eq!(eta_minutes(2.5, TravelMode::from("bicycle")), 30);
    }
}
