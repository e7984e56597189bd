use crate::models::{PaidFilter, PitchRecord, PitchType};

const GRASS_KEYWORDS: &[&str] = &["grass", "gazon"];
const CLAY_KEYWORDS: &[&str] = &["clay", "sand", "dirt", "terre"];
const SYNTHETIC_KEYWORDS: &[&str] = &["artificial", "synthetic", "turf", "rubber", "artificial_turf"];
const CITY_NAME_KEYWORDS: &[&str] = &["five", "city", "urban"];

#[inline]
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Check whether a pitch belongs to a category
///
/// `All` matches every pitch. Empty tags never match a keyword.
#[inline]
pub fn matches_pitch_type(pitch: &PitchRecord, pitch_type: PitchType) -> bool {
    match pitch_type {
        PitchType::All => true,
        PitchType::Grass => contains_any(&pitch.surface, GRASS_KEYWORDS),
        PitchType::Clay => contains_any(&pitch.surface, CLAY_KEYWORDS),
        PitchType::Synthetic => contains_any(&pitch.surface, SYNTHETIC_KEYWORDS),
        PitchType::City => {
            pitch.indoor.contains("yes") || contains_any(&pitch.name.to_lowercase(), CITY_NAME_KEYWORDS)
        }
    }
}

/// Keep only pitches of the given category
pub fn filter_by_pitch_type(pitches: &[PitchRecord], pitch_type: PitchType) -> Vec<PitchRecord> {
    pitches
        .iter()
        .filter(|p| matches_pitch_type(p, pitch_type))
        .cloned()
        .collect()
}

/// Drop paying facilities when asked to
pub fn apply_paid_filter(pitches: &[PitchRecord], paid_filter: PaidFilter) -> Vec<PitchRecord> {
    match paid_filter {
        PaidFilter::ShowAll => pitches.to_vec(),
        PaidFilter::HidePaid => pitches.iter().filter(|p| !p.is_paid()).cloned().collect(),
    }
}
