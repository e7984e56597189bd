use thiserror::Error;

use crate::core::{
    catalog::build_catalog,
    filters::{apply_paid_filter, filter_by_pitch_type},
    scoring::{eta_minutes, score_pitch},
};
use crate::models::{Coordinate, OverpassElement, PaidFilter, PitchRecord, PitchType, ProfileName, ScoringRules};

/// Reasons a search legitimately ends with no pitch to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("No pitches found. Try increasing the radius or changing the address.")]
    NoResultsFound,

    #[error("No pitches within the search radius.")]
    NoResultsInRadius,

    #[error("No pitches after paid filter.")]
    AllFilteredOut,
}

impl RankError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RankError::NoResultsFound => "no_results_found",
            RankError::NoResultsInRadius => "no_results_in_radius",
            RankError::AllFilteredOut => "all_filtered_out",
        }
    }
}

/// Selection parameters of one ranking run
#[derive(Debug, Clone, Copy)]
pub struct RankQuery {
    pub origin: Coordinate,
    pub radius_km: f64,
    pub profile: ProfileName,
    pub pitch_type: PitchType,
    pub paid_filter: PaidFilter,
    pub top_n: usize,
}

/// Result of the ranking process
#[derive(Debug, Clone)]
pub struct RankResult {
    pub pitches: Vec<PitchRecord>,
    pub total_candidates: usize,
    pub in_radius: usize,
    /// The pitch-type filter matched nothing and was ignored
    pub type_filter_fallback: bool,
}

/// Ranking orchestrator - implements the filter/score/sort pipeline
///
/// # Pipeline Stages
/// 1. Catalog build (normalization + distance)
/// 2. Radius restriction
/// 3. Paid filter
/// 4. ETA and scoring
/// 5. Pitch-type filter, falling back to the unfiltered set
/// 6. Sort by score, then distance
/// 7. Top-N selection
#[derive(Debug, Clone)]
pub struct Ranker {
    rules: ScoringRules,
}

impl Ranker {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self {
            rules: ScoringRules::default(),
        }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Rank the pitches of a raw catalog for one search
    ///
    /// # Errors
    /// One distinct [`RankError`] per stage that can empty the set (catalog,
    /// radius, paid filter). The pitch-type filter never empties the result.
    pub fn rank(&self, elements: &[OverpassElement], query: &RankQuery) -> Result<RankResult, RankError> {
        // Stage 1: catalog
        let catalog = build_catalog(elements, query.origin);
        let total_candidates = catalog.len();
        if catalog.is_empty() {
            return Err(RankError::NoResultsFound);
        }

        // Stage 2: radius
        let in_radius: Vec<PitchRecord> = catalog
            .into_iter()
            .filter(|p| p.distance_km <= query.radius_km)
            .collect();
        if in_radius.is_empty() {
            return Err(RankError::NoResultsInRadius);
        }
        let in_radius_count = in_radius.len();

        // Stage 3: paid filter
        let affordable = apply_paid_filter(&in_radius, query.paid_filter);
        if affordable.is_empty() {
            return Err(RankError::AllFilteredOut);
        }

        // Stage 4: ETA + score
        let profile = query.profile.profile();
        let scored: Vec<PitchRecord> = affordable
            .into_iter()
            .map(|mut pitch| {
                pitch.eta_minutes = eta_minutes(pitch.distance_km, profile.travel_mode);
                let (score_raw, stars) = score_pitch(&pitch, &profile, query.pitch_type, &self.rules);
                pitch.score_raw = score_raw;
                pitch.stars = stars;
                pitch
            })
            .collect();

        // Stage 5: pitch type, with fallback
        let by_type = filter_by_pitch_type(&scored, query.pitch_type);
        let type_filter_fallback = by_type.is_empty();
        let mut ranked = if type_filter_fallback {
            tracing::debug!("No {} pitch, falling back to all types", query.pitch_type.as_str());
            scored
        } else {
            by_type
        };

        // Stage 6: score (descending), then distance (ascending)
        ranked.sort_by(|a, b| {
            b.score_raw
                .partial_cmp(&a.score_raw)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        // Stage 7: top N
        ranked.truncate(query.top_n);

        Ok(RankResult {
            pitches: ranked,
            total_candidates,
            in_radius: in_radius_count,
            type_filter_fallback,
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
