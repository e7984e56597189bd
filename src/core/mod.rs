// Core algorithm exports
pub mod catalog;
pub mod distance;
pub mod filters;
pub mod ranker;
pub mod scoring;
pub mod share;

pub use catalog::{build_catalog, detect_provider, pitch_id};
pub use distance::{haversine_km, round_to};
pub use filters::{apply_paid_filter, filter_by_pitch_type, matches_pitch_type};
pub use ranker::{RankError, RankQuery, RankResult, Ranker};
pub use scoring::{eta_minutes, score_pitch, stars_for};
