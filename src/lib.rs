//! PitchFinder - find, rank and plan games on nearby soccer pitches
//!
//! This library provides the ranking pipeline used by the PitchFinder service
//! (catalog normalization, filtering, scoring, top-N selection) together with
//! the geocoder and Overpass clients feeding it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, RankError, RankQuery, RankResult, build_catalog, haversine_km};
pub use crate::models::{Coordinate, OverpassElement, PitchRecord, PitchType, PaidFilter, ProfileName, SearchRequest, SearchResponse};
