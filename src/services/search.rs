use std::sync::Arc;
use thiserror::Error;

use crate::config::SearchSettings;
use crate::core::{RankError, RankQuery, Ranker};
use crate::models::{Coordinate, SearchRequest, SearchResponse};
use crate::services::{GeocodeError, NominatimClient, OverpassClient, OverpassError};

/// Why a search produced no pitch
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Address not found: {0}. Try a more precise address.")]
    AddressNotFound(String),

    /// Structured empty result from the ranking pipeline
    #[error(transparent)]
    Empty(#[from] RankError),

    /// Geocoder or Overpass failure, with the upstream message
    #[error("Upstream service failed: {0}")]
    Upstream(String),
}

impl SearchError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::AddressNotFound(_) => "address_not_found",
            SearchError::Empty(reason) => reason.code(),
            SearchError::Upstream(_) => "upstream_failure",
        }
    }
}

impl From<GeocodeError> for SearchError {
    fn from(value: GeocodeError) -> Self {
        SearchError::Upstream(value.to_string())
    }
}

impl From<OverpassError> for SearchError {
    fn from(value: OverpassError) -> Self {
        SearchError::Upstream(value.to_string())
    }
}

/// Runs one search: geocode the address, fetch pitches, rank them
pub struct SearchService {
    geocoder: Arc<NominatimClient>,
    overpass: Arc<OverpassClient>,
    ranker: Ranker,
    limits: SearchSettings,
}

impl SearchService {
    pub fn new(
        geocoder: Arc<NominatimClient>,
        overpass: Arc<OverpassClient>,
        ranker: Ranker,
        limits: SearchSettings,
    ) -> Self {
        Self {
            geocoder,
            overpass,
            ranker,
            limits,
        }
    }

    /// Radius actually used: the request's, else the profile default, capped
    pub fn effective_radius_km(&self, request: &SearchRequest) -> f64 {
        request
            .radius_km
            .unwrap_or_else(|| request.profile.profile().default_radius_km)
            .min(self.limits.max_radius_km)
    }

    /// Number of results actually returned
    pub fn effective_top_n(&self, request: &SearchRequest) -> usize {
        request
            .top_n
            .unwrap_or(self.limits.default_top_n)
            .min(self.limits.max_top_n)
            .max(1) as usize
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let origin = match request.origin {
            Some(origin) => origin,
            None => self.resolve(&request.address).await?,
        };

        let radius_km = self.effective_radius_km(request);
        let top_n = self.effective_top_n(request);

        tracing::info!(
            "Searching pitches around ({}, {}) within {} km, profile: {}, type: {}",
            origin.latitude,
            origin.longitude,
            radius_km,
            request.profile,
            request.pitch_type.as_str()
        );

        let elements = self
            .overpass
            .fetch_pitches(origin, (radius_km * 1000.0) as u32)
            .await?;

        let query = RankQuery {
            origin,
            radius_km,
            profile: request.profile,
            pitch_type: request.pitch_type,
            paid_filter: request.paid_filter,
            top_n,
        };

        let result = self.ranker.rank(&elements, &query)?;

        tracing::info!(
            "Returning {} pitches (from {} candidates, {} in radius)",
            result.pitches.len(),
            result.total_candidates,
            result.in_radius
        );

        Ok(SearchResponse {
            search_id: uuid::Uuid::new_v4().to_string(),
            origin,
            radius_km,
            profile: request.profile,
            pitch_type: request.pitch_type,
            paid_filter: request.paid_filter,
            selected_pitch_id: result.pitches.first().map(|p| p.id.clone()),
            pitches: result.pitches,
            total_candidates: result.total_candidates,
            type_filter_fallback: result.type_filter_fallback,
        })
    }

    async fn resolve(&self, address: &str) -> Result<Coordinate, SearchError> {
        self.geocoder
            .geocode(address)
            .await?
            .ok_or_else(|| SearchError::AddressNotFound(address.trim().to_string()))
    }
}
