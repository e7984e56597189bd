use serde::{Deserialize, Serialize};
use crate::models::domain::{Coordinate, PaidFilter, PitchRecord, PitchType, ProfileName};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "searchId")]
    pub search_id: String,
    pub origin: Coordinate,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    pub profile: ProfileName,
    #[serde(rename = "pitchType")]
    pub pitch_type: PitchType,
    #[serde(rename = "paidFilter")]
    pub paid_filter: PaidFilter,
    pub pitches: Vec<PitchRecord>,
    #[serde(rename = "selectedPitchId")]
    pub selected_pitch_id: Option<String>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "typeFilterFallback")]
    pub type_filter_fallback: bool,
}

/// Response for the plan endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(rename = "shareMessage")]
    pub share_message: String,
    #[serde(rename = "calendarLink")]
    pub calendar_link: String,
    #[serde(rename = "directionsLink")]
    pub directions_link: String,
    #[serde(rename = "bookingLink")]
    pub booking_link: Option<String>,
    #[serde(rename = "searchLink")]
    pub search_link: String,
    pub bookable: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
