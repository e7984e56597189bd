use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Coordinate, MessageStyle, PaidFilter, PitchRecord, PitchType, ProfileName};

/// Request to search pitches around an address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub address: String,
    /// Pre-resolved origin; geocoding is skipped when present
    #[serde(default)]
    pub origin: Option<Coordinate>,
    #[serde(default)]
    pub profile: ProfileName,
    #[serde(default, alias = "pitch_type", rename = "pitchType")]
    pub pitch_type: PitchType,
    #[serde(default, alias = "paid_filter", rename = "paidFilter")]
    pub paid_filter: PaidFilter,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default, alias = "radius_km", rename = "radiusKm")]
    pub radius_km: Option<f64>,
    #[validate(range(min = 1))]
    #[serde(default, alias = "top_n", rename = "topN")]
    pub top_n: Option<u16>,
}

impl SearchRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            origin: None,
            profile: ProfileName::default(),
            pitch_type: PitchType::default(),
            paid_filter: PaidFilter::default(),
            radius_km: None,
            top_n: None,
        }
    }
}

/// Request to prepare a share message and calendar invite for a pitch
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanRequest {
    pub pitch: PitchRecord,
    pub origin: Coordinate,
    #[validate(length(min = 1, max = 64))]
    #[serde(alias = "user_name", rename = "userName")]
    pub user_name: String,
    #[serde(default)]
    pub style: MessageStyle,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[validate(range(min = 2, max = 30))]
    #[serde(default = "default_players")]
    pub players: u8,
    #[serde(default)]
    pub profile: ProfileName,
}

fn default_players() -> u8 {
    10
}
