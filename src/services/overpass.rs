use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::config::OverpassSettings;
use crate::models::{Coordinate, OverpassElement, OverpassResponse};

/// Errors that can occur when querying the Overpass API
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Overpass returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No Overpass endpoint configured")]
    NoEndpoints,

    #[error("Overpass API error (all endpoints failed). Last error: {0}")]
    AllEndpointsFailed(Box<OverpassError>),
}

/// Overpass (OpenStreetMap) client for soccer pitches
///
/// Mirrors are tried in order; the first successful answer wins.
pub struct OverpassClient {
    endpoints: Vec<String>,
    client: Client,
}

impl OverpassClient {
    /// Create a new Overpass client
    pub fn new(settings: &OverpassSettings) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            endpoints: settings.endpoints.clone(),
            client,
        })
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Fetch soccer pitches (nodes, ways and relations) around a point
    pub async fn fetch_pitches(
        &self,
        origin: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<OverpassElement>, OverpassError> {
        let query = pitch_query(origin, radius_m);

        let mut last_error = None;
        for endpoint in &self.endpoints {
            tracing::debug!("Querying Overpass mirror {}", endpoint);
            match self.fetch_from(endpoint, &query).await {
                Ok(response) => {
                    tracing::debug!("Overpass mirror {} returned {} elements", endpoint, response.elements.len());
                    return Ok(response.elements);
                }
                Err(e) => {
                    tracing::warn!("Overpass mirror {} failed: {}", endpoint, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(OverpassError::AllEndpointsFailed(Box::new(e))),
            None => Err(OverpassError::NoEndpoints),
        }
    }

    async fn fetch_from(&self, endpoint: &str, query: &str) -> Result<OverpassResponse, OverpassError> {
        let response = self
            .client
            .get(endpoint)
            .query(&[("data", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OverpassError::ApiError(format!(
                "Failed to query pitches: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| OverpassError::InvalidResponse(format!("Failed to parse elements: {}", e)))
    }
}

/// Overpass QL for soccer pitches within `radius_m` metres of `origin`
pub fn pitch_query(origin: Coordinate, radius_m: u32) -> String {
    let around = format!("(around:{},{},{})", radius_m, origin.latitude, origin.longitude);
    format!(
        "[out:json][timeout:40];\n\
         (\n  \
         node[\"leisure\"=\"pitch\"][\"sport\"=\"soccer\"]{around};\n  \
         way[\"leisure\"=\"pitch\"][\"sport\"=\"soccer\"]{around};\n  \
         relation[\"leisure\"=\"pitch\"][\"sport\"=\"soccer\"]{around};\n\
         );\n\
         out center tags;\n",
        around = around
    )
}
