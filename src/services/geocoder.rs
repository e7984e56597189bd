use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::GeocoderSettings;
use crate::models::Coordinate;

/// Errors that can occur when resolving an address
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Geocoder returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// One Nominatim search hit; coordinates come back as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Nominatim (OpenStreetMap) address geocoder
///
/// Calls are spaced by at least `min_delay` to honour the public instance's
/// rate limit.
pub struct NominatimClient {
    base_url: String,
    country: String,
    min_delay: Duration,
    last_call: Mutex<Option<Instant>>,
    client: Client,
}

impl NominatimClient {
    /// Create a new geocoder client
    pub fn new(settings: &GeocoderSettings) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            base_url: settings.endpoint.trim_end_matches('/').to_string(),
            country: settings.country.clone(),
            min_delay: Duration::from_millis(settings.min_delay_ms),
            last_call: Mutex::new(None),
            client,
        })
    }

    /// Resolve an address to a coordinate
    ///
    /// Returns `Ok(None)` when the geocoder knows no such place.
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let query = with_country(address.trim(), &self.country);

        self.throttle().await;

        let url = format!("{}/search", self.base_url);
        tracing::debug!("Geocoding '{}' via {}", query, url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::ApiError(format!(
                "Failed to geocode address: {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodeError::InvalidResponse(format!("Failed to parse places: {}", e)))?;

        let Some(place) = places.first() else {
            return Ok(None);
        };

        let latitude = place
            .lat
            .parse::<f64>()
            .map_err(|e| GeocodeError::InvalidResponse(format!("Invalid latitude '{}': {}", place.lat, e)))?;
        let longitude = place
            .lon
            .parse::<f64>()
            .map_err(|e| GeocodeError::InvalidResponse(format!("Invalid longitude '{}': {}", place.lon, e)))?;

        Ok(Some(Coordinate::new(latitude, longitude)))
    }

    /// Wait until `min_delay` has elapsed since the previous call
    async fn throttle(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

/// Append the country to an address that does not mention it
pub fn with_country(address: &str, country: &str) -> String {
    if country.is_empty() || address.to_lowercase().contains(&country.to_lowercase()) {
        address.to_string()
    } else {
        format!("{}, {}", address, country)
    }
}
