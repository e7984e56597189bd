use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringRules;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub geocoder: GeocoderSettings,
    #[serde(default)]
    pub overpass: OverpassSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderSettings {
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Appended to addresses that do not already mention it
    #[serde(default = "default_country")]
    pub country: String,
    /// Minimum delay between two lookups (Nominatim usage policy)
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    #[serde(default = "default_geocoder_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            user_agent: default_user_agent(),
            country: default_country(),
            min_delay_ms: default_min_delay_ms(),
            timeout_secs: default_geocoder_timeout(),
        }
    }
}

fn default_geocoder_endpoint() -> String { "https://nominatim.openstreetmap.org".to_string() }
fn default_user_agent() -> String { "pitchfinder/0.1".to_string() }
fn default_country() -> String { "France".to_string() }
fn default_min_delay_ms() -> u64 { 1000 }
fn default_geocoder_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassSettings {
    /// Mirrors, tried in order
    #[serde(default = "default_overpass_endpoints")]
    pub endpoints: Vec<String>,
    #[serde(default = "default_overpass_timeout")]
    pub timeout_secs: u64,
}

impl Default for OverpassSettings {
    fn default() -> Self {
        Self {
            endpoints: default_overpass_endpoints(),
            timeout_secs: default_overpass_timeout(),
        }
    }
}

fn default_overpass_endpoints() -> Vec<String> {
    vec![
        "https://overpass-api.de/api/interpreter".to_string(),
        "https://overpass.kumi.systems/api/interpreter".to_string(),
        "https://overpass.nchc.org.tw/api/interpreter".to_string(),
    ]
}
fn default_overpass_timeout() -> u64 { 90 }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_max_radius_km")]
    pub max_radius_km: f64,
    #[serde(default = "default_top_n")]
    pub default_top_n: u16,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: u16,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_radius_km: default_max_radius_km(),
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
        }
    }
}

fn default_max_radius_km() -> f64 { 10.0 }
fn default_top_n() -> u16 { 10 }
fn default_max_top_n() -> u16 { 20 }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_distance_penalty")]
    pub distance_penalty_per_km: f64,
    #[serde(default = "default_selected_type_bonus")]
    pub selected_type_bonus: f64,
    #[serde(default = "default_preference_bonus")]
    pub preference_bonus: f64,
    #[serde(default = "default_paid_penalty")]
    pub paid_penalty: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            distance_penalty_per_km: default_distance_penalty(),
            selected_type_bonus: default_selected_type_bonus(),
            preference_bonus: default_preference_bonus(),
            paid_penalty: default_paid_penalty(),
        }
    }
}

impl From<ScoringSettings> for ScoringRules {
    fn from(value: ScoringSettings) -> Self {
        Self {
            distance_penalty_per_km: value.distance_penalty_per_km,
            selected_type_bonus: value.selected_type_bonus,
            preference_bonus: value.preference_bonus,
            paid_penalty: value.paid_penalty,
        }
    }
}

fn default_distance_penalty() -> f64 { 10.0 }
fn default_selected_type_bonus() -> f64 { 6.0 }
fn default_preference_bonus() -> f64 { 4.0 }
fn default_paid_penalty() -> f64 { 15.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PITCHFINDER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PITCHFINDER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PITCHFINDER")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("overpass.endpoints")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_matches_rules() {
        let rules: ScoringRules = ScoringSettings::default().into();
        assert_eq!(rules, ScoringRules::default());
    }

    #[test]
    fn test_default_search_limits() {
        let search = SearchSettings::default();
        assert_eq!(search.max_radius_km, 10.0);
        assert_eq!(search.default_top_n, 10);
        assert_eq!(search.max_top_n, 20);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.overpass.endpoints.len(), 3);
        assert_eq!(settings.geocoder.country, "France");
    }

    #[test]
    fn test_overrides() {
        let settings: Settings = Config::builder()
            .set_override("server.port", 9000)
            .and_then(|b| b.set_override("search.max_top_n", 15))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.search.max_top_n, 15);
        assert_eq!(settings.search.default_top_n, 10);
    }
}
