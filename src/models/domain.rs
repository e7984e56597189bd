use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Geographic coordinate in degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Raw element as returned by an Overpass `out center tags` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<ElementCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    /// Representative coordinate: the node itself, or the centroid of a way/relation
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.kind {
            ElementKind::Node => match (self.lat, self.lon) {
                (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
                _ => None,
            },
            ElementKind::Way | ElementKind::Relation => self
                .center
                .as_ref()
                .and_then(|c| match (c.lat, c.lon) {
                    (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
                    _ => None,
                }),
        }
    }

    /// Lowercased tag value, empty when absent
    pub fn tag_lower(&self, key: &str) -> String {
        self.tags
            .get(key)
            .map(|v| v.to_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElementCenter {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Overpass interpreter response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// Commercial operator inferred from the pitch name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "UrbanSoccer")]
    UrbanSoccer,
    #[serde(rename = "Le Five")]
    LeFive,
    #[serde(rename = "Five (generic)")]
    FiveGeneric,
    #[serde(rename = "Public/Other")]
    PublicOther,
}

impl Provider {
    pub fn label(&self) -> &'static str {
        match self {
            Provider::UrbanSoccer => "UrbanSoccer",
            Provider::LeFive => "Le Five",
            Provider::FiveGeneric => "Five (generic)",
            Provider::PublicOther => "Public/Other",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A soccer pitch normalized from the raw catalog, plus its per-search ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    #[serde(rename = "pitchId")]
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub fee: String,
    #[serde(default)]
    pub indoor: String,
    pub provider: Provider,
    #[serde(rename = "etaMinutes", default)]
    pub eta_minutes: u32,
    #[serde(rename = "scoreRaw", default)]
    pub score_raw: f64,
    #[serde(default)]
    pub stars: u8,
}

impl PitchRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// Whether the fee tag marks a paying facility
    pub fn is_paid(&self) -> bool {
        self.fee.contains("yes") || self.fee.contains("true")
    }
}

/// Pitch category selectable by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchType {
    #[default]
    All,
    Grass,
    Clay,
    Synthetic,
    City,
}

impl PitchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchType::All => "all",
            PitchType::Grass => "grass",
            PitchType::Clay => "clay",
            PitchType::Synthetic => "synthetic",
            PitchType::City => "city",
        }
    }
}

impl std::str::FromStr for PitchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(PitchType::All),
            "grass" => Ok(PitchType::Grass),
            "clay" => Ok(PitchType::Clay),
            "synthetic" => Ok(PitchType::Synthetic),
            "city" => Ok(PitchType::City),
            other => Err(format!("unknown pitch type: {}", other)),
        }
    }
}

/// Whether paying facilities are kept in the results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaidFilter {
    #[default]
    #[serde(alias = "showAll")]
    ShowAll,
    #[serde(alias = "hidePaid")]
    HidePaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Car,
}

impl TravelMode {
    /// Average travel speed in km/h
    pub fn speed_kmh(&self) -> f64 {
        match self {
            TravelMode::Walk => 5.0,
            TravelMode::Car => 30.0,
        }
    }
}

impl From<&str> for TravelMode {
    /// Unknown labels fall back to walking
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "car" => TravelMode::Car,
            _ => TravelMode::Walk,
        }
    }
}

/// Named travel/preference profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProfileName {
    #[default]
    #[serde(rename = "Walking", alias = "walking")]
    Walking,
    #[serde(rename = "Student Budget", alias = "student_budget", alias = "studentBudget")]
    StudentBudget,
    #[serde(rename = "Car", alias = "car")]
    Car,
}

impl ProfileName {
    pub const ALL: [ProfileName; 3] = [ProfileName::Walking, ProfileName::StudentBudget, ProfileName::Car];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileName::Walking => "Walking",
            ProfileName::StudentBudget => "Student Budget",
            ProfileName::Car => "Car",
        }
    }

    pub fn profile(&self) -> Profile {
        match self {
            ProfileName::Walking => Profile {
                name: *self,
                travel_mode: TravelMode::Walk,
                default_radius_km: 2.0,
                preferred: &[PitchType::City, PitchType::Synthetic],
            },
            ProfileName::StudentBudget => Profile {
                name: *self,
                travel_mode: TravelMode::Walk,
                default_radius_km: 4.0,
                preferred: &[PitchType::Grass, PitchType::Synthetic],
            },
            ProfileName::Car => Profile {
                name: *self,
                travel_mode: TravelMode::Car,
                default_radius_km: 8.0,
                preferred: &[PitchType::Grass, PitchType::Synthetic],
            },
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Travel mode and preferred categories of a profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: ProfileName,
    pub travel_mode: TravelMode,
    pub default_radius_km: f64,
    pub preferred: &'static [PitchType],
}

/// Score adjustments applied by the scoring engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub distance_penalty_per_km: f64,
    pub selected_type_bonus: f64,
    pub preference_bonus: f64,
    pub paid_penalty: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            distance_penalty_per_km: 10.0,
            selected_type_bonus: 6.0,
            preference_bonus: 4.0,
            paid_penalty: 15.0,
        }
    }
}

/// Tone of the generated share message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    #[default]
    Match,
    Terrain,
}
