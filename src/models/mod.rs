// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinate, ElementCenter, ElementKind, MessageStyle, OverpassElement, OverpassResponse, PaidFilter,
    PitchRecord, PitchType, Profile, ProfileName, Provider, ScoringRules, TravelMode,
};
pub use requests::{PlanRequest, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse, PlanResponse, SearchResponse};
