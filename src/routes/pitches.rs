use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use chrono::Duration;
use validator::Validate;
use crate::core::share::{
    booking_link, calendar_link, directions_link, is_bookable, share_message, web_search_link, ShareDetails,
};
use crate::models::{ErrorResponse, HealthResponse, PlanRequest, PlanResponse, SearchRequest};
use crate::services::{SearchError, SearchService};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

/// Configure all pitch-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/pitches/search", web::post().to(search_pitches))
        .route("/pitches/plan", web::post().to(plan_game));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Map a search failure to its HTTP response
pub fn search_error_response(err: &SearchError) -> HttpResponse {
    let status = match err {
        SearchError::AddressNotFound(_) | SearchError::Empty(_) => StatusCode::NOT_FOUND,
        SearchError::Upstream(_) => StatusCode::BAD_GATEWAY,
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: err.code().to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

/// Search pitches endpoint
///
/// POST /api/v1/pitches/search
///
/// Request body:
/// ```json
/// {
///   "address": "Bordeaux, France",
///   "profile": "Walking",
///   "pitchType": "all",
///   "paidFilter": "show_all",
///   "radiusKm": 3,
///   "topN": 10
/// }
/// ```
async fn search_pitches(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    match state.search.search(&req).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            if matches!(e, SearchError::Upstream(_)) {
                tracing::error!("Search for '{}' failed: {}", req.address, e);
            } else {
                tracing::info!("Search for '{}' returned no pitch: {}", req.address, e.code());
            }
            search_error_response(&e)
        }
    }
}

/// Plan a game endpoint
///
/// POST /api/v1/pitches/plan
///
/// Builds the share message, a one-hour calendar invite (date and time are
/// taken as UTC), directions and, for bookable providers, the booking link.
async fn plan_game(req: web::Json<PlanRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let pitch = &req.pitch;
    let directions = directions_link(req.origin, pitch.coordinate());

    let message = share_message(&ShareDetails {
        user_name: &req.user_name,
        style: req.style,
        pitch_name: &pitch.name,
        date: req.date,
        time: req.time,
        players: req.players,
        profile: req.profile,
        distance_km: pitch.distance_km,
        eta_minutes: pitch.eta_minutes,
        directions_url: &directions,
    });

    let start = req.date.and_time(req.time).and_utc();
    let end = start + Duration::hours(1);
    let calendar = calendar_link(
        &format!("Football - {}", pitch.name),
        start,
        end,
        &message,
        &pitch.name,
    );

    tracing::debug!("Planned game at {} for {} players", pitch.id, req.players);

    HttpResponse::Ok().json(PlanResponse {
        share_message: message,
        calendar_link: calendar,
        directions_link: directions,
        booking_link: booking_link(pitch.provider),
        search_link: web_search_link(&pitch.name),
        bookable: is_bookable(pitch.provider),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RankError;

    #[test]
    fn test_search_error_status_codes() {
        let not_found = search_error_response(&SearchError::Empty(RankError::NoResultsInRadius));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let address = search_error_response(&SearchError::AddressNotFound("nowhere".to_string()));
        assert_eq!(address.status(), StatusCode::NOT_FOUND);

        let upstream = search_error_response(&SearchError::Upstream("timeout".to_string()));
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }
}
