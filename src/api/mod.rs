//! JSON API
//!
//! Same pipeline as the form page, but coordinates are checked strictly and
//! problems are reported as JSON errors instead of being papered over.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::models::Coordinate;
use crate::planner::{self, Recommendation, TripRequest};
use crate::web::AppState;
use crate::{TravelError, VERSION};

/// Error body returned by the API
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Wrapper turning [`TravelError`] into an HTTP response
#[derive(Debug)]
pub struct ApiError(pub TravelError);

impl From<TravelError> for ApiError {
    fn from(err: TravelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            TravelError::Validation { .. } => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            err if err.is_upstream() => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!("API request failed: {}", self.0);
        }

        let body = ApiErrorBody {
            code,
            message: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recommendation", get(get_recommendation))
        .route("/health", get(health))
}

async fn get_recommendation(
    State(state): State<AppState>,
    Query(request): Query<TripRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let (lat, lon) = request
        .coordinates()
        .ok_or_else(|| TravelError::validation("both lat and lon are required"))?;
    let coordinate = Coordinate::parse_strict(lat, lon)?;

    let recommendation = planner::plan_trip(&state.fetcher, request.city(), coordinate).await;
    Ok(Json(recommendation))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
    })
}
