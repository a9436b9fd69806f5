//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use scenarium_domain::{Scenario, ScenarioId};
use scenarium_shared::{ErrorBody, ErrorCode, LikeCountData, LikeRequest};

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/scenarios", get(list_scenarios))
        .route("/api/scenarios/{id}", get(get_scenario))
        .route("/api/likes", get(get_like_count))
        .route("/api/likes/increment", post(increment_like))
        .route("/api/likes/decrement", post(decrement_like))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_scenarios(State(app): State<Arc<App>>) -> Json<Vec<Scenario>> {
    Json(app.catalog.all().to_vec())
}

async fn get_scenario(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<Json<Scenario>, ApiError> {
    let id = parse_scenario_id(Some(id))?;
    let scenario = app.catalog.get(id).cloned().ok_or(ApiError::NotFound)?;
    Ok(Json(scenario))
}

/// Query string of `GET /api/likes`.
#[derive(Debug, Deserialize)]
struct LikeQuery {
    id: Option<i64>,
}

async fn get_like_count(
    State(app): State<Arc<App>>,
    Query(query): Query<LikeQuery>,
) -> Result<Json<LikeCountData>, ApiError> {
    let id = parse_scenario_id(query.id)?;
    Ok(Json(LikeCountData {
        id: id.get(),
        count: app.likes.get(id),
    }))
}

async fn increment_like(
    State(app): State<Arc<App>>,
    Json(request): Json<LikeRequest>,
) -> Result<Json<LikeCountData>, ApiError> {
    let id = parse_scenario_id(request.id)?;
    Ok(Json(LikeCountData {
        id: id.get(),
        count: app.likes.increment(id),
    }))
}

async fn decrement_like(
    State(app): State<Arc<App>>,
    Json(request): Json<LikeRequest>,
) -> Result<Json<LikeCountData>, ApiError> {
    let id = parse_scenario_id(request.id)?;
    Ok(Json(LikeCountData {
        id: id.get(),
        count: app.likes.decrement(id),
    }))
}

/// Validates a raw id before it reaches any service.
///
/// Absent and non-positive ids are rejected here, so invalid requests
/// never touch the counter map.
fn parse_scenario_id(raw: Option<i64>) -> Result<ScenarioId, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::InvalidRequest("scenario id is required".to_string()))?;
    ScenarioId::try_from(raw).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    NotFound,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::InvalidRequest(message) => (
                axum::http::StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(ErrorCode::InvalidRequest, message)),
            )
                .into_response(),
            ApiError::NotFound => (
                axum::http::StatusCode::NOT_FOUND,
                Json(ErrorBody::new(ErrorCode::NotFound, "Not found")),
            )
                .into_response(),
        }
    }
}
