//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::domain::Preference;
use crate::planner::{PlanRequest, TripPlanner};

use super::dto::{AppError, PlanTripRequest, PlanTripResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip/plan", post(plan_trip))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a trip from source to destination.
async fn plan_trip(
    State(state): State<AppState>,
    Json(req): Json<PlanTripRequest>,
) -> Result<Json<PlanTripResponse>, AppError> {
    if req.source.trim().is_empty() || req.destination.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Both source and destination are required".to_string(),
        });
    }

    // Normalize preference synonyms here; the planner only ever sees the
    // canonical axes.
    let preference = match req.preference.as_deref() {
        Some(raw) => Preference::parse(raw).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => Preference::default(),
    };

    let plan_request = PlanRequest::new(req.source, req.destination, preference);

    let planner = TripPlanner::new(&*state.geo, &state.hubs, &state.config);
    let trip = planner.plan(&plan_request).await.map_err(AppError::from)?;

    Ok(Json(PlanTripResponse::from_trip(&trip)))
}
