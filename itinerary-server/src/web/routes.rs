//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Duration, Local, NaiveDateTime};
use tracing::{info, warn};

use crate::domain::{DomainError, PointOfInterest, TransportMode};
use crate::planner::{PlanError, PlanRequest};

use super::dto::*;
use super::state::AppState;

/// Accepted formats for the optional departure time.
const DEPARTURE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/modes", get(list_modes))
        .route("/itinerary/plan", post(plan_itinerary))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the effective speed profile of every transport mode.
async fn list_modes(State(state): State<AppState>) -> Json<ModesResponse> {
    let modes = TransportMode::ALL
        .into_iter()
        .map(|mode| ModeResult::new(mode, state.config.modes.get(mode)))
        .collect();

    Json(ModesResponse { modes })
}

/// Plan an itinerary from a candidate list.
async fn plan_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanItineraryResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanItineraryRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "JSON parse error");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    // The core has no cap of its own; bound its quadratic work here
    if req.candidates.len() > state.config.max_candidates {
        return Err(AppError::TooManyCandidates {
            count: req.candidates.len(),
            max: state.config.max_candidates,
        });
    }

    let candidates = req
        .candidates
        .iter()
        .map(CandidateRequest::to_poi)
        .collect::<Result<Vec<PointOfInterest>, _>>()?;

    let departure = match req.departure.as_deref() {
        Some(s) => parse_departure(s).ok_or_else(|| AppError::BadRequest {
            message: format!("Invalid departure time: {s}"),
        })?,
        None => Local::now().naive_local(),
    };

    let budget = Duration::try_minutes(req.budget_mins).ok_or_else(|| AppError::BadRequest {
        message: format!("Budget out of range: {} minutes", req.budget_mins),
    })?;

    // Every stamped time lies within `departure + budget`
    if departure.checked_add_signed(budget).is_none() {
        return Err(AppError::BadRequest {
            message: format!("Departure {departure} plus budget overflows the calendar"),
        });
    }

    let request = PlanRequest::new(candidates, req.start, budget, req.mode, departure);

    let itinerary = state.planner.plan(&request)?;

    info!(
        candidates = request.candidates.len(),
        stops = itinerary.len(),
        mode = %request.mode,
        "Itinerary planned"
    );

    Ok(Json(PlanItineraryResponse::from_itinerary(&itinerary)))
}

fn parse_departure(s: &str) -> Option<NaiveDateTime> {
    DEPARTURE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    TooManyCandidates { count: usize, max: usize },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidBudget { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::TooManyCandidates { count, max } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("{count} candidates exceeds the limit of {max}"),
            ),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
