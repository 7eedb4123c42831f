//! JSON API for slider UIs
//!
//! Writers hold the simulation's write lock for the whole
//! clamp → recompute → record sequence, so every recompute sees a consistent
//! parameter snapshot and readers never observe a half-applied change.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use classroom_capacity::{
    HistogramBin, RecomputeOutcome, Simulation, SimulationStatus, SliderUpdate, StudentResult,
    TrendSample,
};
use classroom_common::{ParameterInput, ParameterSet, SimulationError};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::SIM_VERSION;

#[derive(Clone)]
pub struct AppState {
    pub simulation: Arc<RwLock<Simulation>>,
}

impl AppState {
    pub fn new(simulation: Simulation) -> Self {
        Self {
            simulation: Arc::new(RwLock::new(simulation)),
        }
    }
}

/// Simulation error mapped onto an HTTP status
pub struct ApiError(SimulationError);

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            // The frame is skipped; the previous state keeps serving
            SimulationError::Domain(_) | SimulationError::Range(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SimulationError::Distribution(_) | SimulationError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        warn!(error = %self.0, status = status.as_u16(), "Request rejected");
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChangeResponse {
    pub outcome: RecomputeOutcome,
    pub status: SimulationStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub results: Vec<StudentResult>,
    pub fail_rate: f64,
    pub predicted_fail_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrendResponse {
    pub capacity: usize,
    pub fail_rates: Vec<f64>,
    pub samples: Vec<TrendSample>,
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/version", get(version))
        .route("/api/v1/parameters", get(get_parameters).put(put_parameters))
        .route("/api/v1/parameters/slider", post(post_slider))
        .route("/api/v1/population/reset", post(reset_population))
        .route("/api/v1/results", get(get_results))
        .route("/api/v1/status", get(get_status))
        .route("/api/v1/trend", get(get_trend))
        .route("/api/v1/histogram", get(get_histogram))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "classroom-sim",
        "version": SIM_VERSION,
        "description": "Classroom capacity-ratio simulation",
    }))
}

async fn get_parameters(State(state): State<AppState>) -> Json<ParameterSet> {
    Json(*state.simulation.read().parameters())
}

async fn put_parameters(
    State(state): State<AppState>,
    Json(params): Json<ParameterInput>,
) -> Result<Json<ChangeResponse>, ApiError> {
    let mut sim = state.simulation.write();
    let outcome = sim.set_parameters(params)?;
    info!(
        demand = outcome.demand,
        fail_rate = outcome.fail_rate,
        clamped = outcome.clamped.len(),
        "Parameters updated"
    );
    Ok(Json(ChangeResponse {
        outcome,
        status: sim.status(),
    }))
}

async fn post_slider(
    State(state): State<AppState>,
    Json(update): Json<SliderUpdate>,
) -> Result<Json<ChangeResponse>, ApiError> {
    let mut sim = state.simulation.write();
    let outcome = sim.adjust(update)?;
    Ok(Json(ChangeResponse {
        outcome,
        status: sim.status(),
    }))
}

async fn reset_population(State(state): State<AppState>) -> Result<Json<ChangeResponse>, ApiError> {
    let mut sim = state.simulation.write();
    let outcome = sim.reset_population()?;
    Ok(Json(ChangeResponse {
        outcome,
        status: sim.status(),
    }))
}

async fn get_results(State(state): State<AppState>) -> Json<ResultsResponse> {
    let sim = state.simulation.read();
    Json(ResultsResponse {
        results: sim.current_results().to_vec(),
        fail_rate: sim.current_fail_rate(),
        predicted_fail_rate: sim.predicted_fail_rate(),
    })
}

async fn get_status(State(state): State<AppState>) -> Json<SimulationStatus> {
    Json(state.simulation.read().status())
}

async fn get_trend(State(state): State<AppState>) -> Json<TrendResponse> {
    let sim = state.simulation.read();
    let trend = sim.trend();
    Json(TrendResponse {
        capacity: trend.capacity(),
        fail_rates: trend.snapshot(),
        samples: trend.samples().copied().collect(),
    })
}

async fn get_histogram(State(state): State<AppState>) -> Json<Vec<HistogramBin>> {
    Json(state.simulation.read().histogram())
}
