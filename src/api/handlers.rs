//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    response::{Html, Json},
};

use crate::state::AppState;
use super::responses::{AckResponse, HealthResponse, StateResponse};

const INDEX_HTML: &str = include_str!("index.html");

/// Handle GET / - Serve the control page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handle GET /state - Return the job state and remaining seconds
pub async fn state_handler(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    Json(state.job.snapshot().into())
}

/// Handle POST /start - Start the job if idle
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<AckResponse> {
    state.job.start();
    Json(AckResponse::ok())
}

/// Handle POST /pause - Pause the job if running
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<AckResponse> {
    state.job.pause();
    Json(AckResponse::ok())
}

/// Handle POST /resume - Resume the job if paused
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Json<AckResponse> {
    state.job.resume();
    Json(AckResponse::ok())
}

/// Handle POST /stop - Reset the job to idle with a full budget
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<AckResponse> {
    state.job.stop();
    Json(AckResponse::ok())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime(), state.port, state.host.clone()))
}
