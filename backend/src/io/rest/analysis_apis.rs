//! # REST API for Spending Analysis

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use tracing::info;

use crate::AppState;

/// Week-, month-, quarter- and year-to-date totals as of now
pub async fn get_analysis(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/analysis");

    let analysis = state.bill_service.analysis(Local::now().naive_local()).await;
    (StatusCode::OK, Json(analysis))
}
