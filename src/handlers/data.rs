//! Bulk data utilities: seed sample data, clear everything.

use crate::response::outcome;
use crate::service::BulkService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// POST /sample-data. 409 when teams already exist, 500 when the insert was rolled back.
pub async fn add_sample_data(State(state): State<AppState>) -> impl IntoResponse {
    let result = BulkService::add_sample_data(&state.pool).await;
    let failed = if result.message == crate::service::SAMPLE_DATA_EXISTS {
        StatusCode::CONFLICT
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    outcome(result, StatusCode::CREATED, failed)
}

/// DELETE /clear-data
pub async fn clear_all_data(State(state): State<AppState>) -> impl IntoResponse {
    let result = BulkService::clear_all_data(&state.pool).await;
    outcome(result, StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR)
}
