//! Statistics handlers over the player and team views.

use crate::error::AppError;
use crate::response::success_many;
use crate::service::StatsService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(success_many(StatsService::player_stats(&state.pool).await?))
}

pub async fn teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(success_many(StatsService::team_stats(&state.pool).await?))
}
