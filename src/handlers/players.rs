//! Player handlers: CRUD plus search and the ranking leaderboard.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::Payload;
use crate::models::PlayerInput;
use crate::response::{outcome, success_many, success_one_ok};
use crate::service::{PlayerService, DEFAULT_TOP_LIMIT};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::list(&state.pool).await?;
    Ok(success_many(players))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let player = PlayerService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;
    Ok(success_one_ok(player))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<PlayerInput>,
) -> Result<impl IntoResponse, AppError> {
    let result = PlayerService::add(&state.pool, &input).await?;
    Ok(outcome(result, StatusCode::CREATED, StatusCode::UNPROCESSABLE_ENTITY))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(input): Payload<PlayerInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let result = PlayerService::update(&state.pool, id, &input).await?;
    Ok(outcome(result, StatusCode::OK, StatusCode::UNPROCESSABLE_ENTITY))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let result = PlayerService::delete(&state.pool, id).await?;
    Ok(outcome(result, StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR))
}

/// GET /players/search?q=. A missing `q` searches for the empty string and matches everyone.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::search(&state.pool, &params.q).await?;
    Ok(success_many(players))
}

/// GET /players/top/:limit
pub async fn top(
    State(state): State<AppState>,
    Path(limit_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let limit: i64 = limit_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("invalid limit".into()))?;
    let players = PlayerService::top_by_ranking(&state.pool, limit).await?;
    Ok(success_many(players))
}

/// GET /players/top
pub async fn top_default(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::top_by_ranking(&state.pool, DEFAULT_TOP_LIMIT).await?;
    Ok(success_many(players))
}
