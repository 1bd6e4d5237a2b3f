//! Team handlers: list, read, create, update, delete, and the team's player roster.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::Payload;
use crate::models::TeamInput;
use crate::response::{outcome, success_many, success_one_ok};
use crate::service::{PlayerService, TeamService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::list(&state.pool).await?;
    Ok(success_many(teams))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let team = TeamService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;
    Ok(success_one_ok(team))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<TeamInput>,
) -> Result<impl IntoResponse, AppError> {
    let result = TeamService::add(&state.pool, &input).await?;
    Ok(outcome(result, StatusCode::CREATED, StatusCode::CONFLICT))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(input): Payload<TeamInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let result = TeamService::update(&state.pool, id, &input).await?;
    Ok(outcome(result, StatusCode::OK, StatusCode::CONFLICT))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let result = TeamService::delete(&state.pool, id).await?;
    Ok(outcome(result, StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR))
}

pub async fn players(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let players = PlayerService::by_team(&state.pool, id).await?;
    Ok(success_many(players))
}
