//! Rows of the `player_stats` and `team_stats` views. Read-only; recomputed by SQLite per query.

use serde::Serialize;
use sqlx::FromRow;

use super::DbId;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PlayerStat {
    pub player_id: DbId,
    pub player_name: String,
    pub team_name: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<i64>,
    pub age: Option<i64>,
    pub ranking: i64,
    pub goals: i64,
    pub assists: i64,
    pub matches_played: i64,
    /// `goals / matches_played` rounded to two places; 0 when no matches were played.
    pub goals_per_match: f64,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TeamStat {
    pub team_id: DbId,
    pub team_name: String,
    pub coach_name: Option<String>,
    pub city: Option<String>,
    pub total_players: i64,
    pub total_goals: i64,
    pub total_assists: i64,
}
