//! Player row, player joined with its team name, and the write input.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{empty_text, zero, zero_measure, DbId};
use crate::service::validation::InputSchema;

/// A row from the `players` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Player {
    pub player_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<DbId>,
    pub position: Option<String>,
    pub jersey_number: Option<i64>,
    pub age: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub ranking: i64,
    pub goals: i64,
    pub assists: i64,
    pub matches_played: i64,
    pub created_at: NaiveDateTime,
}

/// A player plus the name of the team it references (`None` for free agents or dangling ids).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PlayerWithTeam {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub player: Player,
    pub team_name: Option<String>,
}

/// Full player record for add and update. Omitted nullable fields become `""`, `0` or `0.0`;
/// an explicit `null` is stored as NULL. Counters are never null.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerInput {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub team_id: Option<DbId>,
    #[serde(default = "empty_text")]
    pub position: Option<String>,
    #[serde(default = "zero")]
    pub jersey_number: Option<i64>,
    #[serde(default = "zero")]
    pub age: Option<i64>,
    #[serde(default = "zero_measure")]
    pub height: Option<f64>,
    #[serde(default = "zero_measure")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub ranking: i64,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub matches_played: i64,
}

impl PlayerInput {
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        PlayerInput {
            first_name: first_name.into(),
            last_name: last_name.into(),
            team_id: None,
            position: empty_text(),
            jersey_number: zero(),
            age: zero(),
            height: zero_measure(),
            weight: zero_measure(),
            ranking: 0,
            goals: 0,
            assists: 0,
            matches_played: 0,
        }
    }
}

impl InputSchema for PlayerInput {
    const REQUIRED: &'static [&'static str] = &["first_name", "last_name"];
}
