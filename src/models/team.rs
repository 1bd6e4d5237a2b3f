//! Team row and its write input.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{empty_text, DbId};
use crate::service::validation::InputSchema;

/// A row from the `teams` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Team {
    pub team_id: DbId,
    pub team_name: String,
    pub coach_name: Option<String>,
    pub founded_year: Option<i64>,
    pub city: Option<String>,
    pub stadium: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Full team record for add and update. Update replaces every column with these values.
/// An omitted text field becomes `""`; an explicit `null` is stored as NULL.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamInput {
    pub team_name: String,
    #[serde(default = "empty_text")]
    pub coach_name: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i64>,
    #[serde(default = "empty_text")]
    pub city: Option<String>,
    #[serde(default = "empty_text")]
    pub stadium: Option<String>,
}

impl TeamInput {
    pub fn named(team_name: impl Into<String>) -> Self {
        TeamInput {
            team_name: team_name.into(),
            coach_name: empty_text(),
            founded_year: None,
            city: empty_text(),
            stadium: empty_text(),
        }
    }
}

impl InputSchema for TeamInput {
    const REQUIRED: &'static [&'static str] = &["team_name"];
}
