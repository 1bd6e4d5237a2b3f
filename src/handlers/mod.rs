//! HTTP handlers for teams, players, statistics and bulk data utilities.

pub mod data;
pub mod players;
pub mod stats;
pub mod teams;

use crate::error::AppError;
use crate::models::DbId;

/// Parse a numeric path id; anything else is a 400 before the store is touched.
fn parse_id(id_str: &str) -> Result<DbId, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}
