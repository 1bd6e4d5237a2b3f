//! Reads of the statistics views. Nothing here writes; the views are recomputed on each query.

use crate::error::AppError;
use crate::models::{PlayerStat, TeamStat};
use sqlx::SqlitePool;

pub struct StatsService;

impl StatsService {
    /// Per-player statistics, highest ranking first.
    pub async fn player_stats(pool: &SqlitePool) -> Result<Vec<PlayerStat>, AppError> {
        let sql = "SELECT player_id, player_name, team_name, position, jersey_number, age, ranking, \
                   goals, assists, matches_played, goals_per_match \
                   FROM player_stats ORDER BY ranking DESC, player_id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, PlayerStat>(sql).fetch_all(pool).await?)
    }

    /// Per-team totals, one row per team including teams without players.
    pub async fn team_stats(pool: &SqlitePool) -> Result<Vec<TeamStat>, AppError> {
        let sql = "SELECT team_id, team_name, coach_name, city, total_players, total_goals, total_assists \
                   FROM team_stats ORDER BY team_id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, TeamStat>(sql).fetch_all(pool).await?)
    }
}
