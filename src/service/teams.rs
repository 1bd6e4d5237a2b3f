//! CRUD on the `teams` table.

use crate::error::{is_unique_violation, AppError};
use crate::models::{DbId, OpOutcome, Team, TeamInput};
use sqlx::SqlitePool;

const COLUMNS: &str = "team_id, team_name, coach_name, founded_year, city, stadium, created_at";

pub const DUPLICATE_NAME: &str = "Team name already exists";

pub struct TeamService;

impl TeamService {
    /// Insert a team. A name clash is reported as a failed outcome, not an error.
    pub async fn add(pool: &SqlitePool, input: &TeamInput) -> Result<OpOutcome, AppError> {
        let sql = "INSERT INTO teams (team_name, coach_name, founded_year, city, stadium) \
                   VALUES (?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, team_name = %input.team_name, "query");
        let res = sqlx::query(sql)
            .bind(&input.team_name)
            .bind(&input.coach_name)
            .bind(input.founded_year)
            .bind(&input.city)
            .bind(&input.stadium)
            .execute(pool)
            .await;
        match res {
            Ok(done) => Ok(OpOutcome::created(
                "Team added successfully",
                done.last_insert_rowid(),
            )),
            Err(e) if is_unique_violation(&e) => Ok(OpOutcome::failed(DUPLICATE_NAME)),
            Err(e) => Err(e.into()),
        }
    }

    /// All teams ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Team>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM teams ORDER BY team_name");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Team>(&sql).fetch_all(pool).await?)
    }

    /// One team, or `None` when the id is unknown.
    pub async fn get(pool: &SqlitePool, id: DbId) -> Result<Option<Team>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM teams WHERE team_id = ?");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Team>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Replace every editable column of a team. An unknown id affects nothing and still succeeds.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &TeamInput,
    ) -> Result<OpOutcome, AppError> {
        let sql = "UPDATE teams SET team_name = ?, coach_name = ?, founded_year = ?, city = ?, stadium = ? \
                   WHERE team_id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let res = sqlx::query(sql)
            .bind(&input.team_name)
            .bind(&input.coach_name)
            .bind(input.founded_year)
            .bind(&input.city)
            .bind(&input.stadium)
            .bind(id)
            .execute(pool)
            .await;
        match res {
            Ok(done) => {
                if done.rows_affected() == 0 {
                    tracing::debug!(id, "update matched no team");
                }
                Ok(OpOutcome::ok("Team updated successfully"))
            }
            Err(e) if is_unique_violation(&e) => Ok(OpOutcome::failed(DUPLICATE_NAME)),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a team. Its players keep existing with `team_id` cleared by `ON DELETE SET NULL`.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<OpOutcome, AppError> {
        let sql = "DELETE FROM teams WHERE team_id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        if done.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no team");
        }
        Ok(OpOutcome::ok("Team deleted successfully"))
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(pool)
            .await?)
    }
}
