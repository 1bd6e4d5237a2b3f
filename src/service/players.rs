//! CRUD and query operations on the `players` table.

use crate::error::{is_foreign_key_violation, AppError};
use crate::models::{DbId, OpOutcome, Player, PlayerInput, PlayerWithTeam};
use sqlx::SqlitePool;

const COLUMNS: &str = "player_id, first_name, last_name, team_id, position, jersey_number, age, \
                       height, weight, ranking, goals, assists, matches_played, created_at";

const JOINED_COLUMNS: &str = "p.player_id, p.first_name, p.last_name, p.team_id, p.position, \
                              p.jersey_number, p.age, p.height, p.weight, p.ranking, p.goals, \
                              p.assists, p.matches_played, p.created_at, t.team_name";

const JOIN: &str = "FROM players p LEFT JOIN teams t ON p.team_id = t.team_id";

pub const UNKNOWN_TEAM: &str = "Referenced team does not exist";

/// Default row count for the top-ranked listing when the caller gives none.
pub const DEFAULT_TOP_LIMIT: i64 = 10;

pub struct PlayerService;

impl PlayerService {
    /// Insert a player. `team_id` is not checked here; with FK enforcement on, SQLite rejects an
    /// unknown team and that is reported as a failed outcome.
    pub async fn add(pool: &SqlitePool, input: &PlayerInput) -> Result<OpOutcome, AppError> {
        let sql = "INSERT INTO players \
                   (first_name, last_name, team_id, position, jersey_number, age, height, weight, \
                    ranking, goals, assists, matches_played) \
                   VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, team_id = ?input.team_id, "query");
        let res = bind_input(sqlx::query(sql), input).execute(pool).await;
        match res {
            Ok(done) => Ok(OpOutcome::created(
                "Player added successfully",
                done.last_insert_rowid(),
            )),
            Err(e) if is_foreign_key_violation(&e) => Ok(OpOutcome::failed(UNKNOWN_TEAM)),
            Err(e) => Err(e.into()),
        }
    }

    /// Every player with its team name, highest ranking first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<PlayerWithTeam>, AppError> {
        let sql = format!("SELECT {JOINED_COLUMNS} {JOIN} ORDER BY p.ranking DESC, p.player_id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, PlayerWithTeam>(&sql)
            .fetch_all(pool)
            .await?)
    }

    /// One player without the team name, or `None` when the id is unknown.
    pub async fn get(pool: &SqlitePool, id: DbId) -> Result<Option<Player>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM players WHERE player_id = ?");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Player>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Players referencing `team_id`, highest ranking first. Unknown teams give an empty list.
    pub async fn by_team(pool: &SqlitePool, team_id: DbId) -> Result<Vec<Player>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM players WHERE team_id = ? ORDER BY ranking DESC, player_id"
        );
        tracing::debug!(sql = %sql, team_id, "query");
        Ok(sqlx::query_as::<_, Player>(&sql)
            .bind(team_id)
            .fetch_all(pool)
            .await?)
    }

    /// Replace every editable column. An unknown id affects nothing and still succeeds.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &PlayerInput,
    ) -> Result<OpOutcome, AppError> {
        let sql = "UPDATE players SET first_name = ?, last_name = ?, team_id = ?, position = ?, \
                   jersey_number = ?, age = ?, height = ?, weight = ?, ranking = ?, goals = ?, \
                   assists = ?, matches_played = ? \
                   WHERE player_id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let res = bind_input(sqlx::query(sql), input)
            .bind(id)
            .execute(pool)
            .await;
        match res {
            Ok(done) => {
                if done.rows_affected() == 0 {
                    tracing::debug!(id, "update matched no player");
                }
                Ok(OpOutcome::ok("Player updated successfully"))
            }
            Err(e) if is_foreign_key_violation(&e) => Ok(OpOutcome::failed(UNKNOWN_TEAM)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<OpOutcome, AppError> {
        let sql = "DELETE FROM players WHERE player_id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        if done.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no player");
        }
        Ok(OpOutcome::ok("Player deleted successfully"))
    }

    /// Players whose first or last name contains `term`, ignoring ASCII case. The term is
    /// matched literally; an empty term matches everyone.
    pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<PlayerWithTeam>, AppError> {
        let sql = format!(
            "SELECT {JOINED_COLUMNS} {JOIN} \
             WHERE p.first_name LIKE ?1 ESCAPE '\\' OR p.last_name LIKE ?1 ESCAPE '\\' \
             ORDER BY p.ranking DESC, p.player_id"
        );
        let pattern = format!("%{}%", escape_like(term));
        tracing::debug!(sql = %sql, pattern = %pattern, "query");
        Ok(sqlx::query_as::<_, PlayerWithTeam>(&sql)
            .bind(pattern)
            .fetch_all(pool)
            .await?)
    }

    /// The `limit` highest-ranked players. Non-positive limits return nothing.
    pub async fn top_by_ranking(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<PlayerWithTeam>, AppError> {
        // SQLite treats a negative LIMIT as "no limit".
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let sql = format!("SELECT {JOINED_COLUMNS} {JOIN} ORDER BY p.ranking DESC, p.player_id LIMIT ?");
        tracing::debug!(sql = %sql, limit, "query");
        Ok(sqlx::query_as::<_, PlayerWithTeam>(&sql)
            .bind(limit)
            .fetch_all(pool)
            .await?)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM players")
            .fetch_one(pool)
            .await?)
    }
}

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

/// Bind the twelve input columns in table order.
fn bind_input<'q>(query: SqliteQuery<'q>, input: &'q PlayerInput) -> SqliteQuery<'q> {
    query
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.team_id)
        .bind(&input.position)
        .bind(input.jersey_number)
        .bind(input.age)
        .bind(input.height)
        .bind(input.weight)
        .bind(input.ranking)
        .bind(input.goals)
        .bind(input.assists)
        .bind(input.matches_played)
}

/// Escape `LIKE` wildcards so the term matches as a plain substring (escape char `\`).
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn plain_terms_are_unchanged() {
        assert_eq!(escape_like("Kane"), "Kane");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c\\d"), "c\\\\d");
    }
}
