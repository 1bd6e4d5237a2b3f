//! Multi-statement utilities: guarded sample seeding and full clear. Each runs in one
//! transaction; a storage fault rolls everything back and comes back as a failed outcome.

use crate::models::OpOutcome;
use crate::service::sample::{sample_teams, SampleTeam};
use sqlx::{SqliteConnection, SqlitePool};

pub const SAMPLE_DATA_EXISTS: &str = "Sample data already exists";

pub struct BulkService;

enum Seeded {
    AlreadyPresent,
    Inserted { teams: usize, players: usize },
}

impl BulkService {
    /// Insert the six sample teams and their players, but only into an empty `teams` table.
    pub async fn add_sample_data(pool: &SqlitePool) -> OpOutcome {
        match Self::seed(pool).await {
            Ok(Seeded::AlreadyPresent) => OpOutcome::failed(SAMPLE_DATA_EXISTS),
            Ok(Seeded::Inserted { teams, players }) => {
                tracing::info!(teams, players, "sample data inserted");
                OpOutcome::ok(format!(
                    "Added {} teams and {} players successfully",
                    teams, players
                ))
            }
            Err(e) => {
                tracing::error!(error = %e, "sample data rolled back");
                OpOutcome::failed(format!("Error adding sample data: {}", e))
            }
        }
    }

    /// Delete every player, then every team, as one unit.
    pub async fn clear_all_data(pool: &SqlitePool) -> OpOutcome {
        match Self::clear(pool).await {
            Ok((players, teams)) => {
                tracing::info!(players, teams, "all data cleared");
                OpOutcome::ok("All data cleared successfully")
            }
            Err(e) => {
                tracing::error!(error = %e, "clear rolled back");
                OpOutcome::failed(format!("Error clearing data: {}", e))
            }
        }
    }

    async fn seed(pool: &SqlitePool) -> Result<Seeded, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            return Ok(Seeded::AlreadyPresent);
        }
        let teams = sample_teams();
        let mut players = 0;
        for team in &teams {
            players += insert_sample_team(&mut tx, team).await?;
        }
        tx.commit().await?;
        Ok(Seeded::Inserted {
            teams: teams.len(),
            players,
        })
    }

    async fn clear(pool: &SqlitePool) -> Result<(u64, u64), sqlx::Error> {
        let mut tx = pool.begin().await?;
        // Players first so the delete also works with FK enforcement on.
        let players = sqlx::query("DELETE FROM players")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let teams = sqlx::query("DELETE FROM teams")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok((players, teams))
    }
}

/// Insert one team and its players, linking them through the id the insert produced.
async fn insert_sample_team(
    conn: &mut SqliteConnection,
    team: &SampleTeam,
) -> Result<usize, sqlx::Error> {
    let team_id = sqlx::query(
        "INSERT INTO teams (team_name, coach_name, founded_year, city, stadium) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(team.team_name)
    .bind(team.coach_name)
    .bind(team.founded_year)
    .bind(team.city)
    .bind(team.stadium)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();
    tracing::debug!(team_id, team_name = %team.team_name, "sample team inserted");

    for p in &team.players {
        sqlx::query(
            "INSERT INTO players \
             (first_name, last_name, team_id, position, jersey_number, age, height, weight, \
              ranking, goals, assists, matches_played) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(p.first_name)
        .bind(p.last_name)
        .bind(team_id)
        .bind(p.position)
        .bind(p.jersey_number)
        .bind(p.age)
        .bind(p.height)
        .bind(p.weight)
        .bind(p.ranking)
        .bind(p.goals)
        .bind(p.assists)
        .bind(p.matches_played)
        .execute(&mut *conn)
        .await?;
    }
    Ok(team.players.len())
}
