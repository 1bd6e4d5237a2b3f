//! Schema for the two base tables and the two statistics views.
//! Every statement is "create if absent", so applying the schema repeatedly is a no-op.

use crate::error::AppError;
use sqlx::SqlitePool;

const CREATE_TEAMS: &str = r#"
CREATE TABLE IF NOT EXISTS teams (
    team_id INTEGER PRIMARY KEY AUTOINCREMENT,
    team_name TEXT NOT NULL UNIQUE,
    coach_name TEXT,
    founded_year INTEGER,
    city TEXT,
    stadium TEXT,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_PLAYERS: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    player_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    team_id INTEGER,
    position TEXT,
    jersey_number INTEGER,
    age INTEGER,
    height REAL,
    weight REAL,
    ranking INTEGER NOT NULL DEFAULT 0,
    goals INTEGER NOT NULL DEFAULT 0,
    assists INTEGER NOT NULL DEFAULT 0,
    matches_played INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (team_id) REFERENCES teams(team_id) ON DELETE SET NULL
)
"#;

const CREATE_PLAYERS_TEAM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_players_team_id ON players(team_id)";

// goals_per_match stays REAL in both branches so the column decodes as f64.
const CREATE_PLAYER_STATS: &str = r#"
CREATE VIEW IF NOT EXISTS player_stats AS
SELECT
    p.player_id,
    p.first_name || ' ' || p.last_name AS player_name,
    t.team_name,
    p.position,
    p.jersey_number,
    p.age,
    p.ranking,
    p.goals,
    p.assists,
    p.matches_played,
    CASE
        WHEN p.matches_played > 0 THEN ROUND(CAST(p.goals AS REAL) / p.matches_played, 2)
        ELSE 0.0
    END AS goals_per_match
FROM players p
LEFT JOIN teams t ON p.team_id = t.team_id
ORDER BY p.ranking DESC
"#;

const CREATE_TEAM_STATS: &str = r#"
CREATE VIEW IF NOT EXISTS team_stats AS
SELECT
    t.team_id,
    t.team_name,
    t.coach_name,
    t.city,
    COUNT(p.player_id) AS total_players,
    COALESCE(SUM(p.goals), 0) AS total_goals,
    COALESCE(SUM(p.assists), 0) AS total_assists
FROM teams t
LEFT JOIN players p ON t.team_id = p.team_id
GROUP BY t.team_id
"#;

/// Tables before views; views reference both tables.
const SCHEMA: &[(&str, &str)] = &[
    ("teams", CREATE_TEAMS),
    ("players", CREATE_PLAYERS),
    ("idx_players_team_id", CREATE_PLAYERS_TEAM_INDEX),
    ("player_stats", CREATE_PLAYER_STATS),
    ("team_stats", CREATE_TEAM_STATS),
];

/// Create `teams`, `players`, `player_stats` and `team_stats` if they do not exist yet.
/// Existing objects are never altered.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for (name, ddl) in SCHEMA {
        tracing::debug!(object = %name, "ensure schema object");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("schema ready");
    Ok(())
}
