//! SQLite connection pool. The database file (and its parent directory) is created on first use.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Parse `database_url` into connect options with create-if-missing and the configured FK pragma.
pub fn connect_options(settings: &Settings) -> Result<SqliteConnectOptions, ConfigError> {
    let opts = SqliteConnectOptions::from_str(&settings.database_url)
        .map_err(|e| ConfigError::Load(format!("DATABASE_URL: {}", e)))?;
    Ok(opts
        .create_if_missing(true)
        .foreign_keys(settings.foreign_keys)
        .journal_mode(SqliteJournalMode::Wal))
}

/// Make sure the directory holding the database file exists. Bare file names and in-memory
/// databases have no parent to create.
pub async fn ensure_database_dir(opts: &SqliteConnectOptions) -> Result<(), AppError> {
    let file = opts.get_filename();
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::Load(format!("create {}: {}", parent.display(), e)))?;
    }
    Ok(())
}

/// Open the pool described by `settings`.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let opts = connect_options(settings)?;
    ensure_database_dir(&opts).await?;
    tracing::debug!(
        file = %opts.get_filename().display(),
        foreign_keys = settings.foreign_keys,
        "opening sqlite pool"
    );
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections.max(1))
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Cheap round-trip used by the readiness probe.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
