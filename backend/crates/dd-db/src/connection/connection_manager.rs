use crate::{DbError, Result};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Embedded schema migrations for the users and meals tables
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens SQLite pools and brings their schema up to date
pub struct ConnectionManager;

impl ConnectionManager {
    /// Open (creating if missing) the database file and run migrations
    pub async fn connect(
        db_path: &Path,
        max_connections: u32,
        busy_timeout: Duration,
    ) -> Result<SqlitePool> {
        // Create directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Database connection established: {}", db_path.display());

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    /// Single-connection in-memory database with the schema applied
    pub async fn connect_in_memory() -> Result<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(true);

        // In-memory needs single connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        MIGRATOR
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Migrations complete");

        Ok(())
    }

    /// Round-trip a trivial query; used by readiness checks
    pub async fn ping(pool: &SqlitePool) -> Result<()> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
