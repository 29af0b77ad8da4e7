//! # Database Handle
//!
//! Opens the SQLite pool that backs the POS repository.
//!
//! ```text
//! DbConfig::new("campus_coffee.db")      DbConfig::in_memory()
//!        │  file, WAL, up to N conns            │  one pinned connection
//!        └──────────────┬───────────────────────┘
//!                       ▼
//!              Database::new(config)
//!                       │  applies migrations/sqlite/*
//!                       ▼
//!              db.pos() ──► PosRepository (shares the pool)
//! ```

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::pos::PosRepository;

/// Where the data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    /// Private in-memory database, gone once the pool closes.
    Memory,
}

/// Pool settings.
///
/// ```rust,ignore
/// let config = DbConfig::new("./campus_coffee.db").max_connections(8);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub location: DbLocation,

    /// Default: 5 (always 1 in memory)
    pub max_connections: u32,

    /// How long a request may wait for a free connection.
    pub acquire_timeout: Duration,

    /// SQLite busy timeout for lock contention between writers.
    pub busy_timeout: Duration,

    pub run_migrations: bool,
}

impl DbConfig {
    /// File-backed database; the file is created on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            location: DbLocation::File(path.into()),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Throwaway database for tests.
    pub fn in_memory() -> Self {
        DbConfig {
            location: DbLocation::Memory,
            max_connections: 1,
            ..DbConfig::new(PathBuf::new())
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = match &self.location {
            DbLocation::File(path) => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal),
            DbLocation::Memory => SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?,
        };

        Ok(options.busy_timeout(self.busy_timeout))
    }

    fn pool_size(&self) -> u32 {
        match self.location {
            // Every in-memory connection would see its own empty database.
            DbLocation::Memory => 1,
            DbLocation::File(_) => self.max_connections.max(1),
        }
    }
}

/// Shared handle to the POS database.
///
/// Clones share one pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and, unless disabled, brings the schema up to date.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(location = ?config.location, "Opening POS database");

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.pool_size())
            .acquire_timeout(config.acquire_timeout);

        if config.location == DbLocation::Memory {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(config.connect_options()?)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
        debug!(max_connections = config.pool_size(), "Pool ready");

        let db = Database { pool };
        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over this pool.
    pub fn pos(&self) -> PosRepository {
        PosRepository::new(self.pool.clone())
    }

    pub async fn close(&self) {
        info!("Closing POS database");
        self.pool.close().await;
    }

    /// `true` while a trivial query still succeeds.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_is_migrated_and_healthy() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert_eq!(db.pos().count().await.unwrap(), 0);

        let (total, applied) = migrations::migration_status(db.pool()).await.unwrap();
        assert_eq!(total, applied);
    }

    #[tokio::test]
    async fn test_closed_database_is_unhealthy() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(DbConfig::in_memory().max_connections(8).pool_size(), 1);
        assert_eq!(DbConfig::new("pos.db").max_connections(8).pool_size(), 8);
        assert_eq!(DbConfig::new("pos.db").max_connections(0).pool_size(), 1);
        assert!(!DbConfig::new("pos.db").run_migrations(false).run_migrations);
    }
}
