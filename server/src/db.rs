//! Database bootstrap: connection pool, migrations, SQLite pragmas.
//!
//! Pattern follows the usual "validated path newtype + pool settings struct"
//! shape: a `DatabasePath` that refuses to be anything but a `.db` file, and
//! a `DatabaseConfig` builder that turns into a live `SqlitePool`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::{ServerError, ServerResult};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Validated path to the SQLite database file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePath(String);

impl DatabasePath {
    pub fn new(path: impl Into<String>) -> ServerResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(ServerError::Configuration {
                field: "database_path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tunables for the connection pool and SQLite pragmas.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: DatabasePath,
    pub pool_size: u32,
    pub enable_wal_mode: bool,
    pub enable_foreign_keys: bool,
}

impl DatabaseConfig {
    pub fn new(path: DatabasePath) -> Self {
        Self {
            path,
            pool_size: 5,
            enable_wal_mode: true,
            enable_foreign_keys: true,
        }
    }

    pub fn for_testing() -> Self {
        Self {
            path: DatabasePath(":memory:".to_string()),
            pool_size: 1,
            enable_wal_mode: false,
            enable_foreign_keys: true,
        }
    }

    pub fn with_pool_size(mut self, size: u32) -> Self {
        self.pool_size = size;
        self
    }

    /// Opens the pool and runs pending migrations. Single-writer deployment:
    /// one pool, one process, per the control plane's HA non-goal.
    pub async fn connect(&self) -> ServerResult<SqlitePool> {
        let options = if self.path.as_str() == ":memory:" {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| ServerError::Database(e.to_string()))?
        } else {
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", self.path.as_str()))
                .map_err(|e| ServerError::Database(e.to_string()))?
        }
        .foreign_keys(self.enable_foreign_keys)
        .busy_timeout(Duration::from_secs(5));

        let options = if self.enable_wal_mode {
            options.journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        } else {
            options
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(self.pool_size)
            .connect_with(options)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| ServerError::Migration(e.to_string()))?;

        Ok(pool)
    }
}
