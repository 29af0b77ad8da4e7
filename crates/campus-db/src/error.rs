//! # Database Error Types
//!
//! ```text
//! sqlx::Error ──► DbError ──► CoreError (at the PosDataService boundary)
//!                   │
//!                   ├── UniqueViolation ──► DuplicatePosName
//!                   ├── PosNotFound     ──► PosNotFound
//!                   └── everything else ──► Persistence
//! ```

use campus_core::CoreError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("POS {0} not found")]
    PosNotFound(i64),

    /// A UNIQUE index rejected the write.
    ///
    /// `value` is empty when sqlx reports the violation; the repository
    /// fills in the offending name.
    #[error("{column} '{value}' is already taken")]
    UniqueViolation { column: String, value: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(#[from] sqlx::migrate::MigrateError),

    /// A stored value could not be mapped back to the domain.
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    #[error("Connection pool exhausted")]
    PoolExhausted,

    #[error("Query failed: {0}")]
    Query(String),
}

impl DbError {
    /// Names the value behind a unique violation; other errors pass through.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        match self {
            DbError::UniqueViolation { column, .. } => DbError::UniqueViolation {
                column,
                value: value.into(),
            },
            other => other,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                // SQLite: "UNIQUE constraint failed: pos.name"
                let column = db_err
                    .message()
                    .rsplit(": ")
                    .next()
                    .unwrap_or("unknown")
                    .to_string();
                DbError::UniqueViolation {
                    column,
                    value: String::new(),
                }
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DbError::CorruptRow(err.to_string())
            }
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),
            other => DbError::Query(other.to_string()),
        }
    }
}

impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { value, .. } => CoreError::DuplicatePosName(value),
            DbError::PosNotFound(id) => CoreError::PosNotFound(id),
            other => CoreError::Persistence(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
