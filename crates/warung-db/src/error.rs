//! # Database Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                             │
//! │                                                                  │
//! │  SQLite Error (sqlx::Error)                                      │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  DbError (this module) ← classifies constraint failures          │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  Domain error (warung-core) ← what ledger callers see:           │
//! │  DuplicateName for a unique violation, otherwise a Storage       │
//! │  variant carrying the message                                    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use warung_core::{ItemError, SaleError, StockError, ValidationError};

/// Storage operation errors.
///
/// These wrap sqlx errors with enough classification for the ledger to
/// translate them into domain errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in the database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation (duplicate item name).
    #[error("duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// CHECK constraint violation.
    ///
    /// The ledger's guarded updates make the `quantity >= 0` CHECK
    /// unreachable in practice; this variant exists so a schema-level
    /// rejection is still reported as a constraint, not an opaque failure.
    #[error("constraint violation: {message}")]
    CheckViolation { message: String },

    /// A query filter failed validation before any query ran.
    #[error("invalid filter: {0}")]
    InvalidFilter(#[from] ValidationError),

    /// Database connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // "UNIQUE constraint failed: <table>.<column>"
                // "CHECK constraint failed: <detail>"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("CHECK constraint failed") {
                    DbError::CheckViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

// =============================================================================
// Domain Error Conversions
// =============================================================================
// The ledger matches the interesting DbError variants (unique violation on
// add_item) before these blanket conversions run; anything left over is a
// genuine storage failure, and the fail-clean guarantee still holds because
// the enclosing transaction rolled back.

impl From<DbError> for ItemError {
    fn from(err: DbError) -> Self {
        ItemError::Storage(err.to_string())
    }
}

impl From<DbError> for StockError {
    fn from(err: DbError) -> Self {
        StockError::Storage(err.to_string())
    }
}

impl From<DbError> for SaleError {
    fn from(err: DbError) -> Self {
        SaleError::Storage(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Item", "Telur");
        assert_eq!(err.to_string(), "Item not found: Telur");
    }

    #[test]
    fn test_domain_conversion_preserves_message() {
        let err = DbError::PoolExhausted;
        let sale_err: SaleError = err.into();
        assert!(matches!(sale_err, SaleError::Storage(ref m) if m.contains("exhausted")));
    }
}
