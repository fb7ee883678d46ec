//! # Database Error Types
//!
//! Error types for storage operations and for the checkout flow.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Error Propagation                        │
//! │                                                              │
//! │  SQLite error (sqlx::Error)                                  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  DbError (this module) ← adds context and categorization     │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  CheckoutError ← adds the checkout failure taxonomy:         │
//! │       validation / not-found / conflict / storage            │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  Caller maps to its surface (HTTP status, UI message, ...)   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use kasir_core::ValidationError;

// =============================================================================
// DbError
// =============================================================================

/// Database operation errors.
///
/// These wrap sqlx errors and provide categorization for callers.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in the database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Foreign key constraint violation.
    ///
    /// Occurs when a row references a missing category or product.
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

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
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DbError::NotFound { entity, id }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database      → analyze message for constraint type
/// sqlx::Error::PoolTimedOut  → DbError::PoolExhausted
/// Other                      → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports FK failures as
                // "FOREIGN KEY constraint failed"
                if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
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

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// CheckoutError
// =============================================================================

/// Failure taxonomy of the checkout operation.
///
/// Every variant aborts the whole unit of work; a failed checkout leaves
/// no partial effects behind.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Malformed basket, rejected before any storage access.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A basket line references a product that does not exist.
    #[error("product not found: {0}")]
    ProductNotFound(i64),

    /// A decrement would drive stock below zero.
    #[error("insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// Infrastructure failure (connectivity, constraints, unexpected).
    #[error("storage error: {0}")]
    Db(#[from] DbError),
}

impl From<sqlx::Error> for CheckoutError {
    fn from(err: sqlx::Error) -> Self {
        CheckoutError::Db(DbError::from(err))
    }
}

/// Result type for checkout operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
