//! # kasir-db: Database Layer for Kasir POS
//!
//! This crate provides all database access for the Kasir POS system,
//! using SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Kasir POS Data Flow                      │
//! │                                                              │
//! │  Caller (HTTP handler, CLI, test)                            │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                 kasir-db (THIS CRATE)                  │  │
//! │  │                                                        │  │
//! │  │  ┌────────────┐   ┌──────────────┐   ┌─────────────┐   │  │
//! │  │  │  Database  │   │ Repositories │   │ Migrations  │   │  │
//! │  │  │ (pool.rs)  │◄──│ product.rs   │   │ (embedded)  │   │  │
//! │  │  │            │   │ category.rs  │   │ 001_init…   │   │  │
//! │  │  │ SqlitePool │   │ transaction  │   │             │   │  │
//! │  │  └────────────┘   └──────────────┘   └─────────────┘   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  SQLite database file (or :memory: in tests)                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and checkout error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kasir_db::{Database, DbConfig};
//! use kasir_core::CheckoutItem;
//!
//! let db = Database::new(DbConfig::from_env()).await?;
//!
//! let sale = db
//!     .transactions()
//!     .checkout(&[CheckoutItem { product_id: 1, quantity: 2 }])
//!     .await?;
//!
//! let report = db.transactions().daily_report().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CheckoutError, DbError};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;
pub use repository::transaction::TransactionRepository;
