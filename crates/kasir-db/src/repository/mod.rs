//! # Repository Module
//!
//! Database repository implementations for Kasir POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                Repository Pattern Explained                  │
//! │                                                              │
//! │  Caller                                                      │
//! │       │  db.transactions().checkout(&items)                  │
//! │       ▼                                                      │
//! │  TransactionRepository                                       │
//! │  ├── checkout(&self, items)                                  │
//! │  └── daily_report(&self)                                     │
//! │       │  SQL inside one unit of work                         │
//! │       ▼                                                      │
//! │  SQLite database                                             │
//! │                                                              │
//! │  Benefits:                                                   │
//! │  • SQL is isolated in one place                              │
//! │  • Clean separation of concerns                              │
//! │  • Transactional scope is owned by the repository            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and stock reads
//! - [`category::CategoryRepository`] - Category CRUD
//! - [`transaction::TransactionRepository`] - Checkout and daily report

pub mod category;
pub mod product;
pub mod transaction;
