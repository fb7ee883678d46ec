//! # kasir-core: Pure Business Logic for Kasir POS
//!
//! This crate is the **heart** of Kasir POS. It contains the domain types
//! and business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                    Kasir POS Architecture                     │
//! │                                                               │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │            ★ kasir-core (THIS CRATE) ★                  │  │
//! │  │                                                         │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐          │  │
//! │  │   │   types   │  │   money   │  │ validation │          │  │
//! │  │   │  Product  │  │   Money   │  │   basket   │          │  │
//! │  │   │ Checkout  │  │ integer   │  │   rules    │          │  │
//! │  │   └───────────┘  └───────────┘  └────────────┘          │  │
//! │  │                                                         │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS    │  │
//! │  └────────────────────────────┬────────────────────────────┘  │
//! │                               │                               │
//! │  ┌────────────────────────────▼────────────────────────────┐  │
//! │  │                 kasir-db (Database Layer)               │  │
//! │  │        SQLite queries, migrations, repositories         │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Transaction, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Checkout basket validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are integers in the smallest
//!    currency unit to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single checkout basket.
///
/// ## Business Reason
/// Prevents runaway baskets and keeps transaction sizes reasonable.
pub const MAX_BASKET_LINES: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
