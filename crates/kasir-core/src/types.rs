//! # Domain Types
//!
//! Core domain types used throughout Kasir POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Domain Types                          │
//! │                                                              │
//! │  ┌───────────────┐   ┌────────────────┐   ┌───────────────┐  │
//! │  │   Product     │   │  Transaction   │   │    Report     │  │
//! │  │ ───────────── │   │ ────────────── │   │ ───────────── │  │
//! │  │ id            │   │ id             │   │ total_sales   │  │
//! │  │ name          │   │ total_amount   │   │ total_revenue │  │
//! │  │ price         │   │ created_at     │   └───────────────┘  │
//! │  │ stock         │   │ details[]      │                      │
//! │  │ category_id   │   └────────────────┘                      │
//! │  └───────────────┘                                           │
//! │                                                              │
//! │  CheckoutItem (request) ──► TransactionDetail (persisted)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `TransactionDetail` freezes the product name and unit price at
//! checkout time. Later edits to the product never change a past sale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Database-generated identifier.
    pub id: i64,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Price in the smallest currency unit.
    pub price: i64,

    /// Current stock level. Never driven below zero by a checkout.
    pub stock: i64,

    /// Owning category, if any.
    pub category_id: Option<i64>,
}

impl Product {
    /// Returns the unit price as a Money value.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price)
    }
}

/// Payload for creating a product. The id is generated by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

// =============================================================================
// Checkout
// =============================================================================

/// One requested line of a checkout basket.
///
/// Ephemeral request input; it is never persisted on its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: i64,
    /// Requested quantity, must be positive.
    pub quantity: i64,
}

/// A line item of a persisted sale.
///
/// Product name and the derived subtotal are snapshots taken at checkout
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    /// Unit price at checkout time multiplied by quantity.
    pub subtotal: i64,
}

/// A persisted sale: header plus its line items in basket order.
///
/// Created once by a checkout, never mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Sum of all detail subtotals.
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Returns the transaction total as a Money value.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_amount)
    }
}

// =============================================================================
// Report
// =============================================================================

/// Aggregated sales figures for one day.
///
/// Derived, never stored. A day without sales yields zeros, not an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Report {
    /// Number of transactions created on the reported day.
    pub total_sales: i64,
    /// Sum of their total amounts.
    pub total_revenue: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
