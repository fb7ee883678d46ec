//! # Validation Module
//!
//! Checkout basket validation for Kasir POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                        │
//! │                                                              │
//! │  Layer 1: THIS MODULE (pure, before any storage access)      │
//! │  ├── basket must not be empty                                │
//! │  ├── every quantity must be positive and within limits       │
//! │  └── basket size must be within limits                       │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  Layer 2: Database (SQLite)                                  │
//! │  ├── NOT NULL and CHECK constraints                          │
//! │  └── foreign key constraints                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! A basket that fails here is rejected before a unit of work is even
//! opened, so a validation error never leaves partial effects behind.

use crate::error::{ValidationError, ValidationResult};
use crate::types::CheckoutItem;
use crate::{MAX_BASKET_LINES, MAX_LINE_QUANTITY};

/// Validates a single line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_LINE_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a whole checkout basket.
///
/// ## Rules
/// - Must contain at least one line
/// - Must not exceed [`MAX_BASKET_LINES`] lines
/// - Every line quantity must pass [`validate_quantity`]
pub fn validate_basket(items: &[CheckoutItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if items.len() > MAX_BASKET_LINES {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_BASKET_LINES as i64,
        });
    }

    for item in items {
        validate_quantity(item.quantity)?;
    }

    Ok(())
}
