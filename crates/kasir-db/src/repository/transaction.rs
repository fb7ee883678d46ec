//! # Transaction Repository
//!
//! The checkout unit of work and the daily sales report.
//!
//! ## Checkout Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Checkout Flow                           │
//! │                                                              │
//! │  1. VALIDATE basket (pure, no storage access yet)            │
//! │       │                                                      │
//! │  2. BEGIN unit of work ─────────────────────────┐            │
//! │       │                                         │            │
//! │  3. For each line, in basket order:             │            │
//! │     └── SELECT product (absent → abort)         │ rollback   │
//! │     └── subtotal = price × quantity, snapshot   │ on any     │
//! │       │                                         │ error or   │
//! │  4. For each line:                              │ drop       │
//! │     └── UPDATE stock, conditional on            │            │
//! │         stock >= quantity (miss → abort)        │            │
//! │       │                                         │            │
//! │  5. INSERT transaction header, capture id       │            │
//! │  6. INSERT detail rows in basket order          │            │
//! │       │                                         │            │
//! │  7. COMMIT ─────────────────────────────────────┘            │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Two checkouts hitting the same product race only on step 4. The
//! decrement is a single conditional statement, so under the storage
//! engine's isolation one of the two observes the already-reduced stock
//! and fails with a conflict instead of driving stock negative.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{CheckoutError, CheckoutResult, DbResult};
use kasir_core::validation::validate_basket;
use kasir_core::{CheckoutItem, Money, Product, Report, Transaction, TransactionDetail};

/// Repository for sale transactions: checkout and reporting.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Converts a basket into a persisted sale.
    ///
    /// Looks up and prices every line, decrements stock, and writes the
    /// transaction header plus its detail rows, all inside one unit of
    /// work. On success the returned [`Transaction`] carries the
    /// generated id, the creation timestamp, and the details in basket
    /// order. On any failure nothing is persisted and no stock changes.
    ///
    /// Deliberately not idempotent: submitting the same basket twice
    /// creates two sales and decrements stock twice.
    ///
    /// ## Errors
    /// * [`CheckoutError::Validation`] - empty basket or bad quantity,
    ///   rejected before any storage access
    /// * [`CheckoutError::ProductNotFound`] - a line references a
    ///   missing product id
    /// * [`CheckoutError::InsufficientStock`] - a decrement would drive
    ///   stock below zero
    /// * [`CheckoutError::Db`] - infrastructure failure
    pub async fn checkout(&self, items: &[CheckoutItem]) -> CheckoutResult<Transaction> {
        validate_basket(items)?;

        debug!(lines = items.len(), "Starting checkout");

        // The unit of work. Rolls back on drop, so every early return
        // below leaves the database untouched.
        let mut tx = self.pool.begin().await?;

        // Price every line first so an unknown product anywhere in the
        // basket aborts before any stock is touched.
        let mut total = Money::zero();
        let mut details = Vec::with_capacity(items.len());
        let mut available = Vec::with_capacity(items.len());

        for item in items {
            let product = sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, price, stock, category_id
                FROM products
                WHERE id = ?1
                "#,
            )
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CheckoutError::ProductNotFound(item.product_id))?;

            let subtotal = product.unit_price() * item.quantity;
            total += subtotal;
            available.push(product.stock);

            details.push(TransactionDetail {
                product_id: product.id,
                product_name: product.name,
                quantity: item.quantity,
                subtotal: subtotal.cents(),
            });
        }

        // Conditional decrement: stock never goes below zero, even when
        // another checkout slipped in a decrement for the same product.
        for (item, stock_before) in items.iter().zip(available) {
            let result = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - ?1
                WHERE id = ?2 AND stock >= ?1
                "#,
            )
            .bind(item.quantity)
            .bind(item.product_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(CheckoutError::InsufficientStock {
                    product_id: item.product_id,
                    available: stock_before,
                    requested: item.quantity,
                });
            }
        }

        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO transactions (total_amount, created_at)
            VALUES (?1, ?2)
            "#,
        )
        .bind(total.cents())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        let transaction_id = result.last_insert_rowid();

        for detail in &details {
            sqlx::query(
                r#"
                INSERT INTO transaction_details (transaction_id, product_id, quantity, subtotal)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(transaction_id)
            .bind(detail.product_id)
            .bind(detail.quantity)
            .bind(detail.subtotal)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            transaction_id = %transaction_id,
            total = %total,
            lines = details.len(),
            "Checkout committed"
        );

        Ok(Transaction {
            id: transaction_id,
            total_amount: total.cents(),
            created_at,
            details,
        })
    }

    /// Aggregates today's sales: transaction count and revenue sum.
    ///
    /// "Today" is the storage engine's current UTC date. A day without
    /// sales yields a zeroed report, never an error.
    pub async fn daily_report(&self) -> DbResult<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            SELECT
                COUNT(id) AS total_sales,
                COALESCE(SUM(total_amount), 0) AS total_revenue
            FROM transactions
            WHERE DATE(created_at) = DATE('now')
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use kasir_core::{NewProduct, ValidationError};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Seeds the two standard test products and returns their ids.
    async fn seed_products(db: &Database) -> (i64, i64) {
        let teh = db
            .products()
            .insert(&NewProduct {
                name: "Teh Botol".to_string(),
                price: 3500,
                stock: 10,
                category_id: None,
            })
            .await
            .unwrap();
        let nasi = db
            .products()
            .insert(&NewProduct {
                name: "Nasi Goreng".to_string(),
                price: 10800,
                stock: 20,
                category_id: None,
            })
            .await
            .unwrap();
        (teh.id, nasi.id)
    }

    fn item(product_id: i64, quantity: i64) -> CheckoutItem {
        CheckoutItem {
            product_id,
            quantity,
        }
    }

    async fn stock_of(db: &Database, id: i64) -> i64 {
        db.products().get_by_id(id).await.unwrap().unwrap().stock
    }

    async fn transaction_count(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    async fn detail_count(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM transaction_details")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_checkout_totals_and_stock() {
        let db = test_db().await;
        let (teh, nasi) = seed_products(&db).await;

        let tx = db
            .transactions()
            .checkout(&[item(teh, 2), item(nasi, 1)])
            .await
            .unwrap();

        // 3500 * 2 + 10800 * 1
        assert_eq!(tx.total_amount, 17800);
        assert!(tx.id > 0);

        // Details preserve basket order and snapshot the product names
        assert_eq!(tx.details.len(), 2);
        assert_eq!(tx.details[0].product_id, teh);
        assert_eq!(tx.details[0].product_name, "Teh Botol");
        assert_eq!(tx.details[0].quantity, 2);
        assert_eq!(tx.details[0].subtotal, 7000);
        assert_eq!(tx.details[1].product_id, nasi);
        assert_eq!(tx.details[1].subtotal, 10800);

        // Total always equals the sum of the detail subtotals
        let sum: i64 = tx.details.iter().map(|d| d.subtotal).sum();
        assert_eq!(tx.total_amount, sum);

        // Stock decremented by exactly the requested quantities
        assert_eq!(stock_of(&db, teh).await, 8);
        assert_eq!(stock_of(&db, nasi).await, 19);

        assert_eq!(transaction_count(&db).await, 1);
        assert_eq!(detail_count(&db).await, 2);
    }

    #[tokio::test]
    async fn test_checkout_unknown_product_rolls_back_everything() {
        let db = test_db().await;
        let (teh, nasi) = seed_products(&db).await;

        let err = db
            .transactions()
            .checkout(&[item(teh, 2), item(999, 1)])
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::ProductNotFound(999)));

        // No partial effects of any kind
        assert_eq!(stock_of(&db, teh).await, 10);
        assert_eq!(stock_of(&db, nasi).await, 20);
        assert_eq!(transaction_count(&db).await, 0);
        assert_eq!(detail_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_checkout_empty_basket_is_validation_error() {
        let db = test_db().await;
        seed_products(&db).await;

        let err = db.transactions().checkout(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Validation(ValidationError::Required { .. })
        ));
        assert_eq!(transaction_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_checkout_non_positive_quantity_is_validation_error() {
        let db = test_db().await;
        let (teh, _) = seed_products(&db).await;

        let err = db
            .transactions()
            .checkout(&[item(teh, 0)])
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));

        let err = db
            .transactions()
            .checkout(&[item(teh, -3)])
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));

        assert_eq!(stock_of(&db, teh).await, 10);
    }

    #[tokio::test]
    async fn test_checkout_insufficient_stock_rolls_back_earlier_decrements() {
        let db = test_db().await;
        let (teh, nasi) = seed_products(&db).await;

        // First line fits, second asks for more than available
        let err = db
            .transactions()
            .checkout(&[item(teh, 2), item(nasi, 21)])
            .await
            .unwrap_err();

        match err {
            CheckoutError::InsufficientStock {
                product_id,
                available,
                requested,
            } => {
                assert_eq!(product_id, nasi);
                assert_eq!(available, 20);
                assert_eq!(requested, 21);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }

        // The decrement applied to the first line was rolled back
        assert_eq!(stock_of(&db, teh).await, 10);
        assert_eq!(stock_of(&db, nasi).await, 20);
        assert_eq!(transaction_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_checkout_exact_stock_drains_to_zero() {
        let db = test_db().await;
        let (teh, _) = seed_products(&db).await;

        db.transactions().checkout(&[item(teh, 10)]).await.unwrap();
        assert_eq!(stock_of(&db, teh).await, 0);

        // Nothing left for a follow-up sale
        let err = db
            .transactions()
            .checkout(&[item(teh, 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::InsufficientStock { .. }));
    }

    #[tokio::test]
    async fn test_checkout_repeated_line_decrements_cumulatively() {
        let db = test_db().await;
        let (teh, _) = seed_products(&db).await;

        let tx = db
            .transactions()
            .checkout(&[item(teh, 4), item(teh, 4)])
            .await
            .unwrap();

        assert_eq!(tx.total_amount, 3500 * 8);
        assert_eq!(stock_of(&db, teh).await, 2);

        // 4 + 4 fits, but another 4 + 4 does not
        let err = db
            .transactions()
            .checkout(&[item(teh, 4), item(teh, 4)])
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::InsufficientStock { .. }));
        assert_eq!(stock_of(&db, teh).await, 2);
    }

    #[tokio::test]
    async fn test_checkout_is_not_idempotent() {
        let db = test_db().await;
        let (teh, nasi) = seed_products(&db).await;

        let first = db
            .transactions()
            .checkout(&[item(teh, 2), item(nasi, 1)])
            .await
            .unwrap();
        let second = db
            .transactions()
            .checkout(&[item(teh, 2), item(nasi, 1)])
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(transaction_count(&db).await, 2);
        assert_eq!(stock_of(&db, teh).await, 6);
        assert_eq!(stock_of(&db, nasi).await, 18);
    }

    #[tokio::test]
    async fn test_checkout_snapshots_price_at_sale_time() {
        let db = test_db().await;
        let (teh, _) = seed_products(&db).await;

        let before = db.transactions().checkout(&[item(teh, 1)]).await.unwrap();
        assert_eq!(before.total_amount, 3500);

        // Reprice the product
        let mut product = db.products().get_by_id(teh).await.unwrap().unwrap();
        product.price = 5000;
        db.products().update(&product).await.unwrap();

        // The stored sale is untouched
        let stored_total: i64 =
            sqlx::query_scalar("SELECT total_amount FROM transactions WHERE id = ?1")
                .bind(before.id)
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(stored_total, 3500);

        // A later sale uses the new price
        let after = db.transactions().checkout(&[item(teh, 1)]).await.unwrap();
        assert_eq!(after.total_amount, 5000);
    }

    #[tokio::test]
    async fn test_daily_report_empty_day_is_zeroed() {
        let db = test_db().await;

        let report = db.transactions().daily_report().await.unwrap();
        assert_eq!(report.total_sales, 0);
        assert_eq!(report.total_revenue, 0);
    }

    #[tokio::test]
    async fn test_daily_report_counts_todays_sales() {
        let db = test_db().await;
        let (teh, nasi) = seed_products(&db).await;

        db.transactions()
            .checkout(&[item(teh, 2), item(nasi, 1)])
            .await
            .unwrap();
        db.transactions().checkout(&[item(teh, 1)]).await.unwrap();

        let report = db.transactions().daily_report().await.unwrap();
        assert_eq!(report.total_sales, 2);
        assert_eq!(report.total_revenue, 17800 + 3500);
    }

    #[tokio::test]
    async fn test_daily_report_ignores_other_days() {
        let db = test_db().await;

        // A sale recorded well in the past must not count towards today
        sqlx::query(
            "INSERT INTO transactions (total_amount, created_at) VALUES (?1, ?2)",
        )
        .bind(9999_i64)
        .bind(Utc::now() - chrono::Duration::days(2))
        .execute(db.pool())
        .await
        .unwrap();

        let report = db.transactions().daily_report().await.unwrap();
        assert_eq!(report.total_sales, 0);
        assert_eq!(report.total_revenue, 0);
    }

    #[tokio::test]
    async fn test_failed_checkout_surfaces_storage_errors() {
        let db = test_db().await;
        let (teh, _) = seed_products(&db).await;

        db.close().await;

        let err = db
            .transactions()
            .checkout(&[item(teh, 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Db(DbError::ConnectionFailed(_))));
    }
}
