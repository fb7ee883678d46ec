//! # Product Repository
//!
//! Database operations for products.
//!
//! Stock is read here but only mutated by product updates and by the
//! checkout unit of work in
//! [`transaction`](crate::repository::transaction).

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::{NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // List products, optionally filtered by name
/// let all = repo.list(None).await?;
/// let teas = repo.list(Some("teh")).await?;
///
/// // Get by id
/// let product = repo.get_by_id(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists products, optionally filtered by a case-insensitive name
    /// fragment.
    pub async fn list(&self, name: Option<&str>) -> DbResult<Vec<Product>> {
        debug!(filter = ?name, "Listing products");

        let products = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(fragment) => {
                // LIKE is case-insensitive for ASCII in SQLite
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, price, stock, category_id
                    FROM products
                    WHERE name LIKE ?1
                    ORDER BY id
                    "#,
                )
                .bind(format!("%{}%", fragment))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, price, stock, category_id
                    FROM products
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock, category_id
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it with the generated id.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price, stock, category_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
        })
    }

    /// Updates an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price = ?3,
                stock = ?4,
                category_id = ?5
            WHERE id = ?1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Delete successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts products (for diagnostics and seeding guards).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
