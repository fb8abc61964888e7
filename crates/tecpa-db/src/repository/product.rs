//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Create (stock starts at 0)
//! - Listing for the stock table and the sales selector
//! - Unit price lookup by name
//!
//! ## Duplicate Names
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Names are not unique. Two rows may both be called "Cola 330ml":       │
//! │                                                                         │
//! │   id │ name        │ purchase_price_cents                               │
//! │   ───┼─────────────┼─────────────────────                               │
//! │    1 │ Cola 330ml  │ 120   ◄── unit_price("Cola 330ml") uses this one   │
//! │    4 │ Cola 330ml  │ 135                                                │
//! │                                                                         │
//! │  A sale for "Cola 330ml" decrements the stock of BOTH rows.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tecpa_core::{Money, NewProduct, Product, ProductSummary};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a product with stock 0 and returns the stored row.
    ///
    /// No uniqueness check on name.
    pub async fn create(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, price = %product.purchase_price, "Creating product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, category, supplier, purchase_price_cents)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.supplier)
        .bind(product.purchase_price.cents())
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: product.name.clone(),
            category: product.category.clone(),
            supplier: product.supplier.clone(),
            purchase_price_cents: product.purchase_price.cents(),
            stock: 0,
        })
    }

    /// Gets the first product (lowest id) carrying `name`.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, supplier, purchase_price_cents, stock
            FROM products
            WHERE name = ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists (name, category, stock, purchase price) for every product,
    /// in insertion order.
    pub async fn list_summaries(&self) -> DbResult<Vec<ProductSummary>> {
        let products = sqlx::query_as::<_, ProductSummary>(
            r#"
            SELECT name, category, stock, purchase_price_cents
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Lists every product name in insertion order, duplicates included.
    ///
    /// This is what the Sales screen selector offers.
    pub async fn list_names(&self) -> DbResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }

    /// Purchase price of the first product named `name`, if any.
    pub async fn unit_price(&self, name: &str) -> DbResult<Option<Money>> {
        let product = self.get_by_name(name).await?;
        Ok(product.map(|p| p.purchase_price()))
    }

    /// Counts all products.
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
