//! # Sale Repository
//!
//! Database operations for sales.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       record(name, qty, total)                          │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │   ├── INSERT INTO sales (date, time, product_name, quantity, total)    │
//! │   └── UPDATE products SET stock = stock - qty WHERE name = ?           │
//! │          (FloorAtZero: stock = MAX(stock - qty, 0))                    │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Either both rows change or neither does. No product matching the      │
//! │  name is not an error: the sale is kept and a warning is logged.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## History Order
//! Both listings sort by `date DESC` only. Sales sharing a date come back in
//! whatever order SQLite yields them.

use chrono::{Local, NaiveDateTime, Timelike};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use tecpa_core::{Money, Sale, StockPolicy};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
    policy: StockPolicy,
}

impl SaleRepository {
    /// Creates a new SaleRepository applying `policy` to stock decrements.
    pub fn new(pool: SqlitePool, policy: StockPolicy) -> Self {
        SaleRepository { pool, policy }
    }

    /// Records a sale stamped with the local date and time.
    pub async fn record(&self, product_name: &str, quantity: i64, total: Money) -> DbResult<Sale> {
        self.record_at(product_name, quantity, total, Local::now().naive_local())
            .await
    }

    /// Records a sale with an explicit timestamp.
    ///
    /// The time is truncated to whole seconds. `total` is stored as given.
    pub async fn record_at(
        &self,
        product_name: &str,
        quantity: i64,
        total: Money,
        at: NaiveDateTime,
    ) -> DbResult<Sale> {
        let date = at.date();
        let time = at.time().with_nanosecond(0).unwrap_or_else(|| at.time());

        debug!(
            product = %product_name,
            quantity,
            total = %total,
            policy = %self.policy,
            "Recording sale"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO sales (date, time, product_name, quantity, total_cents)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(date)
        .bind(time)
        .bind(product_name)
        .bind(quantity)
        .bind(total.cents())
        .execute(&mut *tx)
        .await?;

        let updated = sqlx::query(self.decrement_sql())
            .bind(quantity)
            .bind(product_name)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            warn!(product = %product_name, "Sale recorded for a product name with no stock row");
        } else if updated.rows_affected() > 1 {
            debug!(
                product = %product_name,
                rows = updated.rows_affected(),
                "Sale decremented several products sharing a name"
            );
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(Sale {
            id: inserted.last_insert_rowid(),
            date,
            time,
            product_name: product_name.to_string(),
            quantity,
            total_cents: total.cents(),
        })
    }

    fn decrement_sql(&self) -> &'static str {
        match self.policy {
            StockPolicy::AllowNegative => "UPDATE products SET stock = stock - ?1 WHERE name = ?2",
            StockPolicy::FloorAtZero => {
                "UPDATE products SET stock = MAX(stock - ?1, 0) WHERE name = ?2"
            }
        }
    }

    /// Latest sales by date, at most `limit` rows.
    pub async fn list_recent(&self, limit: u32) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, date, time, product_name, quantity, total_cents
            FROM sales
            ORDER BY date DESC
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = sales.len(), limit, "Listed recent sales");
        Ok(sales)
    }

    /// Every sale by date, newest first. Input of the history export.
    pub async fn list_all(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, date, time, product_name, quantity, total_cents
            FROM sales
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Counts all sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::{Duration, NaiveDate};
    use std::collections::HashSet;
    use tecpa_core::NewProduct;

    async fn db_with(policy: StockPolicy) -> Database {
        Database::new(DbConfig::in_memory().stock_policy(policy))
            .await
            .unwrap()
    }

    async fn add_product(db: &Database, name: &str, cents: i64, stock: i64) {
        db.products()
            .create(&NewProduct {
                name: name.to_string(),
                category: "Drinks".to_string(),
                supplier: "Acme".to_string(),
                purchase_price: Money::from_cents(cents),
            })
            .await
            .unwrap();
        // Stock only goes down through sales; seed it directly.
        sqlx::query("UPDATE products SET stock = ?1 WHERE name = ?2")
            .bind(stock)
            .bind(name)
            .execute(db.pool())
            .await
            .unwrap();
    }

    async fn stock_of(db: &Database, name: &str) -> i64 {
        db.products().get_by_name(name).await.unwrap().unwrap().stock
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_record_decrements_stock_and_appears_in_history() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 1000, 10).await;

        let when = at(2026, 3, 14, 9, 30);
        let sale = db
            .sales()
            .record_at("Cola", 3, Money::from_cents(3000), when)
            .await
            .unwrap();

        assert_eq!(stock_of(&db, "Cola").await, 7);

        let recent = db.sales().list_recent(10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0], sale);
        assert_eq!(recent[0].date, when.date());
        assert_eq!(recent[0].time, when.time());
        assert_eq!(recent[0].product_name, "Cola");
        assert_eq!(recent[0].quantity, 3);
        assert_eq!(recent[0].total().to_string(), "$30.00");
    }

    #[tokio::test]
    async fn test_record_uses_local_clock_with_second_precision() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 100, 5).await;

        let before = Local::now().date_naive();
        let sale = db
            .sales()
            .record("Cola", 1, Money::from_cents(100))
            .await
            .unwrap();
        let after = Local::now().date_naive();

        assert!(sale.date >= before && sale.date <= after);
        assert_eq!(sale.time.nanosecond(), 0);

        let stored = db.sales().list_all().await.unwrap();
        assert_eq!(stored[0].time, sale.time);
    }

    #[tokio::test]
    async fn test_total_stored_as_given() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 1000, 10).await;

        // The store never recomputes the total from the price
        let sale = db
            .sales()
            .record_at("Cola", 2, Money::from_cents(1), at(2026, 1, 1, 8, 0))
            .await
            .unwrap();
        assert_eq!(db.sales().list_all().await.unwrap()[0].total_cents, 1);
        assert_eq!(sale.total_cents, 1);
    }

    #[tokio::test]
    async fn test_oversell_allow_negative() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 100, 2).await;

        db.sales()
            .record("Cola", 5, Money::from_cents(500))
            .await
            .unwrap();
        assert_eq!(stock_of(&db, "Cola").await, -3);
    }

    #[tokio::test]
    async fn test_oversell_floor_at_zero() {
        let db = db_with(StockPolicy::FloorAtZero).await;
        add_product(&db, "Cola", 100, 2).await;

        db.sales()
            .record("Cola", 5, Money::from_cents(500))
            .await
            .unwrap();
        assert_eq!(stock_of(&db, "Cola").await, 0);
        assert_eq!(db.sales().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sale_for_unknown_product_still_recorded() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 100, 4).await;

        db.sales()
            .record("Ghost", 1, Money::from_cents(100))
            .await
            .unwrap();

        assert_eq!(db.sales().count().await.unwrap(), 1);
        assert_eq!(stock_of(&db, "Cola").await, 4);
    }

    #[tokio::test]
    async fn test_duplicate_names_all_decremented() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 100, 10).await;
        db.products()
            .create(&NewProduct {
                name: "Cola".to_string(),
                category: "Drinks".to_string(),
                supplier: "Other".to_string(),
                purchase_price: Money::from_cents(150),
            })
            .await
            .unwrap();

        db.sales()
            .record("Cola", 2, Money::from_cents(200))
            .await
            .unwrap();

        let stocks: Vec<i64> = db
            .products()
            .list_summaries()
            .await
            .unwrap()
            .iter()
            .map(|p| p.stock)
            .collect();
        assert_eq!(stocks, vec![8, -2]);
    }

    #[tokio::test]
    async fn test_list_recent_caps_and_sorts_by_date() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 100, 100).await;

        // 15 sales over 6 days, several per day so dates tie
        let start = at(2026, 2, 1, 10, 0);
        for i in 0..15i64 {
            let when = start + Duration::days(i % 6) + Duration::minutes(i);
            db.sales()
                .record_at("Cola", 1, Money::from_cents(100), when)
                .await
                .unwrap();
        }

        let recent = db.sales().list_recent(10).await.unwrap();
        assert_eq!(recent.len(), 10);

        // Non-increasing by date; order among equal dates is unspecified
        assert!(recent.windows(2).all(|w| w[0].date >= w[1].date));

        // Every omitted sale is no newer than every returned sale
        let all = db.sales().list_all().await.unwrap();
        assert_eq!(all.len(), 15);
        let returned: HashSet<i64> = recent.iter().map(|s| s.id).collect();
        let oldest_returned = recent.iter().map(|s| s.date).min().unwrap();
        for sale in all.iter().filter(|s| !returned.contains(&s.id)) {
            assert!(sale.date <= oldest_returned);
        }
    }

    #[tokio::test]
    async fn test_list_recent_with_fewer_rows_than_limit() {
        let db = db_with(StockPolicy::AllowNegative).await;
        add_product(&db, "Cola", 100, 100).await;

        for day in [3, 1, 2] {
            db.sales()
                .record_at("Cola", 1, Money::from_cents(100), at(2026, 5, day, 12, 0))
                .await
                .unwrap();
        }

        let dates: Vec<u32> = db
            .sales()
            .list_recent(10)
            .await
            .unwrap()
            .iter()
            .map(|s| chrono::Datelike::day(&s.date))
            .collect();
        assert_eq!(dates, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let db = db_with(StockPolicy::AllowNegative).await;
        assert!(db.sales().list_all().await.unwrap().is_empty());
        assert!(db.sales().list_recent(10).await.unwrap().is_empty());
    }
}
