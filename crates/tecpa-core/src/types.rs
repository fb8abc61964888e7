//! # Domain Types
//!
//! Core domain types used throughout TecPa Stock.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐         ┌──────────────────────┐             │
//! │  │      Product         │         │        Sale          │             │
//! │  │  ──────────────────  │         │  ──────────────────  │             │
//! │  │  id (autoincrement)  │  name   │  id (autoincrement)  │             │
//! │  │  name  ◄─────────────┼─────────┼─ product_name (copy) │             │
//! │  │  category            │         │  date, time          │             │
//! │  │  supplier            │         │  quantity            │             │
//! │  │  purchase_price_cents│         │  total_cents         │             │
//! │  │  stock               │         └──────────────────────┘             │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name-as-Reference
//! A sale refers to its product by the name the product had when the sale
//! was recorded. Renaming is not possible in this app, but duplicate names
//! are: a sale for a duplicated name decrements every product sharing it.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Assigned by the store on insert, never reused.
    pub id: i64,

    /// Human-facing identifier, also what sales refer to.
    pub name: String,

    pub category: String,

    pub supplier: String,

    /// Unit cost in cents.
    pub purchase_price_cents: i64,

    /// Current stock level. Starts at 0 and only goes down with sales.
    pub stock: i64,
}

impl Product {
    /// Returns the purchase price as Money.
    #[inline]
    pub fn purchase_price(&self) -> Money {
        Money::from_cents(self.purchase_price_cents)
    }
}

/// The four columns shown by the stock listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductSummary {
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub purchase_price_cents: i64,
}

impl ProductSummary {
    /// Returns the purchase price as Money.
    #[inline]
    pub fn purchase_price(&self) -> Money {
        Money::from_cents(self.purchase_price_cents)
    }
}

/// A validated product waiting to be inserted.
///
/// Built by [`crate::validation::validate_new_product`] from the raw form
/// fields of the Product Entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub purchase_price: Money,
}

// =============================================================================
// Sale
// =============================================================================

/// One recorded sale. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,

    /// System date at insert time.
    pub date: NaiveDate,

    /// System wall-clock time at insert time, seconds precision.
    pub time: NaiveTime,

    /// Product name at time of sale (frozen copy, not a live reference).
    pub product_name: String,

    /// Always positive.
    pub quantity: i64,

    /// Total as computed on the Sales screen; the store never recomputes it.
    pub total_cents: i64,
}

impl Sale {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Stock Policy
// =============================================================================

/// What happens to stock when a sale asks for more than is available.
///
/// ```text
/// stock = 2, sale quantity = 5
///
///   AllowNegative  ──► stock = -3   (default)
///   FloorAtZero    ──► stock =  0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockPolicy {
    #[default]
    AllowNegative,
    FloorAtZero,
}

impl StockPolicy {
    /// Name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            StockPolicy::AllowNegative => "allow-negative",
            StockPolicy::FloorAtZero => "floor-at-zero",
        }
    }
}

impl fmt::Display for StockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow-negative" | "allow_negative" => Ok(StockPolicy::AllowNegative),
            "floor-at-zero" | "floor_at_zero" | "floor" => Ok(StockPolicy::FloorAtZero),
            other => Err(format!("unknown stock policy '{}'", other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_policy_default_allows_negative() {
        assert_eq!(StockPolicy::default(), StockPolicy::AllowNegative);
        assert_eq!(StockPolicy::default().to_string(), "allow-negative");
    }

    #[test]
    fn test_stock_policy_parse() {
        assert_eq!(
            "floor-at-zero".parse::<StockPolicy>().unwrap(),
            StockPolicy::FloorAtZero
        );
        assert_eq!(
            " Allow-Negative ".parse::<StockPolicy>().unwrap(),
            StockPolicy::AllowNegative
        );
        assert!("sometimes".parse::<StockPolicy>().is_err());
    }

    #[test]
    fn test_sale_total_money() {
        let sale = Sale {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            product_name: "Yerba 1kg".to_string(),
            quantity: 3,
            total_cents: 3000,
        };
        assert_eq!(sale.total().to_string(), "$30.00");
    }
}
