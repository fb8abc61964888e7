//! # tecpa-core: Pure Business Logic for TecPa Stock
//!
//! Domain types and rules for a single-store inventory and sales tracker.
//! Nothing in this crate touches the disk, the database or the screen.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TecPa Stock Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Desktop (eframe / egui)                      │   │
//! │  │   Home ──► Product Entry ──► Stock Management ──► Sales         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tecpa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │                  │   │
//! │  │   │   Sale    │  │  parsing  │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         tecpa-db (SQLite)          tecpa-report (PDF)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, StockPolicy)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the entry forms
//!
//! ## Example Usage
//!
//! ```rust
//! use tecpa_core::money::Money;
//!
//! let unit_price = Money::parse("10.00").unwrap();
//! let total = unit_price.multiply_quantity(3);
//!
//! assert_eq!(total.to_plain_string(), "30.00");
//! assert_eq!(total.to_string(), "$30.00");
//! ```

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

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of rows shown in the on-screen sales history.
pub const RECENT_SALES_LIMIT: u32 = 10;

/// Maximum length of free-text product fields (name, category, supplier).
pub const MAX_TEXT_FIELD_LEN: usize = 200;
