//! # Repository Module
//!
//! Database repository implementations for TecPa Stock.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Desktop command                                                       │
//! │       │                                                                 │
//! │       │  db.sales().record("Cola", 3, total)                           │
//! │       ▼                                                                 │
//! │  SaleRepository                                                        │
//! │  ├── record / record_at                                                │
//! │  ├── list_recent(limit)                                                │
//! │  └── list_all()                                                        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product creation, listing, price lookup
//! - [`SaleRepository`](sale::SaleRepository) - Sale recording and history

pub mod product;
pub mod sale;
