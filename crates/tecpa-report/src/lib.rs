//! # tecpa-report: Sales History Export
//!
//! Renders the full sales history to a PDF document.
//!
//! ## Usage
//! ```rust,ignore
//! use tecpa_report::{export_sales_history, ExportConfig, ExportOutcome};
//!
//! let config = ExportConfig::new("sales_history.pdf"); // bundled DejaVu Sans
//! match export_sales_history(&db, &config).await? {
//!     ExportOutcome::Written { path, rows } => println!("{rows} rows in {}", path.display()),
//!     ExportOutcome::NothingToExport => println!("No sales to export."),
//! }
//! ```

pub mod error;
pub mod sales_history;

pub use error::{ReportError, ReportResult};
pub use sales_history::{
    export_sales_history, render_pdf, ExportConfig, ExportOutcome, FontSource, ReportRow,
    SalesHistoryReport, COLUMNS,
};
