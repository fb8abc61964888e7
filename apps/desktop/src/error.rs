//! # Application Error Type
//!
//! Unified error type for commands and startup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TecPa Stock                            │
//! │                                                                         │
//! │  Button click                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command: Result<T, AppError>                                    │  │
//! │  │       │                                                          │  │
//! │  │       ├── Validation problem? ── inline message on the form ──► Ok │  │
//! │  │       │                                                          │  │
//! │  │       ├── DbError / ReportError ──► AppError ─────────────────► Err│  │
//! │  │       │                                                          │  │
//! │  │       └── Success ─────────────────────────────────────────────► Ok│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Err: logged at error level, shown in a blocking notice.               │
//! │       The operation is abandoned; the window stays open.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use tecpa_db::DbError;
use tecpa_report::ReportError;

/// Application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Export error: {0}")]
    Report(#[from] ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad environment override or missing platform directory.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The window could not be created.
    #[error("Window error: {0}")]
    Ui(String),
}

impl AppError {
    /// Title of the blocking notice for this error.
    pub fn notice_title(&self) -> &'static str {
        match self {
            AppError::Report(_) => "Export",
            AppError::Db(_) => "Database",
            _ => "Error",
        }
    }

    /// Text of the blocking notice for this error.
    ///
    /// Storage details stay out of the notice; the caller logs the full error.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Db(DbError::ConnectionFailed(_)) | AppError::Db(DbError::PoolExhausted) => {
                "The database could not be reached.".to_string()
            }
            AppError::Db(_) => "The database operation failed. Nothing was changed.".to_string(),
            AppError::Report(ReportError::FontNotFound(detail)) => {
                format!("The export font is missing: {}.", detail)
            }
            AppError::Report(ReportError::Db(_)) => "The sales history could not be read.".to_string(),
            AppError::Report(ReportError::Render(detail)) => {
                format!("The document could not be written: {}", detail)
            }
            other => other.to_string(),
        }
    }
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
