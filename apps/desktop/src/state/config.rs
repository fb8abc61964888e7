//! # Configuration
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TECPA_*`)
//! 2. Defaults (this file)
//!
//! | Variable             | Default                                     |
//! |----------------------|---------------------------------------------|
//! | `TECPA_DB_PATH`      | platform data dir + `stock.db`              |
//! | `TECPA_EXPORT_PATH`  | `sales_history.pdf`                         |
//! | `TECPA_FONTS_DIR`    | unset: bundled DejaVu Sans                  |
//! | `TECPA_FONT_FAMILY`  | `DejaVuSans` (read only with a fonts dir)   |
//! | `TECPA_STORE_NAME`   | `TecPa`                                     |
//! | `TECPA_STOCK_POLICY` | `allow-negative` (or `floor-at-zero`)       |
//!
//! Read-only after initialization.

use directories::ProjectDirs;
use std::path::PathBuf;

use tecpa_core::StockPolicy;
use tecpa_db::DbConfig;
use tecpa_report::ExportConfig;

use crate::error::{AppError, AppResult};

/// Database file name inside the platform data directory.
const DB_FILE_NAME: &str = "stock.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file.
    pub database_path: PathBuf,

    /// History export target, overwritten on each export.
    pub export_path: PathBuf,

    /// Directory with the TrueType files used by the export. `None` uses
    /// the fonts bundled with the exporter.
    pub fonts_dir: Option<PathBuf>,

    /// Font family file prefix (`<family>-Regular.ttf`, ...).
    pub font_family: String,

    /// Shown in the window title and the export title.
    pub store_name: String,

    /// How sales decrement stock.
    pub stock_policy: StockPolicy,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_path = match var("TECPA_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let stock_policy = match var("TECPA_STOCK_POLICY") {
            Some(policy) => policy.parse().map_err(AppError::Config)?,
            None => StockPolicy::default(),
        };

        Ok(AppConfig {
            database_path,
            export_path: var("TECPA_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("sales_history.pdf")),
            fonts_dir: var("TECPA_FONTS_DIR").map(PathBuf::from),
            font_family: var("TECPA_FONT_FAMILY").unwrap_or_else(|| "DejaVuSans".to_string()),
            store_name: var("TECPA_STORE_NAME").unwrap_or_else(|| "TecPa".to_string()),
            stock_policy,
        })
    }

    /// "Stock Management System - TecPa"
    pub fn window_title(&self) -> String {
        format!("Stock Management System - {}", self.store_name)
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).stock_policy(self.stock_policy)
    }

    pub fn export_config(&self) -> ExportConfig {
        let config = ExportConfig::new(&self.export_path).store_name(&self.store_name);
        match &self.fonts_dir {
            Some(dir) => config.fonts(dir, &self.font_family),
            None => config,
        }
    }
}

/// Platform-specific database location.
///
/// - **macOS**: `~/Library/Application Support/com.tecpa.stock/stock.db`
/// - **Windows**: `%APPDATA%\tecpa\stock\data\stock.db`
/// - **Linux**: `~/.local/share/stock/stock.db`
///
/// The directory is created at startup, not here.
fn default_database_path() -> AppResult<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "tecpa", "stock")
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

    Ok(proj_dirs.data_dir().join(DB_FILE_NAME))
}
