//! # TecPa Desktop Library
//!
//! Core library for the TecPa stock and sales desktop application.
//! This is the main entry point that configures and runs the window.
//!
//! ## Module Organization
//! ```text
//! tecpa_desktop_lib/
//! ├── lib.rs              ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── config.rs       ◄─── AppConfig (env overrides)
//! │   ├── navigation.rs   ◄─── Screen enum + Navigator
//! │   ├── product_entry.rs◄─── Product Entry form
//! │   ├── sales.rs        ◄─── Sales form state machine
//! │   └── messages.rs     ◄─── Inline form messages
//! ├── commands/
//! │   ├── mod.rs          ◄─── Command exports
//! │   ├── product.rs      ◄─── Product commands
//! │   └── sale.rs         ◄─── Sale + export commands
//! ├── ui/                 ◄─── egui screens
//! └── error.rs            ◄─── AppError
//! ```
//!
//! State lives in plain structs owned by the window; commands are async
//! functions over `&Database` and the form they update, so they are tested
//! without a window.

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use eframe::egui;
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use error::{AppError, AppResult};
use state::AppConfig;
use tecpa_db::Database;

const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info,tecpa=debug,sqlx=warn";

/// Runs the desktop application until the window is closed.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,tecpa=debug,sqlx=warn; RUST_LOG overrides           │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • TECPA_* environment variables over defaults                       │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • Create the data directory if needed                               │
/// │     • SQLite with WAL mode, run pending migrations                      │
/// │                                                                         │
/// │  4. Open Window ──────────────────────────────────────────────────────► │
/// │     • 800x600, fixed size, starts on Home                               │
/// │                                                                         │
/// │  5. Shutdown ─────────────────────────────────────────────────────────► │
/// │     • Close the pool once the window is gone                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    info!("Starting TecPa Stock Desktop Application");

    let config = AppConfig::from_env()?;
    info!(db_path = ?config.database_path, export_path = ?config.export_path, "Configuration loaded");

    if let Some(dir) = config.database_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let db = runtime.block_on(Database::new(config.db_config()))?;
    info!("Database connected and migrations applied");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_title(config.window_title()),
        ..Default::default()
    };

    let title = config.window_title();
    let app = ui::TecpaApp::new(runtime.handle().clone(), db.clone(), config);

    let result = eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| AppError::Ui(e.to_string()));

    runtime.block_on(db.close());
    info!("Shutdown complete");

    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tecpa=trace` - Show trace for tecpa crates only
/// - Default: `info,tecpa=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_subscriber(filter).init();
}

/// The filter is the only level control; adding a max level here would
/// replace it.
fn log_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt().with_env_filter(filter).finish()
}
