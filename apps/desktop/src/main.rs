//! # TecPa Desktop Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TecPa Stock Desktop                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      eframe window (egui)                        │  │
//! │  │  • Home               • Product Entry                            │  │
//! │  │  • Stock Management   • Sales (+ history export)                 │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │ button click                          │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls lib::run, reports startup failure          │  │
//! │  │  lib.rs ─────► Logging, config, database, window                │  │
//! │  │  commands/ ──► submit_product, submit_sale, export_history      │  │
//! │  │  state/ ─────► AppConfig, Navigator, form state machines        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  stock.db (local file, WAL mode)                                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match tecpa_desktop_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Application failed to start");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
