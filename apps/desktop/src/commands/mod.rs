//! # Commands Module
//!
//! Async operations behind the screen buttons.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Product Entry, Stock Management
//! └── sale.rs     ◄─── Sales screen, history export
//! ```
//!
//! ## How Commands Run
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  egui frame (UI thread)                                                 │
//! │  ─────────────────────                                                  │
//! │  if ui.button("Register").clicked() {                                   │
//! │      runtime.block_on(commands::sale::submit_sale(&db, &mut form))      │
//! │  }                                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command                                                                │
//! │  ───────                                                                │
//! │  async fn submit_sale(                                                  │
//! │      db: &Database,         ◄── Shared pool handle                     │
//! │      form: &mut SalesForm,  ◄── Screen state, updated in place         │
//! │  ) -> AppResult<Option<Sale>>                                           │
//! │         │                                                               │
//! │         ├── Ok(None)  : validation message already on the form          │
//! │         ├── Ok(Some)  : written                                         │
//! │         └── Err       : blocking notice                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement is short and local, so blocking the frame on it is fine.

pub mod product;
pub mod sale;
