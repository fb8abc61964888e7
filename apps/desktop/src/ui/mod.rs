//! # Window
//!
//! The `eframe` application: one fixed-size window whose central panel shows
//! the current screen.
//!
//! ## Frame Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stock Management System - TecPa                              800x600   │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   CentralPanel                                                          │
//! │   └── add_enabled_ui(no notice open)                                    │
//! │       └── home / product_entry / stock / sales  (Navigator::current)    │
//! │                                                                         │
//! │              ┌───────────────────────────────┐                          │
//! │              │  Notice window (centered)     │ ◄── export result or     │
//! │              │                        [ OK ] │     storage error        │
//! │              └───────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod home;
mod product_entry;
mod sales;
mod stock;

use eframe::egui;
use tokio::runtime::Handle;
use tracing::error;

use tecpa_core::ProductSummary;
use tecpa_db::Database;

use crate::commands;
use crate::error::AppError;
use crate::state::{AppConfig, FormMessage, MessageKind, Navigator, ProductEntryForm, SalesForm, Screen};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 140, 60);

/// A blocking notice. While one is open the screen beneath is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

/// Application root handed to `eframe::run_native`.
pub struct TecpaApp {
    runtime: Handle,
    db: Database,
    config: AppConfig,
    nav: Navigator,
    product_entry: ProductEntryForm,
    sales: SalesForm,
    stock: Vec<ProductSummary>,
    notice: Option<Notice>,
}

impl TecpaApp {
    pub fn new(runtime: Handle, db: Database, config: AppConfig) -> Self {
        Self {
            runtime,
            db,
            config,
            nav: Navigator::new(),
            product_entry: ProductEntryForm::new(),
            sales: SalesForm::new(),
            stock: Vec::new(),
            notice: None,
        }
    }

    /// Switches screen and reloads what the target screen shows.
    fn navigate(&mut self, screen: Screen) {
        if self.nav.show(screen) {
            self.on_enter(screen);
        }
    }

    fn on_enter(&mut self, screen: Screen) {
        let result = match screen {
            Screen::StockManagement => self.refresh_stock(),
            Screen::Sales => self
                .runtime
                .block_on(commands::sale::enter_sales_screen(&self.db, &mut self.sales)),
            Screen::Home | Screen::ProductEntry => Ok(()),
        };
        if let Err(e) = result {
            self.report(e);
        }
    }

    fn refresh_stock(&mut self) -> Result<(), AppError> {
        self.stock = self
            .runtime
            .block_on(commands::product::list_products(&self.db))?;
        Ok(())
    }

    fn notify(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.into(),
            text: text.into(),
        });
    }

    /// Logs a failed operation and opens the error notice.
    fn report(&mut self, err: AppError) {
        error!(error = %err, screen = ?self.nav.current(), "Operation failed");
        let title = err.notice_title();
        let text = err.user_message();
        self.notify(title, text);
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(notice.text.as_str());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for TecpaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let enabled = self.notice.is_none();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| match self.nav.current() {
                Screen::Home => self.home_screen(ui),
                Screen::ProductEntry => self.product_entry_screen(ui),
                Screen::StockManagement => self.stock_screen(ui),
                Screen::Sales => self.sales_screen(ui),
            });
        });

        self.show_notice(ctx);
    }
}

// =============================================================================
// Shared Widgets
// =============================================================================

fn screen_heading(ui: &mut egui::Ui, screen: Screen) {
    ui.vertical_centered(|ui| {
        ui.heading(screen.title());
    });
    ui.separator();
}

/// Accumulated form messages, newest last.
fn message_log(ui: &mut egui::Ui, id: &str, messages: &[FormMessage]) {
    egui::ScrollArea::vertical()
        .id_source(id)
        .max_height(90.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                let color = match message.kind {
                    MessageKind::Error => ERROR_COLOR,
                    MessageKind::Success => SUCCESS_COLOR,
                };
                ui.colored_label(color, message.text.as_str());
            }
        });
}

fn back_button(ui: &mut egui::Ui) -> bool {
    ui.button("Back").clicked()
}
