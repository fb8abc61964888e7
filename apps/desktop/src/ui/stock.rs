//! Stock Management screen.

use eframe::egui;

use super::{back_button, screen_heading, TecpaApp, ERROR_COLOR};
use crate::state::Screen;

impl TecpaApp {
    pub(super) fn stock_screen(&mut self, ui: &mut egui::Ui) {
        screen_heading(ui, Screen::StockManagement);

        ui.horizontal(|ui| {
            if ui.button("Refresh").clicked() {
                if let Err(e) = self.refresh_stock() {
                    self.report(e);
                }
            }
            if back_button(ui) {
                self.navigate(Screen::Home);
            }
        });
        ui.add_space(8.0);

        if self.stock.is_empty() {
            ui.label("No products yet.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("stock_table")
            .show(ui, |ui| {
                egui::Grid::new("stock_grid")
                    .num_columns(4)
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for header in ["Name", "Category", "Stock", "Purchase price"] {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for product in &self.stock {
                            ui.label(product.name.as_str());
                            ui.label(product.category.as_str());
                            if product.stock < 0 {
                                ui.colored_label(ERROR_COLOR, product.stock.to_string());
                            } else {
                                ui.label(product.stock.to_string());
                            }
                            ui.label(product.purchase_price().to_plain_string());
                            ui.end_row();
                        }
                    });
            });
    }
}
