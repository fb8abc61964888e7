//! Sales screen.

use eframe::egui;

use super::{back_button, message_log, screen_heading, TecpaApp};
use crate::commands;
use crate::state::Screen;

impl TecpaApp {
    pub(super) fn sales_screen(&mut self, ui: &mut egui::Ui) {
        screen_heading(ui, Screen::Sales);

        egui::Grid::new("sales_fields")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Product");
                let selected_text = self.sales.selected_product.clone().unwrap_or_default();
                let mut choice = self.sales.selected_product.clone();
                egui::ComboBox::from_id_source("sales_product")
                    .selected_text(selected_text)
                    .width(300.0)
                    .show_ui(ui, |ui| {
                        for name in &self.sales.product_names {
                            ui.selectable_value(&mut choice, Some(name.clone()), name.as_str());
                        }
                    });
                if let Some(name) = choice.filter(|c| Some(c) != self.sales.selected_product.as_ref()) {
                    self.sales.select_product(name);
                }
                ui.end_row();

                ui.label("Quantity");
                let quantity = ui.add(
                    egui::TextEdit::singleline(&mut self.sales.quantity_text).desired_width(300.0),
                );
                if quantity.changed() {
                    let result = self
                        .runtime
                        .block_on(commands::sale::quantity_changed(&self.db, &mut self.sales));
                    if let Err(e) = result {
                        self.report(e);
                    }
                }
                ui.end_row();

                ui.label("Total");
                let mut total: &str = self.sales.total_text.as_str();
                ui.add(egui::TextEdit::singleline(&mut total).desired_width(300.0));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Register sale").clicked() {
                let result = self
                    .runtime
                    .block_on(commands::sale::submit_sale(&self.db, &mut self.sales));
                if let Err(e) = result {
                    self.report(e);
                }
            }
            if ui.button("Export history").clicked() {
                match self
                    .runtime
                    .block_on(commands::sale::export_history(&self.db, &self.config))
                {
                    Ok(outcome) => self.notify("Export", outcome.notice()),
                    Err(e) => self.report(e),
                }
            }
            if back_button(ui) {
                self.navigate(Screen::Home);
            }
        });

        ui.add_space(8.0);
        message_log(ui, "sales_messages", &self.sales.messages);

        ui.separator();
        ui.strong("Recent sales");
        egui::ScrollArea::vertical()
            .id_source("recent_sales")
            .show(ui, |ui| {
                egui::Grid::new("recent_sales_grid")
                    .num_columns(5)
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for header in ["Date", "Time", "Product", "Quantity", "Total"] {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for sale in &self.sales.recent_sales {
                            ui.label(sale.date.format("%Y-%m-%d").to_string());
                            ui.label(sale.time.format("%H:%M:%S").to_string());
                            ui.label(sale.product_name.as_str());
                            ui.label(sale.quantity.to_string());
                            ui.label(sale.total().to_plain_string());
                            ui.end_row();
                        }
                    });
            });
    }
}
