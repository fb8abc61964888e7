//! Product Entry screen.

use eframe::egui;

use super::{back_button, message_log, screen_heading, TecpaApp};
use crate::commands;
use crate::state::Screen;

impl TecpaApp {
    pub(super) fn product_entry_screen(&mut self, ui: &mut egui::Ui) {
        screen_heading(ui, Screen::ProductEntry);

        egui::Grid::new("product_entry_fields")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let form = &mut self.product_entry;
                for (label, value) in [
                    ("Name", &mut form.name),
                    ("Category", &mut form.category),
                    ("Supplier", &mut form.supplier),
                    ("Purchase price", &mut form.purchase_price),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(value).desired_width(300.0));
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Add product").clicked() {
                let result = self.runtime.block_on(commands::product::submit_product(
                    &self.db,
                    &mut self.product_entry,
                ));
                if let Err(e) = result {
                    self.report(e);
                }
            }
            if back_button(ui) {
                self.navigate(Screen::Home);
            }
        });

        ui.add_space(8.0);
        message_log(ui, "product_entry_messages", &self.product_entry.messages);
    }
}
