//! Home screen.

use eframe::egui;

use super::TecpaApp;
use crate::state::Screen;

const NAV_BUTTON_SIZE: [f32; 2] = [240.0, 36.0];

impl TecpaApp {
    pub(super) fn home_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading(self.config.window_title());
            ui.add_space(40.0);

            for screen in [Screen::ProductEntry, Screen::StockManagement, Screen::Sales] {
                if ui
                    .add_sized(NAV_BUTTON_SIZE, egui::Button::new(screen.title()))
                    .clicked()
                {
                    self.navigate(screen);
                }
                ui.add_space(10.0);
            }

            ui.add_space(20.0);
            if ui.add_sized(NAV_BUTTON_SIZE, egui::Button::new("Exit")).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }
}
