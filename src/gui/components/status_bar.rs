// src/gui/components/status_bar.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let theme = &app.theme;
    let p = &app.payload;

    ui.horizontal(|ui| {
        if app.is_loading() {
            ui.spinner();
        }
        ui.label(RichText::new(app.status.get()).color(theme.on_bg_secondary));

        if let Some(err) = &app.last_error {
            ui.separator();
            ui.label(RichText::new(err).color(theme.error));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let board = match app.loaded {
                Some((kind, track)) => format!("{kind} / {track}: "),
                None => String::new(),
            };
            let mut summary = format!("{board}{} entries, {} shown, by {}", p.full.len(), p.table.len(), p.column);
            if p.is_fallback() {
                summary.push_str(" (no rows for this car, showing all)");
            }
            ui.label(RichText::new(summary).color(theme.on_bg_secondary));
        });
    });
}
