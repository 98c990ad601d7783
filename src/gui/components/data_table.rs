// src/gui/components/data_table.rs
//
// Draws the leaderboard table. Purely a view over `App::table`, which is
// already sorted by the active delta column.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

/// Initial widths, same order as `table::HEADERS`.
const WIDTHS: [f32; 9] = [48.0, 180.0, 220.0, 80.0, 80.0, 80.0, 90.0, 90.0, 100.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let data = &app.table;
    if data.is_empty() {
        ui.label(RichText::new("No rows").color(app.theme.on_bg_secondary));
        return;
    }
    let driver = app.state.selections.driver();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    for ci in 0..data.ncols() {
        let w = WIDTHS.get(ci).copied().unwrap_or(80.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(24.0, |mut header| {
            for h in &data.headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, data.nrows(), |mut row| {
                let i = row.index();
                row.set_selected(driver.is_some_and(|d| data.names[i] == d));

                for (ci, cell) in data.rows[i].iter().enumerate() {
                    row.col(|ui| {
                        if data.is_numeric(ci) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell);
                            });
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
