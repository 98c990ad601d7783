// src/gui/components/selectors.rs
//
// The selector row: leaderboard, track, sector, car, driver.
// Edits a copy of the selections and hands it back to the app in one go.

use eframe::egui::{self, ComboBox};

use crate::config::options::{LeaderboardKind, Sector, Track};
use crate::gui::app::App;

const COMBO_W: f32 = 170.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut sel = app.state.selections.clone();
    let options = &app.payload.options;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;

        ComboBox::from_label("Leaderboard")
            .width(COMBO_W)
            .selected_text(sel.kind.label())
            .show_ui(ui, |ui| {
                for k in LeaderboardKind::ALL {
                    ui.selectable_value(&mut sel.kind, k, k.label());
                }
            });

        ComboBox::from_label("Track")
            .width(COMBO_W)
            .selected_text(sel.track.slug())
            .show_ui(ui, |ui| {
                for &t in Track::ALL {
                    ui.selectable_value(&mut sel.track, t, t.slug());
                }
            });

        ComboBox::from_label("Sector")
            .width(COMBO_W * 0.6)
            .selected_text(sel.sector.map_or(s!("Full lap"), |s| format!("Sector {s}")))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut sel.sector, None, "Full lap");
                for s in Sector::ALL {
                    ui.selectable_value(&mut sel.sector, Some(s), format!("Sector {s}"));
                }
            });

        ComboBox::from_label("Car")
            .width(COMBO_W * 1.4)
            .selected_text(sel.car.as_deref().unwrap_or("All cars"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut sel.car, None, "All cars");
                for c in &options.cars {
                    ui.selectable_value(&mut sel.car, Some(c.clone()), c.as_str());
                }
            });

        ComboBox::from_label("Driver")
            .width(COMBO_W * 1.2)
            .selected_text(sel.driver.as_deref().unwrap_or("None"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut sel.driver, None, "None");
                for d in &options.drivers {
                    ui.selectable_value(&mut sel.driver, Some(d.clone()), d.as_str());
                }
            });
    });

    let ctx = ui.ctx().clone();
    app.apply_selections(sel, &ctx);
}
