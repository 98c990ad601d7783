// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use sra_leaderboard::{config::state::AppState, gui, gui::theme::Theme, logging};

const ICON_SIZE: u32 = 64;

/// Three ascending bars on the theme background, drawn at startup.
fn app_icon(theme: &Theme) -> IconData {
    let bg = theme.background.to_array();
    let bar = theme.primary.to_array();
    let hi = theme.highlight.to_array();

    let slot = ICON_SIZE / 4;
    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let col = x / slot;
        let inset = x % slot;
        let height = match col {
            0 => 0,
            1 => ICON_SIZE / 3,
            2 => ICON_SIZE / 2,
            _ => ICON_SIZE * 5 / 6,
        };
        let filled = height > 0 && inset >= 2 && inset < slot - 2 && y >= ICON_SIZE - height;
        match (filled, col) {
            (true, 2) => Rgba(hi),
            (true, _) => Rgba(bar),
            (false, _) => Rgba(bg),
        }
    });
    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    let state = AppState::from_env();
    let theme = Theme::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(gui::WINDOW_TITLE)
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_icon(app_icon(&theme)),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, theme) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
