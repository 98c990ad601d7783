// src/gui/theme.rs
//! Colors for every widget, passed down by reference. Nothing in the
//! leaderboard core knows about these.

use eframe::egui::{self, Color32};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color32,
    pub layer: Color32,
    pub on_bg_primary: Color32,
    pub on_bg_secondary: Color32,
    pub on_layer_primary: Color32,
    pub on_layer_secondary: Color32,
    /// Filtered histogram bars; the full histogram too when nothing is filtered.
    pub primary: Color32,
    /// Full histogram bars behind the filtered ones.
    pub secondary: Color32,
    /// Selected driver's bucket and table row.
    pub highlight: Color32,
    pub error: Color32,
}

/// Solarized light.
pub const SOLARIZED_LIGHT: Theme = Theme {
    background: Color32::from_rgb(0xfd, 0xf6, 0xe3),
    layer: Color32::from_rgb(0xee, 0xe8, 0xd5),
    on_bg_primary: Color32::from_rgb(0x65, 0x7b, 0x83),
    on_bg_secondary: Color32::from_rgb(0x93, 0xa1, 0xa1),
    on_layer_primary: Color32::from_rgb(0x58, 0x6e, 0x75),
    on_layer_secondary: Color32::from_rgb(0x83, 0x94, 0x96),
    primary: Color32::from_rgb(0x26, 0x8b, 0xd2),
    secondary: Color32::from_rgb(0x93, 0xa1, 0xa1),
    highlight: Color32::from_rgb(0xcb, 0x4b, 0x16),
    error: Color32::from_rgb(0xdc, 0x32, 0x2f),
};

impl Default for Theme {
    fn default() -> Self {
        SOLARIZED_LIGHT
    }
}

impl Theme {
    pub fn visuals(&self) -> egui::Visuals {
        let mut v = egui::Visuals::light();
        v.panel_fill = self.background;
        v.window_fill = self.background;
        v.extreme_bg_color = self.layer;
        v.faint_bg_color = self.layer;
        v.override_text_color = Some(self.on_bg_primary);
        v.selection.bg_fill = self.highlight.gamma_multiply(0.35);
        v.selection.stroke.color = self.highlight;
        v
    }
}
