// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::{FetchConfig, Selections};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Histogram height in points
    pub histogram_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            histogram_h: 240.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub selections: Selections,
    pub fetch: FetchConfig,
    pub gui: GuiState,
}

impl AppState {
    pub fn from_env() -> Self {
        Self { fetch: FetchConfig::from_env(), ..Self::default() }
    }
}
