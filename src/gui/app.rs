// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{
        options::{LeaderboardKind, Selections, Track},
        state::AppState,
    },
    leaderboard::{self, LapRecord, RenderPayload},
    runner::Runner,
    specs::{HttpSource, Source},
    table::TableData,
};

use super::{
    components::{data_table, histogram, selectors, status_bar},
    progress::{GuiProgress, StatusLine},
    theme::Theme,
};

pub const WINDOW_TITLE: &str = "SRA Leaderboard";

pub fn run(options: eframe::NativeOptions, state: AppState, theme: Theme) -> Result<(), Box<dyn Error>> {
    let source: Arc<dyn Source> = Arc::new(HttpSource::new(state.fetch.clone())?);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, state, theme, source)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for selections (UI thread only)
    pub state: AppState,
    pub theme: Theme,

    runner: Runner,

    /// Records of the last successful load. Kept across failed loads.
    pub full: Vec<LapRecord>,
    pub loaded: Option<(LeaderboardKind, Track)>,

    pub payload: RenderPayload,
    pub table: TableData,

    // loader threads write here
    pub status: StatusLine,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState, theme: Theme, source: Arc<dyn Source>) -> Self {
        ctx.set_visuals(theme.visuals());

        let mut app = Self {
            state,
            theme,
            runner: Runner::new(source),
            full: Vec::new(),
            loaded: None,
            payload: RenderPayload::default(),
            table: TableData::default(),
            status: StatusLine::new("Idle"),
            last_error: None,
        };
        logf!("Init: {:?}", app.state.selections);
        app.reload(ctx);
        app
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.runner.is_pending()
    }

    /// Fetch the selected kind/track in the background.
    pub fn reload(&mut self, ctx: &egui::Context) {
        let sel = &self.state.selections;
        let progress = Box::new(GuiProgress::new(self.status.clone()));
        let ctx = ctx.clone();
        self.runner.request(
            sel.kind,
            sel.track,
            Some(progress),
            Some(Box::new(move || ctx.request_repaint())),
        );
    }

    /// Take new selections from the selector row. Kind/track changes refetch,
    /// everything else only re-runs the view.
    pub fn apply_selections(&mut self, next: Selections, ctx: &egui::Context) {
        if next == self.state.selections {
            return;
        }
        let refetch = next.kind != self.state.selections.kind || next.track != self.state.selections.track;
        logf!("UI: selections → {:?}", next);
        self.state.selections = next;

        if refetch {
            self.reload(ctx);
        } else {
            self.refresh_view();
        }
    }

    pub fn refresh_view(&mut self) {
        self.payload = leaderboard::view(self.full.clone(), &self.state.selections);
        self.table = TableData::from_records(&self.payload.table);
    }

    fn poll_loader(&mut self) {
        let Some(done) = self.runner.poll() else { return };
        match done.result {
            Ok(full) => {
                self.full = full;
                self.loaded = Some((done.request.kind, done.request.track));
                self.last_error = None;
                self.drop_stale_choices();
                self.refresh_view();
            }
            Err(e) => {
                // previous payload stays on screen
                loge!("UI: load #{} failed: {}", done.request.generation, e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// After a new board arrives, forget a car or driver that is not on it.
    fn drop_stale_choices(&mut self) {
        let sel = &mut self.state.selections;
        if sel.car().is_some_and(|c| !self.full.iter().any(|r| r.car == c)) {
            logd!("UI: car {:?} not on this board, clearing", sel.car);
            sel.car = None;
        }
        if sel.driver().is_some_and(|d| !self.full.iter().any(|r| r.name == d)) {
            logd!("UI: driver {:?} not on this board, clearing", sel.driver);
            sel.driver = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        egui::TopBottomPanel::top("selectors").show(ctx, |ui| {
            selectors::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            histogram::draw(ui, self);
            ui.separator();
            data_table::draw(ui, self);
        });
    }
}
