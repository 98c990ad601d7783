// src/gui/progress.rs
use std::sync::{Arc, Mutex, MutexGuard};

use crate::progress::Progress;

/// Status text shared between loader threads (writers) and the UI (reader).
#[derive(Clone, Default)]
pub struct StatusLine(Arc<Mutex<String>>);

impl StatusLine {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(Arc::new(Mutex::new(msg.into())))
    }

    pub fn set(&self, msg: impl Into<String>) {
        *self.lock() = msg.into();
    }

    pub fn get(&self) -> String {
        self.lock().clone()
    }

    // a poisoned lock only means a writer panicked mid-assign; the text is still usable
    fn lock(&self) -> MutexGuard<'_, String> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Writes loader progress into the status line.
pub struct GuiProgress {
    status: StatusLine,
    what: String,
}

impl GuiProgress {
    pub fn new(status: StatusLine) -> Self {
        Self { status, what: String::new() }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, what: &str) {
        self.what = s!(what);
        self.status.set(format!("Loading {what}…"));
    }
    fn log(&mut self, msg: &str) {
        self.status.set(msg);
    }
    fn finish(&mut self, ok: bool) {
        if ok {
            self.status.set(format!("Loaded {}", self.what));
        } else {
            self.status.set(format!("Failed to load {}", self.what));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_writes_status() {
        let status = StatusLine::new("Idle");
        let mut p = GuiProgress::new(status.clone());
        p.begin("Hot Stint / monza");
        assert_eq!(status.get(), "Loading Hot Stint / monza…");
        p.finish(false);
        assert_eq!(status.get(), "Failed to load Hot Stint / monza");
    }
}
