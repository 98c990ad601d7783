// src/runner.rs
//! Background leaderboard loads with stale-response discard.
//!
//! Each `request` spawns one loader thread and bumps the generation. Loads
//! report back over a channel tagged with their generation; `poll` hands out
//! only the completion of the newest request. Anything older is dropped, even
//! when it finishes last, so a slow earlier fetch can never overwrite the data
//! of a later selection.

use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

use crate::{
    config::options::{LeaderboardKind, Track},
    error::Result,
    leaderboard::{self, LapRecord},
    progress::Progress,
    specs::Source,
};

/// What a load was for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub kind: LeaderboardKind,
    pub track: Track,
}

/// A finished load of the newest request.
#[derive(Debug)]
pub struct Loaded {
    pub request: LoadRequest,
    pub result: Result<Vec<LapRecord>>,
}

/// Called from the loader thread once its result is on the channel.
pub type Notify = Box<dyn Fn() + Send>;

pub struct Runner {
    source: Arc<dyn Source>,
    tx: Sender<Loaded>,
    rx: Receiver<Loaded>,
    latest: u64,
    pending: bool,
}

impl Runner {
    pub fn new(source: Arc<dyn Source>) -> Self {
        let (tx, rx) = unbounded();
        Self { source, tx, rx, latest: 0, pending: false }
    }

    /// Start loading `kind`/`track`. Supersedes every earlier request.
    pub fn request(
        &mut self,
        kind: LeaderboardKind,
        track: Track,
        progress: Option<Box<dyn Progress + Send>>,
        notify: Option<Notify>,
    ) -> u64 {
        self.latest += 1;
        self.pending = true;
        let request = LoadRequest { generation: self.latest, kind, track };
        logd!("Runner: request #{} {:?}/{:?}", request.generation, kind, track);

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let mut progress = progress;
            let result = leaderboard::load(
                source.as_ref(),
                kind,
                track,
                progress.as_deref_mut().map(|p| p as &mut dyn Progress),
            );
            // receiver gone means the app is shutting down
            let _ = tx.send(Loaded { request, result });
            if let Some(n) = notify {
                n();
            }
        });

        request.generation
    }

    /// Newest-request completion, if it has arrived. Never blocks.
    pub fn poll(&mut self) -> Option<Loaded> {
        let mut newest = None;
        while let Ok(done) = self.rx.try_recv() {
            newest = self.accept(done).or(newest);
        }
        newest
    }

    /// Like `poll`, but waits up to `timeout` for the newest request.
    pub fn wait(&mut self, timeout: Duration) -> Option<Loaded> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(left) {
                Ok(done) => {
                    if let Some(hit) = self.accept(done) {
                        return Some(hit);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// A request is in flight and its result has not been handed out yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest
    }

    fn accept(&mut self, done: Loaded) -> Option<Loaded> {
        if done.request.generation != self.latest {
            logd!(
                "Runner: discarding stale load #{} (latest #{})",
                done.request.generation,
                self.latest
            );
            return None;
        }
        self.pending = false;
        Some(done)
    }
}
