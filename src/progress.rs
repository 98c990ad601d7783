// src/progress.rs
/// Status reporting for a leaderboard load (fetch + parse + normalize).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once when the load starts.
    fn begin(&mut self, _what: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}
