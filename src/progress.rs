// src/progress.rs
/// Lightweight progress reporting used by the long-running phases
/// (date walk, corpus load, identifier probes).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Transient status, safe to overwrite in place (CLI: carriage return).
    fn update_status(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a date saved, a name resolved).
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
