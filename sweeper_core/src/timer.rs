use alloc::{format, string::String};
use core::time::Duration;
use web_time::Instant;

/// Elapsed-time tracker for the presentation layer, independent of the grid.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    frozen: Duration,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self {
            started_at: None,
            frozen: Duration::ZERO,
        }
    }

    /// Restarts from zero.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    fn start_at(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.frozen = Duration::ZERO;
    }

    fn stop_at(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.frozen = now.saturating_duration_since(started_at);
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => now.saturating_duration_since(started_at),
            None => self.frozen,
        }
    }
}

/// Renders `MM:SS:mmm`, minutes keep counting past 59.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    format!(
        "{:02}:{:02}:{:03}",
        millis / 60_000,
        (millis % 60_000) / 1_000,
        millis % 1_000
    )
}
