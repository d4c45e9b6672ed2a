//! Stopwatch clock engine and lap recorder
//!
//! Elapsed time is derived from a monotonic time origin rather than
//! accumulated tick by tick: while running, elapsed = now - origin.
//! The origin doubles as the running flag, so there is never more than
//! one active time source.

use std::time::{Duration, Instant};

/// Stopwatch state: elapsed time, running flag, and recorded laps
#[derive(Debug, Default)]
pub struct Stopwatch {
    /// Elapsed time folded in by previous run segments
    accumulated: Duration,
    /// Time origin of the current run segment; Some iff running
    origin: Option<Instant>,
    /// Lap snapshots in recording order, in milliseconds
    laps: Vec<u64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or resume) counting. No-op while already running.
    ///
    /// The origin is backdated by the accumulated duration, so elapsed
    /// time continues from the paused value instead of restarting.
    pub fn start(&mut self) {
        if self.origin.is_none() {
            self.origin = Some(Instant::now() - self.accumulated);
        }
    }

    /// Stop counting, keeping the current elapsed value. No-op when stopped.
    pub fn pause(&mut self) {
        if let Some(origin) = self.origin.take() {
            self.accumulated = origin.elapsed();
        }
    }

    /// Stop counting, zero the elapsed time, and clear all laps.
    pub fn reset(&mut self) {
        self.origin = None;
        self.accumulated = Duration::ZERO;
        self.laps.clear();
    }

    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// Current elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        match self.origin {
            Some(origin) => origin.elapsed().as_millis() as u64,
            None => self.accumulated.as_millis() as u64,
        }
    }

    /// Record the current elapsed time as a lap.
    ///
    /// Guarded against zero: no lap is recorded before any time has
    /// elapsed. Returns the 1-based lap number when one was recorded.
    pub fn add_lap(&mut self) -> Option<usize> {
        let elapsed = self.elapsed_ms();
        if elapsed == 0 {
            return None;
        }
        self.laps.push(elapsed);
        Some(self.laps.len())
    }

    /// Recorded laps in recording order
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }
}

/// Format milliseconds as MM:SS:CC (minutes, seconds, hundredths).
///
/// Minutes do not roll over into hours; an hour displays as "60:00:00".
pub fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let hundredths = (ms % 1000) / 10;
    format!("{:02}:{:02}:{:02}", minutes, seconds, hundredths)
}
