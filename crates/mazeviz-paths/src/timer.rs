//! Solve-duration timing.

use std::time::{Duration, Instant};

/// Wall-clock timer for one solve pass.
///
/// The start time lives in the value, so independent solves each carry
/// their own timer.
#[derive(Copy, Clone, Debug)]
pub struct SolveTimer {
    start: Instant,
}

impl SolveTimer {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// The instant the timer was started.
    pub fn started_at(&self) -> Instant {
        self.start
    }

    /// Seconds since start, rounded to two decimals.
    pub fn elapsed_seconds(&self) -> f64 {
        round_seconds(self.start.elapsed())
    }

    /// [`elapsed_seconds`](Self::elapsed_seconds) formatted with two decimals.
    pub fn label(&self) -> String {
        format!("{:.2}", self.elapsed_seconds())
    }
}

/// Round a duration to seconds with two decimals.
pub fn round_seconds(d: Duration) -> f64 {
    (d.as_secs_f64() * 100.0).round() / 100.0
}
