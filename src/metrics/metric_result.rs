use super::clamp_score;
use core::time::Duration;

/// The outcome of evaluating one metric: a bounded score and the time it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricResult {
    score: f64,
    latency: Duration,
}

impl MetricResult {
    /// Create a result, clamping `score` into `[0, 1]`.
    #[must_use]
    pub const fn new(score: f64, latency: Duration) -> Self {
        Self {
            score: clamp_score(score),
            latency,
        }
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Latency in whole milliseconds, rounded up and never below one.
    #[must_use]
    pub fn latency_ms(&self) -> u64 {
        ceil_millis(self.latency)
    }
}

/// Convert a duration to whole milliseconds, rounding up, with a floor of 1 ms.
#[must_use]
pub fn ceil_millis(duration: Duration) -> u64 {
    let nanos = duration.as_nanos();
    let millis = nanos.div_ceil(1_000_000);
    u64::try_from(millis).unwrap_or(u64::MAX).max(1)
}
