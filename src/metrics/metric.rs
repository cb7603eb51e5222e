use super::MetricResult;
use crate::facts::Context;
use core::fmt::Debug;
use std::time::Instant;

/// A single scoring function over a [`Context`].
///
/// Implementations must be pure: no I/O, no shared mutable state, and no dependency
/// on the order in which other metrics run. Missing facts degrade the score according
/// to the unit's own policy instead of producing an error.
pub trait Metric: Debug + Send + Sync {
    /// Name of the metric as it appears in output records
    fn name(&self) -> &'static str;

    /// Compute the raw score for `context`.
    ///
    /// The result is expected to be in `[0, 1]`, but callers clamp it regardless.
    fn score(&self, context: &Context) -> f64;

    /// Score `context` and measure how long it took.
    fn evaluate(&self, context: &Context) -> MetricResult {
        let start = Instant::now();
        let score = self.score(context);
        MetricResult::new(score, start.elapsed())
    }
}

/// Force a score into `[0, 1]`, mapping NaN to zero.
#[must_use]
pub const fn clamp_score(score: f64) -> f64 {
    if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) }
}

/// Round a score to the four decimal places used in reports.
#[must_use]
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
