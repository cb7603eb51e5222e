use crate::facts::Context;
use crate::metrics::Metric;
use serde::{Deserialize, Serialize};

/// The size range over which the size score falls linearly from one to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    /// At or below this many bytes the artifact scores 1
    pub lower: u64,

    /// At or above this many bytes the artifact scores 0
    pub upper: u64,
}

impl SizeBounds {
    pub const DEFAULT: Self = Self {
        lower: 50_000_000,
        upper: 500_000_000,
    };

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.upper > self.lower
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scores how comfortably an artifact fits on modest hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeMetric {
    bounds: SizeBounds,
}

impl SizeMetric {
    pub const NAME: &'static str = "size_score";

    #[must_use]
    pub const fn new(bounds: SizeBounds) -> Self {
        Self { bounds }
    }
}

impl Metric for SizeMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[expect(clippy::cast_precision_loss, reason = "sizes are far below the range where f64 loses whole bytes")]
    fn score(&self, context: &Context) -> f64 {
        let Some(size) = context.size_bytes else {
            return 0.0;
        };

        if !self.bounds.is_valid() {
            return 0.0;
        }

        let upper = self.bounds.upper as f64;
        let lower = self.bounds.lower as f64;
        ((upper - size as f64) / (upper - lower)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_for(size: Option<u64>) -> f64 {
        SizeMetric::default().score(&Context {
            size_bytes: size,
            ..Context::default()
        })
    }

    #[test]
    fn test_unknown_size_scores_zero() {
        assert!(score_for(None).abs() < f64::EPSILON);
    }

    #[test]
    fn test_small_artifacts_score_one() {
        assert!((score_for(Some(0)) - 1.0).abs() < f64::EPSILON);
        assert!((score_for(Some(50_000_000)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_artifacts_score_zero() {
        assert!(score_for(Some(500_000_000)).abs() < f64::EPSILON);
        assert!(score_for(Some(u64::MAX)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_linear_between_bounds() {
        assert!((score_for(Some(275_000_000)) - 0.5).abs() < 1e-9);
        assert!((score_for(Some(140_000_000)) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_bounds_score_zero() {
        let metric = SizeMetric::new(SizeBounds { lower: 10, upper: 10 });
        let context = Context {
            size_bytes: Some(1),
            ..Context::default()
        };
        assert!(metric.score(&context).abs() < f64::EPSILON);
    }
}
