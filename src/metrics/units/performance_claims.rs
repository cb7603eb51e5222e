use super::mean_of_flags;
use crate::facts::Context;
use crate::metrics::Metric;

/// Scores whether performance claims are backed by benchmarks and citations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClaimsMetric;

impl PerformanceClaimsMetric {
    pub const NAME: &'static str = "performance_claims";
}

impl Metric for PerformanceClaimsMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn score(&self, context: &Context) -> f64 {
        mean_of_flags(&[context.evidence.benchmarks, context.evidence.citations])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::PerformanceEvidence;

    fn score_for(benchmarks: Option<bool>, citations: Option<bool>) -> f64 {
        PerformanceClaimsMetric.score(&Context {
            evidence: PerformanceEvidence { benchmarks, citations },
            ..Context::default()
        })
    }

    #[test]
    fn test_evidence_combinations() {
        assert!((score_for(Some(true), Some(true)) - 1.0).abs() < f64::EPSILON);
        assert!((score_for(Some(true), Some(false)) - 0.5).abs() < f64::EPSILON);
        assert!((score_for(None, Some(true)) - 0.5).abs() < f64::EPSILON);
        assert!(score_for(None, None).abs() < f64::EPSILON);
    }
}
