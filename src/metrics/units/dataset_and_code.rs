use super::mean_of_flags;
use crate::facts::Context;
use crate::metrics::Metric;

/// Scores whether the training dataset and the training code are both linked.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetAndCodeMetric;

impl DatasetAndCodeMetric {
    pub const NAME: &'static str = "dataset_and_code_score";
}

impl Metric for DatasetAndCodeMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn score(&self, context: &Context) -> f64 {
        mean_of_flags(&[context.dataset_linked, context.code_linked])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_for(dataset_linked: Option<bool>, code_linked: Option<bool>) -> f64 {
        DatasetAndCodeMetric.score(&Context {
            dataset_linked,
            code_linked,
            ..Context::default()
        })
    }

    #[test]
    fn test_both_linked() {
        assert!((score_for(Some(true), Some(true)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_linked() {
        assert!((score_for(Some(true), Some(false)) - 0.5).abs() < f64::EPSILON);
        assert!((score_for(None, Some(true)) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_none_linked() {
        assert!(score_for(None, None).abs() < f64::EPSILON);
        assert!(score_for(Some(false), Some(false)).abs() < f64::EPSILON);
    }
}
