use super::mean_of_flags;
use crate::facts::Context;
use crate::metrics::Metric;

/// Scores how quickly a newcomer can get productive, from the documentation present.
#[derive(Debug, Clone, Copy, Default)]
pub struct RampUpTimeMetric;

impl RampUpTimeMetric {
    pub const NAME: &'static str = "ramp_up_time";
}

impl Metric for RampUpTimeMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn score(&self, context: &Context) -> f64 {
        mean_of_flags(&context.docs.as_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::DocFlags;

    #[test]
    fn test_all_docs_present() {
        let context = Context {
            docs: DocFlags::all(true),
            ..Context::default()
        };
        assert!((RampUpTimeMetric.score(&context) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_docs() {
        let context = Context {
            docs: DocFlags {
                readme: Some(true),
                quickstart: Some(true),
                tutorial: Some(false),
                api_docs: None,
                reproducibility: None,
            },
            ..Context::default()
        };
        assert!((RampUpTimeMetric.score(&context) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_docs_score_zero() {
        assert!(RampUpTimeMetric.score(&Context::default()).abs() < f64::EPSILON);
    }
}
