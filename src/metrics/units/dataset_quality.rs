use super::mean_of_flags;
use crate::facts::Context;
use crate::metrics::Metric;

/// Scores how thoroughly the training dataset is documented.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetQualityMetric;

impl DatasetQualityMetric {
    pub const NAME: &'static str = "dataset_quality";
}

impl Metric for DatasetQualityMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn score(&self, context: &Context) -> f64 {
        mean_of_flags(&context.dataset_docs.as_array())
    }
}
