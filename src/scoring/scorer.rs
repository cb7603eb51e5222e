use super::{MetricScore, OutputRecord, Scorecard};
use crate::facts::Context;
use crate::metrics::{DeviceFit, Registry, ceil_millis, clamp_score};
use std::sync::Arc;
use std::time::Instant;

const LOG_TARGET: &str = "    scorer";

/// Runs every metric in a [`Registry`] against one [`Context`] and aggregates the results.
#[derive(Debug, Clone)]
pub struct Scorer {
    registry: Arc<Registry>,
}

impl Scorer {
    #[must_use]
    pub const fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Score a model.
    ///
    /// Metrics run in registry order. The net score is the weighted sum of the metric
    /// scores, and its latency covers all metric latencies plus the time spent aggregating.
    #[must_use]
    pub fn score(&self, identifier: &str, context: &Context) -> OutputRecord {
        let mut metrics = Vec::with_capacity(self.registry.len());
        for entry in self.registry.iter() {
            metrics.push(MetricScore {
                name: entry.name(),
                result: entry.metric().evaluate(context),
            });
        }

        let start = Instant::now();
        let weighted: f64 = self
            .registry
            .iter()
            .zip(&metrics)
            .map(|(entry, metric)| entry.weight() * metric.result.score())
            .sum();
        let net_score = clamp_score(weighted);
        let device_fit = context.size_bytes.map(DeviceFit::for_size);
        let overhead_ms = ceil_millis(start.elapsed());

        let net_score_latency_ms = metrics
            .iter()
            .map(|metric| metric.result.latency_ms())
            .fold(overhead_ms, u64::saturating_add);

        log::debug!(target: LOG_TARGET, "scored '{identifier}': net score {net_score:.4}");

        OutputRecord::scored(
            identifier,
            Scorecard {
                metrics,
                net_score,
                net_score_latency_ms,
                device_fit,
            },
        )
    }
}
