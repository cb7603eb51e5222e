use crate::facts::Context;
use crate::metrics::Metric;

/// Contributor count at which the bus factor reaches one half
const HALF_SATURATION: f64 = 5.0;

/// Scores how resilient maintenance is to losing contributors.
///
/// The curve `c / (c + 5)` saturates towards one as the contributor count grows.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusFactorMetric;

impl BusFactorMetric {
    pub const NAME: &'static str = "bus_factor";
}

impl Metric for BusFactorMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn score(&self, context: &Context) -> f64 {
        let Some(contributors) = context.contributors else {
            return 0.0;
        };

        let contributors = f64::from(contributors);
        contributors / (contributors + HALF_SATURATION)
    }
}
