//! The fixed set of metric units
//!
//! | Unit | Output name | Missing data |
//! |---|---|---|
//! | [`SizeMetric`] | `size_score` | unknown size scores 0 |
//! | [`LicenseMetric`] | `license` | absent license scores 0 |
//! | [`RampUpTimeMetric`] | `ramp_up_time` | missing flags count as 0 |
//! | [`BusFactorMetric`] | `bus_factor` | unknown contributors score 0 |
//! | [`DatasetAndCodeMetric`] | `dataset_and_code_score` | missing flags count as 0 |
//! | [`DatasetQualityMetric`] | `dataset_quality` | missing flags count as 0 |
//! | [`CodeQualityMetric`] | `code_quality` | missing tool output contributes 0 |
//! | [`PerformanceClaimsMetric`] | `performance_claims` | missing flags count as 0 |

mod bus_factor;
mod code_quality;
mod dataset_and_code;
mod dataset_quality;
mod license;
mod performance_claims;
mod ramp_up_time;
mod size;

pub use bus_factor::BusFactorMetric;
pub use code_quality::CodeQualityMetric;
pub use dataset_and_code::DatasetAndCodeMetric;
pub use dataset_quality::DatasetQualityMetric;
pub use license::{LicenseCompatibility, LicenseMetric};
pub use performance_claims::PerformanceClaimsMetric;
pub use ramp_up_time::RampUpTimeMetric;
pub use size::{SizeBounds, SizeMetric};

/// A known-true flag counts as one, anything else as zero.
const fn flag_value(flag: Option<bool>) -> f64 {
    if matches!(flag, Some(true)) { 1.0 } else { 0.0 }
}

/// Mean of a set of flags where unknown flags count as false.
#[expect(clippy::cast_precision_loss, reason = "flag sets have at most a handful of entries")]
fn mean_of_flags(flags: &[Option<bool>]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }

    flags.iter().copied().map(flag_value).sum::<f64>() / flags.len() as f64
}
