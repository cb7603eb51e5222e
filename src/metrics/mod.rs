//! Metric units and the weighted registry that combines them
//!
//! # Implementation Model
//!
//! Every scoring function implements the [`Metric`] trait. Implementations only
//! provide [`Metric::score`], a pure function of a [`Context`](crate::facts::Context);
//! the provided [`Metric::evaluate`] wraps it with timing and clamping to produce a
//! [`MetricResult`]. Keeping the timing out of the units means a unit that
//! short-circuits on missing data is still timed.
//!
//! The [`Registry`] holds the closed, ordered set of units along with their weights.
//! It is validated once at construction (weights in range, summing to one, unique
//! names) and is read-only afterwards, so it can be shared freely across worker
//! tasks.
//!
//! The eight units live in [`units`]. Each documents the policy it applies when the
//! context lacks the data it needs.

mod device_fit;
mod metric;
mod metric_result;
mod registry;
mod registry_error;
pub mod units;

pub use device_fit::DeviceFit;
pub use metric::{Metric, clamp_score, round_score};
pub use metric_result::{MetricResult, ceil_millis};
pub use registry::{DEFAULT_WEIGHTS, Registry, RegistryEntry, WEIGHT_SUM_TOLERANCE};
pub use registry_error::RegistryError;
pub use units::SizeBounds;
