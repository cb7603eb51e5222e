use crate::facts::{Category, ContextError, display_name};
use crate::metrics::{DeviceFit, MetricResult, round_score};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One metric's contribution to a [`Scorecard`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricScore {
    pub name: &'static str,
    pub result: MetricResult,
}

/// The result of scoring one model.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    /// Per-metric results in registry order
    pub metrics: Vec<MetricScore>,

    /// Weighted aggregate in `[0, 1]`, unrounded
    pub net_score: f64,

    /// Sum of all metric latencies plus the aggregation overhead, in milliseconds
    pub net_score_latency_ms: u64,

    pub device_fit: Option<DeviceFit>,
}

impl Scorecard {
    /// Look up a metric result by name.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&MetricResult> {
        self.metrics.iter().find(|m| m.name == name).map(|m| &m.result)
    }
}

/// Why an identifier produced no score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordError {
    pub kind: String,
    pub message: String,
}

impl RecordError {
    pub const UNCLASSIFIED: &'static str = "unclassified";
    pub const INTERNAL: &'static str = "internal";

    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<&ContextError> for RecordError {
    fn from(e: &ContextError) -> Self {
        Self::new(e.kind(), e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored(Scorecard),

    /// Datasets and code repositories are passed through without a score
    Unscored,

    Failed(RecordError),
}

/// The result produced for a single input identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub identifier: String,
    pub name: String,
    pub category: Category,
    pub outcome: Outcome,
}

impl OutputRecord {
    #[must_use]
    pub fn scored(identifier: impl Into<String>, scorecard: Scorecard) -> Self {
        Self::new(identifier.into(), Category::Model, Outcome::Scored(scorecard))
    }

    #[must_use]
    pub fn unscored(identifier: impl Into<String>, category: Category) -> Self {
        Self::new(identifier.into(), category, Outcome::Unscored)
    }

    #[must_use]
    pub fn failed(identifier: impl Into<String>, category: Category, error: RecordError) -> Self {
        Self::new(identifier.into(), category, Outcome::Failed(error))
    }

    fn new(identifier: String, category: Category, outcome: Outcome) -> Self {
        Self {
            name: display_name(&identifier),
            identifier,
            category,
            outcome,
        }
    }

    #[must_use]
    pub const fn scorecard(&self) -> Option<&Scorecard> {
        match &self.outcome {
            Outcome::Scored(card) => Some(card),
            Outcome::Unscored | Outcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&RecordError> {
        match &self.outcome {
            Outcome::Failed(error) => Some(error),
            Outcome::Scored(_) | Outcome::Unscored => None,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

/// Records serialize as flat objects with a fixed key order:
/// `url`, `name`, `category`, then either the metric fields or an `error` object.
impl Serialize for OutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("url", &self.identifier)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("category", &self.category)?;

        match &self.outcome {
            Outcome::Scored(card) => {
                for metric in &card.metrics {
                    map.serialize_entry(metric.name, &round_score(metric.result.score()))?;
                    map.serialize_entry(&format!("{}_latency", metric.name), &metric.result.latency_ms())?;
                }

                map.serialize_entry("net_score", &round_score(card.net_score))?;
                map.serialize_entry("net_score_latency", &card.net_score_latency_ms)?;

                if let Some(fit) = &card.device_fit {
                    map.serialize_entry("device_fit", &fit.rounded())?;
                }
            }
            Outcome::Unscored => {}
            Outcome::Failed(error) => map.serialize_entry("error", error)?,
        }

        map.end()
    }
}
