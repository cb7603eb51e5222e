/// A registry that would break the scoring contract.
///
/// These are configuration errors. They are detected before any scoring begins and
/// must halt the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// The registry contains no metrics.
    #[error("metric registry is empty")]
    Empty,

    /// Two metrics share the same name.
    #[error("metric '{0}' is registered more than once")]
    DuplicateName(&'static str),

    /// A weight is negative, above one, or not finite.
    #[error("weight {weight} for metric '{name}' must be between 0 and 1")]
    WeightOutOfRange { name: &'static str, weight: f64 },

    /// The weights do not add up to one.
    #[error("metric weights must sum to 1.0, got {0}")]
    WeightSum(f64),

    /// A weight override names a metric that is not in the registry.
    #[error("weight given for unknown metric '{0}'")]
    UnknownMetric(String),

    /// The size bounds do not describe a non-empty range.
    #[error("size upper bound ({upper} bytes) must be greater than the lower bound ({lower} bytes)")]
    InvalidSizeBounds { lower: u64, upper: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(RegistryError::Empty.to_string(), "metric registry is empty");
        assert_eq!(
            RegistryError::DuplicateName("size").to_string(),
            "metric 'size' is registered more than once"
        );
        assert_eq!(
            RegistryError::WeightOutOfRange { name: "license", weight: 1.5 }.to_string(),
            "weight 1.5 for metric 'license' must be between 0 and 1"
        );
        assert_eq!(RegistryError::WeightSum(0.75).to_string(), "metric weights must sum to 1.0, got 0.75");
        assert_eq!(
            RegistryError::UnknownMetric("stars".to_string()).to_string(),
            "weight given for unknown metric 'stars'"
        );
        assert_eq!(
            RegistryError::InvalidSizeBounds { lower: 10, upper: 5 }.to_string(),
            "size upper bound (5 bytes) must be greater than the lower bound (10 bytes)"
        );
    }
}
