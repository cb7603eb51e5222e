use super::units::{
    BusFactorMetric, CodeQualityMetric, DatasetAndCodeMetric, DatasetQualityMetric, LicenseMetric, PerformanceClaimsMetric,
    RampUpTimeMetric, SizeBounds, SizeMetric,
};
use super::{Metric, RegistryError};
use std::collections::{BTreeMap, HashSet};

/// How far the weight sum may drift from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the standard metric set, in registry order
pub const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    (SizeMetric::NAME, 0.05),
    (LicenseMetric::NAME, 0.20),
    (RampUpTimeMetric::NAME, 0.15),
    (BusFactorMetric::NAME, 0.10),
    (DatasetAndCodeMetric::NAME, 0.20),
    (DatasetQualityMetric::NAME, 0.05),
    (CodeQualityMetric::NAME, 0.15),
    (PerformanceClaimsMetric::NAME, 0.10),
];

/// A metric unit together with its contribution to the net score.
#[derive(Debug)]
pub struct RegistryEntry {
    metric: Box<dyn Metric>,
    weight: f64,
}

impl RegistryEntry {
    #[must_use]
    pub fn new(metric: impl Metric + 'static, weight: f64) -> Self {
        Self {
            metric: Box::new(metric),
            weight,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.metric.name()
    }

    #[must_use]
    pub fn metric(&self) -> &dyn Metric {
        self.metric.as_ref()
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// The ordered, validated set of metrics that make up the scoring rubric.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Build a registry from explicit entries.
    ///
    /// # Errors
    ///
    /// Fails if the registry is empty, a name repeats, a weight is outside `[0, 1]`,
    /// or the weights do not sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(entries: impl IntoIterator<Item = RegistryEntry>) -> Result<Self, RegistryError> {
        let entries: Vec<_> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            let name = entry.name();
            if !seen.insert(name) {
                return Err(RegistryError::DuplicateName(name));
            }

            if !entry.weight.is_finite() || !(0.0..=1.0).contains(&entry.weight) {
                return Err(RegistryError::WeightOutOfRange { name, weight: entry.weight });
            }
        }

        let sum: f64 = entries.iter().map(RegistryEntry::weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RegistryError::WeightSum(sum));
        }

        Ok(Self { entries })
    }

    /// The standard eight-metric rubric with default weights and size bounds.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in defaults; the signature matches [`Registry::standard_with`].
    pub fn standard() -> Result<Self, RegistryError> {
        Self::standard_with(SizeBounds::DEFAULT, &BTreeMap::new())
    }

    /// The standard rubric with configured size bounds and weight overrides.
    ///
    /// Overrides replace the default weight of the named metric; metrics not named keep
    /// their default. The resulting weights must still sum to one.
    ///
    /// # Errors
    ///
    /// Fails if an override names an unknown metric, if the bounds are empty, or if
    /// the resulting weights are invalid.
    pub fn standard_with(bounds: SizeBounds, overrides: &BTreeMap<String, f64>) -> Result<Self, RegistryError> {
        if !bounds.is_valid() {
            return Err(RegistryError::InvalidSizeBounds {
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }

        if let Some(unknown) = overrides.keys().find(|name| !DEFAULT_WEIGHTS.iter().any(|(known, _)| known == *name)) {
            return Err(RegistryError::UnknownMetric(unknown.clone()));
        }

        let weight = |name: &str| -> f64 {
            overrides.get(name).copied().unwrap_or_else(|| {
                DEFAULT_WEIGHTS
                    .iter()
                    .find(|(known, _)| *known == name)
                    .map_or(0.0, |(_, weight)| *weight)
            })
        };

        Self::new([
            RegistryEntry::new(SizeMetric::new(bounds), weight(SizeMetric::NAME)),
            RegistryEntry::new(LicenseMetric, weight(LicenseMetric::NAME)),
            RegistryEntry::new(RampUpTimeMetric, weight(RampUpTimeMetric::NAME)),
            RegistryEntry::new(BusFactorMetric, weight(BusFactorMetric::NAME)),
            RegistryEntry::new(DatasetAndCodeMetric, weight(DatasetAndCodeMetric::NAME)),
            RegistryEntry::new(DatasetQualityMetric, weight(DatasetQualityMetric::NAME)),
            RegistryEntry::new(CodeQualityMetric, weight(CodeQualityMetric::NAME)),
            RegistryEntry::new(PerformanceClaimsMetric, weight(PerformanceClaimsMetric::NAME)),
        ])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(RegistryEntry::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Context;

    #[derive(Debug)]
    struct Named(&'static str);

    impl Metric for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn score(&self, _context: &Context) -> f64 {
            1.0
        }
    }

    fn two_metrics(first: f64, second: f64) -> Result<Registry, RegistryError> {
        Registry::new([RegistryEntry::new(Named("a"), first), RegistryEntry::new(Named("b"), second)])
    }

    #[test]
    fn test_standard_registry_is_valid() {
        let registry = Registry::standard().unwrap();
        assert_eq!(registry.len(), 8);
        assert_eq!(
            registry.names(),
            DEFAULT_WEIGHTS.iter().map(|(name, _)| *name).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let sum: f64 = DEFAULT_WEIGHTS.iter().map(|(_, weight)| weight).sum();
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_weights_summing_to_one_succeed() {
        let _ = two_metrics(0.5, 0.5).unwrap();
        let _ = two_metrics(0.3, 0.7 + 5e-7).unwrap();
        let _ = two_metrics(1.0, 0.0).unwrap();
    }

    #[test]
    fn test_weights_summing_to_099_fail() {
        assert!(matches!(two_metrics(0.5, 0.49), Err(RegistryError::WeightSum(_))));
    }

    #[test]
    fn test_weights_summing_to_101_fail() {
        assert!(matches!(two_metrics(0.5, 0.51), Err(RegistryError::WeightSum(_))));
    }

    #[test]
    fn test_duplicate_names_fail() {
        let result = Registry::new([RegistryEntry::new(Named("a"), 0.5), RegistryEntry::new(Named("a"), 0.5)]);
        assert_eq!(result.unwrap_err(), RegistryError::DuplicateName("a"));
    }

    #[test]
    fn test_out_of_range_weight_fails() {
        assert!(matches!(two_metrics(1.5, -0.5), Err(RegistryError::WeightOutOfRange { name: "a", .. })));
        assert!(matches!(two_metrics(f64::NAN, 0.5), Err(RegistryError::WeightOutOfRange { .. })));
    }

    #[test]
    fn test_empty_registry_fails() {
        assert_eq!(Registry::new([]).unwrap_err(), RegistryError::Empty);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let overrides = BTreeMap::from([("size_score".to_string(), 0.10), ("license".to_string(), 0.15)]);
        let registry = Registry::standard_with(SizeBounds::DEFAULT, &overrides).unwrap();
        let size = registry.iter().find(|entry| entry.name() == "size_score").unwrap();
        assert!((size.weight() - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overrides_must_still_sum_to_one() {
        let overrides = BTreeMap::from([("size_score".to_string(), 0.5)]);
        assert!(matches!(
            Registry::standard_with(SizeBounds::DEFAULT, &overrides),
            Err(RegistryError::WeightSum(_))
        ));
    }

    #[test]
    fn test_unknown_override_fails() {
        let overrides = BTreeMap::from([("stars".to_string(), 0.0)]);
        assert_eq!(
            Registry::standard_with(SizeBounds::DEFAULT, &overrides).unwrap_err(),
            RegistryError::UnknownMetric("stars".to_string())
        );
    }

    #[test]
    fn test_invalid_bounds_fail() {
        let bounds = SizeBounds { lower: 100, upper: 100 };
        assert!(matches!(
            Registry::standard_with(bounds, &BTreeMap::new()),
            Err(RegistryError::InvalidSizeBounds { lower: 100, upper: 100 })
        ));
    }
}
