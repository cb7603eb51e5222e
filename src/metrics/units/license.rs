use crate::facts::Context;
use crate::metrics::Metric;

/// Licenses that may be combined with LGPL-2.1 code
const COMPATIBLE_TOKENS: &[&str] = &[
    "lgpl-2.1",
    "lgpl v2.1",
    "gnu lesser general public license v2.1",
    "apache-2.0",
    "apache 2.0",
    "mit",
    "bsd-2",
    "bsd-3",
    "bsd 2",
    "bsd 3",
    "mpl-2.0",
    "mpl 2.0",
    "cc-by-4.0",
    "unlicense",
];

/// Strong copyleft licenses that cannot be combined with LGPL-2.1 code
const INCOMPATIBLE_TOKENS: &[&str] = &["gpl-3.0", "gpl v3", "gnu general public license v3", "agpl"];

/// How a license relates to LGPL-2.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseCompatibility {
    Compatible,
    Unresolved,
    Incompatible,
    Absent,
}

impl LicenseCompatibility {
    /// Classify a license identifier.
    ///
    /// Compatible tokens win over incompatible ones, so `LGPL-2.1-or-later` is not
    /// mistaken for a GPL license.
    #[must_use]
    pub fn of(license: Option<&str>) -> Self {
        let Some(text) = license.map(str::trim).filter(|text| !text.is_empty()) else {
            return Self::Absent;
        };

        let lowered = text.to_lowercase();
        if COMPATIBLE_TOKENS.iter().any(|token| lowered.contains(token)) {
            Self::Compatible
        } else if INCOMPATIBLE_TOKENS.iter().any(|token| lowered.contains(token)) {
            Self::Incompatible
        } else {
            Self::Unresolved
        }
    }

    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Compatible => 1.0,
            Self::Unresolved => 0.5,
            Self::Incompatible | Self::Absent => 0.0,
        }
    }
}

/// Scores whether the artifact can legally be used alongside LGPL-2.1 code.
#[derive(Debug, Clone, Copy, Default)]
pub struct LicenseMetric;

impl LicenseMetric {
    pub const NAME: &'static str = "license";
}

impl Metric for LicenseMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn score(&self, context: &Context) -> f64 {
        LicenseCompatibility::of(context.license.as_deref()).score()
    }
}
