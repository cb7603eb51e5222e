use serde::{Deserialize, Serialize};

/// Everything known about one model artifact.
///
/// A context is built once by a [`ContextBuilder`](super::ContextBuilder) and then only
/// ever read. `None` means the fact could not be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Context {
    /// Total size of the artifact's files in bytes
    pub size_bytes: Option<u64>,

    /// License identifier as published by the artifact
    pub license: Option<String>,

    pub docs: DocFlags,

    /// Number of maintainers contributing to the artifact
    pub contributors: Option<u32>,

    /// Whether the artifact links to the dataset it was trained on
    pub dataset_linked: Option<bool>,

    /// Whether the artifact links to the code that produced it
    pub code_linked: Option<bool>,

    pub dataset_docs: DatasetDocs,

    pub lint: LintReport,

    pub evidence: PerformanceEvidence,
}

/// Documentation sections that help a newcomer ramp up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocFlags {
    pub readme: Option<bool>,
    pub quickstart: Option<bool>,
    pub tutorial: Option<bool>,
    pub api_docs: Option<bool>,
    pub reproducibility: Option<bool>,
}

impl DocFlags {
    #[must_use]
    pub const fn all(value: bool) -> Self {
        Self {
            readme: Some(value),
            quickstart: Some(value),
            tutorial: Some(value),
            api_docs: Some(value),
            reproducibility: Some(value),
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> [Option<bool>; 5] {
        [self.readme, self.quickstart, self.tutorial, self.api_docs, self.reproducibility]
    }
}

/// How well the training dataset is documented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetDocs {
    pub source: Option<bool>,
    pub license: Option<bool>,
    pub splits: Option<bool>,
    pub ethics: Option<bool>,
}

impl DatasetDocs {
    #[must_use]
    pub const fn all(value: bool) -> Self {
        Self {
            source: Some(value),
            license: Some(value),
            splits: Some(value),
            ethics: Some(value),
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> [Option<bool>; 4] {
        [self.source, self.license, self.splits, self.ethics]
    }
}

/// Output of the lint tools run over the artifact's code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintReport {
    /// Number of issues reported by flake8
    pub flake8_issues: Option<u32>,

    /// Whether imports are sorted according to isort
    pub isort_compliant: Option<bool>,

    /// Number of issues reported by mypy
    pub mypy_issues: Option<u32>,
}

/// Evidence backing the artifact's performance claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceEvidence {
    pub benchmarks: Option<bool>,
    pub citations: Option<bool>,
}
