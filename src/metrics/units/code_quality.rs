use crate::facts::{Context, LintReport};
use crate::metrics::Metric;

/// flake8 issue count at which the flake8 term bottoms out
const FLAKE8_ISSUE_CAP: f64 = 50.0;

/// mypy issue count at which the mypy term bottoms out
const MYPY_ISSUE_CAP: f64 = 20.0;

const FLAKE8_WEIGHT: f64 = 0.4;
const ISORT_WEIGHT: f64 = 0.2;
const MYPY_WEIGHT: f64 = 0.4;

/// Scores the artifact's code from its lint tool output.
///
/// Each tool contributes a term in `[0, 1]` where 1 means no issues; a tool whose
/// output is missing contributes 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeQualityMetric;

impl CodeQualityMetric {
    pub const NAME: &'static str = "code_quality";

    #[must_use]
    pub fn flake8_term(lint: &LintReport) -> f64 {
        lint.flake8_issues.map_or(0.0, |issues| issue_term(issues, FLAKE8_ISSUE_CAP))
    }

    #[must_use]
    pub fn isort_term(lint: &LintReport) -> f64 {
        if lint.isort_compliant == Some(true) { 1.0 } else { 0.0 }
    }

    #[must_use]
    pub fn mypy_term(lint: &LintReport) -> f64 {
        lint.mypy_issues.map_or(0.0, |issues| issue_term(issues, MYPY_ISSUE_CAP))
    }
}

fn issue_term(issues: u32, cap: f64) -> f64 {
    (1.0 - f64::from(issues) / cap).max(0.0)
}

impl Metric for CodeQualityMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn score(&self, context: &Context) -> f64 {
        let lint = &context.lint;
        FLAKE8_WEIGHT * Self::flake8_term(lint) + ISORT_WEIGHT * Self::isort_term(lint) + MYPY_WEIGHT * Self::mypy_term(lint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_for(lint: LintReport) -> f64 {
        CodeQualityMetric.score(&Context {
            lint,
            ..Context::default()
        })
    }

    #[test]
    fn test_clean_code_scores_one() {
        let lint = LintReport {
            flake8_issues: Some(0),
            isort_compliant: Some(true),
            mypy_issues: Some(0),
        };
        assert!((score_for(lint) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_terms() {
        // 5 flake8 issues -> 0.9, 4 mypy issues -> 0.8
        let lint = LintReport {
            flake8_issues: Some(5),
            isort_compliant: Some(true),
            mypy_issues: Some(4),
        };
        assert!((CodeQualityMetric::flake8_term(&lint) - 0.9).abs() < 1e-9);
        assert!((CodeQualityMetric::mypy_term(&lint) - 0.8).abs() < 1e-9);
        assert!((score_for(lint) - 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_issue_counts_past_cap_bottom_out() {
        let lint = LintReport {
            flake8_issues: Some(500),
            isort_compliant: Some(false),
            mypy_issues: Some(u32::MAX),
        };
        assert!(score_for(lint).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_tool_output_contributes_zero() {
        let lint = LintReport {
            flake8_issues: None,
            isort_compliant: Some(true),
            mypy_issues: None,
        };
        assert!((score_for(lint) - 0.2).abs() < 1e-9);
        assert!(score_for(LintReport::default()).abs() < f64::EPSILON);
    }
}
