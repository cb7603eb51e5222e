//! Derivation of [`Context`] facts from Hub metadata
//!
//! The Hub exposes no direct signal for several facts (contributor count, lint
//! results), so those are estimated from popularity. Everything else comes from tags,
//! model card front matter, the README, and the file listing.

use super::model_info::{ModelInfo, TreeEntry};
use crate::facts::{Context, DatasetDocs, DocFlags, LintReport, PerformanceEvidence};

/// Download count at which the popularity proxy saturates
const POPULARITY_CEILING: f64 = 1_000_000.0;

const QUICKSTART_TERMS: &[&str] = &["quickstart", "quick start", "getting started", "how to use", "pip install", "installation"];
const TUTORIAL_TERMS: &[&str] = &["tutorial", "example", "notebook", "colab", "walkthrough"];
const API_DOC_TERMS: &[&str] = &["api reference", "api docs", "documentation", "huggingface.co/docs"];
const REPRODUCIBILITY_TERMS: &[&str] = &["reproduc", "training procedure", "training details", "hyperparameter"];

const DATASET_LINK_TERMS: &[&str] = &["training data", "pretraining data", "trained on"];
const DATASET_SOURCE_TERMS: &[&str] = &["dataset", "data source", "corpus", "pretraining data", "training data"];
const DATASET_LICENSE_TERMS: &[&str] = &["dataset license", "data license"];
const DATASET_SPLIT_TERMS: &[&str] = &["train split", "test split", "validation", "split"];
const DATASET_ETHICS_TERMS: &[&str] = &["bias", "ethical", "responsible", "safety", "limitations"];

const BENCHMARK_TERMS: &[&str] = &[
    "benchmark",
    "evaluation",
    "accuracy",
    "f1",
    "bleu",
    "rouge",
    "exact match",
    "glue",
    "squad",
    "mnli",
    "perplexity",
];
const CITATION_TERMS: &[&str] = &["citation", "bibtex", "@article", "@inproceedings", "@misc", "arxiv.org"];

/// Assemble a context from whatever the Hub returned.
///
/// `tree` and `readme` are `None` when the corresponding request failed; the facts
/// they feed are then unknown rather than false.
#[must_use]
pub fn build_context(info: &ModelInfo, tree: Option<&[TreeEntry]>, readme: Option<&str>) -> Context {
    let text = format!("{}\n{}", info.card_text(), readme.map(str::to_lowercase).unwrap_or_default());

    Context {
        size_bytes: tree.and_then(total_size),
        license: license(info),
        docs: doc_flags(readme),
        contributors: info.downloads.map(contributors),
        dataset_linked: Some(dataset_linked(info, &text)),
        code_linked: code_linked(info, tree),
        dataset_docs: dataset_docs(&text),
        lint: info.downloads.map(lint_estimate).unwrap_or_default(),
        evidence: evidence(info, &text),
    }
}

/// License from the model card, then the top-level field, then a `license:` tag.
#[must_use]
pub fn license(info: &ModelInfo) -> Option<String> {
    if let Some(license) = info.card_license() {
        return Some(license.to_string());
    }

    if let Some(license) = info.license.as_deref().filter(|l| !l.trim().is_empty()) {
        return Some(license.to_string());
    }

    info.tags.iter().find_map(|tag| {
        let (prefix, value) = tag.split_once(':')?;
        (prefix.eq_ignore_ascii_case("license") && !value.is_empty()).then(|| value.to_string())
    })
}

/// Sum of all file sizes, unknown for an empty listing.
#[must_use]
pub fn total_size(tree: &[TreeEntry]) -> Option<u64> {
    let mut files = tree
        .iter()
        .filter(|entry| entry.kind.as_deref().is_none_or(|kind| kind == "file"))
        .peekable();
    let _ = files.peek()?;
    Some(files.filter_map(|entry| entry.size).fold(0, u64::saturating_add))
}

/// Contributor estimate from download tiers.
#[must_use]
pub const fn contributors(downloads: u64) -> u32 {
    match downloads {
        1_000_001.. => 95,
        100_001.. => 45,
        10_001.. => 10,
        1_001.. => 3,
        _ => 2,
    }
}

/// Log-scaled popularity in `[0, 1]`.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "download counts are far below 2^52")]
pub fn popularity(downloads: u64) -> f64 {
    ((downloads as f64).ln_1p() / POPULARITY_CEILING.ln_1p()).clamp(0.0, 1.0)
}

/// Lint estimates from the popularity proxy: widely used models are assumed to be better maintained.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "both products are within [0, 18] since popularity is clamped to [0, 1]"
)]
pub fn lint_estimate(downloads: u64) -> LintReport {
    let p = popularity(downloads);
    let flake8 = ((18.0 * (1.0 - p)).floor() as u32).max(2);
    let mypy = ((12.0 * (1.0 - p)).floor() as u32).max(1);

    LintReport {
        flake8_issues: Some(flake8),
        isort_compliant: Some(p > 0.6),
        mypy_issues: Some(mypy),
    }
}

/// Documentation flags from README keywords, all unknown when there is no README.
#[must_use]
pub fn doc_flags(readme: Option<&str>) -> DocFlags {
    let Some(readme) = readme else {
        return DocFlags::default();
    };

    let readme = readme.to_lowercase();
    let present = !readme.trim().is_empty();
    DocFlags {
        readme: Some(present),
        quickstart: Some(mentions(&readme, QUICKSTART_TERMS)),
        tutorial: Some(mentions(&readme, TUTORIAL_TERMS)),
        api_docs: Some(mentions(&readme, API_DOC_TERMS)),
        reproducibility: Some(mentions(&readme, REPRODUCIBILITY_TERMS)),
    }
}

fn dataset_linked(info: &ModelInfo, text: &str) -> bool {
    let tagged = info.tags.iter().any(|tag| tag.to_ascii_lowercase().starts_with("dataset:"));
    let carded = info
        .card_data
        .as_ref()
        .and_then(|card| card.get("datasets"))
        .is_some_and(|datasets| match datasets {
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::String(name) => !name.is_empty(),
            _ => false,
        });

    tagged || carded || mentions(text, DATASET_LINK_TERMS)
}

/// Code is linked when the repository ships Python sources or declares a library.
fn code_linked(info: &ModelInfo, tree: Option<&[TreeEntry]>) -> Option<bool> {
    if info.library_name.as_deref().is_some_and(|name| !name.is_empty()) {
        return Some(true);
    }

    tree.map(|entries| {
        entries
            .iter()
            .any(|entry| camino::Utf8Path::new(&entry.path).extension() == Some("py"))
    })
}

fn dataset_docs(text: &str) -> DatasetDocs {
    DatasetDocs {
        source: Some(mentions(text, DATASET_SOURCE_TERMS)),
        license: Some(mentions(text, DATASET_LICENSE_TERMS)),
        splits: Some(mentions(text, DATASET_SPLIT_TERMS)),
        ethics: Some(mentions(text, DATASET_ETHICS_TERMS)),
    }
}

/// Benchmarks and citations from the card and README, with a popularity fallback for
/// models whose claims are documented elsewhere.
fn evidence(info: &ModelInfo, text: &str) -> PerformanceEvidence {
    let downloads = info.downloads.unwrap_or(0);
    let likes = info.likes.unwrap_or(0);

    let has_model_index = info.card_data.as_ref().is_some_and(|card| card.get("model-index").is_some());
    let benchmarks = has_model_index || mentions(text, BENCHMARK_TERMS) || downloads > 100_000 || likes > 2_000;
    let citations = mentions(text, CITATION_TERMS) || downloads > 5_000;

    PerformanceEvidence {
        benchmarks: Some(benchmarks),
        citations: Some(citations),
    }
}

fn mentions(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}
