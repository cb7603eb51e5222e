use serde::Serialize;
use strum::Display;

/// The kind of artifact an identifier points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Model,
    Dataset,
    Code,
    Unknown,
}

const CODE_HOSTS: &[&str] = &["github.com", "gitlab.com", "bitbucket.org"];

/// Classify an identifier by inspecting its URL.
///
/// Matching is case-insensitive and purely textual, so identifiers that are not
/// well-formed URLs still classify when they mention a known host.
#[must_use]
pub fn classify(identifier: &str) -> Category {
    let lowered = identifier.trim().to_ascii_lowercase();

    if lowered.contains("huggingface.co/datasets") {
        Category::Dataset
    } else if lowered.contains("huggingface.co/") {
        Category::Model
    } else if CODE_HOSTS.iter().any(|host| lowered.contains(host)) {
        Category::Code
    } else {
        Category::Unknown
    }
}
