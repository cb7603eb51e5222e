//! Wire types for the Hugging Face Hub API

use serde::Deserialize;

/// The subset of `GET /api/models/{id}` that scoring relies on
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub id: Option<String>,

    /// Parsed front matter of the model card
    #[serde(rename = "cardData", default)]
    pub card_data: Option<serde_json::Value>,

    #[serde(default)]
    pub license: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub downloads: Option<u64>,

    #[serde(default)]
    pub likes: Option<u64>,

    #[serde(default)]
    pub library_name: Option<String>,
}

impl ModelInfo {
    /// `cardData.license`, if it is a non-empty string
    #[must_use]
    pub fn card_license(&self) -> Option<&str> {
        self.card_data
            .as_ref()?
            .get("license")?
            .as_str()
            .filter(|license| !license.trim().is_empty())
    }

    /// The model card front matter flattened to lowercase text for keyword matching
    #[must_use]
    pub fn card_text(&self) -> String {
        self.card_data
            .as_ref()
            .map(|card| card.to_string().to_lowercase())
            .unwrap_or_default()
    }
}

/// One entry of `GET /api/models/{id}/tree/main`
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    pub path: String,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_info_deserialize() {
        let json = r#"{
            "id": "google-bert/bert-base-uncased",
            "downloads": 51234567,
            "likes": 2100,
            "library_name": "transformers",
            "tags": ["transformers", "pytorch", "dataset:bookcorpus", "license:apache-2.0"],
            "cardData": {"license": "apache-2.0", "datasets": ["bookcorpus", "wikipedia"]},
            "lastModified": "2024-02-19T11:06:12.000Z"
        }"#;

        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id.as_deref(), Some("google-bert/bert-base-uncased"));
        assert_eq!(info.downloads, Some(51_234_567));
        assert_eq!(info.library_name.as_deref(), Some("transformers"));
        assert_eq!(info.tags.len(), 4);
        assert_eq!(info.card_license(), Some("apache-2.0"));
        assert!(info.card_text().contains("bookcorpus"));
    }

    #[test]
    fn test_model_info_minimal() {
        let info: ModelInfo = serde_json::from_str(r#"{"id": "gpt2"}"#).unwrap();
        assert!(info.tags.is_empty());
        assert!(info.downloads.is_none());
        assert!(info.card_license().is_none());
        assert!(info.card_text().is_empty());
    }

    #[test]
    fn test_card_license_must_be_a_string() {
        let info: ModelInfo = serde_json::from_str(r#"{"cardData": {"license": ["mit", "apache-2.0"]}}"#).unwrap();
        assert!(info.card_license().is_none());

        let info: ModelInfo = serde_json::from_str(r#"{"cardData": {"license": "  "}}"#).unwrap();
        assert!(info.card_license().is_none());
    }

    #[test]
    fn test_tree_entry_deserialize() {
        let json = r#"[
            {"type": "file", "oid": "abc", "size": 570, "path": "config.json"},
            {"type": "directory", "oid": "def", "path": "onnx"},
            {"type": "file", "oid": "ghi", "size": 440473133, "path": "model.safetensors", "lfs": {"size": 440473133}}
        ]"#;

        let entries: Vec<TreeEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].kind.as_deref(), Some("directory"));
        assert_eq!(entries[1].size, None);
        assert_eq!(entries[2].size, Some(440_473_133));
    }
}
