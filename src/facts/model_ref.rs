use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use url::Url;

const HUB_HOST: &str = "huggingface.co";

/// Path segments that begin a revision-specific suffix in a Hub URL.
const REVISION_MARKERS: &[&str] = &["tree", "blob", "resolve", "commit", "discussions"];

/// Top-level Hub paths that never name a model.
const RESERVED_ROOTS: &[&str] = &["datasets", "spaces", "docs", "api", "models", "organizations", "settings"];

/// A model hosted on the Hugging Face Hub, e.g. `google-bert/bert-base-uncased`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelRef {
    id: String,
}

impl ModelRef {
    /// The repository id, either `name` or `owner/name`
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The last component of the id, used as the display name in reports
    #[must_use]
    pub fn name(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }
}

impl FromStr for ModelRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let url = Url::parse(s.trim()).map_err(|e| format!("'{s}' is not a valid URL: {e}"))?;

        if url.host_str().is_none_or(|host| !host.eq_ignore_ascii_case(HUB_HOST) && !host.eq_ignore_ascii_case("www.huggingface.co")) {
            return Err(format!("'{s}' is not a Hugging Face URL"));
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
            .unwrap_or_default();

        let end = segments
            .iter()
            .position(|segment| REVISION_MARKERS.contains(segment))
            .unwrap_or(segments.len());

        let id_segments = segments.get(..end.min(2)).unwrap_or_default();
        match id_segments {
            [] => Err(format!("'{s}' does not name a model")),
            [first, ..] if RESERVED_ROOTS.contains(first) => Err(format!("'{s}' does not point to a model page")),
            _ => Ok(Self { id: id_segments.join("/") }),
        }
    }
}

impl Display for ModelRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.id)
    }
}

/// Short name to show for an identifier in reports.
///
/// Hub model URLs reduce to the model name; anything else is shown verbatim.
#[must_use]
pub fn display_name(identifier: &str) -> String {
    identifier
        .parse::<ModelRef>()
        .map_or_else(|_| identifier.trim().to_string(), |model| model.name().to_string())
}
