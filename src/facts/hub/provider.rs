use super::client::{Client, HubApiResult};
use super::heuristics::build_context;
use crate::facts::{Context, ContextBuilder, ContextError, ModelRef};
use ohno::app_err;

const LOG_TARGET: &str = "       hub";

/// Builds contexts from the Hugging Face Hub.
///
/// Model metadata is authoritative: if it cannot be fetched the build fails. The file
/// listing and README are best effort and only leave facts unknown when missing.
#[derive(Debug, Clone)]
pub struct HubContextBuilder {
    client: Client,
}

impl HubContextBuilder {
    /// Create a builder talking to `base_url` with an optional access token.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be created.
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> crate::Result<Self> {
        Ok(Self::with_client(Client::new(token, base_url)?))
    }

    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ContextBuilder for HubContextBuilder {
    async fn build(&self, identifier: &str) -> Result<Context, ContextError> {
        let model: ModelRef = identifier.parse().map_err(ContextError::MalformedInput)?;
        let id = model.id();
        log::info!(target: LOG_TARGET, "Fetching model information for '{id}'");

        let info = match self.client.model_info(id).await {
            HubApiResult::Success(info) => info,
            HubApiResult::NotFound => {
                return Err(ContextError::Retrieval(app_err!("model '{id}' was not found on the Hub")));
            }
            HubApiResult::Failed(e) => return Err(ContextError::Retrieval(e)),
        };

        let (tree, readme) = tokio::join!(self.client.model_tree(id), self.client.readme(id));

        let tree = match tree {
            HubApiResult::Success(entries) => Some(entries),
            HubApiResult::NotFound => {
                log::debug!(target: LOG_TARGET, "no file listing for '{id}'");
                None
            }
            HubApiResult::Failed(e) => {
                log::warn!(target: LOG_TARGET, "could not list files of '{id}': {e:#}");
                None
            }
        };

        let readme = match readme {
            HubApiResult::Success(text) => Some(text),
            HubApiResult::NotFound => {
                log::debug!(target: LOG_TARGET, "no README for '{id}'");
                None
            }
            HubApiResult::Failed(e) => {
                log::warn!(target: LOG_TARGET, "could not fetch README of '{id}': {e:#}");
                None
            }
        };

        Ok(build_context(&info, tree.as_deref(), readme.as_deref()))
    }
}
