//! Hugging Face Hub API client
//!
//! Minimal client for the three Hub endpoints needed to describe a model.

use super::model_info::{ModelInfo, TreeEntry};
use core::time::Duration;
use layered::{Execute, Service, Stack};
use ohno::app_err;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER};
use seatbelt::retry::{Backoff, Retry};
use seatbelt::timeout::Timeout;
use seatbelt::{RecoveryInfo, ResilienceContext};
use serde::de::DeserializeOwned;
use tick::Clock;

const LOG_TARGET: &str = "       hub";

/// Public Hub endpoint
pub const DEFAULT_BASE_URL: &str = "https://huggingface.co";

/// Timeout for each individual attempt
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest `Retry-After` hint that is honored
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// How transient failures are retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries on top of the original request
    pub max_retries: u32,

    /// Delay before the first retry, growing exponentially after each attempt
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Result of a Hub API call
#[derive(Debug)]
pub enum HubApiResult<T> {
    Success(T),

    /// The requested resource does not exist (404)
    NotFound,

    /// Request failed permanently, or transiently more times than the retry policy allows
    Failed(ohno::AppError),
}

/// Hub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl Client {
    /// Create a client with an optional access token.
    ///
    /// # Errors
    ///
    /// Fails if the token is not a valid header value or the HTTP client cannot be built.
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> crate::Result<Self> {
        let mut client_builder = reqwest::Client::builder().user_agent(concat!("model-rank/", env!("CARGO_PKG_VERSION")));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            client_builder = client_builder.default_headers(headers);
        }

        Ok(Self {
            client: client_builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        })
    }

    #[must_use]
    pub const fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/models/{id}`
    pub async fn model_info(&self, id: &str) -> HubApiResult<ModelInfo> {
        self.get_json(&format!("{}/api/models/{id}", self.base_url)).await
    }

    /// `GET /api/models/{id}/tree/main`
    pub async fn model_tree(&self, id: &str) -> HubApiResult<Vec<TreeEntry>> {
        self.get_json(&format!("{}/api/models/{id}/tree/main", self.base_url)).await
    }

    /// `GET /{id}/raw/main/README.md`
    pub async fn readme(&self, id: &str) -> HubApiResult<String> {
        let url = format!("{}/{id}/raw/main/README.md", self.base_url);
        match self.api_call(&url).await {
            HubApiResult::Success(resp) => match resp.text().await {
                Ok(text) => HubApiResult::Success(text),
                Err(e) => HubApiResult::Failed(app_err!("reading README from {url}: {e}")),
            },
            HubApiResult::NotFound => HubApiResult::NotFound,
            HubApiResult::Failed(e) => HubApiResult::Failed(e),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> HubApiResult<T> {
        match self.api_call(url).await {
            HubApiResult::Success(resp) => match resp.json::<T>().await {
                Ok(value) => HubApiResult::Success(value),
                Err(e) => HubApiResult::Failed(app_err!("decoding response from {url}: {e}")),
            },
            HubApiResult::NotFound => HubApiResult::NotFound,
            HubApiResult::Failed(e) => HubApiResult::Failed(e),
        }
    }

    /// Make an API call and classify the result
    pub async fn api_call(&self, url: &str) -> HubApiResult<reqwest::Response> {
        let resp = match self.resilient_get(url).await {
            Ok(r) => r,
            Err(e) => return HubApiResult::Failed(e),
        };

        let status = resp.status();
        if status.is_success() {
            return HubApiResult::Success(resp);
        }

        if status == StatusCode::NOT_FOUND {
            return HubApiResult::NotFound;
        }

        HubApiResult::Failed(app_err!("HTTP {status} from {url}"))
    }

    /// Send a GET request, retrying network errors, 5xx and 429 responses with exponential backoff.
    ///
    /// Once retries are exhausted the last response (or error) is returned as is.
    async fn resilient_get(&self, url: &str) -> crate::Result<reqwest::Response> {
        let clock = Clock::new_tokio();
        let context = ResilienceContext::new(&clock).name("hub_get");

        let client = self.client.clone();
        let service = (
            Retry::layer("retry", &context)
                .clone_input()
                .recovery_with(|result: &crate::Result<reqwest::Response>, _| should_retry_response(result))
                .max_retry_attempts(self.retry.max_retries)
                .base_delay(self.retry.base_delay)
                .backoff(Backoff::Exponential)
                .on_retry(|_output, args| {
                    log::debug!(
                        target: LOG_TARGET,
                        "retrying Hub request (attempt {}, delay {}ms)",
                        args.attempt().index() + 1,
                        args.retry_delay().as_millis(),
                    );
                }),
            Timeout::layer("timeout", &context)
                .timeout_error(|_| app_err!("Hub request timed out"))
                .timeout(REQUEST_TIMEOUT),
            Execute::new(move |url: String| {
                let client = client.clone();
                async move { client.get(&url).send().await.map_err(ohno::AppError::from) }
            }),
        )
            .into_service();

        service.execute(url.to_string()).await
    }
}

/// Classify a Hub response for retry purposes.
fn should_retry_response(result: &crate::Result<reqwest::Response>) -> RecoveryInfo {
    match result {
        Err(_) => RecoveryInfo::retry(),
        Ok(resp) if resp.status().is_server_error() => RecoveryInfo::retry(),
        Ok(resp) if resp.status() == StatusCode::TOO_MANY_REQUESTS => parse_retry_after(resp.headers())
            .map_or_else(RecoveryInfo::retry, |delay| RecoveryInfo::retry().delay(delay.min(MAX_RETRY_DELAY))),

        // success and client errors are final
        Ok(_) => RecoveryInfo::never(),
    }
}

/// Parse the `Retry-After` header value as seconds.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let s = headers.get(RETRY_AFTER).and_then(|h| h.to_str().ok())?;
    s.trim().parse::<u64>().ok().map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), None);

        let _ = headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(7)));

        let _ = headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = Client::new(None, "https://huggingface.co/").unwrap();
        assert_eq!(client.base_url(), "https://huggingface.co");
    }

    #[test]
    fn test_token_must_be_a_valid_header() {
        assert!(Client::new(Some("bad\ntoken"), DEFAULT_BASE_URL).is_err());
        let _ = Client::new(Some("hf_abc123"), DEFAULT_BASE_URL).unwrap();
    }

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.base_delay, Duration::from_secs(1));
    }
}
