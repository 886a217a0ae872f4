//! HTTP implementation of the review service contract.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::ReviewApi;
use crate::model::{MessageId, UnverifiedItem, UnverifiedMessage};
use crate::{Error, Result};

/// Body of a ratify call.
#[derive(Debug, Serialize)]
struct RatifyBody<'a> {
    merchant_id: &'a str,
}

/// JSON-over-HTTP client for the review service.
///
/// - `GET  {base}/messages/unverified`
/// - `POST {base}/messages/{id}/ratify` with `{"merchant_id": "<label>"}`
///
/// No client-side timeout and no retries: a failure is whatever the
/// transport reports.
#[derive(Debug, Clone)]
pub struct HttpReviewApi {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpReviewApi {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the URL is not an absolute http(s) URL and
    /// `Error::Http` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid API URL '{base_url}': {e}")))?;

        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "API URL must be an http(s) URL, got '{base_url}'"
            )));
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Base URL requests are built from.
    #[must_use]
    pub const fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Map non-success statuses to `Error::Status`.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ReviewApi for HttpReviewApi {
    async fn fetch_unverified_queue(&self) -> Result<Vec<UnverifiedItem>> {
        let url = self.endpoint(&["messages", "unverified"]);
        debug!(%url, "Fetching unverified queue");

        let response = self.client.get(url).send().await?;
        let response = Self::check_response(response).await?;
        let messages: Vec<UnverifiedMessage> = response.json().await?;

        Ok(messages.into_iter().map(UnverifiedItem::from).collect())
    }

    async fn confirm_label(&self, id: &MessageId, label: &str) -> Result<()> {
        let url = self.endpoint(&["messages", id.as_str(), "ratify"]);
        debug!(%url, "Sending confirmation");

        let response = self
            .client
            .post(url)
            .json(&RatifyBody {
                merchant_id: label,
            })
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }
}
