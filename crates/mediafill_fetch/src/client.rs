//! Placeholder service client.

use async_trait::async_trait;
use mediafill_error::{HttpError, HttpErrorKind, MediafillResult};
use mediafill_interface::ImageFetcher;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Placeholder image service client.
///
/// Holds one `reqwest::Client`, so connections are pooled across records and
/// the client can be shared between concurrent fills.
#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    client: Client,
}

impl PlaceholderClient {
    /// Creates a new client with the given per-request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(timeout_secs = timeout.as_secs()))]
    pub fn new(timeout: Duration, user_agent: &str) -> MediafillResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| HttpError::new(HttpErrorKind::ClientBuild(e.to_string())))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for PlaceholderClient {
    #[instrument(skip(self))]
    async fn fetch_bytes(&self, url: &str, suggested_name: &str) -> MediafillResult<Option<Vec<u8>>> {
        debug!("Requesting placeholder");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                HttpError::new(HttpErrorKind::Request {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Placeholder service returned an error status");
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                HttpError::new(HttpErrorKind::Body {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            })?;

        if body.is_empty() {
            debug!("Placeholder service returned an empty body");
            return Ok(None);
        }

        debug!(size = body.len(), "Fetched placeholder");
        Ok(Some(body.to_vec()))
    }
}
