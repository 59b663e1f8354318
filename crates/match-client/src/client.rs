//! Match record HTTP client.

use crate::error::MatchError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Route serving a player's most recent match.
const LATEST_MATCH_PATH: &str = "/match/latest";

/// Client for the match record service.
///
/// Response bodies are returned untouched; callers forward them verbatim.
#[derive(Clone)]
pub struct MatchClient {
    client: Client,
    base_url: String,
}

impl MatchClient {
    /// Create a new match client. Without a timeout the request waits as
    /// long as the connection stays open.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, MatchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the latest match record for a player.
    ///
    /// `None` sends the request with no `account_id` parameter at all.
    #[instrument(skip(self))]
    pub async fn latest_match(&self, account_id: Option<&str>) -> Result<String, MatchError> {
        let mut request = self
            .client
            .get(format!("{}{}", self.base_url, LATEST_MATCH_PATH));
        if let Some(account_id) = account_id {
            request = request.query(&[("account_id", account_id)]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Match query failed with status {}", status);
            return Err(MatchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        debug!("Response body: {}", body.chars().take(200).collect::<String>());
        Ok(body)
    }

    /// Health check - returns true if the service answers `/health`.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}
