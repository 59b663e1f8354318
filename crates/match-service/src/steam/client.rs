//! Steam Web API client.

use super::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

const MATCH_HISTORY: &str = "/IDOTA2Match_570/GetMatchHistory/v1";
const MATCH_DETAILS: &str = "/IDOTA2Match_570/GetMatchDetails/v1";
const ALL_HEROES: &str = "/IEconDOTA2_570/GetHeroes/v1";

#[derive(Error, Debug)]
pub enum SteamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Steam API error: {0}")]
    Api(String),
}

/// Client for the Dota 2 endpoints of the Steam Web API.
///
/// The API key is kept in a `SecretString` so it stays out of debug output.
#[derive(Clone)]
pub struct SteamClient {
    client: Client,
    base_url: String,
    key: SecretString,
}

impl SteamClient {
    pub fn new(
        base_url: impl Into<String>,
        key: SecretString,
        timeout: Duration,
    ) -> Result<Self, SteamError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key,
        })
    }

    /// Most recent matches of a player, newest first.
    #[instrument(skip(self))]
    pub async fn match_history(
        &self,
        account_id: u32,
        matches_requested: u32,
    ) -> Result<Vec<MatchSummary>, SteamError> {
        let envelope: HistoryEnvelope = self
            .get(
                MATCH_HISTORY,
                &[
                    ("account_id", account_id.to_string()),
                    ("matches_requested", matches_requested.to_string()),
                ],
            )
            .await?;

        let history = envelope.result;
        if history.status != HISTORY_STATUS_OK {
            return Err(SteamError::Api(history.status_detail.unwrap_or_else(|| {
                format!("match history status {}", history.status)
            })));
        }

        Ok(history.matches)
    }

    #[instrument(skip(self))]
    pub async fn match_details(&self, match_id: u64) -> Result<MatchDetails, SteamError> {
        let envelope: DetailsEnvelope = self
            .get(MATCH_DETAILS, &[("match_id", match_id.to_string())])
            .await?;

        Ok(envelope.result)
    }

    #[instrument(skip(self))]
    pub async fn heroes(&self) -> Result<Vec<Hero>, SteamError> {
        let envelope: HeroesEnvelope = self.get(ALL_HEROES, &[]).await?;
        Ok(envelope.result.heroes)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, SteamError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .query(&[("key", self.key.expose_secret().as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SteamError::Api(format!("{} - {}", status.as_u16(), body)));
        }

        debug!("Response body: {}", body.chars().take(200).collect::<String>());
        Ok(serde_json::from_str(&body)?)
    }
}
