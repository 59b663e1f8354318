//! WeChat gateway HTTP client.

use crate::error::WechatError;
use crate::types::*;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the HTTP gateway that owns the WeChat session.
#[derive(Clone)]
pub struct WechatClient {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl WechatClient {
    /// Create a new gateway client.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, WechatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.map(SecretString::new),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// Check if the gateway is reachable.
    pub async fn health_check(&self) -> bool {
        self.authorized(self.client.get(format!("{}/v1/health", self.base_url)))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Ask the gateway to start its login lifecycle.
    #[instrument(skip(self))]
    pub async fn start(&self, options: &StartOptions) -> Result<(), WechatError> {
        let response = self
            .authorized(self.client.post(format!("{}/v1/start", self.base_url)))
            .json(options)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(WechatError::Api(msg));
        }

        Ok(())
    }

    /// Fetch pending events.
    #[instrument(skip(self))]
    pub async fn events(&self) -> Result<Vec<ChatEvent>, WechatError> {
        let response = self
            .authorized(self.client.get(format!("{}/v1/events", self.base_url)))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(WechatError::Api(msg));
        }

        // Decode entries one by one so an event this client does not know
        // about cannot take the rest of the batch down with it.
        let body = response.text().await?;
        let batch: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        let received = batch.len();

        let events: Vec<ChatEvent> = batch
            .into_iter()
            .filter_map(|raw| {
                let kind = raw
                    .get("type")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("<untyped>")
                    .to_string();
                serde_json::from_value(raw)
                    .map_err(|e| warn!("Skipping '{}' event: {}", kind, e))
                    .ok()
            })
            .collect();

        debug!("Received {} events ({} skipped)", events.len(), received - events.len());
        Ok(events)
    }

    /// Send a text message to a conversation.
    #[instrument(skip(self, text))]
    pub async fn say(&self, conversation_id: &str, text: &str) -> Result<(), WechatError> {
        let request = SayRequest {
            conversation_id: conversation_id.to_string(),
            text: text.to_string(),
        };

        let response = self
            .authorized(self.client.post(format!("{}/v1/say", self.base_url)))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(WechatError::SendFailed(msg));
        }

        debug!("Sent message to {}", conversation_id);
        Ok(())
    }

    /// Reply to a message (room messages go back to the room).
    pub async fn reply(&self, original: &IncomingMessage, text: &str) -> Result<(), WechatError> {
        self.say(original.reply_target(), text).await
    }
}
