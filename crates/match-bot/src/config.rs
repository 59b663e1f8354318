//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// WeChat gateway configuration
    #[serde(default)]
    pub wechat: WechatConfig,

    /// Match record service configuration
    #[serde(default)]
    pub matches: MatchesConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WechatConfig {
    /// Gateway HTTP endpoint
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// Bearer token for the gateway, if it requires one
    #[serde(default)]
    pub token: Option<String>,

    /// Session name passed to the gateway on start
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Use the UOS protocol (required for WeChat web login)
    #[serde(default = "default_true")]
    pub uos: bool,

    /// Poll interval for events
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchesConfig {
    /// Base URL of the service serving `/match/latest`
    #[serde(default = "default_matches_url")]
    pub base_url: String,

    /// Request timeout; unset means no client-side timeout
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for WechatConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            token: None,
            name: default_bot_name(),
            uos: default_true(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl Default for MatchesConfig {
    fn default() -> Self {
        Self {
            base_url: default_matches_url(),
            timeout: None,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_gateway_url() -> String {
    "http://127.0.0.1:8788".into()
}

fn default_bot_name() -> String {
    "bot".into()
}

fn default_true() -> bool {
    true
}

fn default_poll_interval() -> Duration {
    Duration::from_millis(200)
}

pub fn default_matches_url() -> String {
    "http://127.0.0.1:3000".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Account-style ids must stay strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
