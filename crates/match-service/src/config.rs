//! Configuration for the match service.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;

/// Optional config file, without extension.
const CONFIG_FILE: &str = "config/app";

/// Service configuration.
///
/// The Steam key is read from `steam.api_key`, or from a top-level `api` key
/// as older `config/app.toml` files have it. `steam.api_key` wins when both
/// are set.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    /// Steam Web API configuration
    pub steam: SteamConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct SteamConfig {
    /// Steam Web API key
    pub api_key: SecretString,

    /// API base URL
    pub base_url: String,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

/// Config as written, before the key fallback is resolved.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    steam: RawSteamConfig,

    /// Legacy location of the Steam key.
    #[serde(default)]
    api: Option<SecretString>,

    #[serde(default)]
    server: ServerConfig,

    #[serde(default)]
    log: LogConfig,
}

#[derive(Deserialize)]
struct RawSteamConfig {
    #[serde(default)]
    api_key: Option<SecretString>,

    #[serde(default = "default_steam_url")]
    base_url: String,

    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for RawSteamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_steam_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        let api_key = raw
            .steam
            .api_key
            .or(raw.api)
            .ok_or_else(|| "missing Steam API key: set steam.api_key (or api)".to_string())?;

        Ok(Self {
            steam: SteamConfig {
                api_key,
                base_url: raw.steam.base_url,
                timeout_secs: raw.steam.timeout_secs,
            },
            server: raw.server,
            log: raw.log,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files. Stdout only when unset.
    #[serde(default)]
    pub path: Option<String>,

    /// File name prefix; the date is appended on each rotation.
    #[serde(default = "default_log_prefix")]
    pub prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            path: None,
            prefix: default_log_prefix(),
        }
    }
}

fn default_steam_url() -> String {
    "https://api.steampowered.com".into()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_listen_addr() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_prefix() -> String {
    "match-service.log".into()
}

impl Config {
    /// Load configuration from `config/app.toml` (if present), then
    /// environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
