//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("WeChat error: {0}")]
    Wechat(#[from] wechat_client::WechatError),

    #[error("Match query error: {0}")]
    Match(#[from] match_client::MatchError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
