//! Error types for the match service.

use crate::steam::SteamError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Missing account_id query parameter")]
    MissingAccountId,

    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),

    #[error("No matches found for account {0}")]
    NoMatches(u32),

    #[error("Account {account_id} not found in match {match_id}")]
    PlayerNotInMatch { account_id: u32, match_id: u64 },

    #[error("Steam API error: {0}")]
    Steam(#[from] SteamError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServiceError::MissingAccountId => (StatusCode::BAD_REQUEST, "MISSING_ACCOUNT_ID"),
            ServiceError::InvalidAccountId(_) => (StatusCode::BAD_REQUEST, "INVALID_ACCOUNT_ID"),
            ServiceError::NoMatches(_) => (StatusCode::NOT_FOUND, "NO_MATCHES"),
            ServiceError::PlayerNotInMatch { .. } => (StatusCode::NOT_FOUND, "PLAYER_NOT_IN_MATCH"),
            ServiceError::Steam(_) => (StatusCode::BAD_GATEWAY, "STEAM_API_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
