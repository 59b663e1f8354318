//! API request and response types.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Query string of `GET /match/latest`.
#[derive(Debug, Deserialize)]
pub struct LatestMatchQuery {
    pub account_id: Option<String>,
}
