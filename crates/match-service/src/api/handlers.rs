//! HTTP request handlers.

use super::types::{HealthResponse, LatestMatchQuery};
use super::AppState;
use crate::error::ServiceError;
use crate::performance::PlayerPerformance;
use crate::steam::Hero;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Player performance in their latest match.
///
/// Request example: `GET /match/latest?account_id=417817047`
pub async fn latest_match(
    State(state): State<AppState>,
    Query(query): Query<LatestMatchQuery>,
) -> Result<Json<PlayerPerformance>, ServiceError> {
    let raw = query.account_id.ok_or(ServiceError::MissingAccountId)?;
    let account_id: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::InvalidAccountId(raw.clone()))?;

    let latest = state
        .steam
        .match_history(account_id, 1)
        .await?
        .into_iter()
        .next()
        .ok_or(ServiceError::NoMatches(account_id))?;

    info!(account_id, match_id = latest.match_id, "Latest match found");

    let details = state.steam.match_details(latest.match_id).await?;

    PlayerPerformance::from_details(&details, account_id)
        .map(Json)
        .ok_or(ServiceError::PlayerNotInMatch {
            account_id,
            match_id: latest.match_id,
        })
}

/// All heroes with their internal names.
pub async fn heroes(State(state): State<AppState>) -> Result<Json<Vec<Hero>>, ServiceError> {
    Ok(Json(state.steam.heroes().await?))
}
