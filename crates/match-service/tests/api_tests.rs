//! Integration tests for the match service API.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use match_service::{
    api::{create_router, AppState},
    SteamClient,
};
use secrecy::SecretString;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_ID: &str = "417817047";
const MATCH_ID: u64 = 7124687646;

/// Create an app whose Steam calls go to the mock server.
fn create_test_app(steam_server: &MockServer) -> Router {
    let steam = SteamClient::new(
        steam_server.uri(),
        SecretString::new("test-key".into()),
        Duration::from_secs(5),
    )
    .unwrap();
    create_router(AppState::new(steam))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn mount_history(steam_server: &MockServer, matches: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/IDOTA2Match_570/GetMatchHistory/v1"))
        .and(query_param("key", "test-key"))
        .and(query_param("account_id", ACCOUNT_ID))
        .and(query_param("matches_requested", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "status": 1, "num_results": 1, "matches": matches }
        })))
        .mount(steam_server)
        .await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let steam_server = MockServer::start().await;
    let (status, json) = get(create_test_app(&steam_server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_latest_match() {
    let steam_server = MockServer::start().await;

    mount_history(
        &steam_server,
        serde_json::json!([{ "match_id": MATCH_ID, "start_time": 1680000000 }]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/IDOTA2Match_570/GetMatchDetails/v1"))
        .and(query_param("match_id", MATCH_ID.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "match_id": MATCH_ID,
                "radiant_win": false,
                "start_time": 1680000000,
                "game_mode": 22,
                "radiant_score": 20,
                "dire_score": 35,
                "players": [
                    { "account_id": 4294967295u32, "player_slot": 0, "hero_id": 1 },
                    {
                        "account_id": 417817047,
                        "player_slot": 130,
                        "hero_id": 74,
                        "item_0": 108, "item_1": 1, "item_2": 0,
                        "item_3": 50, "item_4": 0, "item_5": 116,
                        "kills": 12, "deaths": 3, "assists": 9,
                        "last_hits": 310, "denies": 14,
                        "gold_per_min": 640, "xp_per_min": 710,
                        "hero_damage": 30112, "tower_damage": 4100,
                        "hero_healing": 0, "level": 25
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&steam_server)
        .await;

    let (status, json) = get(
        create_test_app(&steam_server),
        "/match/latest?account_id=417817047",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["match_id"], MATCH_ID);
    assert_eq!(json["account_id"], ACCOUNT_ID);
    assert_eq!(json["hero_id"], 74);
    assert_eq!(json["item_list"], serde_json::json!([108, 1, 0, 50, 0, 116]));
    assert_eq!(json["kills"], 12);
    assert_eq!(json["gpm"], 640);
    assert_eq!(json["radiant"], false);
    assert_eq!(json["win"], true);
    assert_eq!(json["dire_score"], 35);
}

#[tokio::test]
async fn test_missing_account_id() {
    let steam_server = MockServer::start().await;
    let (status, json) = get(create_test_app(&steam_server), "/match/latest").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_ACCOUNT_ID");
}

#[tokio::test]
async fn test_invalid_account_id() {
    let steam_server = MockServer::start().await;
    let (status, json) = get(
        create_test_app(&steam_server),
        "/match/latest?account_id=abc",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ACCOUNT_ID");
}

#[tokio::test]
async fn test_no_matches() {
    let steam_server = MockServer::start().await;
    mount_history(&steam_server, serde_json::json!([])).await;

    let (status, json) = get(
        create_test_app(&steam_server),
        "/match/latest?account_id=417817047",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NO_MATCHES");
}

#[tokio::test]
async fn test_private_history_is_bad_gateway() {
    let steam_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/IDOTA2Match_570/GetMatchHistory/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "status": 15,
                "statusDetail": "Cannot get match history for a user that hasn't allowed it"
            }
        })))
        .mount(&steam_server)
        .await;

    let (status, json) = get(
        create_test_app(&steam_server),
        "/match/latest?account_id=417817047",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "STEAM_API_ERROR");
    assert!(json["error"].as_str().unwrap().contains("hasn't allowed it"));
}

#[tokio::test]
async fn test_heroes() {
    let steam_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/IEconDOTA2_570/GetHeroes/v1"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "heroes": [
                    { "id": 1, "name": "npc_dota_hero_antimage" },
                    { "id": 74, "name": "npc_dota_hero_invoker" }
                ],
                "status": 200,
                "count": 2
            }
        })))
        .mount(&steam_server)
        .await;

    let (status, json) = get(create_test_app(&steam_server), "/heroes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[1]["id"], 74);
    assert_eq!(json[1]["name"], "npc_dota_hero_invoker");
}

#[tokio::test]
async fn test_steam_unavailable() {
    let steam_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&steam_server)
        .await;

    let (status, json) = get(create_test_app(&steam_server), "/heroes").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "STEAM_API_ERROR");
}

#[tokio::test]
async fn test_player_missing_from_match_details() {
    let steam_server = MockServer::start().await;

    mount_history(
        &steam_server,
        serde_json::json!([{ "match_id": MATCH_ID, "start_time": 1680000000 }]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/IDOTA2Match_570/GetMatchDetails/v1"))
        .and(query_param("match_id", MATCH_ID.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "match_id": MATCH_ID,
                "radiant_win": true,
                "start_time": 1680000000,
                "players": [
                    { "account_id": 4294967295u32, "player_slot": 0, "hero_id": 1 },
                    { "account_id": 12345, "player_slot": 128, "hero_id": 2 }
                ]
            }
        })))
        .expect(1)
        .mount(&steam_server)
        .await;

    let (status, json) = get(
        create_test_app(&steam_server),
        "/match/latest?account_id=417817047",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "PLAYER_NOT_IN_MATCH");
    assert!(json["error"].as_str().unwrap().contains(&MATCH_ID.to_string()));
}
