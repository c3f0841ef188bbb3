// ABOUTME: Integration tests exercising the full compile-dispatch-decode pipeline
// ABOUTME: A mock HTTP server stands in for the API; no network access is needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wom_client::models::EditGroupRequest;
use wom_client::{Client, ClientConfig, WomError};

/// Build a client pointed at the mock server.
fn test_client(server: &MockServer) -> Client {
    Client::with_config(ClientConfig {
        api_key: None,
        user_agent: Some("wom-client tests".to_string()),
        base_url: Some(server.uri()),
    })
}

/// A minimal but complete player payload.
fn player_json(id: i32, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "displayName": username,
        "type": "regular",
        "build": "main",
        "country": null,
        "flagged": false,
        "exp": 300_000_000_i64,
        "ehp": 900.5,
        "ehb": 250.0,
        "ttm": 150.0,
        "tt200m": 12000.0,
        "registeredAt": "2020-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-15T10:00:00.000Z",
        "lastChangedAt": "2024-01-15T10:00:00.000Z",
        "lastImportedAt": null
    })
}

#[tokio::test]
async fn test_get_player_details_decodes_typed_model() {
    let mock_server = MockServer::start().await;

    let mut body = player_json(42, "zezima");
    body["combatLevel"] = json!(126);
    body["latestSnapshot"] = json!(null);

    Mock::given(method("GET"))
        .and(path("/players/zezima"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let detail = client.players().get_player_details("zezima").await.unwrap();

    assert_eq!(detail.player.id, 42);
    assert_eq!(detail.player.username, "zezima");
    assert_eq!(detail.combat_level, 126);
    assert!(detail.latest_snapshot.is_none());
}

#[tokio::test]
async fn test_user_agent_and_api_key_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/names"))
        .and(header("x-user-agent", "my-discord-bot"))
        .and(header("x-api-key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_config(ClientConfig {
        api_key: Some("secret-key".to_string()),
        user_agent: Some("my-discord-bot".to_string()),
        base_url: Some(mock_server.uri()),
    });

    let changes = client
        .name_changes()
        .search_name_changes(None, None, None, None)
        .await
        .unwrap();
    assert!(changes.is_empty());
}

#[tokio::test]
async fn test_zero_filter_search_sends_no_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/names"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .name_changes()
        .search_name_changes(None, None, None, None)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_search_sends_filters_as_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/search"))
        .and(query_param("username", "zez"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([player_json(1, "zezima")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let players = client
        .players()
        .search_players("zez", Some(5), None)
        .await
        .unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].username, "zezima");
}

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/nobody"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Player not found." })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .players()
        .get_player_details("nobody")
        .await
        .unwrap_err();

    match err {
        WomError::Api(response) => {
            assert_eq!(response.status_code, 404);
            assert_eq!(response.message, "Player not found.");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_message_uses_generic_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/zezima"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .players()
        .get_player_details("zezima")
        .await
        .unwrap_err();

    match err {
        WomError::Api(response) => {
            assert_eq!(response.status_code, 500);
            assert_eq!(
                response.message,
                "An unexpected error occurred while making the request."
            );
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_maps_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/zezima"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .players()
        .get_player_details("zezima")
        .await
        .unwrap_err();

    assert!(matches!(err, WomError::Decode { .. }));
}

#[tokio::test]
async fn test_group_mutation_sends_verification_code_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/groups/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Successfully deleted group." })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let ack = client.groups().delete_group(7, "744-222-919").await.unwrap();
    assert_eq!(ack.message, "Successfully deleted group.");

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["verificationCode"], json!("744-222-919"));
}

#[tokio::test]
async fn test_edit_group_merges_code_and_changed_fields_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/groups/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "name": "Renamed Clan",
            "clanChat": "rc chat",
            "description": null,
            "homeworld": null,
            "verified": false,
            "score": 10,
            "createdAt": "2021-06-01T00:00:00.000Z",
            "updatedAt": "2024-01-15T10:00:00.000Z",
            "memberCount": 0,
            "memberships": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = EditGroupRequest {
        name: Some("Renamed Clan".to_string()),
        ..EditGroupRequest::default()
    };
    let detail = client
        .groups()
        .edit_group(4, "744-222-919", &request)
        .await
        .unwrap();
    assert_eq!(detail.group.name, "Renamed Clan");

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["verificationCode"], json!("744-222-919"));
    assert_eq!(body["name"], json!("Renamed Clan"));
    assert!(body.get("clanChat").is_none());
}

#[tokio::test]
async fn test_update_player_posts_and_decodes() {
    let mock_server = MockServer::start().await;

    let mut body = player_json(9, "lynx_titan");
    body["combatLevel"] = json!(126);

    Mock::given(method("POST"))
        .and(path("/players/lynx_titan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let detail = client.players().update_player("lynx_titan").await.unwrap();
    assert_eq!(detail.player.id, 9);
}

#[tokio::test]
async fn test_rate_limit_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/zezima"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "message": "Too many requests, please slow down."
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .players()
        .get_player_details("zezima")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(429));
}

#[tokio::test]
async fn test_efficiency_combined_metric_wire_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efficiency/leaderboard"))
        .and(query_param("metric", "ehp+ehb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let leaders = client
        .efficiency()
        .get_combined_efficiency_leaderboards(None, None, None)
        .await
        .unwrap();
    assert!(leaders.is_empty());
}
