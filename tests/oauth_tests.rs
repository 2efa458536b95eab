// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth flow tests.
//!
//! These tests verify that:
//! 1. The authorize URL carries the code-grant parameters, percent-encoded
//! 2. The token exchange posts the form fields and decodes the response
//! 3. A saved token file round-trips

use wahoo_exporter::config::Config;
use wahoo_exporter::error::AppError;
use wahoo_exporter::services::oauth::{authorize_url, exchange_code, TokenResponse};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_authorize_url_carries_code_grant_params() {
    let config = Config::test_default();
    let url = authorize_url(&config, None);

    assert!(url.starts_with("https://api.wahooligan.com/oauth/authorize?"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=test_client_id"));
    assert!(url.contains("scope=user_read"));
    // Redirect URI is percent-encoded.
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcallback"));
    assert!(!url.contains("state="));
}

#[test]
fn test_authorize_url_includes_state_when_given() {
    let config = Config::test_default();
    let url = authorize_url(&config, Some("abc 123"));

    assert!(url.contains("state=abc%20123"));
}

#[tokio::test]
async fn test_exchange_code_posts_form_and_decodes_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("client_id=test_client_id"))
        .and(body_string_contains("client_secret=test_secret"))
        .and(body_string_contains("code=the-auth-code"))
        .and(body_string_contains("redirect_uri="))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "new-access-token",
            "token_type": "bearer",
            "expires_in": 7200,
            "refresh_token": "new-refresh-token",
            "scope": "user_read"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        auth_base_url: server.uri(),
        ..Config::test_default()
    };

    let token = exchange_code(&config, "the-auth-code").await.unwrap();

    assert_eq!(token.access_token, "new-access-token");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.expires_in, 7200);
    assert_eq!(token.refresh_token, "new-refresh-token");
    assert_eq!(token.scope, "user_read");
}

#[tokio::test]
async fn test_exchange_code_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("{\"error\":\"invalid_grant\"}"),
        )
        .mount(&server)
        .await;

    let config = Config {
        auth_base_url: server.uri(),
        ..Config::test_default()
    };

    let err = exchange_code(&config, "stale-code").await.unwrap_err();

    match err {
        AppError::Api { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn test_token_save_load_round_trip() {
    let token = TokenResponse {
        access_token: "tok".to_string(),
        token_type: "bearer".to_string(),
        expires_in: 7200,
        refresh_token: "refresh".to_string(),
        scope: "user_read".to_string(),
    };

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("wahoo_token.json");

    token.save(&target).unwrap();
    let reloaded = TokenResponse::load(&target).unwrap();

    assert_eq!(reloaded.access_token, "tok");
    assert_eq!(reloaded.token_type, "bearer");
    assert_eq!(reloaded.expires_in, 7200);
    assert_eq!(reloaded.refresh_token, "refresh");
    assert_eq!(reloaded.scope, "user_read");
}
