/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for `POST /token`.


use std::collections::HashMap;

use axum::http::StatusCode;
use scene_token_api::config::DeploymentEnvironment;
use scene_token_types::{APIError, TokenResponse, VideoGrant};
use test_helpers::*;
use tower::ServiceExt;

#[tokio::test]
async fn test_issue_token_echoes_names() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request("/token", r#"{"scene_name":"room1","participant_name":"alice"}"#);

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenResponse = response_json(resp).await;
    assert_eq!(body.server_url, TEST_SERVER_URL);
    assert_eq!(body.scene_name, "room1");
    assert_eq!(body.participant_name, "alice");
    assert!(!body.participant_token.is_empty());
}

#[tokio::test]
async fn test_issued_token_grants_requested_scene() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request(
        "/token",
        r#"{"scene_name":"Standup Room","participant_name":"Bob Smith"}"#,
    );

    let resp = app.oneshot(req).await.unwrap();
    let body: TokenResponse = response_json(resp).await;
    let claims = decode_token(&body.participant_token);

    assert_eq!(claims.iss, TEST_API_KEY);
    assert_eq!(claims.sub, "Bob Smith");
    assert_eq!(claims.video, VideoGrant::join("Standup Room"));
    assert_eq!(claims.exp - claims.nbf, 600);
    assert_eq!(claims.metadata, None);
    assert_eq!(claims.participant_attributes, None);
}

#[tokio::test]
async fn test_metadata_and_attributes_are_embedded() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request(
        "/token",
        r#"{
            "scene_name": "room1",
            "participant_name": "alice",
            "metadata": "{\"seat\":3}",
            "participant_attributes": {"role": "speaker", "lang": "en"}
        }"#,
    );

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenResponse = response_json(resp).await;
    let claims = decode_token(&body.participant_token);

    assert_eq!(claims.metadata.as_deref(), Some(r#"{"seat":3}"#));
    let expected = HashMap::from([
        ("role".to_string(), "speaker".to_string()),
        ("lang".to_string(), "en".to_string()),
    ]);
    assert_eq!(claims.participant_attributes, Some(expected));
}

#[tokio::test]
async fn test_empty_participant_name_is_rejected() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request(
        "/token",
        r#"{"scene_name":"room1","participant_name":"","metadata":"m"}"#,
    );

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: APIError = response_json(resp).await;
    assert_eq!(body.code, "INVALID_REQUEST");
    assert_eq!(body.message, "participant_name is required");
}

#[tokio::test]
async fn test_missing_participant_name_is_rejected() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request("/token", r#"{"scene_name":"room1"}"#);

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: APIError = response_json(resp).await;
    assert_eq!(body.code, "INVALID_REQUEST");
}

#[tokio::test]
async fn test_empty_scene_name_is_accepted() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request("/token", r#"{"scene_name":"","participant_name":"alice"}"#);

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenResponse = response_json(resp).await;
    assert_eq!(body.scene_name, "");
}

#[tokio::test]
async fn test_missing_scene_name_is_malformed() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request("/token", r#"{"participant_name":"alice"}"#);

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: APIError = response_json(resp).await;
    assert_eq!(body.code, "MALFORMED_BODY");
}

#[tokio::test]
async fn test_invalid_json_is_malformed() {
    let app = build_app(DeploymentEnvironment::Dev);
    let req = json_request("/token", "{not json");

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: APIError = response_json(resp).await;
    assert_eq!(body.code, "MALFORMED_BODY");
}

#[tokio::test]
async fn test_legacy_path_issues_token() {
    let app = build_app(DeploymentEnvironment::Prod);
    let req = json_request(
        "/lk-token",
        r#"{"scene_name":"room1","participant_name":"alice"}"#,
    );

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenResponse = response_json(resp).await;
    assert_eq!(decode_token(&body.participant_token).sub, "alice");
}
