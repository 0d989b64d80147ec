mod gateway_support;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use shadewalk::auth::{
    CredentialStore, FileCredentialStore, LoginRequest, MemoryCredentialStore, SignupRequest,
};
use shadewalk::error::ApiError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gateway_support::{client, requests_to, store_with, stored_token, Session, REISSUE_PATH};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "walker@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

#[tokio::test]
async fn login_stores_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "walker@example.com", "password": "hunter2" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "access_token=a1; Path=/; HttpOnly")
                .set_body_json(json!({ "refresh_token": "refresh-1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let client = client(&server, store.clone());
    let auth = client.auth();
    assert!(!auth.is_logged_in().expect("status"));

    let tokens = auth.login(&login_request()).await.expect("login");

    assert_eq!(tokens.refresh_token, "refresh-1");
    assert_eq!(stored_token(&store).as_deref(), Some("refresh-1"));
    assert!(auth.is_logged_in().expect("status"));
}

#[tokio::test]
async fn wrong_password_is_unauthenticated_without_refresh() {
    let server = MockServer::start().await;
    Mock::given(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid credentials" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path(REISSUE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = store_with("refresh-old");
    let client = client(&server, store.clone());
    let err = client
        .auth()
        .login(&login_request())
        .await
        .expect_err("bad password");

    assert!(err.requires_login());
    assert_eq!(stored_token(&store).as_deref(), Some("refresh-old"));
}

#[tokio::test]
async fn login_rejects_malformed_email_before_sending() {
    let server = MockServer::start().await;
    let client = client(&server, Arc::new(MemoryCredentialStore::new()));

    let err = client
        .auth()
        .login(&LoginRequest {
            email: "walker".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .expect_err("invalid email");

    assert!(matches!(err, ApiError::InvalidArgument(_)));
    assert!(requests_to(&server, "/api/auth/login").await.is_empty());
}

#[tokio::test]
async fn signup_and_email_verification_accept_empty_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(json!({
            "email": "walker@example.com",
            "password": "hunter2",
            "nickname": "walker"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/send"))
        .and(body_json(json!({ "email": "walker@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify"))
        .and(body_json(json!({ "email": "walker@example.com", "code": "123456" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": 200, "message": "verified" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let auth = client.auth();

    auth.signup(&SignupRequest {
        email: "walker@example.com".to_string(),
        password: "hunter2".to_string(),
        nickname: "walker".to_string(),
    })
    .await
    .expect("signup");
    auth.send_email_code("walker@example.com")
        .await
        .expect("send code");
    let verified = auth
        .verify_email_code("walker@example.com", "123456")
        .await
        .expect("verify");

    assert_eq!(verified.message.as_deref(), Some("verified"));
}

#[tokio::test]
async fn duplicate_signup_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(path("/api/auth/signup"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "email already used" })),
        )
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let err = client
        .auth()
        .signup(&SignupRequest {
            email: "walker@example.com".to_string(),
            password: "hunter2".to_string(),
            nickname: "walker".to_string(),
        })
        .await
        .expect_err("conflict");

    match err {
        ApiError::Upstream { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "email already used");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn explicit_reissue_rotates_stored_token() {
    let server = MockServer::start().await;
    let session = Session::new();
    Mock::given(method("POST"))
        .and(path(REISSUE_PATH))
        .and(body_json(json!({ "refresh_token": "refresh-1" })))
        .respond_with(session.reissue("refresh-2"))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_with("refresh-1");
    let client = client(&server, store.clone());
    client.auth().reissue().await.expect("reissue");

    assert_eq!(stored_token(&store).as_deref(), Some("refresh-2"));
    assert!(session.is_refreshed());
}

#[tokio::test]
async fn logout_forgets_credential() {
    let server = MockServer::start().await;
    let store = store_with("refresh-1");
    let client = client(&server, store.clone());

    client.auth().logout().expect("logout");

    assert_eq!(stored_token(&store), None);
    assert!(!client.auth().is_logged_in().expect("status"));
}

#[tokio::test]
async fn file_store_survives_a_new_client() {
    let server = MockServer::start().await;
    Mock::given(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "refresh_token": "refresh-1" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REISSUE_PATH))
        .and(body_json(json!({ "refresh_token": "refresh-1" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "refresh_token": "refresh-2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let first = client(&server, Arc::new(FileCredentialStore::new(dir.path())));
    first.auth().login(&login_request()).await.expect("login");
    drop(first);

    let store = Arc::new(FileCredentialStore::new(dir.path()));
    let second = client(&server, store.clone());
    second.auth().reissue().await.expect("reissue");

    let saved = store.load().expect("load").expect("credential");
    assert_eq!(saved.as_str(), "refresh-2");
}
