#![allow(clippy::unwrap_used)]
// Session lifecycle tests against a mocked backend.
//
// These pin the store's contract: failed logins mutate nothing, logout
// always clears local state, restore round-trips a persisted session
// without re-sending credentials, and stale caches are discarded.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adslot_api::ApiClient;
use adslot_core::session::{MemoryTokenStore, Session, TokenPair, TokenStore};

fn api_for(server: &MockServer) -> Arc<ApiClient> {
    let base_url = Url::parse(&server.uri()).unwrap();
    Arc::new(ApiClient::with_client(reqwest::Client::new(), base_url))
}

fn auth_body() -> serde_json::Value {
    json!({
        "user": { "id": 7, "username": "acme", "email": "ads@acme.test" },
        "tokens": { "access": "acc-token", "refresh": "ref-token" }
    })
}

#[tokio::test]
async fn login_sets_user_and_persists_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let api = api_for(&server);
    let mut session = Session::new(Arc::clone(&api), Box::new(store));

    let user = session
        .login("acme", &"hunter2".to_string().into())
        .await
        .unwrap();

    assert_eq!(user.username, "acme");
    assert!(session.is_authenticated());
    assert!(api.has_access_token());
}

#[tokio::test]
async fn failed_login_mutates_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut session = Session::new(Arc::clone(&api), Box::new(MemoryTokenStore::new()));

    let err = session
        .login("acme", &"wrong".to_string().into())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Invalid credentials"));
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(!api.has_access_token());
}

#[tokio::test]
async fn restore_reproduces_user_without_credentials() {
    let server = MockServer::start().await;
    // Only `me` may be called -- no login.
    Mock::given(method("GET"))
        .and(path("/api/accounts/auth/me/"))
        .and(header("Authorization", "Bearer acc-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 7, "username": "acme" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_tokens(TokenPair {
        access: "acc-token".to_string().into(),
        refresh: "ref-token".to_string().into(),
        issued_at: Utc::now(),
    });

    let api = api_for(&server);
    let mut session = Session::new(api, Box::new(store));

    let user = session.restore().await.expect("session should restore");
    assert_eq!(user.username, "acme");
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn restore_with_rejected_token_clears_everything() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/accounts/auth/me/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Token is invalid" })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair {
        access: "stale".to_string().into(),
        refresh: "stale-ref".to_string().into(),
        issued_at: Utc::now(),
    }));

    let api = api_for(&server);
    let mut session = Session::new(Arc::clone(&api), Box::new(Arc::clone(&store)));
    assert!(session.restore().await.is_none());
    assert!(!session.is_authenticated());
    assert!(!api.has_access_token());
    assert!(store.load().unwrap().is_none(), "token cache must be cleared");
}

#[tokio::test]
async fn restore_discards_tokens_past_retention_window() {
    let server = MockServer::start().await;
    // The probe must never fire for a stale cache.
    Mock::given(method("GET"))
        .and(path("/api/accounts/auth/me/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7, "username": "acme" })))
        .expect(0)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_tokens(TokenPair {
        access: "old".to_string().into(),
        refresh: "old-ref".to_string().into(),
        issued_at: Utc::now() - Duration::days(8),
    });

    let api = api_for(&server);
    let mut session = Session::new(api, Box::new(store));
    assert!(session.restore().await.is_none());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn logout_clears_state_even_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/logout/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut session = Session::new(Arc::clone(&api), Box::new(MemoryTokenStore::new()));
    session
        .login("acme", &"hunter2".to_string().into())
        .await
        .unwrap();

    session.logout().await;

    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(!api.has_access_token());
}

#[tokio::test]
async fn logout_sends_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/logout/"))
        .and(body_partial_json(json!({ "refresh": "ref-token" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut session = Session::new(api, Box::new(MemoryTokenStore::new()));
    session
        .login("acme", &"hunter2".to_string().into())
        .await
        .unwrap();
    session.logout().await;
}
