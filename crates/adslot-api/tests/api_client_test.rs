#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use chrono::NaiveDate;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adslot_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/login/"))
        .and(body_partial_json(json!({ "username": "acme" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": 7, "username": "acme", "email": "ads@acme.test" },
            "tokens": { "access": "acc-token", "refresh": "ref-token" }
        })))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    let auth = client.login("acme", &secret).await.unwrap();

    assert_eq!(auth.user.id, 7);
    assert_eq!(auth.user.username, "acme");
    assert_eq!(auth.tokens.access, "acc-token");
    assert_eq!(auth.tokens.refresh, "ref-token");
}

#[tokio::test]
async fn test_login_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let result = client.login("acme", &secret).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_register_validation_errors() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/accounts/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "username": ["A user with that username already exists."],
            "password": ["This password is too short."]
        })))
        .mount(&server)
        .await;

    let request = adslot_api::types::RegisterRequest {
        username: "acme".into(),
        email: "ads@acme.test".into(),
        password: "x".into(),
        first_name: None,
        last_name: None,
    };
    let err = client.register(&request).await.unwrap_err();

    let fields = err.field_errors().expect("field errors");
    assert_eq!(fields.len(), 2);
    assert_eq!(
        fields["username"],
        vec!["A user with that username already exists."]
    );
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/accounts/auth/me/"))
        .and(header("Authorization", "Bearer acc-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "username": "acme"
        })))
        .mount(&server)
        .await;

    client.set_access_token("acc-token".to_string().into());
    let user = client.me().await.unwrap();
    assert_eq!(user.username, "acme");
}

#[tokio::test]
async fn test_me_expired_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/accounts/auth/me/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Token is invalid or expired" })),
        )
        .mount(&server)
        .await;

    client.set_access_token("stale".to_string().into());
    let err = client.me().await.unwrap_err();
    assert!(err.is_auth_expired(), "expected auth error, got: {err:?}");
}

// ── Ad tests ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_ads_paginated_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/advertisers/ads/"))
        .and(query_param("status", "approved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{
                "id": 12,
                "title": "Spring Sale",
                "status": "approved",
                "total_impressions": 420,
                "total_clicks": 10
            }]
        })))
        .mount(&server)
        .await;

    let ads = client.list_ads(Some("approved")).await.unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0].title, "Spring Sale");
    assert_eq!(ads[0].total_impressions, 420);
}

#[tokio::test]
async fn test_list_ads_plain_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/advertisers/ads/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "A", "status": "draft" },
            { "id": 2, "title": "B", "status": "live" }
        ])))
        .mount(&server)
        .await;

    let ads = client.list_ads(None).await.unwrap();
    assert_eq!(ads.len(), 2);
    assert_eq!(ads[1].status, "live");
}

#[tokio::test]
async fn test_create_ad_sends_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/advertisers/ads/"))
        .and(body_partial_json(json!({
            "title": "Spring Sale",
            "status": "pending_review"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 33, "title": "Spring Sale", "status": "pending_review"
        })))
        .mount(&server)
        .await;

    let payload = adslot_api::types::AdPayload {
        title: Some("Spring Sale".into()),
        status: Some("pending_review".into()),
        ..Default::default()
    };
    let ad = client.create_ad(&payload).await.unwrap();
    assert_eq!(ad.id, 33);
}

// ── Placement & availability tests ──────────────────────────────────

#[tokio::test]
async fn test_check_availability_conflict() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/advertisers/ad-placements/3/availability/"))
        .and(query_param("start_date", "2025-03-10"))
        .and(query_param("end_date", "2025-03-12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_available": false,
            "conflicting_bookings": [{
                "id": 9,
                "ad_title": "Rival",
                "placement_name": "Homepage Banner",
                "start_date": "2025-03-11",
                "end_date": "2025-03-15",
                "status": "confirmed"
            }]
        })))
        .mount(&server)
        .await;

    let avail = client
        .check_availability(3, date("2025-03-10"), date("2025-03-12"))
        .await
        .unwrap();
    assert!(!avail.is_available);
    assert_eq!(avail.conflicting_bookings.len(), 1);
    assert_eq!(avail.conflicting_bookings[0].start_date, date("2025-03-11"));
}

// ── Booking tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_calendar_bookings_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/advertisers/bookings/calendar/"))
        .and(query_param("start_date", "2025-03-01"))
        .and(query_param("end_date", "2025-03-31"))
        .and(query_param("placement_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 5,
            "ad_title": "Spring Sale",
            "placement_name": "Homepage Banner",
            "start_date": "2025-03-10",
            "end_date": "2025-03-12",
            "status": "active"
        }])))
        .mount(&server)
        .await;

    let bookings = client
        .calendar_bookings(Some(3), date("2025-03-01"), date("2025-03-31"))
        .await
        .unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, "active");
}

#[tokio::test]
async fn test_cancel_booking() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/advertisers/bookings/5/cancel/"))
        .and(body_partial_json(json!({ "reason": "campaign ended" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Booking cancelled successfully" })),
        )
        .mount(&server)
        .await;

    client.cancel_booking(5, "campaign ended").await.unwrap();
}

#[tokio::test]
async fn test_cancel_booking_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/advertisers/bookings/5/cancel/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Cannot cancel this booking" })),
        )
        .mount(&server)
        .await;

    let err = client.cancel_booking(5, "too late").await.unwrap_err();
    match err {
        Error::Api { status, message, .. } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Cannot cancel this booking");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── File tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_and_link_file() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/advertisers/files/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 101,
            "original_filename": "logo.png",
            "file_type": "image/png",
            "virus_scan_status": "clean"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/advertisers/files/101/"))
        .and(body_partial_json(json!({ "ad": 33 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 101,
            "original_filename": "logo.png",
            "ad": 33
        })))
        .mount(&server)
        .await;

    let file = client
        .upload_file("logo.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();
    assert_eq!(file.id, 101);
    assert_eq!(file.virus_scan_status.as_deref(), Some("clean"));

    let linked = client.link_file(101, 33).await.unwrap();
    assert_eq!(linked.ad, Some(33));
}

// ── Error shape tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_deserialization_error_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/advertisers/ads/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client.get_ad(1).await.unwrap_err();
    match err {
        Error::Deserialization { ref body, .. } => assert!(body.contains("gateway")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
