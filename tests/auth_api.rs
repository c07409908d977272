//! Envelope-level tests for the auth endpoints.
//!
//! These run against a real router with a lazily-connected pool: nothing
//! here touches the database, because each scenario fails (or completes)
//! before the first query — captcha issuance is in-process, and both
//! validation and captcha checks run ahead of any lookup.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use aster::routes::create_router;
use aster::server::config::{Config, SmtpConfig};
use aster::server::state::AppState;

fn test_router() -> Router {
    let config = Config {
        server_port: 0,
        database_url: "postgres://postgres@127.0.0.1:1/aster_test".to_string(),
        jwt_secret: "test-secret".to_string(),
        token_expire_secs: 3600,
        smtp: SmtpConfig {
            host: String::new(),
            port: 465,
            account: String::new(),
            password: String::new(),
            sender: String::new(),
        },
        captcha_case_sensitive: false,
    };

    // connect_lazy parses the URL without dialing; no database is needed
    // for the paths exercised below.
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("valid database url");

    create_router(AppState::new(pool, config.into_shared()))
}

async fn send_json(router: Router, method: &str, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn captcha_issuance_returns_embeddable_image() {
    let router = test_router();
    let request = Request::builder()
        .uri("/api/v1/auth/captcha")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["code"], 100);
    let captcha_id = json["data"]["captcha_id"].as_str().unwrap();
    let captcha_url = json["data"]["captcha_url"].as_str().unwrap();
    assert!(!captcha_id.is_empty());
    assert!(captcha_url.starts_with("data:image"));
}

#[tokio::test]
async fn login_with_unknown_captcha_is_request_error() {
    let router = test_router();
    let body = serde_json::json!({
        "username": "alice",
        "password": "Secret123!",
        "captcha_id": "00000000-0000-0000-0000-000000000000",
        "captcha_val": "ABCD",
    });

    let (status, json) = send_json(router, "POST", "/api/v1/auth/login", &body.to_string()).await;

    // Envelope semantics: transport status stays 200, the code says 103.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 103);
    assert_eq!(json["msg"], "验证码错误");
}

#[tokio::test]
async fn register_with_malformed_username_is_request_error() {
    let router = test_router();
    let body = serde_json::json!({
        "username": "ab",
        "password": "Secret123!",
        "email": "a@x.com",
        "site_name": "Blog",
        "site_url": "https://blog.example.com",
    });

    let (status, json) =
        send_json(router, "POST", "/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 103);
}

#[tokio::test]
async fn register_with_missing_site_fields_is_request_error() {
    let router = test_router();
    let body = serde_json::json!({
        "username": "alice",
        "password": "Secret123!",
        "email": "a@x.com",
        "site_name": "",
        "site_url": "",
    });

    let (_, json) = send_json(router, "POST", "/api/v1/auth/register", &body.to_string()).await;
    assert_eq!(json["code"], 103);
}

#[tokio::test]
async fn admin_route_without_token_is_unauthorized() {
    let router = test_router();
    let request = Request::builder()
        .uri("/api/v1/categories")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let router = test_router();
    let request = Request::builder()
        .uri("/api/v1/nope")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
