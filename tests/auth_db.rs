//! Database-backed flow tests.
//!
//! These exercise the endpoints that persist state, so they need a reachable
//! PostgreSQL instance: set `DATABASE_URL` to run them, otherwise each test
//! logs a skip notice and passes vacuously. Migrations are applied on first
//! connect; usernames and emails are suffixed per run so the suite can be
//! repeated against the same database.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use aster::auth::tokens::create_token;
use aster::routes::create_router;
use aster::server::config::{Config, SmtpConfig};
use aster::server::state::AppState;

const JWT_SECRET: &str = "test-secret";

async fn test_setup() -> Option<(Router, PgPool)> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&url).await.ok()?;
    sqlx::migrate!().run(&pool).await.ok()?;

    let config = Config {
        server_port: 0,
        database_url: url,
        jwt_secret: JWT_SECRET.to_string(),
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

    let router = create_router(AppState::new(pool.clone(), config.into_shared()));
    Some((router, pool))
}

fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
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

async fn register(router: &Router, username: &str, email: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "username": username,
        "password": "Secret123!",
        "email": email,
        "site_name": "Blog",
        "site_url": "https://blog.example.com",
    });
    let (status, json) = send_json(router, "POST", "/api/v1/auth/register", None, body).await;
    assert_eq!(status, StatusCode::OK);
    json
}

async fn password_hash_of(pool: &PgPool, email: &str) -> String {
    sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn duplicate_registration_rejected_and_creates_no_row() {
    let Some((router, pool)) = test_setup().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };

    let username = format!("alice_{}", unique_suffix());
    let email = format!("{username}@x.com");

    let first = register(&router, &username, &email).await;
    assert_eq!(first["code"], 100);

    let second = register(&router, &username, &email).await;
    assert_eq!(second["code"], 103);
    assert_eq!(second["msg"], "该用户已被注册");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(&username)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn forgot_password_for_unknown_email_sends_nothing() {
    let Some((router, _pool)) = test_setup().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };

    let email = format!("nobody_{}@x.com", unique_suffix());
    let (status, json) = send_json(
        &router,
        "POST",
        "/api/v1/auth/pwd/forget",
        None,
        serde_json::json!({ "email": email }),
    )
    .await;

    // A delivery attempt over the blank relay would surface as a code-104
    // SMTP error, so a request error proves no send was attempted.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 103);
    assert_eq!(json["msg"], "不存在该邮箱帐号");
}

#[tokio::test]
async fn reset_with_wrong_code_leaves_password_untouched() {
    let Some((router, pool)) = test_setup().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };

    let username = format!("bob_{}", unique_suffix());
    let email = format!("{username}@x.com");
    let registered = register(&router, &username, &email).await;
    assert_eq!(registered["code"], 100);

    let hash_before = password_hash_of(&pool, &email).await;

    let (status, json) = send_json(
        &router,
        "POST",
        "/api/v1/auth/pwd/reset",
        None,
        serde_json::json!({
            "email": email,
            "verify_code": "ZZZZZZ",
            "password": "NewSecret1",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 103);
    assert_eq!(json["msg"], "验证码无效或错误");
    assert_eq!(password_hash_of(&pool, &email).await, hash_before);
}

#[tokio::test]
async fn admin_route_accepts_valid_token() {
    let Some((router, _pool)) = test_setup().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };

    let username = format!("carol_{}", unique_suffix());
    let email = format!("{username}@x.com");
    let registered = register(&router, &username, &email).await;
    assert_eq!(registered["code"], 100);

    let token = create_token(&username, "", JWT_SECRET, 3600).unwrap();
    let (status, json) = send_json(
        &router,
        "POST",
        "/api/v1/setting/site",
        Some(&token),
        serde_json::json!({
            "site_name": "Blog",
            "site_url": "https://blog.example.com",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 100);
    assert_eq!(json["msg"], "保存成功");
}
