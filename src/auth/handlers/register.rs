/**
 * Registration Handler
 *
 * Implements POST /api/v1/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate the form (username/password/email shape, site fields present)
 * 2. Reject if the username is already registered
 * 3. Inside ONE transaction:
 *    a. create the user with a bcrypt-hashed password
 *    b. create the default "网站设置" settings group
 *    c. batch-upsert its initial items (type_name, site_name, site_url)
 *
 * The user record and its settings group either both exist afterwards or
 * neither does; a failure at any step rolls everything back and surfaces as
 * a server-error envelope.
 */

use axum::extract::State;
use axum::Json;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::users::{create_user, get_user_by_username};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::settings::db::{create_group, upsert_items, SITE_SETTINGS_GROUP};

/// Validate username format: 3-30 characters, starting with a letter,
/// containing only letters, digits, and underscores.
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check the whole form; returns the first caller-facing problem found.
pub fn validate(request: &RegisterRequest) -> Result<(), ApiError> {
    if !is_valid_username(&request.username) {
        return Err(ApiError::request("用户名格式有误（3-30 位，字母开头，仅限字母数字下划线）"));
    }
    if request.password.len() < 6 {
        return Err(ApiError::request("密码长度不能少于 6 位"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::request("邮箱格式有误"));
    }
    if request.site_name.is_empty() || request.site_name.chars().count() > 50 {
        return Err(ApiError::request("网站名称不能为空且不超过 50 字"));
    }
    if request.site_url.is_empty() || request.site_url.len() > 255 {
        return Err(ApiError::request("网站地址不能为空且不超过 255 字符"));
    }
    Ok(())
}

/// Registration handler
///
/// # Errors
///
/// - request-error: malformed form, or the username is taken
/// - server-error: hashing or any persistence failure (transaction rolls back)
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    tracing::info!("register request for username: {}", request.username);

    validate(&request)?;

    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("username already registered: {}", request.username);
        return Err(ApiError::request("该用户已被注册"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    // User + initial settings are one atomic unit.
    let mut tx = pool.begin().await?;

    let user = create_user(&mut *tx, &request.username, &request.email, &password_hash).await?;

    let group = create_group(&mut *tx, SITE_SETTINGS_GROUP).await?;
    upsert_items(
        &mut tx,
        group.id,
        &[
            ("type_name", SITE_SETTINGS_GROUP),
            ("site_name", &request.site_name),
            ("site_url", &request.site_url),
        ],
    )
    .await?;

    tx.commit().await?;

    tracing::info!("user registered: {} ({})", user.username, user.email);
    Ok(ApiResponse::ok("注册成功"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            password: "Secret123!".to_string(),
            email: "a@x.com".to_string(),
            site_name: "Blog".to_string(),
            site_url: "https://blog.example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&form()).is_ok());
    }

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("a_b_3"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("3lice"));
        assert!(!is_valid_username("_alice"));
        assert!(!is_valid_username("al ice"));
        assert!(!is_valid_username(&"a".repeat(31)));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = form();
        request.password = "short".to_string();
        let err = validate(&request).unwrap_err();
        assert!(err.is_request_error());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut request = form();
        request.email = "not-an-email".to_string();
        assert!(validate(&request).is_err());
    }

    #[test]
    fn test_missing_site_fields_rejected() {
        let mut request = form();
        request.site_name = String::new();
        assert!(validate(&request).is_err());

        let mut request = form();
        request.site_url = String::new();
        assert!(validate(&request).is_err());
    }
}
