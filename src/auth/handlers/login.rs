/**
 * Login Handler
 *
 * Implements POST /api/v1/auth/login.
 *
 * # Authentication Process
 *
 * 1. Verify the captcha (one-shot: the challenge is consumed either way)
 * 2. Look up the user by username
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a signed bearer token with the configured expiry
 *
 * # Security
 *
 * - The captcha is checked BEFORE credentials, so automated guessing burns
 *   a fresh challenge per attempt
 * - Passwords are never compared in plaintext; bcrypt handles the salted,
 *   slow comparison
 */

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::captcha::CaptchaStore;
use crate::auth::handlers::types::{LoginRequest, TokenData};
use crate::auth::tokens::create_token;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// - request-error: invalid/expired captcha, unknown user, wrong password
/// - server-error: database or token-signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<ApiResponse<TokenData>, ApiError> {
    let pool: &PgPool = &state.pool;
    let config: &Arc<Config> = &state.config;
    let captcha: &CaptchaStore = &state.captcha;

    tracing::info!("login request for username: {}", request.username);

    let captcha_ok = captcha
        .verify(
            &request.captcha_id,
            &request.captcha_val,
            config.captcha_case_sensitive,
        )
        .await;
    if !captcha_ok {
        tracing::warn!("captcha mismatch for login attempt: {}", request.username);
        return Err(ApiError::request("验证码错误"));
    }

    let user = get_user_by_username(pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login for unknown user: {}", request.username);
            ApiError::request("不存在该用户")
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("wrong password for user: {}", request.username);
        return Err(ApiError::request("密码错误"));
    }

    let token = create_token(
        &user.username,
        &user.user_img,
        &config.jwt_secret,
        config.token_expire_secs,
    )?;

    tracing::info!("user logged in: {}", user.username);

    Ok(ApiResponse::ok_with(
        "登录成功",
        TokenData {
            token,
            user_id: user.id,
            username: user.username,
            user_img: user.user_img,
        },
    ))
}
