/**
 * Password Recovery Handlers
 *
 * Implements POST /api/v1/auth/pwd/forget and POST /api/v1/auth/pwd/reset.
 *
 * # Forgot Password
 *
 * 1. Look up the user by email
 * 2. Reuse the unexpired cached code if one exists, otherwise issue a fresh
 *    6-character code with a 15-minute TTL (idempotent resend: repeating the
 *    request inside the window mails the SAME code)
 * 3. Send the templated HTML mail over the configured SMTP relay
 *
 * # Reset Password
 *
 * 1. Compare the cached code for the email against the submitted one
 * 2. Hash and persist the new password
 * 3. Invalidate the cached code so it cannot be replayed inside the
 *    remaining TTL window
 */

use axum::extract::State;
use axum::Json;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{ForgetPwdRequest, ResetPwdRequest};
use crate::auth::users::{get_user_by_email, update_password_by_email};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Forgot-password handler
///
/// # Errors
///
/// - request-error: no account with that email
/// - server-error: SMTP delivery failure (caller is told to check the
///   relay configuration) or database failure
pub async fn forget_password(
    State(state): State<AppState>,
    Json(request): Json<ForgetPwdRequest>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let pool: &PgPool = &state.pool;

    tracing::info!("forgot-password request for {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("forgot-password for unknown email: {}", request.email);
            ApiError::request("不存在该邮箱帐号")
        })?;

    let code = state.verify_codes.get_or_issue(&request.email).await;

    state
        .mailer
        .send_verify_code(&request.email, &user.username, &code)
        .await?;

    Ok(ApiResponse::ok("验证码发送成功，请前往邮箱查看"))
}

/// Reset-password handler
///
/// # Errors
///
/// - request-error: missing, expired, or mismatched verification code
/// - server-error: hashing or persistence failure
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPwdRequest>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let pool: &PgPool = &state.pool;

    tracing::info!("reset-password request for {}", request.email);

    if !state
        .verify_codes
        .matches(&request.email, &request.verify_code)
        .await
    {
        tracing::warn!("invalid verification code for {}", request.email);
        return Err(ApiError::request("验证码无效或错误"));
    }

    if request.password.len() < 6 {
        return Err(ApiError::request("密码长度不能少于 6 位"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let updated = update_password_by_email(pool, &request.email, &password_hash).await?;
    if updated == 0 {
        // Code matched but the account vanished between request and reset.
        tracing::warn!("reset-password for missing account: {}", request.email);
        return Err(ApiError::request("不存在该邮箱帐号"));
    }

    // Consume the code; a second reset needs a fresh forgot-password round.
    state.verify_codes.invalidate(&request.email).await;

    tracing::info!("password reset for {}", request.email);
    Ok(ApiResponse::ok("重置密码成功"))
}
