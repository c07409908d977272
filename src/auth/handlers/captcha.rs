/**
 * Captcha Handler
 *
 * Implements GET /api/v1/auth/captcha: issues an image challenge and returns
 * its opaque id together with an embeddable base64 data URL.
 */

use axum::extract::State;

use crate::auth::captcha::CaptchaStore;
use crate::auth::handlers::types::CaptchaData;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// Captcha issuance handler
pub async fn create_captcha(
    State(captcha): State<CaptchaStore>,
) -> Result<ApiResponse<CaptchaData>, ApiError> {
    let challenge = captcha.issue().await;
    tracing::debug!("issued captcha challenge {}", challenge.id);

    Ok(ApiResponse::ok_with(
        "验证码创建成功",
        CaptchaData {
            captcha_id: challenge.id,
            captcha_url: challenge.image_url,
        },
    ))
}
