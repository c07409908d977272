/**
 * Authentication Handler Types
 *
 * Request and response types shared by the auth endpoints.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
///
/// The site fields seed the initial "网站设置" settings group.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Chosen username (3-30 chars, starts with a letter)
    pub username: String,
    /// Password (will be hashed before storage)
    pub password: String,
    /// Email address, used later for password recovery
    pub email: String,
    /// Site display name
    pub site_name: String,
    /// Site root URL
    pub site_url: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Identifier returned by `GET /api/v1/auth/captcha`
    pub captcha_id: String,
    /// Characters the user read from the captcha image
    pub captcha_val: String,
}

/// Token payload returned on successful login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenData {
    /// Signed bearer token
    pub token: String,
    /// User's unique ID
    pub user_id: Uuid,
    /// Username
    pub username: String,
    /// Avatar reference
    pub user_img: String,
}

/// Captcha payload returned on issuance
#[derive(Serialize, Deserialize, Debug)]
pub struct CaptchaData {
    /// Opaque challenge identifier
    pub captcha_id: String,
    /// Embeddable base64 data URL of the challenge image
    pub captcha_url: String,
}

/// Forgot-password request
#[derive(Deserialize, Serialize, Debug)]
pub struct ForgetPwdRequest {
    pub email: String,
}

/// Reset-password request
#[derive(Deserialize, Serialize, Debug)]
pub struct ResetPwdRequest {
    pub email: String,
    /// Code received by mail
    pub verify_code: String,
    /// New password (will be hashed before storage)
    pub password: String,
}
