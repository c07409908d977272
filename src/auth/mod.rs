//! Authentication Module
//!
//! This module handles registration, login, captcha, bearer tokens, and the
//! emailed verification-code flow for password recovery.
//!
//! # Architecture
//!
//! - **`users`** - User model and database operations
//! - **`tokens`** - JWT creation and validation
//! - **`captcha`** - Image challenge generation and one-shot verification
//! - **`verify_codes`** - TTL cache for emailed verification codes
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: form validated → user + default site settings created in
//!    one transaction
//! 2. **Login**: captcha consumed → credentials verified → JWT returned
//! 3. **Forgot password**: code issued (or reused within its TTL) → mailed
//! 4. **Reset password**: code checked → password rehashed → code invalidated
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Captcha challenges are single-use and expire after 5 minutes
//! - Verification codes expire after 15 minutes and die with a successful reset
//! - Tokens are stateless; expiry comes from `Config`

/// User data model and database operations
pub mod users;

/// JWT creation and validation
pub mod tokens;

/// Captcha generation and one-shot verification
pub mod captcha;

/// TTL cache for emailed verification codes
pub mod verify_codes;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use captcha::CaptchaStore;
pub use handlers::types::{CaptchaData, LoginRequest, RegisterRequest, TokenData};
pub use handlers::{create_captcha, forget_password, login, register, reset_password};
pub use verify_codes::VerifyCodeCache;
