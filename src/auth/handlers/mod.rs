//! Authentication HTTP Handlers
//!
//! One file per endpoint, plus shared request/response types:
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request/response types
//! ├── register.rs  - POST /api/v1/auth/register
//! ├── login.rs     - POST /api/v1/auth/login
//! ├── captcha.rs   - GET  /api/v1/auth/captcha
//! └── password.rs  - POST /api/v1/auth/pwd/{forget,reset}
//! ```

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Captcha issuance handler
pub mod captcha;

/// Forgot/reset password handlers
pub mod password;

// Re-export handlers for route configuration
pub use captcha::create_captcha;
pub use login::login;
pub use password::{forget_password, reset_password};
pub use register::register;
