/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers. Handlers
 * return `Result<ApiResponse<T>, ApiError>` and rely on the `IntoResponse`
 * implementation in `conversion` to render failures as envelopes.
 *
 * # Error Categories
 *
 * `Request` carries a caller-facing message and becomes a code-103 envelope.
 * Every other variant is an internal failure: it becomes a code-104 envelope
 * with a generic message, and the underlying error is logged server-side.
 */

use thiserror::Error;

/// Errors produced by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation or business-rule failure; message is shown to the caller.
    #[error("{0}")]
    Request(String),

    /// Database query or transaction failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing / verification failure.
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// JWT signing or decoding failure.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// SMTP delivery failure. Rendered with a specific caller-facing hint
    /// because the usual cause is a misconfigured relay.
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Mail message construction failure (bad address, body encoding).
    #[error("mail build error: {0}")]
    Mail(#[from] lettre::error::Error),

    /// Sender/recipient address parsing failure.
    #[error("mail address error: {0}")]
    Address(#[from] lettre::address::AddressError),
}

impl ApiError {
    /// Create a request-error with a caller-facing message.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Whether this error is shown to the caller verbatim.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_message() {
        let err = ApiError::request("该用户已被注册");
        assert_eq!(err.to_string(), "该用户已被注册");
        assert!(err.is_request_error());
    }

    #[test]
    fn test_internal_error_is_not_request_error() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_request_error());
    }
}
