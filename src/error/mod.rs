//! API Error Module
//!
//! This module defines the error type shared by all HTTP handlers and its
//! conversion into the response envelope.
//!
//! # Architecture
//!
//! - **`types`** - `ApiError` definition and constructors
//! - **`conversion`** - `IntoResponse` implementation (envelope rendering)
//!
//! # Error Kinds
//!
//! Only two kinds are visible to callers:
//!
//! - request-error (code 103): bad input, duplicate account, wrong
//!   credentials, invalid/expired verification code. The message is specific
//!   and actionable.
//! - server-error (code 104): any unexpected internal failure (database,
//!   hashing, token signing, SMTP). The caller sees a generic message; the
//!   real error is logged for operators.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
