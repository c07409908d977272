//! Aster - Personal Blog/CMS Backend
//!
//! Aster is a content-management backend for a personal blog: categories,
//! friend links, site settings, and user authentication behind a JSON REST
//! API backed by PostgreSQL.
//!
//! # Overview
//!
//! - Registration, captcha-gated login, and JWT bearer tokens
//! - Password recovery via emailed verification codes (15-minute TTL cache)
//! - Admin CRUD for categories and friend links with soft delete
//! - Named settings groups with batch-upserted key/value items
//! - Uniform `{code, msg, data}` response envelope on every endpoint
//!
//! # Module Structure
//!
//! - **`server`** - configuration, application state, server assembly
//! - **`routes`** - route table and router assembly
//! - **`auth`** - users, tokens, captcha, verification codes, auth handlers
//! - **`content`** - categories and friend links
//! - **`settings`** - settings groups and admin forms
//! - **`middleware`** - bearer-token authentication
//! - **`mailer`** - SMTP delivery of templated HTML mail
//! - **`response`** / **`error`** - envelope and error types
//! - **`pagination`** - page/size helper for list endpoints

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Categories and friend links
pub mod content;

/// Settings groups
pub mod settings;

/// Middleware for request processing
pub mod middleware;

/// SMTP mailer
pub mod mailer;

/// Response envelope
pub mod response;

/// API error types
pub mod error;

/// Pagination helper
pub mod pagination;

// Re-export commonly used types
pub use error::ApiError;
pub use response::ApiResponse;
pub use server::{create_app, AppState, Config};
