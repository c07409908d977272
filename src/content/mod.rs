//! Content Module
//!
//! Admin-managed categories and friend links.
//!
//! - **`db`** - models and soft-delete-aware queries
//! - **`types`** - admin form types
//! - **`handlers`** - CRUD endpoints (behind the auth middleware)

/// Models and database operations
pub mod db;

/// Admin form types
pub mod types;

/// HTTP handlers for content endpoints
pub mod handlers;

pub use db::{Category, Link, CATEGORY_TYPE_ARTICLE, CATEGORY_TYPE_LINK};
