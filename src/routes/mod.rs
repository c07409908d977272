//! Route Configuration Module
//!
//! - **`router`** - final router assembly (tracing layer, fallback)
//! - **`api_routes`** - the API route table

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
