//! Server Module
//!
//! Configuration loading, application state, and server assembly.
//!
//! - **`config`** - environment-driven `Config`
//! - **`state`** - `AppState` and its `FromRef` impls
//! - **`init`** - pool + migrations + router wiring

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// Server assembly
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::AppState;
