//! Site Settings Module
//!
//! Named settings groups with batch-upserted key/value items. The
//! registration flow seeds the "网站设置" group; the admin endpoints manage
//! it and the "邮件设置" (SMTP) group afterwards.
//!
//! - **`db`** - group/item model and database operations
//! - **`types`** - admin form types
//! - **`handlers`** - HTTP handlers (fetch, save, test mail)

/// Settings model and database operations
pub mod db;

/// Admin form types
pub mod types;

/// HTTP handlers for settings endpoints
pub mod handlers;

pub use db::{SysSetting, SysSettingItem, EMAIL_SETTINGS_GROUP, SITE_SETTINGS_GROUP};
pub use handlers::{get_settings, save_email_settings, save_site_settings, send_test_email};
