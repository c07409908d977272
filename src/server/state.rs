/**
 * Application State Management
 *
 * `AppState` is the central container handed to the router: the connection
 * pool, the immutable configuration, the two TTL caches, and the mailer.
 * There is no other process-wide state.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * use (`State<PgPool>`, `State<CaptchaStore>`, ...) instead of the whole
 * `AppState`, following Axum's recommended pattern.
 *
 * # Thread Safety
 *
 * Every field is cheaply cloneable and safe for concurrent use: `PgPool`
 * and the moka caches are internally synchronized, `Config` is immutable
 * behind an `Arc`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::captcha::CaptchaStore;
use crate::auth::verify_codes::VerifyCodeCache;
use crate::mailer::Mailer;
use crate::server::config::Config;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Process configuration, loaded once at startup
    pub config: Arc<Config>,
    /// Outstanding captcha challenges (5-minute TTL, one-shot)
    pub captcha: CaptchaStore,
    /// Emailed verification codes (15-minute TTL)
    pub verify_codes: VerifyCodeCache,
    /// SMTP mailer bound to the configured relay
    pub mailer: Mailer,
}

impl AppState {
    /// Assemble the state from a pool and loaded configuration.
    pub fn new(pool: PgPool, config: Arc<Config>) -> Self {
        let mailer = Mailer::new(config.smtp.clone());
        Self {
            pool,
            config,
            captcha: CaptchaStore::new(),
            verify_codes: VerifyCodeCache::new(),
            mailer,
        }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for CaptchaStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.captcha.clone()
    }
}

impl FromRef<AppState> for VerifyCodeCache {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.verify_codes.clone()
    }
}

impl FromRef<AppState> for Mailer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}
