/**
 * API Route Handlers
 *
 * Route table for the JSON API.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/v1/auth/register`   - registration
 * - `POST /api/v1/auth/login`      - login (captcha-gated)
 * - `GET  /api/v1/auth/captcha`    - captcha issuance
 * - `POST /api/v1/auth/pwd/forget` - mail a verification code
 * - `POST /api/v1/auth/pwd/reset`  - reset password with a code
 *
 * ## Admin (bearer token required)
 * - category CRUD under `/api/v1/categories`
 * - friend-link CRUD under `/api/v1/links`
 * - settings groups under `/api/v1/setting`
 */

use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};

use crate::auth::handlers::{create_captcha, forget_password, login, register, reset_password};
use crate::content::handlers as content;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;
use crate::settings::handlers as settings;

/// Configure all API routes.
///
/// Public auth routes are merged with the token-protected admin routes;
/// the auth middleware is applied only to the latter.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let auth_routes = Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/captcha", get(create_captcha))
        .route("/api/v1/auth/pwd/forget", post(forget_password))
        .route("/api/v1/auth/pwd/reset", post(reset_password));

    let admin_routes = Router::new()
        // Categories
        .route("/api/v1/categories", get(content::list_categories))
        .route("/api/v1/categories", post(content::create_category))
        .route("/api/v1/categories/{id}", put(content::update_category))
        .route("/api/v1/categories/{id}", delete(content::delete_category))
        .route(
            "/api/v1/categories/batch_delete",
            post(content::batch_delete_categories),
        )
        // Friend links
        .route("/api/v1/links", get(content::list_links))
        .route("/api/v1/links/all", get(content::get_all_links))
        .route("/api/v1/links", post(content::create_link))
        .route("/api/v1/links/{id}", put(content::update_link))
        .route("/api/v1/links/{id}", delete(content::delete_link))
        .route("/api/v1/links/batch_delete", post(content::batch_delete_links))
        // Settings
        .route("/api/v1/setting", get(settings::get_settings))
        .route("/api/v1/setting/site", post(settings::save_site_settings))
        .route("/api/v1/setting/email", post(settings::save_email_settings))
        .route("/api/v1/setting/email/test", post(settings::send_test_email))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router.merge(auth_routes).merge(admin_routes)
}
