/**
 * Router Configuration
 *
 * Assembles the final Axum router: API routes, request tracing, and the
 * 404 fallback. The JSON API always answers 200 with an envelope; only
 * unknown paths and failed authentication produce non-200 statuses.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new();
    let router = configure_api_routes(router, &state);

    router
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
