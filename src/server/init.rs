/**
 * Server Initialization
 *
 * Wires the application together: connects the pool, runs migrations,
 * builds `AppState`, and hands everything to the router.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool from `Config`
 * 2. Run `migrations/` (failures are logged; the schema may already be
 *    up to date)
 * 3. Build `AppState` (caches, mailer)
 * 4. Create the router
 */

use axum::Router;
use sqlx::PgPool;

use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Errors
///
/// Fails only when the database pool cannot be created; everything after
/// that is either infallible or logged-and-continued.
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing aster backend server");

    let pool = PgPool::connect(&config.database_url).await.map_err(|e| {
        tracing::error!("failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("database connection pool created");

    run_migrations(&pool).await;

    let state = AppState::new(pool, config.into_shared());
    Ok(create_router(state))
}

/// Run pending migrations, logging rather than failing on errors: the
/// schema may have been migrated already by an operator.
async fn run_migrations(pool: &PgPool) {
    tracing::info!("running database migrations");
    match sqlx::migrate!().run(pool).await {
        Ok(_) => tracing::info!("database migrations completed"),
        Err(e) => {
            tracing::error!("failed to run database migrations: {}", e);
            tracing::warn!("continuing; the schema may not be up to date");
        }
    }
}
