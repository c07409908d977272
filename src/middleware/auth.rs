/**
 * Authentication Middleware
 *
 * Protects the admin routes. Extracts the bearer token from the
 * Authorization header, verifies the signature and expiry, confirms the
 * user still exists, and attaches the authenticated identity to request
 * extensions for handlers.
 *
 * Failures here do NOT use the envelope: an unauthenticated request gets a
 * plain 401 so API clients can distinguish "log in again" from business
 * errors.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::verify_token;
use crate::auth::users::get_user_by_username;
use crate::server::state::AppState;

/// Authenticated user data extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub user_img: String,
}

/// Authentication middleware
///
/// 1. Extracts the token from `Authorization: Bearer <token>`
/// 2. Verifies signature and expiry against the configured secret
/// 3. Confirms the user named in the claims still exists
/// 4. Attaches `AuthenticatedUser` to request extensions
///
/// Returns 401 Unauthorized when any step fails.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            StatusCode::UNAUTHORIZED
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        StatusCode::UNAUTHORIZED
    })?;

    let claims = verify_token(token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("invalid token: {:?}", e);
        StatusCode::UNAUTHORIZED
    })?;

    // The token is stateless; make sure the account behind it still exists.
    let user = get_user_by_username(&state.pool, &claims.username)
        .await
        .map_err(|e| {
            tracing::error!("user lookup failed in auth middleware: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            tracing::warn!("token for vanished user: {}", claims.username);
            StatusCode::UNAUTHORIZED
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
        user_img: user.user_img,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Usable as a handler parameter on any route behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use sqlx::postgres::PgPoolOptions;

    use crate::server::config::{Config, SmtpConfig};

    fn state() -> AppState {
        let config = Config {
            server_port: 0,
            database_url: "postgres://postgres@127.0.0.1:1/aster_test".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_expire_secs: 3600,
            smtp: SmtpConfig {
                host: String::new(),
                port: 465,
                account: String::new(),
                password: String::new(),
                sender: String::new(),
            },
            captcha_case_sensitive: false,
        };
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        AppState::new(pool, config.into_shared())
    }

    fn parts() -> axum::http::request::Parts {
        let (parts, _) = axum::http::Request::builder()
            .uri("/api/v1/setting/site")
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn test_extractor_reads_identity_set_by_middleware() {
        let mut parts = parts();
        parts.extensions.insert(AuthenticatedUser {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            user_img: String::new(),
        });

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &state())
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_identity_missing() {
        let mut parts = parts();
        let rejection = AuthUser::from_request_parts(&mut parts, &state())
            .await
            .unwrap_err();
        assert_eq!(rejection, StatusCode::UNAUTHORIZED);
    }
}
