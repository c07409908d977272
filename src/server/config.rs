/**
 * Server Configuration
 *
 * This module loads the process configuration once at startup. The resulting
 * `Config` is stored in `AppState` and injected into handlers, so there is
 * no global mutable state.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by `main` before this runs), with sensible defaults for local development.
 *
 * # Variables
 *
 * - `SERVER_PORT` - listen port (default 3000)
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - token signing secret (default only suitable for dev)
 * - `TOKEN_EXPIRE_SECS` - bearer token lifetime in seconds (default 7 days)
 * - `SMTP_HOST` / `SMTP_PORT` / `SMTP_ACCOUNT` / `SMTP_PASSWORD` /
 *   `SMTP_SENDER` - verification-mail relay; may be left unset, in which
 *   case forgot-password requests fail with a server-error envelope
 * - `CAPTCHA_CASE_SENSITIVE` - `true` for exact captcha matching
 *   (default: case-insensitive)
 */

use std::sync::Arc;

/// SMTP relay settings for the verification mailer.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay hostname, e.g. `smtp.example.com`
    pub host: String,
    /// Relay port (465/587 depending on the provider)
    pub port: u16,
    /// Account used both for authentication and as the From address
    pub account: String,
    /// Account password or app token
    pub password: String,
    /// Display name for the From header
    pub sender: String,
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub server_port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// JWT signing secret
    pub jwt_secret: String,
    /// Bearer token lifetime in seconds
    pub token_expire_secs: u64,
    /// SMTP relay settings; empty host means mail is unconfigured
    pub smtp: SmtpConfig,
    /// Exact (true) vs. case-insensitive (false) captcha matching
    pub captcha_case_sensitive: bool,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Missing optional values fall back to defaults with a logged warning.
    /// A missing `DATABASE_URL` is an error: the server cannot run without
    /// the relational store.
    pub fn from_env() -> Result<Config, std::env::VarError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|e| {
            tracing::error!("DATABASE_URL not set; the server requires a PostgreSQL database");
            e
        })?;

        let server_port = env_or("SERVER_PORT", "3000")
            .parse::<u16>()
            .unwrap_or_else(|_| {
                tracing::warn!("SERVER_PORT is not a valid port, falling back to 3000");
                3000
            });

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            "aster-dev-secret-change-in-production".to_string()
        });

        let token_expire_secs = env_or("TOKEN_EXPIRE_SECS", "604800")
            .parse::<u64>()
            .unwrap_or_else(|_| {
                tracing::warn!("TOKEN_EXPIRE_SECS is not a number, falling back to 7 days");
                7 * 24 * 60 * 60
            });

        let smtp = SmtpConfig {
            host: env_or("SMTP_HOST", ""),
            port: env_or("SMTP_PORT", "465").parse::<u16>().unwrap_or(465),
            account: env_or("SMTP_ACCOUNT", ""),
            password: env_or("SMTP_PASSWORD", ""),
            sender: env_or("SMTP_SENDER", ""),
        };
        if smtp.host.is_empty() {
            tracing::warn!("SMTP_HOST not set; forgot-password mail delivery will fail");
        }

        let captcha_case_sensitive = env_or("CAPTCHA_CASE_SENSITIVE", "false") == "true";

        Ok(Config {
            server_port,
            database_url,
            jwt_secret,
            token_expire_secs,
            smtp,
            captcha_case_sensitive,
        })
    }

    /// Wrap the config for shared ownership inside `AppState`.
    pub fn into_shared(self) -> Arc<Config> {
        Arc::new(self)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Config construction is exercised directly; env-based loading is covered
    // by the defaults used in integration tests.
    #[test]
    fn test_config_is_cloneable_for_state() {
        let config = Config {
            server_port: 3000,
            database_url: "postgres://localhost/aster".to_string(),
            jwt_secret: "secret".to_string(),
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
        let shared = config.into_shared();
        assert_eq!(shared.token_expire_secs, 3600);
    }
}
