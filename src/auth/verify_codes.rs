/**
 * Verification Code Cache
 *
 * Short-lived email verification codes for the forgot/reset-password flow.
 * Codes live in a process-wide TTL cache keyed by email address; nothing is
 * persisted to durable storage.
 *
 * # Semantics
 *
 * - A code is 6 random alphanumeric characters and lives for 15 minutes.
 * - Requesting a code again inside the TTL window returns the SAME code
 *   (idempotent resend); a new one is issued only once the old has expired.
 * - A successful password reset removes the entry so the code cannot be
 *   replayed inside the remaining window.
 */

use std::time::Duration;

use moka::future::Cache;
use rand::Rng;

/// Default verification-code lifetime.
pub const CODE_TTL: Duration = Duration::from_secs(15 * 60);

/// Length of generated codes.
pub const CODE_LEN: usize = 6;

const CODE_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// TTL cache mapping email address to its active verification code
#[derive(Clone)]
pub struct VerifyCodeCache {
    codes: Cache<String, String>,
}

impl VerifyCodeCache {
    /// Create a cache with the standard 15-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(CODE_TTL)
    }

    /// Create a cache with a custom TTL. Used by tests to exercise expiry.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            codes: Cache::builder().time_to_live(ttl).build(),
        }
    }

    /// Return the unexpired code for `email`, or issue and cache a fresh one.
    pub async fn get_or_issue(&self, email: &str) -> String {
        if let Some(code) = self.codes.get(email).await {
            tracing::debug!("reusing unexpired verification code for {}", email);
            return code;
        }
        let code = random_code(CODE_LEN);
        self.codes.insert(email.to_string(), code.clone()).await;
        code
    }

    /// Check a submitted code against the cached one. Missing or expired
    /// entries never match.
    pub async fn matches(&self, email: &str, submitted: &str) -> bool {
        match self.codes.get(email).await {
            Some(code) => code == submitted,
            None => false,
        }
    }

    /// Remove the entry for `email`, if any. Called after a successful reset.
    pub async fn invalidate(&self, email: &str) {
        self.codes.invalidate(email).await;
    }
}

impl Default for VerifyCodeCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random code from an unambiguous alphanumeric alphabet
/// (no 0/O or 1/I, since the code is retyped from an email).
pub fn random_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CODE_CHARS[rng.random_range(0..CODE_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_random_code_shape() {
        let code = random_code(CODE_LEN);
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.bytes().all(|b| CODE_CHARS.contains(&b)));
    }

    #[tokio::test]
    async fn test_code_reused_within_ttl() {
        let cache = VerifyCodeCache::new();
        let first = cache.get_or_issue("a@x.com").await;
        let second = cache.get_or_issue("a@x.com").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_new_code_after_expiry() {
        let cache = VerifyCodeCache::with_ttl(Duration::from_millis(50));
        let first = cache.get_or_issue("a@x.com").await;
        tokio::time::sleep(Duration::from_millis(120)).await;
        let second = cache.get_or_issue("a@x.com").await;
        // 32^6 combinations; a collision here would be astronomically unlucky
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_matches_and_invalidate() {
        let cache = VerifyCodeCache::new();
        let code = cache.get_or_issue("a@x.com").await;
        assert!(cache.matches("a@x.com", &code).await);
        assert!(!cache.matches("a@x.com", "WRONG1").await);
        assert!(!cache.matches("b@x.com", &code).await);

        cache.invalidate("a@x.com").await;
        assert!(!cache.matches("a@x.com", &code).await);
    }
}
