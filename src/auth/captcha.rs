/**
 * Captcha Generation and Verification
 *
 * Image-based challenges that deter automated login attempts. Each challenge
 * is an opaque uuid paired with the expected answer, stored in a short-TTL
 * cache; the rendered image travels to the caller as a base64 data URL it
 * can embed directly in an `<img>` tag.
 *
 * # One-Shot Semantics
 *
 * Verification always CONSUMES the challenge, match or not. A wrong answer
 * cannot be retried against the same id, and a correct answer cannot be
 * replayed.
 */

use std::time::Duration;

use captcha_rs::CaptchaBuilder;
use moka::future::Cache;
use uuid::Uuid;

/// Challenge lifetime. Long enough to type four characters.
pub const CAPTCHA_TTL: Duration = Duration::from_secs(5 * 60);

const CAPTCHA_LEN: usize = 4;
const CAPTCHA_WIDTH: u32 = 130;
const CAPTCHA_HEIGHT: u32 = 48;

/// A freshly issued challenge
#[derive(Debug)]
pub struct Challenge {
    /// Opaque identifier the caller echoes back at login
    pub id: String,
    /// `data:image/...;base64,` URL of the rendered challenge
    pub image_url: String,
}

/// Store of outstanding captcha challenges
#[derive(Clone)]
pub struct CaptchaStore {
    answers: Cache<String, String>,
}

impl CaptchaStore {
    pub fn new() -> Self {
        Self {
            answers: Cache::builder().time_to_live(CAPTCHA_TTL).build(),
        }
    }

    /// Generate a new image challenge and remember its answer.
    pub async fn issue(&self) -> Challenge {
        let captcha = CaptchaBuilder::new()
            .length(CAPTCHA_LEN)
            .width(CAPTCHA_WIDTH)
            .height(CAPTCHA_HEIGHT)
            .dark_mode(false)
            .complexity(4)
            .compression(40)
            .build();

        let id = Uuid::new_v4().to_string();
        self.answers.insert(id.clone(), captcha.text.clone()).await;

        Challenge {
            id,
            image_url: captcha.to_base64(),
        }
    }

    /// Verify a submitted answer, consuming the challenge regardless of the
    /// outcome. Unknown or expired ids never match.
    pub async fn verify(&self, id: &str, submitted: &str, case_sensitive: bool) -> bool {
        let Some(expected) = self.answers.remove(id).await else {
            return false;
        };
        if case_sensitive {
            expected == submitted
        } else {
            expected.eq_ignore_ascii_case(submitted)
        }
    }

    #[cfg(test)]
    async fn put(&self, id: &str, answer: &str) {
        self.answers.insert(id.to_string(), answer.to_string()).await;
    }
}

impl Default for CaptchaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issue_returns_embeddable_image() {
        let store = CaptchaStore::new();
        let challenge = store.issue().await;
        assert!(!challenge.id.is_empty());
        assert!(challenge.image_url.starts_with("data:image"));
    }

    #[tokio::test]
    async fn test_correct_answer_verifies_once() {
        let store = CaptchaStore::new();
        store.put("id-1", "AB3D").await;
        assert!(store.verify("id-1", "AB3D", true).await);
        // consumed: the same answer no longer verifies
        assert!(!store.verify("id-1", "AB3D", true).await);
    }

    #[tokio::test]
    async fn test_wrong_answer_also_consumes() {
        let store = CaptchaStore::new();
        store.put("id-2", "AB3D").await;
        assert!(!store.verify("id-2", "XXXX", true).await);
        assert!(!store.verify("id-2", "AB3D", true).await);
    }

    #[tokio::test]
    async fn test_case_insensitive_mode() {
        let store = CaptchaStore::new();
        store.put("id-3", "Ab3d").await;
        assert!(store.verify("id-3", "aB3D", false).await);

        store.put("id-4", "Ab3d").await;
        assert!(!store.verify("id-4", "aB3D", true).await);
    }

    #[tokio::test]
    async fn test_unknown_id_never_matches() {
        let store = CaptchaStore::new();
        assert!(!store.verify("no-such-id", "ABCD", false).await);
    }
}
