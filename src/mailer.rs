/**
 * Verification Mailer
 *
 * Sends templated HTML mail over SMTP: the forgot-password verification
 * code, and the admin "test delivery" mail from the settings page.
 *
 * # Error Handling
 *
 * The transport is built per send from the configured relay settings. Any
 * failure (unset host, bad credentials, refused connection) surfaces as an
 * `ApiError` that renders as a server-error envelope telling the caller to
 * check the SMTP configuration; the underlying error is logged.
 */

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::ApiError;
use crate::server::config::SmtpConfig;

/// SMTP mailer bound to the configured relay
#[derive(Clone)]
pub struct Mailer {
    smtp: SmtpConfig,
}

impl Mailer {
    pub fn new(smtp: SmtpConfig) -> Self {
        Self { smtp }
    }

    /// Send the forgot-password verification mail.
    pub async fn send_verify_code(
        &self,
        to: &str,
        username: &str,
        code: &str,
    ) -> Result<(), ApiError> {
        let html = forget_pwd_email_html(username, code);
        self.send_html(to, "忘记密码验证", html).await
    }

    /// Send an HTML mail to a single recipient.
    pub async fn send_html(
        &self,
        to: &str,
        subject: &str,
        html: String,
    ) -> Result<(), ApiError> {
        let from = self.sender_mailbox()?;
        let message = Message::builder()
            .from(from)
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)?;

        let transport: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp.host)?
                .port(self.smtp.port)
                .credentials(Credentials::new(
                    self.smtp.account.clone(),
                    self.smtp.password.clone(),
                ))
                .build();

        transport.send(message).await?;
        tracing::info!("mail sent to {} ({})", to, subject);
        Ok(())
    }

    fn sender_mailbox(&self) -> Result<Mailbox, ApiError> {
        let address = self.smtp.account.parse()?;
        let name = if self.smtp.sender.is_empty() {
            None
        } else {
            Some(self.smtp.sender.clone())
        };
        Ok(Mailbox::new(name, address))
    }
}

/// Render the forgot-password mail body.
///
/// Kept as a plain format template: one message type does not justify a
/// templating engine.
pub fn forget_pwd_email_html(username: &str, code: &str) -> String {
    format!(
        r#"<div style="font-family: sans-serif; max-width: 560px; margin: 0 auto;">
  <h2>密码重置验证</h2>
  <p>{username}，您好：</p>
  <p>您正在进行密码重置操作，本次验证码为：</p>
  <p style="font-size: 28px; letter-spacing: 6px; font-weight: bold;">{code}</p>
  <p>验证码 15 分钟内有效，请尽快完成验证。若非本人操作，请忽略本邮件。</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_embeds_username_and_code() {
        let html = forget_pwd_email_html("alice", "AB3D2F");
        assert!(html.contains("alice"));
        assert!(html.contains("AB3D2F"));
        assert!(html.contains("15 分钟"));
    }

    #[test]
    fn test_sender_mailbox_rejects_unconfigured_account() {
        let mailer = Mailer::new(SmtpConfig {
            host: String::new(),
            port: 465,
            account: String::new(),
            password: String::new(),
            sender: String::new(),
        });
        // An empty account cannot parse as an address; delivery must fail
        // before any network traffic happens.
        assert!(mailer.sender_mailbox().is_err());
    }

    #[test]
    fn test_sender_mailbox_with_display_name() {
        let mailer = Mailer::new(SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 465,
            account: "blog@example.com".to_string(),
            password: "secret".to_string(),
            sender: "Aster Blog".to_string(),
        });
        let mailbox = mailer.sender_mailbox().unwrap();
        assert_eq!(mailbox.email.to_string(), "blog@example.com");
    }
}
