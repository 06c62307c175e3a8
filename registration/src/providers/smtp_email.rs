//! SMTP email provider implementation using Lettre.

use crate::constants::DEFAULT_SMTP_TIMEOUT;
use crate::error::{RegistrationError, Result};
use crate::providers::{EmailBody, EmailProvider, OutgoingEmail};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

/// Port that speaks TLS from the first byte. Every other port upgrades with STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP email provider using Lettre.
///
/// Sends through an authenticated relay such as Gmail with an app password.
///
/// # Examples
///
/// ```ignore
/// use fest_registration::providers::SmtpEmailProvider;
///
/// let provider = SmtpEmailProvider::new(
///     "smtp.gmail.com",
///     587,
///     "fest@gmail.com".to_string(),
///     "app_password".to_string(),
/// )?;
/// ```
#[derive(Clone)]
pub struct SmtpEmailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailProvider {
    /// Create a new SMTP email provider with [`DEFAULT_SMTP_TIMEOUT`].
    ///
    /// No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns error if the relay's TLS parameters cannot be built.
    pub fn new(
        smtp_server: &str,
        smtp_port: u16,
        smtp_username: String,
        smtp_password: String,
    ) -> Result<Self> {
        Self::with_timeout(
            smtp_server,
            smtp_port,
            smtp_username,
            smtp_password,
            DEFAULT_SMTP_TIMEOUT,
        )
    }

    /// Create a new SMTP email provider whose connect and command timeout
    /// is `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the relay's TLS parameters cannot be built.
    pub fn with_timeout(
        smtp_server: &str,
        smtp_port: u16,
        smtp_username: String,
        smtp_password: String,
        timeout: Duration,
    ) -> Result<Self> {
        let builder = if smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_server)
        }
        .map_err(|e| RegistrationError::Email(format!("SMTP relay error: {e}")))?;

        let transport = builder
            .port(smtp_port)
            .credentials(Credentials::new(smtp_username, smtp_password))
            .timeout(Some(timeout))
            .build();

        Ok(Self { transport })
    }

    /// Turn a rendered email into a MIME message.
    pub(crate) fn build_message(email: &OutgoingEmail) -> Result<Message> {
        let from: Address = email.from_address.parse().map_err(|e| {
            RegistrationError::InvalidAddress(format!("from {}: {e}", email.from_address))
        })?;
        let to: Address = email
            .to
            .parse()
            .map_err(|e| RegistrationError::InvalidAddress(format!("to {}: {e}", email.to)))?;

        let (content_type, body) = match &email.body {
            EmailBody::Html(body) => (ContentType::TEXT_HTML, body.clone()),
            EmailBody::Text(body) => (ContentType::TEXT_PLAIN, body.clone()),
        };

        Message::builder()
            .from(Mailbox::new(Some(email.from_name.clone()), from))
            .to(Mailbox::new(None, to))
            .subject(email.subject.clone())
            .header(content_type)
            .body(body)
            .map_err(|e| RegistrationError::Email(format!("Failed to build email: {e}")))
    }
}

impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let message = Self::build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| RegistrationError::Email(format!("Failed to send email: {e}")))?;

        tracing::debug!(to = %email.to, subject = %email.subject, "Email handed to SMTP relay");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn receipt(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from_name: "Electryonz 2026".into(),
            from_address: "fest@gmail.com".into(),
            to: to.into(),
            subject: "🎉 Registration Confirmed — Electryonz 2026".into(),
            body: EmailBody::Text("hello".into()),
        }
    }

    #[test]
    fn test_build_message_sets_headers() {
        let message = SmtpEmailProvider::build_message(&receipt("a@b.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("To: a@b.com"));
        assert!(raw.contains("Content-Type: text/plain"));
        assert!(raw.contains("fest@gmail.com"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let result = SmtpEmailProvider::build_message(&receipt("not an address"));
        assert!(matches!(result, Err(RegistrationError::InvalidAddress(_))));
    }
}
