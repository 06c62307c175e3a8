//! Console email provider for development and testing.

use crate::error::Result;
use crate::providers::{EmailBody, EmailProvider, OutgoingEmail};
use tracing::info;

/// Console email provider.
///
/// Logs emails instead of sending them. Used when no SMTP credentials are
/// configured.
#[derive(Clone, Debug, Default)]
pub struct ConsoleEmailProvider;

impl ConsoleEmailProvider {
    /// Create a new console email provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EmailProvider for ConsoleEmailProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let kind = match email.body {
            EmailBody::Html(_) => "html",
            EmailBody::Text(_) => "text",
        };

        info!(
            from = %format!("{} <{}>", email.from_name, email.from_address),
            to = %email.to,
            subject = %email.subject,
            kind,
            "📧 Email (Development Mode)"
        );
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║ To: {:<57}║", email.to);
        println!("║ Subject: {}", email.subject);
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!("{}\n", email.body.content().trim());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_send_always_succeeds() {
        let email = OutgoingEmail {
            from_name: "Fest Bot".into(),
            from_address: "bot@fest.in".into(),
            to: "ops@fest.in".into(),
            subject: "hello".into(),
            body: EmailBody::Text("body".into()),
        };
        assert!(ConsoleEmailProvider::new().send(&email).await.is_ok());
    }
}
