//! Email provider trait.

use crate::error::Result;

/// Body of an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    /// HTML document
    Html(String),
    /// Plain text
    Text(String),
}

impl EmailBody {
    /// Raw body text.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Html(body) | Self::Text(body) => body,
        }
    }
}

/// A fully rendered email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Sender display name
    pub from_name: String,
    /// Sender address
    pub from_address: String,
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Body
    pub body: EmailBody,
}

/// Email provider.
///
/// This trait abstracts over email delivery (SMTP relay, console output).
pub trait EmailProvider: Send + Sync + 'static {
    /// Send one email.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - An address cannot be parsed
    /// - The message cannot be built
    /// - The relay rejects or cannot be reached
    fn send(&self, email: &OutgoingEmail) -> impl std::future::Future<Output = Result<()>> + Send;
}
