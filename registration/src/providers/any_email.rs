//! Runtime choice between the SMTP and console providers.

use crate::error::Result;
use crate::providers::{ConsoleEmailProvider, EmailProvider, OutgoingEmail, SmtpEmailProvider};

/// Email provider picked from configuration at startup.
#[derive(Clone)]
pub enum AnyEmailProvider {
    /// Real delivery
    Smtp(SmtpEmailProvider),
    /// Log only
    Console(ConsoleEmailProvider),
}

impl AnyEmailProvider {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Smtp(_) => "smtp",
            Self::Console(_) => "console",
        }
    }
}

impl EmailProvider for AnyEmailProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        match self {
            Self::Smtp(provider) => provider.send(email).await,
            Self::Console(provider) => provider.send(email).await,
        }
    }
}

impl From<SmtpEmailProvider> for AnyEmailProvider {
    fn from(provider: SmtpEmailProvider) -> Self {
        Self::Smtp(provider)
    }
}

impl From<ConsoleEmailProvider> for AnyEmailProvider {
    fn from(provider: ConsoleEmailProvider) -> Self {
        Self::Console(provider)
    }
}
