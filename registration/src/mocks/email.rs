//! Mock email provider for testing.

use crate::error::{RegistrationError, Result};
use crate::providers::{EmailProvider, OutgoingEmail};
use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock email provider.
///
/// Records every email it accepts. Recipients registered with
/// [`fail_for`](MockEmailProvider::fail_for) are refused.
#[derive(Debug, Clone, Default)]
pub struct MockEmailProvider {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    failing_recipients: Arc<Mutex<HashSet<String>>>,
}

impl MockEmailProvider {
    /// Create a mock email provider that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse mail to `recipient` from now on.
    pub fn fail_for(&self, recipient: impl Into<String>) {
        if let Ok(mut failing) = self.failing_recipients.lock() {
            failing.insert(recipient.into());
        }
    }

    /// Emails accepted so far, in send order.
    #[must_use]
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

impl EmailProvider for MockEmailProvider {
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<()>> + Send {
        let refused = self
            .failing_recipients
            .lock()
            .map(|failing| failing.contains(&email.to))
            .unwrap_or(false);
        let sent = Arc::clone(&self.sent);
        let email = email.clone();

        async move {
            if refused {
                return Err(RegistrationError::Email(format!("mailbox {} unavailable", email.to)));
            }
            sent.lock()
                .map_err(|_| RegistrationError::Email("mock lock poisoned".to_string()))?
                .push(email);
            Ok(())
        }
    }
}
