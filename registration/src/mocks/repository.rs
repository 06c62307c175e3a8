//! Mock registration repository for testing.

use crate::error::{RegistrationError, Result};
use crate::model::{Registration, RegistrationId};
use crate::providers::RegistrationRepository;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock registration repository.
///
/// Uses in-memory storage. Ids start at 1. Flip [`fail_inserts`] to
/// simulate an unavailable database.
///
/// [`fail_inserts`]: MockRegistrationRepository::fail_inserts
#[derive(Debug, Clone, Default)]
pub struct MockRegistrationRepository {
    rows: Arc<Mutex<Vec<Registration>>>,
    failing: Arc<AtomicBool>,
}

impl MockRegistrationRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following insert and ping fail (or succeed again).
    pub fn fail_inserts(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of stored registrations, in insertion order.
    #[must_use]
    pub fn registrations(&self) -> Vec<Registration> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }
}

impl RegistrationRepository for MockRegistrationRepository {
    fn insert(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<RegistrationId>> + Send {
        let rows = Arc::clone(&self.rows);
        let failing = self.failing.load(Ordering::SeqCst);
        let registration = registration.clone();

        async move {
            if failing {
                return Err(RegistrationError::Database("connection refused".to_string()));
            }

            let mut rows = rows
                .lock()
                .map_err(|_| RegistrationError::Database("mock lock poisoned".to_string()))?;
            rows.push(registration);
            let id = i64::try_from(rows.len())
                .map_err(|e| RegistrationError::Database(e.to_string()))?;
            Ok(RegistrationId(id))
        }
    }

    fn ping(&self) -> impl Future<Output = Result<()>> + Send {
        let failing = self.failing.load(Ordering::SeqCst);

        async move {
            if failing {
                Err(RegistrationError::Database("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }
}
