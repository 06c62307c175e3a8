//! Form controller reducer.
//!
//! Drives the registration page: catalog selection and filtering, field
//! validation, the payment step, the success dialog and toasts.
//!
//! # Flow
//!
//! 1. `ToggleEvent` / `UpdateField` while the participant fills the form
//! 2. `Register`: validate, snapshot the submission, open the payment step
//! 3. `ConfirmPayment`: one call to the registration client
//! 4. `SubmissionSucceeded` opens the success dialog,
//!    `SubmissionFailed` shows a toast and keeps the payment step open
//! 5. `CloseSuccess` resets the form
//!
//! A failed submission never opens the success dialog, whatever the cause.

use crate::actions::FormAction;
use crate::constants::messages;
use crate::environment::FormEnvironment;
use crate::payload::RegistrationRequest;
use crate::providers::RegistrationClient;
use crate::state::{Confirmation, FormState, Modal, PendingSubmission, Toast};
use crate::validation::validate;
use fest_core::effect::Effect;
use fest_core::reducer::Reducer;
use fest_core::{smallvec, SmallVec};
use std::sync::Arc;

/// Form controller reducer.
#[derive(Debug, Clone)]
pub struct FormReducer<C> {
    _phantom: std::marker::PhantomData<C>,
}

impl<C> FormReducer<C> {
    /// Create a new form reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C> Default for FormReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FormReducer<C>
where
    C: RegistrationClient,
{
    /// Show a toast and schedule its expiry.
    fn show_toast(
        state: &mut FormState,
        message: impl Into<String>,
        env: &FormEnvironment<C>,
    ) -> Effect<FormAction> {
        state.toast_generation += 1;
        let generation = state.toast_generation;
        state.toast = Some(Toast {
            message: message.into(),
            generation,
        });

        Effect::Delay {
            duration: env.config.toast_duration,
            action: Box::new(FormAction::ToastExpired { generation }),
        }
    }

    fn submit(state: &mut FormState, env: &FormEnvironment<C>) -> Effect<FormAction> {
        if state.submitting {
            return Effect::None;
        }
        let Some(pending) = state.pending.as_ref() else {
            return Effect::None;
        };

        let transaction_id = state.transaction_id.trim();
        if transaction_id.is_empty() {
            return Self::show_toast(state, messages::MISSING_TRANSACTION_ID, env);
        }

        let request = RegistrationRequest::from_submission(
            &pending.details,
            &pending.events,
            pending.total,
            transaction_id,
        );
        state.submitting = true;

        let client = Arc::clone(&env.client);
        Effect::Future(Box::pin(async move {
            match client.submit(&request).await {
                Ok(response) => Some(FormAction::SubmissionSucceeded { response }),
                Err(error) => {
                    tracing::warn!(error = %error, "Registration submission failed");
                    Some(FormAction::SubmissionFailed {
                        message: error.user_message().to_string(),
                    })
                },
            }
        }))
    }

    fn fail_submission(
        state: &mut FormState,
        message: &str,
        env: &FormEnvironment<C>,
    ) -> Effect<FormAction> {
        state.submitting = false;
        let message = if message.trim().is_empty() {
            messages::FALLBACK_FAILURE
        } else {
            message
        };
        Self::show_toast(state, message, env)
    }
}

impl<C> Reducer for FormReducer<C>
where
    C: RegistrationClient,
{
    type State = FormState;
    type Action = FormAction;
    type Environment = FormEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let effect = match action {
            FormAction::ToggleEvent { id } => {
                if env.catalog.contains(&id) && !state.selected.remove(&id) {
                    state.selected.insert(id);
                }
                Effect::None
            },

            FormAction::SetCategory(filter) => {
                state.category = filter;
                Effect::None
            },

            FormAction::SetSearch(search) => {
                state.search = search;
                Effect::None
            },

            FormAction::UpdateField { field, value } => {
                state.fields.set(field, value);
                Effect::None
            },

            FormAction::Register => match validate(&state.fields, state.selected.len()) {
                Err(error) => Self::show_toast(state, error.to_string(), env),
                Ok(details) => {
                    let events: Vec<_> = env.catalog.selected(&state.selected).cloned().collect();
                    let total = events.iter().map(|e| e.fee).sum();
                    state.pending = Some(PendingSubmission {
                        details,
                        events,
                        total,
                    });
                    state.modal = Modal::Payment;
                    Effect::None
                },
            },

            FormAction::SetTransactionId(transaction_id) => {
                state.transaction_id = transaction_id;
                Effect::None
            },

            FormAction::ConfirmPayment => Self::submit(state, env),

            FormAction::SubmissionSucceeded { response } if !response.success => {
                Self::fail_submission(state, &response.message, env)
            },

            FormAction::SubmissionSucceeded { response } => {
                state.submitting = false;
                if let Some(pending) = state.pending.as_ref() {
                    state.confirmation = Some(Confirmation {
                        name: pending.details.name.clone(),
                        email: pending.details.email.clone(),
                        events: pending.events.iter().map(|e| e.name.clone()).collect(),
                        amount: pending.total,
                        transaction_id: state.transaction_id.trim().to_string(),
                        registration_id: response.id,
                    });
                    state.modal = Modal::Success;
                }
                Effect::None
            },

            FormAction::SubmissionFailed { message } => Self::fail_submission(state, &message, env),

            FormAction::CloseModal => {
                if state.modal == Modal::Payment {
                    state.modal = Modal::None;
                }
                state.submitting = false;
                Effect::None
            },

            FormAction::CloseSuccess => {
                state.modal = Modal::None;
                state.reset();
                Effect::None
            },

            FormAction::ShowToast { message } => Self::show_toast(state, message, env),

            FormAction::ToastExpired { generation } => {
                if state.toast.as_ref().is_some_and(|t| t.generation == generation) {
                    state.toast = None;
                }
                Effect::None
            },

            FormAction::UpiIdCopied { copied } => {
                let message = if copied {
                    messages::UPI_COPIED.to_string()
                } else {
                    env.config.upi_id.clone()
                };
                Self::show_toast(state, message, env)
            },
        };

        smallvec![effect]
    }
}
