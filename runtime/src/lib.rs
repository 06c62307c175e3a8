//! # Fest Runtime
//!
//! Runtime implementation for the fest registration reducers.
//!
//! This crate provides the [`Store`](store::Store), which owns a reducer's
//! state, runs the reducer for every action, executes the returned effects on
//! Tokio and feeds the actions they produce back into the reducer.
//!
//! ## Example
//!
//! ```ignore
//! use fest_runtime::Store;
//!
//! let store = Store::new(FormState::default(), FormReducer::new(), environment);
//!
//! store.send(FormAction::ToggleEvent { id: EventId::new("chess") }).await;
//!
//! let total = store.state(|s| s.total(&catalog)).await;
//! ```

use fest_core::{effect::Effect, reducer::Reducer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Timeout waiting for terminal action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;
pub use store::Store;

/// Health check status levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HealthStatus {
    /// Component is fully operational
    Healthy,

    /// Component is operational but experiencing issues
    Degraded,

    /// Component is not operational
    Unhealthy,
}

impl HealthStatus {
    /// Returns `true` if the component can serve traffic.
    #[must_use]
    pub const fn is_operational(self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Degraded => write!(f, "degraded"),
            Self::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Health report for a single component (database, mail relay, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    /// Component name
    pub component: String,
    /// Current status
    pub status: HealthStatus,
    /// Human-readable detail
    pub message: Option<String>,
    /// Extra key/value diagnostics
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl HealthCheck {
    /// Healthy component.
    #[must_use]
    pub fn healthy(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Healthy,
            message: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Degraded component with a reason.
    #[must_use]
    pub fn degraded(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Degraded,
            message: Some(message.into()),
            metadata: BTreeMap::new(),
        }
    }

    /// Unhealthy component with a reason.
    #[must_use]
    pub fn unhealthy(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Unhealthy,
            message: Some(message.into()),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a diagnostic key/value pair.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{Arc, Duration, Effect, Reducer, RwLock, StoreError};
    use std::future::Future;
    use std::pin::Pin;
    use tokio::sync::broadcast;

    /// Boxed future that drives one effect to completion.
    type EffectRun = Pin<Box<dyn Future<Output = ()> + Send>>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Cloning a store is cheap and every clone shares the same state.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        /// Every action produced by an effect is broadcast here before it is
        /// reduced. HTTP handlers use it to wait for a terminal action.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// The action broadcast holds 16 actions; use
        /// [`Store::with_broadcast_capacity`] for chattier reducers.
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
        }

        /// Create a store with a custom action broadcast capacity.
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer under the state write lock, then spawns every
        /// returned effect. Returns once the effects are spawned, not when
        /// they finish.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) {
            tracing::debug!("Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let effects = {
                let mut state = self.state.write().await;
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();
                self.reducer.reduce(&mut state, action, &self.environment)
            };

            tracing::trace!("Reducer returned {} effects", effects.len());
            for effect in effects {
                self.spawn_effect(effect);
            }
        }

        /// Send an action and wait for a matching result action
        ///
        /// Subscribes to the action broadcast BEFORE sending, so a fast
        /// effect cannot slip its result past the subscription.
        ///
        /// # Errors
        ///
        /// - [`StoreError::Timeout`]: no matching action arrived in time
        /// - [`StoreError::ChannelClosed`]: the broadcast channel closed
        pub async fn send_and_wait_for<F>(
            &self,
            action: A,
            predicate: F,
            timeout: Duration,
        ) -> Result<A, StoreError>
        where
            F: Fn(&A) -> bool,
        {
            let mut rx = self.action_broadcast.subscribe();

            self.send(action).await;

            tokio::time::timeout(timeout, async {
                loop {
                    match rx.recv().await {
                        Ok(action) if predicate(&action) => return Ok(action),
                        Ok(_) => {},
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            // If the terminal action was dropped, the timeout catches it
                            tracing::warn!(skipped, "Action observer lagged");
                        },
                        Err(broadcast::error::RecvError::Closed) => {
                            return Err(StoreError::ChannelClosed);
                        },
                    }
                }
            })
            .await
            .map_err(|_| StoreError::Timeout)?
        }

        /// Subscribe to all actions produced by effects.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let selected = store.state(|s| s.selected.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Spawn an effect onto the Tokio runtime.
        fn spawn_effect(&self, effect: Effect<A>) {
            if effect.is_none() {
                tracing::trace!("Executing Effect::None (no-op)");
                metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                return;
            }
            tokio::spawn(self.run_effect(effect));
        }

        /// Build the future that executes one effect.
        ///
        /// The returned future completes when the effect and the reduction
        /// of the action it produced are done. Effects spawned by that
        /// reduction are not awaited.
        fn run_effect(&self, effect: Effect<A>) -> EffectRun {
            match effect {
                Effect::None => Box::pin(async {}),
                Effect::Future(fut) => {
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    let store = self.clone();
                    Box::pin(async move {
                        if let Some(action) = fut.await {
                            store.feed_back(action).await;
                        } else {
                            tracing::trace!("Effect::Future completed with no action");
                        }
                    })
                },
                Effect::Delay { duration, action } => {
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                    let store = self.clone();
                    Box::pin(async move {
                        tokio::time::sleep(duration).await;
                        store.feed_back(*action).await;
                    })
                },
                Effect::Parallel(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);
                    let runs: Vec<EffectRun> =
                        effects.into_iter().map(|e| self.run_effect(e)).collect();
                    Box::pin(async move {
                        futures::future::join_all(runs).await;
                    })
                },
                Effect::Sequential(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "sequential")
                        .increment(1);
                    let store = self.clone();
                    Box::pin(async move {
                        for effect in effects {
                            store.run_effect(effect).await;
                        }
                    })
                },
            }
        }

        /// Broadcast an effect-produced action, then reduce it.
        async fn feed_back(&self, action: A) {
            // No subscribers is the normal case outside request/response flows
            let _ = self.action_broadcast.send(action.clone());
            self.send(action).await;
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}
