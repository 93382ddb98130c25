//! Wizard store
//!
//! Owns the current state snapshot and runs every dispatched action through
//! [`reduce`]. The reducer stays pure; this wrapper carries the lifecycle:
//! initial-state injection, serialized dispatch and change notification.
//!
//! Snapshots are handed out as `Arc<WizardState>` and never mutated after
//! publication, so a caller may keep an old snapshot across later dispatches.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::action::Action;
use crate::reducer::{ReduceError, reduce};
use crate::state::WizardState;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&WizardState)>;

/// Holds the wizard state and serializes transitions
pub struct Store {
    state: Arc<WizardState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    dispatch_count: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dispatch_count", &self.dispatch_count)
            .finish()
    }
}

impl Store {
    /// Create a store holding the default wizard state
    pub fn new() -> Self {
        Self::with_state(WizardState::default())
    }

    /// Create a store starting from an injected state
    pub fn with_state(initial: WizardState) -> Self {
        Self {
            state: Arc::new(initial),
            listeners: Vec::new(),
            next_subscription: 0,
            dispatch_count: 0,
        }
    }

    /// Current state snapshot
    #[inline]
    pub fn state(&self) -> Arc<WizardState> {
        Arc::clone(&self.state)
    }

    /// Number of actions accepted so far
    #[inline]
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }

    /// Reduce `action` against the current state and publish the result.
    ///
    /// Every subscriber is called with the new snapshot, in subscription
    /// order.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error if the transition is rejected. The current
    /// snapshot is kept and no subscriber is notified.
    pub fn dispatch(&mut self, action: Action) -> Result<Arc<WizardState>, ReduceError> {
        let next = match reduce(&self.state, &action) {
            Ok(next) => next,
            Err(err) => {
                warn!(action = action.name(), error = %err, "action rejected");
                return Err(err);
            }
        };

        self.dispatch_count += 1;
        debug!(action = action.name(), seq = self.dispatch_count, "action applied");

        self.state = Arc::new(next);
        for (_, listener) in &mut self.listeners {
            listener(self.state.as_ref());
        }

        Ok(self.state())
    }

    /// Register a listener called after each accepted dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&WizardState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Replace the state wholesale, bypassing the reducer.
    ///
    /// Used to resume a saved session. Subscribers are not notified.
    pub fn replace_state(&mut self, state: WizardState) {
        self.state = Arc::new(state);
    }
}
