//! The store container and its dispatch/notify round.
//!
//! State is held as an `Rc` so that change detection is a pointer comparison.
//! Interior mutability keeps every operation on `&self`, which lets
//! listeners call back into the store while a round is running.

use super::error::DispatchError;
use super::subscription::{Listener, Subscription};
use crate::core::{Action, ActionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Outcome of a successful dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// The action returned a new state, now at `revision`.
    Changed { revision: u64 },

    /// The action returned the current state; nothing was notified.
    Unchanged,
}

impl Dispatched {
    /// Whether the dispatch committed a new state.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Metadata about the most recent state-changing dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Kind of the action that produced the change
    pub kind: ActionKind,
    /// Revision the store moved to
    pub revision: u64,
    /// When the new state was committed
    pub timestamp: DateTime<Utc>,
}

/// Counters describing a store's activity so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Current revision (number of committed changes)
    pub revision: u64,
    /// Dispatches whose action applied successfully
    pub dispatched: u64,
    /// Dispatches that returned the current state
    pub unchanged: u64,
    /// Listener invocations that completed successfully
    pub notifications: u64,
}

/// A single slot of application state updated only through actions.
///
/// The store owns the current state as an `Rc<S>` plus an ordered list of
/// subscriptions. [`dispatch`](Store::dispatch) asks the action for the next
/// state and, if the action returned a different allocation, commits it and
/// notifies every subscription whose filter matches the action's kind.
///
/// All methods take `&self`, so listeners may dispatch, subscribe or
/// unsubscribe while being notified. A nested dispatch runs to completion
/// before the outer round moves on to its next listener, which will then
/// receive the snapshot taken for the outer round, not the newer state.
///
/// Listener failures are not isolated: the first failing listener aborts the
/// rest of the round, and the committed state is not rolled back.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use unistore::core::{Action, ActionError, ActionKind};
/// use unistore::store::{listener, Store};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Counter {
///     count: i64,
/// }
///
/// struct Increment;
///
/// impl Action<Counter> for Increment {
///     fn kind(&self) -> ActionKind {
///         ActionKind::of::<Self>()
///     }
///
///     fn apply(&self, state: &Rc<Counter>) -> Result<Rc<Counter>, ActionError> {
///         Ok(Rc::new(Counter { count: state.count + 1 }))
///     }
/// }
///
/// let store = Store::new(Counter::default());
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// store.subscribe_to(
///     ActionKind::of::<Increment>(),
///     listener(move |s: &Counter| {
///         sink.borrow_mut().push(s.count);
///         Ok(())
///     }),
/// );
///
/// store.dispatch(&Increment).unwrap();
/// store.dispatch(&Increment).unwrap();
///
/// assert_eq!(store.snapshot().count, 2);
/// assert_eq!(*seen.borrow(), vec![1, 2]);
/// ```
pub struct Store<S> {
    state: RefCell<Rc<S>>,
    subscriptions: RefCell<Vec<Subscription<S>>>,
    last_change: RefCell<Option<ChangeRecord>>,
    stats: Cell<StoreStats>,
}

impl<S: Clone> Store<S> {
    /// Create a store holding `initial`.
    pub fn new(initial: S) -> Self {
        Self::from_rc(Rc::new(initial))
    }

    /// Create a store around an already shared state value.
    pub fn from_rc(initial: Rc<S>) -> Self {
        Self {
            state: RefCell::new(initial),
            subscriptions: RefCell::new(Vec::new()),
            last_change: RefCell::new(None),
            stats: Cell::new(StoreStats::default()),
        }
    }

    /// Apply `action` to the current state and notify on change.
    ///
    /// If `apply` fails, the error is returned and the state is untouched.
    /// If `apply` returns the current `Rc`, this is a no-op and no listener
    /// runs. Otherwise the new state is committed first and the matching
    /// listeners are then called in subscription order.
    pub fn dispatch<A>(&self, action: &A) -> Result<Dispatched, DispatchError>
    where
        A: Action<S> + ?Sized,
    {
        let kind = action.kind();
        let current = self.current();

        let next = action
            .apply(&current)
            .map_err(|source| DispatchError::Action {
                kind: kind.clone(),
                source,
            })?;

        let mut stats = self.stats.get();
        stats.dispatched += 1;

        if Rc::ptr_eq(&current, &next) {
            stats.unchanged += 1;
            self.stats.set(stats);
            log::trace!("Action '{}' left state unchanged", kind);
            return Ok(Dispatched::Unchanged);
        }

        stats.revision += 1;
        self.stats.set(stats);
        let revision = stats.revision;

        *self.state.borrow_mut() = next;
        *self.last_change.borrow_mut() = Some(ChangeRecord {
            kind: kind.clone(),
            revision,
            timestamp: Utc::now(),
        });
        log::debug!("Action '{}' committed revision {}", kind, revision);

        self.notify(&kind)?;
        Ok(Dispatched::Changed { revision })
    }

    /// Register `listener` for every state change.
    ///
    /// Registering the same listener again adds an independent entry.
    pub fn subscribe(&self, listener: Listener<S>) {
        self.push_subscription(Subscription::new(listener, None));
    }

    /// Register `listener` for state changes caused by actions of `kind`.
    pub fn subscribe_to(&self, kind: impl Into<ActionKind>, listener: Listener<S>) {
        self.push_subscription(Subscription::new(listener, Some(kind.into())));
    }

    /// Remove every subscription of `listener`, whatever its filter.
    ///
    /// Returns the number of entries removed. Unknown listeners are ignored.
    pub fn unsubscribe(&self, listener: &Listener<S>) -> usize {
        let mut subscriptions = self.subscriptions.borrow_mut();
        let before = subscriptions.len();
        subscriptions.retain(|sub| !sub.is_listener(listener));
        let removed = before - subscriptions.len();
        log::trace!("Removed {} subscription(s)", removed);
        removed
    }

    /// A copy of the current state.
    ///
    /// The copy is made with `S::clone`, so it only isolates what `Clone`
    /// copies: data behind shared pointers inside `S` is still shared.
    pub fn snapshot(&self) -> S {
        S::clone(&self.state.borrow())
    }

    /// The current state allocation, for identity comparisons.
    pub fn current(&self) -> Rc<S> {
        Rc::clone(&self.state.borrow())
    }

    /// Number of committed changes since creation.
    pub fn revision(&self) -> u64 {
        self.stats.get().revision
    }

    /// Metadata of the most recent committed change, if any.
    ///
    /// No-op and failed dispatches leave it as it was.
    pub fn last_change(&self) -> Option<ChangeRecord> {
        self.last_change.borrow().clone()
    }

    /// Activity counters since creation.
    pub fn stats(&self) -> StoreStats {
        self.stats.get()
    }

    /// Number of registered subscription entries.
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    fn push_subscription(&self, subscription: Subscription<S>) {
        log::trace!(
            "Adding subscription (filter: {})",
            subscription
                .filter
                .as_ref()
                .map_or("<any>", ActionKind::as_str)
        );
        self.subscriptions.borrow_mut().push(subscription);
    }

    /// Run one notification round for a dispatch of `kind`.
    ///
    /// The matching subscriptions and the snapshot are both captured up front,
    /// so nothing is borrowed while listeners run.
    fn notify(&self, kind: &ActionKind) -> Result<(), DispatchError> {
        let matching: Vec<Subscription<S>> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|sub| sub.matches(kind))
            .cloned()
            .collect();

        if matching.is_empty() {
            return Ok(());
        }

        let snapshot = self.snapshot();

        for (position, subscription) in matching.iter().enumerate() {
            if let Err(source) = (subscription.listener)(&snapshot) {
                log::warn!(
                    "Listener #{} failed while handling '{}', skipping {} remaining",
                    position,
                    kind,
                    matching.len() - position - 1
                );
                return Err(DispatchError::Listener {
                    kind: kind.clone(),
                    position,
                    source,
                });
            }
            self.record_notification();
        }

        Ok(())
    }

    fn record_notification(&self) {
        let mut stats = self.stats.get();
        stats.notifications += 1;
        self.stats.set(stats);
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state.borrow())
            .field("subscriptions", &self.subscriptions.borrow().len())
            .field("stats", &self.stats.get())
            .finish()
    }
}
