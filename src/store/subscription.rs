//! Listener callbacks and the subscription entries that hold them.

use super::error::ListenerError;
use crate::core::ActionKind;
use std::rc::Rc;

/// Callback notified with a snapshot of the state after a change.
///
/// Listeners are reference counted so the caller can keep a clone and later
/// pass it to [`Store::unsubscribe`](crate::store::Store::unsubscribe);
/// removal compares allocations with [`Rc::ptr_eq`].
pub type Listener<S> = Rc<dyn Fn(&S) -> Result<(), ListenerError>>;

/// Wrap a closure as a [`Listener`].
///
/// # Example
///
/// ```rust
/// use unistore::store::{listener, Listener};
///
/// let log: Listener<u32> = listener(|n: &u32| {
///     println!("now {n}");
///     Ok(())
/// });
/// assert!(log(&3).is_ok());
/// ```
pub fn listener<S, F>(f: F) -> Listener<S>
where
    F: Fn(&S) -> Result<(), ListenerError> + 'static,
{
    Rc::new(f)
}

/// One registered `(listener, filter)` pair.
pub(crate) struct Subscription<S> {
    pub(crate) listener: Listener<S>,
    pub(crate) filter: Option<ActionKind>,
}

impl<S> Subscription<S> {
    pub(crate) fn new(listener: Listener<S>, filter: Option<ActionKind>) -> Self {
        Self { listener, filter }
    }

    /// Whether this subscription should fire for a dispatch of `kind`.
    pub(crate) fn matches(&self, kind: &ActionKind) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter == kind)
    }

    pub(crate) fn is_listener(&self, listener: &Listener<S>) -> bool {
        Rc::ptr_eq(&self.listener, listener)
    }
}

impl<S> Clone for Subscription<S> {
    fn clone(&self) -> Self {
        Self {
            listener: Rc::clone(&self.listener),
            filter: self.filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Listener<i32> {
        listener(|_: &i32| Ok(()))
    }

    #[test]
    fn unfiltered_subscription_matches_everything() {
        let sub = Subscription::new(quiet(), None);

        assert!(sub.matches(&ActionKind::new("a")));
        assert!(sub.matches(&ActionKind::new("b")));
    }

    #[test]
    fn filtered_subscription_matches_only_its_kind() {
        let sub = Subscription::new(quiet(), Some(ActionKind::new("a")));

        assert!(sub.matches(&ActionKind::new("a")));
        assert!(!sub.matches(&ActionKind::new("b")));
    }

    #[test]
    fn listener_identity_is_by_allocation() {
        let first = quiet();
        let second = quiet();
        let sub = Subscription::new(Rc::clone(&first), None);

        assert!(sub.is_listener(&first));
        assert!(!sub.is_listener(&second));
    }

    #[test]
    fn listener_errors_surface() {
        let failing = listener(|n: &i32| {
            if *n < 0 {
                Err(ListenerError::failed("negative"))
            } else {
                Ok(())
            }
        });

        assert!(failing(&1).is_ok());
        assert!(failing(&-1).is_err());
    }
}
