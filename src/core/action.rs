//! The Action trait: a pure transform from one state to the next.

use super::error::ActionError;
use super::kind::ActionKind;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// A unit of change applied to a [`Store`](crate::store::Store).
///
/// `apply` computes the next state from the current one. It must not mutate
/// the input: the store detects change by comparing the returned `Rc`
/// against the current one with [`Rc::ptr_eq`]. Returning `Rc::clone(state)`
/// signals "nothing changed"; returning a freshly allocated `Rc` signals a
/// transition, even if the new value happens to be equal to the old one.
///
/// `kind` identifies the action for subscription filtering. Struct actions
/// usually return [`ActionKind::of`] for their own type or a fixed tag; enum
/// actions usually report one tag per variant.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use unistore::core::{Action, ActionError, ActionKind};
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
/// let state = Rc::new(Counter::default());
/// let next = Increment.apply(&state).unwrap();
///
/// assert_eq!(next.count, 1);
/// assert_eq!(state.count, 0);
/// assert_eq!(Increment.kind(), ActionKind::of::<Increment>());
/// ```
pub trait Action<S> {
    /// Discriminant used to match filtered subscriptions.
    fn kind(&self) -> ActionKind;

    /// Compute the next state.
    fn apply(&self, state: &Rc<S>) -> Result<Rc<S>, ActionError>;
}

impl<S, A: Action<S> + ?Sized> Action<S> for Box<A> {
    fn kind(&self) -> ActionKind {
        (**self).kind()
    }

    fn apply(&self, state: &Rc<S>) -> Result<Rc<S>, ActionError> {
        (**self).apply(state)
    }
}

impl<S, A: Action<S> + ?Sized> Action<S> for &A {
    fn kind(&self) -> ActionKind {
        (**self).kind()
    }

    fn apply(&self, state: &Rc<S>) -> Result<Rc<S>, ActionError> {
        (**self).apply(state)
    }
}

/// An action backed by a closure and an explicit kind.
///
/// Created with [`from_fn`].
pub struct FnAction<S, F> {
    kind: ActionKind,
    apply: F,
    _state: PhantomData<fn(&Rc<S>)>,
}

impl<S, F> fmt::Debug for FnAction<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction").field("kind", &self.kind).finish()
    }
}

impl<S, F> Action<S> for FnAction<S, F>
where
    F: Fn(&Rc<S>) -> Result<Rc<S>, ActionError>,
{
    fn kind(&self) -> ActionKind {
        self.kind.clone()
    }

    fn apply(&self, state: &Rc<S>) -> Result<Rc<S>, ActionError> {
        (self.apply)(state)
    }
}

/// Wrap a closure as an action reporting the given kind.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use unistore::core::{from_fn, Action};
///
/// let double = from_fn("double", |n: &Rc<i32>| Ok(Rc::new(**n * 2)));
///
/// assert_eq!(*double.apply(&Rc::new(21)).unwrap(), 42);
/// assert_eq!(double.kind().as_str(), "double");
/// ```
pub fn from_fn<S, F>(kind: impl Into<ActionKind>, apply: F) -> FnAction<S, F>
where
    F: Fn(&Rc<S>) -> Result<Rc<S>, ActionError>,
{
    FnAction {
        kind: kind.into(),
        apply,
        _state: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        count: i64,
    }

    struct Increment;

    impl Action<Counter> for Increment {
        fn kind(&self) -> ActionKind {
            ActionKind::of::<Self>()
        }

        fn apply(&self, state: &Rc<Counter>) -> Result<Rc<Counter>, ActionError> {
            Ok(Rc::new(Counter {
                count: state.count + 1,
            }))
        }
    }

    #[derive(Debug)]
    struct Noop;

    impl Action<Counter> for Noop {
        fn kind(&self) -> ActionKind {
            ActionKind::new("noop")
        }

        fn apply(&self, state: &Rc<Counter>) -> Result<Rc<Counter>, ActionError> {
            Ok(Rc::clone(state))
        }
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
        Clear,
    }

    impl Action<Counter> for CounterAction {
        fn kind(&self) -> ActionKind {
            match self {
                Self::Add(_) => ActionKind::new("Add"),
                Self::Clear => ActionKind::new("Clear"),
            }
        }

        fn apply(&self, state: &Rc<Counter>) -> Result<Rc<Counter>, ActionError> {
            match self {
                Self::Add(0) => Ok(Rc::clone(state)),
                Self::Add(n) => Ok(Rc::new(Counter {
                    count: state.count + n,
                })),
                Self::Clear => Ok(Rc::new(Counter { count: 0 })),
            }
        }
    }

    #[test]
    fn apply_returns_new_state_without_touching_input() {
        let state = Rc::new(Counter { count: 4 });
        let next = Increment.apply(&state).unwrap();

        assert_eq!(next.count, 5);
        assert_eq!(state.count, 4);
        assert!(!Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn noop_returns_same_allocation() {
        let state = Rc::new(Counter { count: 4 });
        let next = Noop.apply(&state).unwrap();

        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn struct_actions_report_their_kind() {
        assert_eq!(Increment.kind(), ActionKind::of::<Increment>());
        assert_eq!(Noop.kind(), ActionKind::new("noop"));
        assert_ne!(Increment.kind(), Noop.kind());
    }

    #[test]
    fn enum_actions_report_kind_per_variant() {
        assert_eq!(CounterAction::Add(1).kind(), ActionKind::new("Add"));
        assert_eq!(CounterAction::Clear.kind(), ActionKind::new("Clear"));
    }

    #[test]
    fn boxed_actions_delegate() {
        let action: Box<dyn Action<Counter>> = Box::new(Increment);
        let state = Rc::new(Counter { count: 0 });

        assert_eq!(action.kind(), ActionKind::of::<Increment>());
        assert_eq!(action.apply(&state).unwrap().count, 1);
    }

    #[test]
    fn fn_action_uses_given_kind() {
        let reset = from_fn("reset", |_: &Rc<Counter>| Ok(Rc::new(Counter { count: 0 })));
        let state = Rc::new(Counter { count: 9 });

        assert_eq!(reset.kind(), ActionKind::new("reset"));
        assert_eq!(reset.apply(&state).unwrap().count, 0);
    }

    #[test]
    fn failing_action_returns_error() {
        let reject = from_fn("reject", |_: &Rc<Counter>| {
            Err(ActionError::rejected("not allowed"))
        });
        let state = Rc::new(Counter { count: 0 });

        assert!(matches!(
            reject.apply(&state),
            Err(ActionError::Rejected { .. })
        ));
    }
}
