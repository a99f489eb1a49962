//! Unistore: a minimal unidirectional state container
//!
//! A store holds one slot of application state. The only way to change it is
//! to dispatch an action, a pure function from the current state to the
//! next. When the action hands back a different allocation than it was given,
//! the store commits it and notifies its subscribers with a snapshot.
//!
//! # Core Concepts
//!
//! - **Action**: a `state -> state` transform implementing `Action`
//! - **ActionKind**: the discriminant subscriptions filter on
//! - **Store**: owns the state and the ordered subscription list
//! - **Identity-based change detection**: `Rc::ptr_eq`, never deep equality
//!
//! Errors are not isolated between listeners: the first failing listener
//! ends the notification round, after the new state was already committed.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use unistore::{listener, Action, ActionError, ActionKind, Store};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! struct Increment;
//!
//! impl Action<Counter> for Increment {
//!     fn kind(&self) -> ActionKind {
//!         ActionKind::of::<Self>()
//!     }
//!
//!     fn apply(&self, state: &Rc<Counter>) -> Result<Rc<Counter>, ActionError> {
//!         Ok(Rc::new(Counter { count: state.count + 1 }))
//!     }
//! }
//!
//! struct Noop;
//!
//! impl Action<Counter> for Noop {
//!     fn kind(&self) -> ActionKind {
//!         ActionKind::of::<Self>()
//!     }
//!
//!     fn apply(&self, state: &Rc<Counter>) -> Result<Rc<Counter>, ActionError> {
//!         Ok(Rc::clone(state))
//!     }
//! }
//!
//! let store = Store::new(Counter::default());
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! store.subscribe(listener(move |s: &Counter| {
//!     sink.borrow_mut().push(s.clone());
//!     Ok(())
//! }));
//!
//! store.dispatch(&Increment).unwrap();
//! store.dispatch(&Noop).unwrap();
//!
//! assert_eq!(store.snapshot(), Counter { count: 1 });
//! assert_eq!(*seen.borrow(), vec![Counter { count: 1 }]);
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use crate::core::{from_fn, Action, ActionError, ActionKind};
pub use store::{listener, DispatchError, Dispatched, Listener, ListenerError, Store};
