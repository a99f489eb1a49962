//! The store: current state, subscriptions and the dispatch/notify protocol.
//!
//! Everything here is single threaded and synchronous. A dispatch applies the
//! action, commits on change and notifies matching listeners before it
//! returns; there is no queue, so listeners that dispatch recurse.

mod container;
mod error;
mod subscription;

pub use container::{ChangeRecord, Dispatched, Store, StoreStats};
pub use error::{DispatchError, ListenerError};
pub use subscription::{listener, Listener};
