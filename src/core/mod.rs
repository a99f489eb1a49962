//! Core action types.
//!
//! This module contains the pieces callers implement or construct to drive
//! a store:
//! - The `Action` trait, a pure `state -> state` transform
//! - `ActionKind` discriminants used for subscription filtering
//! - `ActionError` for actions that refuse to apply
//!
//! Nothing in this module holds state.

mod action;
mod error;
mod kind;

pub use action::{from_fn, Action, FnAction};
pub use error::{ActionError, BoxError};
pub use kind::ActionKind;
