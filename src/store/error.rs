//! Dispatch and listener error types.

use crate::core::{ActionError, ActionKind, BoxError};
use thiserror::Error;

/// Errors a listener may return while being notified.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Listener failed: {reason}")]
    Failed { reason: String },

    #[error("Listener failed: {0}")]
    Other(#[from] BoxError),
}

impl ListenerError {
    /// Shorthand for [`ListenerError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

/// Errors returned from [`Store::dispatch`](crate::store::Store::dispatch).
///
/// An `Action` error means nothing was committed and nobody was notified.
/// A `Listener` error means the new state *was* committed, the listeners
/// before `position` in the round were notified, and the rest were skipped.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Action '{kind}' failed to apply")]
    Action {
        kind: ActionKind,
        #[source]
        source: ActionError,
    },

    #[error("Listener #{position} failed while handling '{kind}'")]
    Listener {
        kind: ActionKind,
        position: usize,
        #[source]
        source: ListenerError,
    },
}

impl DispatchError {
    /// Kind of the action whose dispatch failed.
    pub fn kind(&self) -> &ActionKind {
        match self {
            Self::Action { kind, .. } | Self::Listener { kind, .. } => kind,
        }
    }

    /// Whether the state was committed before the failure.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Listener { .. })
    }
}
