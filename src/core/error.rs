//! Errors raised by action implementations.

use thiserror::Error;

/// Boxed error type carried by the catch-all variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors an [`Action`](crate::core::Action) may return from `apply`.
///
/// The store never inspects these; it wraps them in a
/// [`DispatchError`](crate::store::DispatchError) and hands them back to the
/// caller of `dispatch` with the state left untouched.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The action refused to apply to the current state.
    #[error("Action rejected: {reason}")]
    Rejected { reason: String },

    /// Any other failure raised by the action's own domain logic.
    #[error("Action failed: {0}")]
    Failed(#[from] BoxError),
}

impl ActionError {
    /// Shorthand for [`ActionError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}
