//! Build errors for the store builder.

use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) or use StoreBuilder::with_default()")]
    MissingInitialState,
}
