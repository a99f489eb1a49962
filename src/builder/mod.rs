//! Builder API for store construction.
//!
//! Lets callers set the initial state and register listeners up front
//! instead of calling `subscribe` on a freshly created store.

pub mod config;
pub mod error;

pub use config::StoreBuilder;
pub use error::BuildError;
