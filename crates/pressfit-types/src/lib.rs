//! # pressfit-types
//!
//! Shared types, status codes, error types, and tuning constants
//! for the Pressfit collision core.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Pressfit crates share.

pub mod constants;
pub mod error;
pub mod status;

pub use error::{PressfitError, PressfitResult};
pub use status::QueryStatus;
