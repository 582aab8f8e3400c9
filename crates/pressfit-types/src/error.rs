//! Error types for the Pressfit collision core.
//!
//! All crates return `PressfitResult<T>` from fallible operations.
//! Out-of-bounds sampling is deliberately NOT represented here — it is a
//! normal outcome, modeled as `Option` / `QueryStatus`, never as an error.

use thiserror::Error;

/// Unified error type for the Pressfit collision core.
#[derive(Debug, Error)]
pub enum PressfitError {
    /// An SDF or point-cloud asset is malformed (wrong line count,
    /// non-numeric token, inconsistent cell count, degenerate extent).
    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker channel was closed while the loop still expected it.
    #[error("Worker channel closed: {0}")]
    ChannelClosed(String),
}

/// Convenience alias for `Result<T, PressfitError>`.
pub type PressfitResult<T> = Result<T, PressfitError>;
