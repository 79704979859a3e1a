//! Error types for shelfsync.
//!
//! This module defines the centralized error type [`ShelfsyncError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with
//! the `thiserror` crate.
//!
//! Remote-call failures are deliberately collapsed into the single `Transport`
//! variant: the controller treats a network failure, a non-success status, and
//! a malformed response body identically: report once, never retry, leave
//! local state untouched.

use thiserror::Error;

/// The main error type for shelfsync operations.
///
/// No variant is fatal to the controller; after any error the canonical
/// collection, draft, and modal state remain consistent and the controller
/// stays usable.
#[derive(Debug, Error)]
pub enum ShelfsyncError {
    /// A remote call failed.
    ///
    /// Covers network unreachability, non-success HTTP status, and malformed
    /// response bodies. There is no finer-grained remote error taxonomy.
    #[error("transport error: {0}")]
    Transport(String),

    /// A draft field received input its declared type does not allow.
    ///
    /// Raised when a numeric form field (`rating`, `published_date`) carries
    /// text that is not integer-parseable. The offending patch is rejected as
    /// a whole and the draft keeps its previous values.
    #[error("invalid value {value:?} for field `{field}`")]
    InvalidField {
        /// Name of the draft field that rejected the input.
        field: &'static str,
        /// The raw form input that failed to parse.
        value: String,
    },

    /// The presentation layer called an operation outside its contract.
    ///
    /// Examples: opening a modal while one is already open, editing a record
    /// id that is not in the canonical collection, confirming while no modal
    /// is open. These indicate a bug in the caller, not a normal error path.
    #[error("contract violation: {0}")]
    Contract(String),

    /// Configuration is invalid or missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Only produced by the configuration loader in the CLI driver.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ShelfsyncError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A specialized `Result` type for shelfsync operations.
pub type Result<T> = std::result::Result<T, ShelfsyncError>;
