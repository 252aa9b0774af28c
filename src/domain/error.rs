//! Error types for modal stack operations.
//!
//! This module defines the crate-wide error type [`ModalStackError`], the
//! [`SessionError`] observed by callers awaiting a modal session, and a
//! [`Result`] alias. Both enums derive their `Error` implementations through
//! the `thiserror` crate.

use serde_json::Value;
use thiserror::Error;

/// The main error type for modal stack operations.
///
/// Navigation past the ends of the stack is deliberately absent here: it is
/// reported as a warning and a `false` return value, never as an error.
///
/// # Examples
///
/// ```
/// use modal_stack::ModalStackError;
///
/// fn validate(name: &str) -> Result<(), ModalStackError> {
///     if name.is_empty() {
///         return Err(ModalStackError::InvalidModalName);
///     }
///     Ok(())
/// }
///
/// assert!(validate("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ModalStackError {
    /// A modal was pushed without a name.
    ///
    /// Modal names identify which component the rendering layer mounts, so an
    /// empty name can never be rendered.
    #[error("Modal name must not be empty")]
    InvalidModalName,

    /// A command received from the host could not be decoded.
    ///
    /// Wraps the JSON decoding failure from `serde_json`.
    #[error("Command error: {0}")]
    Command(#[from] serde_json::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A TOML configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure observed by a caller awaiting a modal session.
///
/// Produced by [`SessionHandle`](crate::app::SessionHandle) when the session
/// ends without being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session was rejected with the given detail.
    #[error("modal session rejected: {0}")]
    Rejected(Value),

    /// The session was closed (or its controller dropped) before anyone
    /// resolved or rejected it.
    #[error("modal session dismissed without a result")]
    Dismissed,
}

/// A specialized `Result` type for modal stack operations.
pub type Result<T> = std::result::Result<T, ModalStackError>;
