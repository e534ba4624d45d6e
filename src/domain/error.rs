//! Error taxonomy for the facade with cause preservation.
//!
//! Exactly two kinds of failure reach callers: a synchronous precondition
//! failure on a required argument, or a wrapped collaborator fault. The
//! original fault is always preserved as the error source so diagnostic
//! chains survive the wrap.

use thiserror::Error;

/// Fault type produced by a [`DocumentStore`](crate::domain::DocumentStore)
/// implementation. Boxed so driver errors and test errors flow through the
/// wrap unchanged.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Default context message used when an operation does not supply its own.
pub const DEFAULT_OPERATION_FAILED_MESSAGE: &str = "Client operation failed.";

/// The single error type raised by [`DocumentClient`](crate::client::DocumentClient).
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required argument was empty or otherwise unusable. Raised before
    /// any collaborator call is issued and never carries a cause.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A collaborator operation faulted. The originating fault is kept as
    /// the error source, untouched.
    #[error("{message}")]
    OperationFailed {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl ClientError {
    /// Wraps a collaborator fault with an operation-specific context message.
    pub fn operation_failed(message: impl Into<String>, source: StoreError) -> Self {
        ClientError::OperationFailed {
            message: message.into(),
            source,
        }
    }

    /// Wraps a collaborator fault with the default context message.
    pub fn wrap(source: StoreError) -> Self {
        Self::operation_failed(DEFAULT_OPERATION_FAILED_MESSAGE, source)
    }

    /// Precondition failure for a required argument.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ClientError::InvalidArgument(message.into())
    }
}

/// Checks that a required string argument is non-empty (ignoring whitespace).
///
/// Returns `InvalidArgument` naming the offending argument so callers can
/// tell which precondition failed without inspecting a cause chain.
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::invalid_argument(format!(
            "'{name}' must be a non-empty string"
        )));
    }
    Ok(())
}
