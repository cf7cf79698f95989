use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransportError>;

/// The single error kind raised by the client core.
///
/// Failures are never retried and never swallowed: every failed operation
/// propagates to the caller, which owns user-visible notification. An
/// authentication rejection is not special-cased; it arrives as a
/// [`Service`] error with a 401 status.
///
/// [`Service`]: TransportError::Service
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Service { status: StatusCode, message: String },
    #[error("another mutation is already in flight")]
    MutationInFlight,
}

impl TransportError {
    /// Message supplied by the service, when there is one.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Service { message, .. } => Some(message),
            _ => None,
        }
    }
}
