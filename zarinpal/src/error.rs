//! Classified gateway errors carried inside verification outcomes.
//!
//! A verification attempt never surfaces gateway failures as Rust errors;
//! it classifies them into one of two kinds and stores the result in the
//! outcome. Callers branch on the kind to decide their failover policy.

use std::fmt;

use crate::status::{Status, UNKNOWN_STATUS_MESSAGE};

/// A classified failure reported by a verification attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The gateway itself failed or was unreachable.
    #[error("{0}")]
    Server(#[from] GatewayServerError),

    /// The gateway rejected the verification request.
    #[error("{0}")]
    Client(#[from] GatewayClientError),
}

impl GatewayError {
    /// Returns the diagnostic message of the underlying error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Server(error) => &error.message,
            Self::Client(error) => &error.message,
        }
    }
}

/// Gateway-side failure: an HTTP 5xx response, or no response at all.
///
/// This is not a definitive payment-failure signal. It means the gateway is
/// unreachable or malfunctioning, which is the caller's cue to consider
/// switching to an alternate provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayServerError {
    /// HTTP status of the failed response; `None` when the request never
    /// produced a response.
    pub http_status: Option<u16>,
    /// Diagnostic message.
    pub message: String,
}

impl GatewayServerError {
    /// Creates a server-side gateway error.
    #[must_use]
    pub fn new(http_status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            http_status,
            message: message.into(),
        }
    }
}

impl fmt::Display for GatewayServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.http_status {
            Some(code) => write!(f, "{} (HTTP {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for GatewayServerError {}

/// Client-side gateway error: an HTTP 4xx response, or an application
/// status outside the verified set.
///
/// Carries the gateway's status code when one was parsed, and a message
/// derived from the status vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayClientError {
    /// The parsed gateway status; `None` when the body carried none.
    pub status: Option<Status>,
    /// Message derived from the status vocabulary.
    pub message: String,
}

impl GatewayClientError {
    /// Creates a client-side gateway error with an explicit message.
    #[must_use]
    pub fn new(status: Option<Status>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a client-side gateway error with its message derived from
    /// the status vocabulary; an absent status maps to the generic
    /// unknown-error message.
    #[must_use]
    pub fn from_status(status: Option<Status>) -> Self {
        let message = status.map_or(UNKNOWN_STATUS_MESSAGE, Status::message);
        Self::new(status, message)
    }
}

impl fmt::Display for GatewayClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status.code()),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for GatewayClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_message_follows_vocabulary() {
        let error = GatewayClientError::from_status(Some(Status::FailedTransaction));
        assert_eq!(error.message, Status::FailedTransaction.message());

        let error = GatewayClientError::from_status(Some(Status::Unknown(-9)));
        assert_eq!(error.message, UNKNOWN_STATUS_MESSAGE);

        let error = GatewayClientError::from_status(None);
        assert_eq!(error.message, UNKNOWN_STATUS_MESSAGE);
    }

    #[test]
    fn display_carries_the_code() {
        let error = GatewayServerError::new(Some(502), "gateway down");
        assert_eq!(error.to_string(), "gateway down (HTTP 502)");

        let error = GatewayClientError::from_status(Some(Status::RequestNotFound));
        assert!(error.to_string().ends_with("(status -11)"));
    }
}
