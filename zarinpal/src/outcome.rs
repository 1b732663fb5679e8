//! The normalized verification result.

use serde_json::{Map, Value};

use crate::error::{GatewayClientError, GatewayError, GatewayServerError};
use crate::status::Status;

/// The outcome of one verification attempt.
///
/// Created once per attempt (real or fake) and owned entirely by the
/// caller. Every gateway failure mode is carried as data in
/// [`error`](Self::error) rather than surfaced as a Rust error, so callers
/// branch on the outcome without error-handling boilerplate.
///
/// Two invariants hold for every outcome produced by the verification
/// flow:
///
/// - [`error`](Self::error) is `None` iff the status is
///   [`OperationSucceed`](Status::OperationSucceed) or
///   [`AlreadyVerified`](Status::AlreadyVerified);
/// - [`reference_id`](Self::reference_id) is `Some` iff the status is
///   [`OperationSucceed`](Status::OperationSucceed).
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedPayment {
    status: Option<Status>,
    error: Option<GatewayError>,
    error_details: Map<String, Value>,
    transaction_id: Option<String>,
    reference_id: Option<String>,
}

impl CheckedPayment {
    /// Creates an outcome from its raw parts.
    ///
    /// The classification constructors below uphold the invariants; this
    /// one copies the parts through verbatim and exists for test doubles
    /// such as the fake-verification conversion.
    #[must_use]
    pub const fn new(
        status: Option<Status>,
        error: Option<GatewayError>,
        error_details: Map<String, Value>,
        transaction_id: Option<String>,
        reference_id: Option<String>,
    ) -> Self {
        Self {
            status,
            error,
            error_details,
            transaction_id,
            reference_id,
        }
    }

    /// Outcome of a successful verification call.
    ///
    /// `status` must be one of the verified statuses; the reference id is
    /// kept only for newly succeeded payments, since the gateway issues no
    /// reference for an already-verified one.
    #[must_use]
    pub fn verified(
        status: Status,
        transaction_id: Option<String>,
        reference_id: Option<String>,
    ) -> Self {
        debug_assert!(status.is_verified());
        let reference_id = if matches!(status, Status::OperationSucceed) {
            reference_id
        } else {
            None
        };
        Self::new(Some(status), None, Map::new(), transaction_id, reference_id)
    }

    /// Outcome of a request the gateway rejected: an HTTP 4xx response or
    /// an application status outside the verified set.
    #[must_use]
    pub fn client_failure(
        status: Option<Status>,
        error_details: Map<String, Value>,
        transaction_id: Option<String>,
    ) -> Self {
        let error = GatewayClientError::from_status(status);
        Self::new(
            status,
            Some(error.into()),
            error_details,
            transaction_id,
            None,
        )
    }

    /// Outcome of a gateway-side failure: an HTTP 5xx response, or no
    /// response at all.
    ///
    /// The HTTP status, when present, doubles as the outcome's status so
    /// the caller can log what the gateway answered.
    #[must_use]
    pub fn server_failure(
        http_status: Option<u16>,
        message: impl Into<String>,
        transaction_id: Option<String>,
    ) -> Self {
        let status = http_status.map(|code| Status::from_code(i64::from(code)));
        let error = GatewayServerError::new(http_status, message);
        Self::new(status, Some(error.into()), Map::new(), transaction_id, None)
    }

    /// Returns the gateway status, or the HTTP status for failures below
    /// the application layer; `None` when neither was available.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the classified error, absent for verified payments.
    #[must_use]
    pub const fn error(&self) -> Option<&GatewayError> {
        self.error.as_ref()
    }

    /// Returns the raw error fields the gateway supplied, empty when none.
    #[must_use]
    pub const fn error_details(&self) -> &Map<String, Value> {
        &self.error_details
    }

    /// Returns the transaction identifier this attempt verified.
    #[must_use]
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    /// Returns the gateway-issued reference number, present only for newly
    /// succeeded payments.
    #[must_use]
    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }

    /// `true` if the payment was verified by this attempt.
    #[must_use]
    pub fn successful(&self) -> bool {
        self.status == Some(Status::OperationSucceed)
    }

    /// `true` if the gateway had verified this payment once before.
    #[must_use]
    pub fn previously_verified(&self) -> bool {
        self.status == Some(Status::AlreadyVerified)
    }

    /// `true` if the attempt failed, on either side of the wire.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_outcome_keeps_reference_only_on_success() {
        let outcome = CheckedPayment::verified(
            Status::OperationSucceed,
            Some("A1".into()),
            Some("R123".into()),
        );
        assert!(outcome.successful());
        assert!(!outcome.failed());
        assert_eq!(outcome.reference_id(), Some("R123"));

        let outcome =
            CheckedPayment::verified(Status::AlreadyVerified, Some("A1".into()), Some("R123".into()));
        assert!(outcome.previously_verified());
        assert!(!outcome.failed());
        assert_eq!(outcome.reference_id(), None);
    }

    #[test]
    fn client_failure_derives_its_message_from_the_vocabulary() {
        let outcome =
            CheckedPayment::client_failure(Some(Status::FailedTransaction), Map::new(), None);
        assert!(outcome.failed());
        assert_eq!(outcome.reference_id(), None);

        match outcome.error() {
            Some(GatewayError::Client(error)) => {
                assert_eq!(error.status, Some(Status::FailedTransaction));
                assert_eq!(error.message, Status::FailedTransaction.message());
            }
            other => panic!("expected a client error, got {other:?}"),
        }
    }

    #[test]
    fn server_failure_carries_the_http_status() {
        let outcome = CheckedPayment::server_failure(Some(500), "down", Some("A1".into()));
        assert!(outcome.failed());
        assert_eq!(outcome.status(), Some(Status::Unknown(500)));
        assert_eq!(outcome.transaction_id(), Some("A1"));

        match outcome.error() {
            Some(GatewayError::Server(error)) => assert_eq!(error.http_status, Some(500)),
            other => panic!("expected a server error, got {other:?}"),
        }
    }
}
