//! Deterministic fake outcomes for caller tests.
//!
//! [`FakeVerification`] describes the outcome a test wants to observe; its
//! conversion into [`CheckedPayment`] bypasses the gateway entirely, so
//! result-handling code can be exercised without network access or a
//! transport stub.

use serde_json::Map;

use crate::error::GatewayError;
use crate::outcome::CheckedPayment;
use crate::status::Status;

/// The outcome a fake verification should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeStatus {
    /// The verification fails.
    Failed,
    /// The payment verifies successfully.
    Successful,
    /// The payment was verified once before.
    AlreadyVerified,
}

/// Describes the faked verification attempt a test wants.
///
/// Constructed by test code, converted once into a [`CheckedPayment`],
/// then discarded.
#[derive(Debug, Clone)]
pub struct FakeVerification {
    status: FakeStatus,
    error: Option<GatewayError>,
    transaction_id: Option<String>,
    reference_id: Option<String>,
}

impl FakeVerification {
    /// Creates a fake verification with the given outcome and no other
    /// fields set.
    #[must_use]
    pub const fn new(status: FakeStatus) -> Self {
        Self {
            status,
            error: None,
            transaction_id: None,
            reference_id: None,
        }
    }

    /// Sets the error the outcome should carry.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<GatewayError>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Sets the transaction identifier.
    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    /// Sets the reference identifier.
    #[must_use]
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    /// Returns the tri-state outcome.
    #[must_use]
    pub const fn status(&self) -> FakeStatus {
        self.status
    }
}

impl From<FakeVerification> for CheckedPayment {
    /// Maps the tri-state fake outcome to its status-vocabulary entry and
    /// copies the remaining fields through unchanged.
    fn from(fake: FakeVerification) -> Self {
        let status = match fake.status {
            FakeStatus::Failed => Status::FailedTransaction,
            FakeStatus::Successful => Status::OperationSucceed,
            FakeStatus::AlreadyVerified => Status::AlreadyVerified,
        };

        Self::new(
            Some(status),
            fake.error,
            Map::new(),
            fake.transaction_id,
            fake.reference_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayClientError;

    #[test]
    fn successful_fake_maps_to_operation_succeed() {
        let outcome: CheckedPayment = FakeVerification::new(FakeStatus::Successful)
            .with_transaction_id("A100")
            .with_reference_id("R100")
            .into();

        assert_eq!(outcome.status(), Some(Status::OperationSucceed));
        assert!(outcome.error().is_none());
        assert_eq!(outcome.transaction_id(), Some("A100"));
        assert_eq!(outcome.reference_id(), Some("R100"));
    }

    #[test]
    fn already_verified_fake_maps_to_already_verified() {
        let outcome: CheckedPayment =
            FakeVerification::new(FakeStatus::AlreadyVerified).into();

        assert_eq!(outcome.status(), Some(Status::AlreadyVerified));
        assert!(outcome.error().is_none());
        assert_eq!(outcome.reference_id(), None);
    }

    #[test]
    fn failed_fake_copies_the_error_through() {
        let error: GatewayError =
            GatewayClientError::from_status(Some(Status::FailedTransaction)).into();

        let outcome: CheckedPayment = FakeVerification::new(FakeStatus::Failed)
            .with_error(error.clone())
            .with_transaction_id("T1")
            .into();

        assert_eq!(outcome.status(), Some(Status::FailedTransaction));
        assert_eq!(outcome.error(), Some(&error));
        assert_eq!(outcome.transaction_id(), Some("T1"));
        assert_eq!(outcome.reference_id(), None);
        assert!(outcome.error_details().is_empty());
    }
}
