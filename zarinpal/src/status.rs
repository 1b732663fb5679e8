//! The gateway's verification status vocabulary.
//!
//! Zarinpal reports the result of a verification call as an integer status
//! code. This module models the documented codes as a closed enum with a
//! fallback variant for anything outside the vocabulary, and holds the
//! single source of truth for the user-facing message of each code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message used for status codes outside the documented vocabulary.
pub const UNKNOWN_STATUS_MESSAGE: &str = "An unknown gateway error occurred.";

/// A verification status code reported by the gateway.
///
/// Construct values with [`Status::from_code`]; it canonicalizes every
/// documented code to its named variant, so [`Status::Unknown`] only ever
/// carries codes outside the vocabulary.
///
/// Serializes as the bare integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Status {
    /// `-1` — the submitted data was incomplete.
    IncompleteData,
    /// `-2` — the merchant ID or acceptor IP is not correct.
    WrongMerchantOrIp,
    /// `-3` — the amount cannot be processed due to Shaparak limits.
    ShaparakLimited,
    /// `-4` — the merchant's approval level is not sufficient.
    InsufficientUserLevel,
    /// `-11` — no payment request was found for the given identifier.
    RequestNotFound,
    /// `-12` — the payment request can no longer be edited.
    UnableToEditRequest,
    /// `-21` — no financial operation was found for this transaction.
    NoFinancialOperation,
    /// `-22` — the transaction was not successful.
    FailedTransaction,
    /// `-33` — the transaction amount does not match the paid amount.
    AmountsNotEqual,
    /// `-34` — the transaction splitting limit was exceeded.
    TransactionSplittingLimited,
    /// `-40` — access to the requested method is denied.
    MethodAccessDenied,
    /// `-41` — the submitted `AdditionalData` is invalid.
    InvalidAdditionalData,
    /// `-42` — the payment authority lifetime is out of range.
    InvalidExpirationRange,
    /// `-54` — the payment request has been archived.
    RequestArchived,
    /// `100` — the operation succeeded.
    OperationSucceed,
    /// `101` — the payment was verified once before.
    AlreadyVerified,
    /// Any status code outside the documented vocabulary.
    Unknown(i64),
}

impl Status {
    /// Maps a raw gateway code to its status. Total: unrecognized codes
    /// yield [`Status::Unknown`].
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            -1 => Self::IncompleteData,
            -2 => Self::WrongMerchantOrIp,
            -3 => Self::ShaparakLimited,
            -4 => Self::InsufficientUserLevel,
            -11 => Self::RequestNotFound,
            -12 => Self::UnableToEditRequest,
            -21 => Self::NoFinancialOperation,
            -22 => Self::FailedTransaction,
            -33 => Self::AmountsNotEqual,
            -34 => Self::TransactionSplittingLimited,
            -40 => Self::MethodAccessDenied,
            -41 => Self::InvalidAdditionalData,
            -42 => Self::InvalidExpirationRange,
            -54 => Self::RequestArchived,
            100 => Self::OperationSucceed,
            101 => Self::AlreadyVerified,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw gateway code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::IncompleteData => -1,
            Self::WrongMerchantOrIp => -2,
            Self::ShaparakLimited => -3,
            Self::InsufficientUserLevel => -4,
            Self::RequestNotFound => -11,
            Self::UnableToEditRequest => -12,
            Self::NoFinancialOperation => -21,
            Self::FailedTransaction => -22,
            Self::AmountsNotEqual => -33,
            Self::TransactionSplittingLimited => -34,
            Self::MethodAccessDenied => -40,
            Self::InvalidAdditionalData => -41,
            Self::InvalidExpirationRange => -42,
            Self::RequestArchived => -54,
            Self::OperationSucceed => 100,
            Self::AlreadyVerified => 101,
            Self::Unknown(code) => code,
        }
    }

    /// Returns the user-facing message for this status.
    ///
    /// Total over the whole vocabulary; [`Status::Unknown`] maps to
    /// [`UNKNOWN_STATUS_MESSAGE`].
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::IncompleteData => "The submitted data was incomplete.",
            Self::WrongMerchantOrIp => "The merchant ID or acceptor IP is not correct.",
            Self::ShaparakLimited => "The amount cannot be processed due to Shaparak limits.",
            Self::InsufficientUserLevel => "The merchant approval level is not sufficient.",
            Self::RequestNotFound => "No payment request was found for this identifier.",
            Self::UnableToEditRequest => "The payment request can no longer be edited.",
            Self::NoFinancialOperation => {
                "No financial operation was found for this transaction."
            }
            Self::FailedTransaction => "The transaction was not successful.",
            Self::AmountsNotEqual => "The transaction amount does not match the paid amount.",
            Self::TransactionSplittingLimited => {
                "The transaction splitting limit was exceeded."
            }
            Self::MethodAccessDenied => "Access to the requested method is denied.",
            Self::InvalidAdditionalData => "The submitted AdditionalData is invalid.",
            Self::InvalidExpirationRange => {
                "The payment authority lifetime is out of the accepted range."
            }
            Self::RequestArchived => "The payment request has been archived.",
            Self::OperationSucceed => "The operation succeeded.",
            Self::AlreadyVerified => "The payment was already verified.",
            Self::Unknown(_) => UNKNOWN_STATUS_MESSAGE,
        }
    }

    /// Returns `true` for the statuses that mean the payment is verified,
    /// whether by this call or by an earlier one.
    #[must_use]
    pub const fn is_verified(self) -> bool {
        matches!(self, Self::OperationSucceed | Self::AlreadyVerified)
    }
}

impl From<i64> for Status {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<Status> for i64 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
