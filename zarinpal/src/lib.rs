#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the Zarinpal payment gateway.
//!
//! This crate provides the foundational types for verifying Zarinpal
//! payments: the gateway's status vocabulary, the normalized verification
//! outcome, the classified error taxonomy, and the collaborator types a
//! verification call consumes. It carries no HTTP dependency; the transport
//! layer lives in the `zarinpal-http` crate.
//!
//! # Overview
//!
//! After a payer completes (or abandons) a payment, the merchant asks the
//! gateway whether the transaction identified by an *Authority* value went
//! through. The gateway answers with an integer status code and, on
//! success, a *`RefID`* reference number. The types here normalize that
//! answer into a single [`outcome::CheckedPayment`] value the calling
//! application can branch on without knowing the gateway's wire vocabulary.
//!
//! # Modules
//!
//! - [`callback`] - Parameters of the gateway's return redirect
//! - [`config`] - Merchant credentials and environment selection
//! - [`error`] - Classified gateway errors carried inside outcomes
//! - [`fake`] - Deterministic fake outcomes for caller tests
//! - [`outcome`] - The normalized verification result
//! - [`pending`] - The pending payment request being verified
//! - [`status`] - The gateway's verification status vocabulary

pub mod callback;
pub mod config;
pub mod error;
pub mod fake;
pub mod outcome;
pub mod pending;
pub mod status;
