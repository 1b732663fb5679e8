#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport layer for the Zarinpal payment gateway.
//!
//! Provides the verification operation and the HTTP capability it is built
//! on. The core types live in the `zarinpal` crate; this crate adds the
//! single wire call: POST the verification payload to the environment's
//! endpoint, classify the answer, hand back a
//! [`CheckedPayment`](zarinpal::outcome::CheckedPayment).
//!
//! # Example
//!
//! ```no_run
//! use zarinpal::config::GatewayConfig;
//! use zarinpal::pending::PendingRequest;
//! use zarinpal_http::transport::HttpTransport;
//! use zarinpal_http::verification::Verification;
//!
//! # async fn run() -> Result<(), zarinpal::callback::CallbackValidationError> {
//! let pending = PendingRequest::new(GatewayConfig::new("merchant-id"))
//!     .with_field("Authority", "A00000000000000000000000000000123");
//! let transport = HttpTransport::new();
//!
//! let payment = Verification::new(&pending, &transport).verify().await?;
//! if payment.successful() {
//!     println!("paid, reference {}", payment.reference_id().unwrap_or("-"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`constants`] — endpoint path and wire field names
//! - [`transport`] — injected HTTP capability (trait + reqwest impl)
//! - [`verification`] — the verification operation
//!
//! # Feature Flags
//!
//! - `telemetry` — records verification outcomes through `tracing`

pub mod constants;
pub mod transport;
pub mod verification;
