//! The verification operation.
//!
//! [`Verification`] performs one call to the gateway's verification
//! endpoint and classifies the answer into a
//! [`CheckedPayment`](zarinpal::outcome::CheckedPayment). Classification
//! order:
//!
//! 1. **Server failure** — HTTP 5xx (or no response at all): the gateway
//!    is unreachable or malfunctioning, the caller's cue to consider an
//!    alternate provider.
//! 2. **Client failure** — HTTP 4xx, or an application status outside the
//!    verified set.
//! 3. **Verified** — the gateway reports the payment succeeded or was
//!    verified once before.
//!
//! Response bodies are parsed failing soft: a malformed body degrades to
//! absent fields and lands in the client-failure branch, it never aborts
//! the call.

use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use zarinpal::callback::{CallbackRequest, CallbackValidationError};
use zarinpal::outcome::CheckedPayment;
use zarinpal::pending::PendingRequest;
use zarinpal::status::Status;

use crate::constants::{AUTHORITY_FIELD, MERCHANT_ID_FIELD, VERIFICATION_ENDPOINT};
use crate::transport::{Transport, TransportResponse};

/// Diagnostic message for 5xx answers from the gateway.
const SERVER_ERROR_MESSAGE: &str =
    "Unable to connect to the Zarinpal endpoint due to a server error.";

/// Wire shape of the verification response body.
///
/// Every field is optional and leniently typed: 4xx responses are not
/// guaranteed to carry the usual shape, and the gateway has been observed
/// sending numbers where strings are documented and vice versa.
#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    #[serde(rename = "Status", default, deserialize_with = "lenient_code")]
    status: Option<i64>,

    #[serde(rename = "RefID", default, deserialize_with = "lenient_string")]
    ref_id: Option<String>,

    #[serde(rename = "errors", default, deserialize_with = "lenient_object")]
    errors: Option<Map<String, Value>>,
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_object<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

/// One verification call against the gateway.
///
/// Holds the pending request being verified, the optional inbound callback
/// request, and the transport to dispatch through. Construct with
/// [`new`](Self::new), optionally attach the callback with
/// [`with_callback`](Self::with_callback), then [`verify`](Self::verify).
#[derive(Debug)]
pub struct Verification<'a, T> {
    pending: &'a PendingRequest,
    callback: Option<&'a CallbackRequest>,
    transport: &'a T,
}

impl<'a, T: Transport> Verification<'a, T> {
    /// Creates a verification for `pending`, dispatched through
    /// `transport`.
    #[must_use]
    pub const fn new(pending: &'a PendingRequest, transport: &'a T) -> Self {
        Self {
            pending,
            callback: None,
            transport,
        }
    }

    /// Attaches the inbound request of a gateway redirect flow, used as the
    /// fallback source for the transaction identifier when the pending
    /// request carries none.
    #[must_use]
    pub const fn with_callback(mut self, callback: &'a CallbackRequest) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Performs the verification call and classifies its result.
    ///
    /// Dispatches exactly one request per invocation. Gateway and
    /// transport failures come back as data inside the outcome, never as
    /// an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`CallbackValidationError`] when the transaction identifier
    /// falls back to the callback request and fails validation there.
    pub async fn verify(&self) -> Result<CheckedPayment, CallbackValidationError> {
        let transaction_id = self.transaction_id()?;
        let url = self.request_url();
        let data = self.request_data(transaction_id.as_deref());

        let outcome = match self.transport.post_json(url, &Value::Object(data)).await {
            Ok(response) => Self::classify(&response, transaction_id),
            // No HTTP response at all: same failover cue as a 5xx.
            Err(source) => CheckedPayment::server_failure(
                None,
                format!("Unable to reach the Zarinpal endpoint: {source}"),
                transaction_id,
            ),
        };

        record_outcome(&outcome);
        Ok(outcome)
    }

    /// Classifies one HTTP response into an outcome.
    fn classify(response: &TransportResponse, transaction_id: Option<String>) -> CheckedPayment {
        let body: ResponseBody = serde_json::from_slice(&response.body).unwrap_or_default();
        let status = body.status.map(Status::from_code);

        // 5xx takes priority over whatever the body claims.
        if response.status.is_server_error() {
            return CheckedPayment::server_failure(
                Some(response.status.as_u16()),
                SERVER_ERROR_MESSAGE,
                transaction_id,
            );
        }

        match status {
            // 4xx responses are not guaranteed to carry the usual body
            // shape, so the HTTP layer is checked alongside the
            // application status.
            Some(code) if code.is_verified() && !response.status.is_client_error() => {
                CheckedPayment::verified(code, transaction_id, body.ref_id)
            }
            _ => CheckedPayment::client_failure(
                status,
                body.errors.unwrap_or_default(),
                transaction_id,
            ),
        }
    }

    /// Resolves the transaction identifier used for both the outgoing
    /// payload and the outcome.
    ///
    /// Precedence: an explicit `Authority` in the pending data bag, then
    /// the callback request, then none. Without an identifier the call
    /// still goes out; the gateway rejects it with a client-side status.
    fn transaction_id(&self) -> Result<Option<String>, CallbackValidationError> {
        if let Some(authority) = self
            .pending
            .field(AUTHORITY_FIELD)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
        {
            return Ok(Some(authority.to_owned()));
        }

        if let Some(callback) = self.callback {
            if callback.has(AUTHORITY_FIELD) {
                return callback.validated_string(AUTHORITY_FIELD).map(Some);
            }
        }

        Ok(None)
    }

    /// Environment-aware URL of the verification endpoint.
    fn request_url(&self) -> Url {
        let host = self.pending.config().environment().host();
        Url::parse(host)
            .and_then(|base| base.join(VERIFICATION_ENDPOINT))
            .expect("gateway host is a valid base URL")
    }

    /// Config-aware payload for the verification endpoint.
    ///
    /// The merchant and transaction identifiers override same-named fields
    /// from the pending request's data bag.
    fn request_data(&self, transaction_id: Option<&str>) -> Map<String, Value> {
        let mut data = self.pending.data().clone();
        data.insert(
            MERCHANT_ID_FIELD.to_owned(),
            Value::from(self.pending.config().merchant_id()),
        );
        data.insert(
            AUTHORITY_FIELD.to_owned(),
            transaction_id.map_or(Value::Null, Value::from),
        );
        data
    }
}

/// Records the classification of a finished verification.
#[cfg(feature = "telemetry")]
fn record_outcome(outcome: &CheckedPayment) {
    match outcome.error() {
        None => tracing::debug!(
            status = ?outcome.status(),
            transaction_id = outcome.transaction_id(),
            "payment verification succeeded"
        ),
        Some(error) => tracing::warn!(
            status = ?outcome.status(),
            transaction_id = outcome.transaction_id(),
            error = %error,
            "payment verification failed"
        ),
    }
}

/// Records the classification of a finished verification.
/// Noop when the telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
const fn record_outcome(_outcome: &CheckedPayment) {}
