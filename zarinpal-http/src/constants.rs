//! Endpoint path and wire field names for the verification call.

/// Path of the verification endpoint, joined onto the environment host.
pub const VERIFICATION_ENDPOINT: &str = "/pg/rest/WebGate/PaymentVerification.json";

/// Payload field carrying the merchant identifier.
pub const MERCHANT_ID_FIELD: &str = "MerchantID";

/// Payload, callback, and data-bag field carrying the transaction
/// identifier.
pub const AUTHORITY_FIELD: &str = "Authority";

/// Response field carrying the gateway status code.
pub const STATUS_FIELD: &str = "Status";

/// Response field carrying the payment reference number.
pub const REF_ID_FIELD: &str = "RefID";

/// Response field carrying raw error details.
pub const ERRORS_FIELD: &str = "errors";
