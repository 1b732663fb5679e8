//! The pending payment request being verified.

use serde_json::{Map, Value};

use crate::config::GatewayConfig;

/// An in-flight payment request, as seen by the verification flow.
///
/// Carries the merchant configuration and the keyed data bag used to build
/// the outgoing verification payload. Assembling the payment-initiation
/// request itself is the calling application's concern; verification only
/// reads from this type.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    config: GatewayConfig,
    data: Map<String, Value>,
}

impl PendingRequest {
    /// Creates an empty pending request for the given merchant.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            data: Map::new(),
        }
    }

    /// Sets one field of the data bag.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Returns the whole data bag.
    #[must_use]
    pub const fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Returns a single field of the data bag, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns the merchant configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
