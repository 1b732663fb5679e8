//! Merchant credentials and environment selection.
//!
//! Loading configuration from files or the process environment is the
//! calling application's concern; verification only consumes the resolved
//! values held here.

use url::Url;

/// Base host of the live gateway.
pub const PRODUCTION_HOST: &str = "https://www.zarinpal.com";

/// Base host of the sandbox gateway used for integration testing.
pub const SANDBOX_HOST: &str = "https://sandbox.zarinpal.com";

/// Gateway environment, selecting the host requests are sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The live gateway.
    #[default]
    Production,
    /// The gateway's sandbox.
    Sandbox,
    /// A custom gateway host, e.g. a local mock server.
    Custom(Url),
}

impl Environment {
    /// Returns the base host URL for this environment.
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_HOST,
            Self::Sandbox => SANDBOX_HOST,
            Self::Custom(url) => url.as_str(),
        }
    }
}

/// Merchant configuration consumed by verification calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    merchant_id: String,
    environment: Environment,
}

impl GatewayConfig {
    /// Creates a production configuration for the given merchant.
    #[must_use]
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            environment: Environment::Production,
        }
    }

    /// Selects the environment requests are sent to.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Switches this configuration to the sandbox gateway.
    #[must_use]
    pub fn sandbox(self) -> Self {
        self.with_environment(Environment::Sandbox)
    }

    /// Returns the merchant identifier.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// Returns the selected environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_the_host() {
        assert_eq!(Environment::Production.host(), PRODUCTION_HOST);
        assert_eq!(Environment::Sandbox.host(), SANDBOX_HOST);

        let custom = Environment::Custom("http://127.0.0.1:8080".parse().unwrap());
        assert_eq!(custom.host(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn defaults_to_production() {
        let config = GatewayConfig::new("merchant-1");
        assert_eq!(config.environment(), &Environment::Production);
        assert_eq!(config.sandbox().environment(), &Environment::Sandbox);
    }
}
