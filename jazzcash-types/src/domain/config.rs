//! Merchant credentials and environment selection.

use serde::Deserialize;
use std::fmt;

use super::environment::Environment;

/// Credentials issued by JazzCash plus the target environment.
///
/// Immutable once handed to a client. `Debug` output redacts the password
/// and the integrity salt.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    pub merchant_id: String,
    pub password: String,
    /// HMAC key for the secure hash. Never sent over the wire.
    pub integrity_salt: String,
    #[serde(default)]
    pub environment: Environment,
}

impl GatewayConfig {
    /// Creates a sandbox configuration.
    pub fn new(
        merchant_id: impl Into<String>,
        password: impl Into<String>,
        integrity_salt: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            password: password.into(),
            integrity_salt: integrity_salt.into(),
            environment: Environment::Sandbox,
        }
    }

    /// Sets the environment.
    pub fn with_environment(mut self, environment: impl Into<Environment>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Returns the endpoint URL for the configured environment.
    pub fn endpoint_url(&self) -> &'static str {
        self.environment.endpoint_url()
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("merchant_id", &self.merchant_id)
            .field("password", &"<redacted>")
            .field("integrity_salt", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
