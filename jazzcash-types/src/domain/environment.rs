//! Gateway environment and endpoint routing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sandbox endpoint for mobile-wallet purchases.
pub const SANDBOX_ENDPOINT: &str =
    "https://sandbox.jazzcash.com.pk/ApplicationAPI/API/2.0/Purchase/DoMWalletTransaction";

/// Production endpoint for mobile-wallet purchases.
pub const PRODUCTION_ENDPOINT: &str =
    "https://payments.jazzcash.com.pk/ApplicationAPI/API/2.0/Purchase/DoMWalletTransaction";

/// Which JazzCash deployment requests are sent to.
///
/// Only the exact text `"production"` selects [`Environment::Production`];
/// every other value, and an absent value, resolves to the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Resolves an optional environment name, defaulting to the sandbox.
    pub fn resolve(name: Option<&str>) -> Self {
        name.map(Self::from).unwrap_or_default()
    }

    /// Returns the fixed endpoint URL for this environment.
    pub fn endpoint_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_ENDPOINT,
            Environment::Production => PRODUCTION_ENDPOINT,
        }
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        match name {
            "production" => Environment::Production,
            _ => Environment::Sandbox,
        }
    }
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        env.as_ref().to_string()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
