//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use jazzcash_client::{Environment, GatewayConfig};

/// CLI configuration.
pub struct Config {
    pub gateway: GatewayConfig,
    /// Transport timeout; unset means the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| anyhow::anyhow!("{} environment variable is required", key))
        };

        let merchant_id = required("JAZZCASH_MERCHANT_ID")?;
        let password = required("JAZZCASH_PASSWORD")?;
        let integrity_salt = required("JAZZCASH_INTEGRITY_SALT")?;
        let environment = Environment::resolve(lookup("JAZZCASH_ENVIRONMENT").as_deref());

        let timeout = lookup("JAZZCASH_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| anyhow::anyhow!("JAZZCASH_TIMEOUT_SECS must be a whole number"))
            })
            .transpose()?;

        Ok(Self {
            gateway: GatewayConfig::new(merchant_id, password, integrity_salt)
                .with_environment(environment),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("JAZZCASH_MERCHANT_ID", "MC1"),
        ("JAZZCASH_PASSWORD", "pw"),
        ("JAZZCASH_INTEGRITY_SALT", "salt"),
    ];

    #[test]
    fn test_defaults_to_sandbox_without_timeout() {
        let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();
        assert_eq!(config.gateway.merchant_id, "MC1");
        assert_eq!(config.gateway.environment, Environment::Sandbox);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_production_and_timeout() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("JAZZCASH_ENVIRONMENT", "production"));
        vars.push(("JAZZCASH_TIMEOUT_SECS", "30"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.gateway.environment, Environment::Production);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_missing_salt_is_an_error() {
        let err = Config::from_lookup(lookup(&CREDENTIALS[..2])).err().unwrap();
        assert!(err.to_string().contains("JAZZCASH_INTEGRITY_SALT"));
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("JAZZCASH_TIMEOUT_SECS", "soon"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}
