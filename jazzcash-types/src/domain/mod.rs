//! Domain models for the gateway client.

pub mod amount;
pub mod config;
pub mod environment;
pub mod params;

pub use amount::Amount;
pub use config::GatewayConfig;
pub use environment::{Environment, PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT};
pub use params::TransactionParams;
