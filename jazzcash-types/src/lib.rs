//! # JazzCash Types
//!
//! Domain types, signing rules and port traits for the JazzCash
//! mobile-wallet gateway client. This crate performs no IO.
//!
//! - `domain/` - Credentials, environment routing, the signed parameter set
//! - `dto` - Caller-facing request and response types
//! - `ports/` - Capabilities the client needs (transport, keyed hash, clock)
//! - `signing` - Secure hash input construction
//! - `error` - Transport error type

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod signing;

// Re-export commonly used types
pub use domain::{
    Amount, Environment, GatewayConfig, PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT, TransactionParams,
};
pub use dto::*;
pub use error::TransportError;
pub use ports::{Clock, HttpTransport, KeyedHasher, SystemClock};
pub use signing::{secure_hash, secure_hash_input};
