//! # JazzCash Client
//!
//! A typed Rust client for the JazzCash mobile-wallet purchase API.
//!
//! The client builds the exact parameter set the gateway expects, signs it
//! with HMAC-SHA256 over the values in sorted-key order, and posts it to the
//! endpoint selected by the configured environment. The gateway's reply is
//! relayed as-is; response codes are left to the caller.

pub mod security;
pub mod transport;

use tracing::{Span, debug, info, instrument, warn};

pub use jazzcash_types::{
    Amount, Clock, Environment, GatewayConfig, GatewayResponse, HttpTransport, KeyedHasher,
    SystemClock, TransactionParams, TransactionRequest, TransportError, secure_hash,
    secure_hash_input,
};
pub use security::HmacSha256Hasher;
pub use transport::ReqwestTransport;

/// Error type for client operations.
///
/// Every variant renders as `Transaction initiation failed: ...`.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Transaction initiation failed: {0}")]
    TransactionInitiation(#[from] TransportError),

    #[error("Transaction initiation failed: could not encode parameters: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// Returns the transport failure, if that is what went wrong.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            GatewayError::TransactionInitiation(err) => Some(err),
            GatewayError::Serialization(_) => None,
        }
    }
}

/// JazzCash mobile-wallet client.
///
/// Holds immutable credentials and the injected collaborators, so a single
/// instance can be shared across concurrent calls.
pub struct JazzCashClient<T = ReqwestTransport, H = HmacSha256Hasher, C = SystemClock> {
    config: GatewayConfig,
    endpoint: String,
    transport: T,
    hasher: H,
    clock: C,
}

impl JazzCashClient {
    /// Creates a client for the configured environment.
    ///
    /// No network activity happens here.
    pub fn new(config: GatewayConfig) -> Self {
        let hasher = HmacSha256Hasher::new(&config.integrity_salt);
        Self {
            endpoint: config.endpoint_url().to_string(),
            config,
            transport: ReqwestTransport::new(),
            hasher,
            clock: SystemClock,
        }
    }
}

impl<T, H, C> JazzCashClient<T, H, C> {
    /// Replaces the HTTP transport.
    pub fn with_transport<T2: HttpTransport>(self, transport: T2) -> JazzCashClient<T2, H, C> {
        JazzCashClient {
            config: self.config,
            endpoint: self.endpoint,
            transport,
            hasher: self.hasher,
            clock: self.clock,
        }
    }

    /// Replaces the keyed hasher used for `pp_SecureHash`.
    pub fn with_hasher<H2: KeyedHasher>(self, hasher: H2) -> JazzCashClient<T, H2, C> {
        JazzCashClient {
            config: self.config,
            endpoint: self.endpoint,
            transport: self.transport,
            hasher,
            clock: self.clock,
        }
    }

    /// Replaces the time source for `pp_TxnRefNo` and `pp_TxnDateTime`.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> JazzCashClient<T, H, C2> {
        JazzCashClient {
            config: self.config,
            endpoint: self.endpoint,
            transport: self.transport,
            hasher: self.hasher,
            clock,
        }
    }

    /// Overrides the endpoint URL, e.g. to target a local mock gateway.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the URL transactions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured environment.
    pub fn environment(&self) -> Environment {
        self.config.environment
    }
}

impl<T, H, C> JazzCashClient<T, H, C>
where
    T: HttpTransport,
    H: KeyedHasher,
    C: Clock,
{
    /// Computes the secure hash over a complete field set.
    ///
    /// Values are joined with `&` in ascending key order and signed with the
    /// integrity salt. Missing optional fields must already be present as
    /// empty strings.
    pub fn generate_secure_hash<'a, I>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        secure_hash(&self.hasher, fields)
    }

    /// Builds and signs the parameter set for `request` without sending it.
    pub fn build_params(&self, request: TransactionRequest) -> TransactionParams {
        let params = TransactionParams::new(&self.config, request, self.clock.now());
        let hash = self.generate_secure_hash(params.fields());
        params.with_secure_hash(hash)
    }

    /// Signs `request` and submits it to the gateway.
    ///
    /// A received success response is returned unchanged. Any transport
    /// failure is wrapped in [`GatewayError::TransactionInitiation`]. There
    /// are no retries.
    #[instrument(
        skip(self, request),
        fields(
            environment = %self.config.environment,
            bill_reference = %request.bill_reference,
            txn_ref_no = tracing::field::Empty,
        )
    )]
    pub async fn initiate_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        let params = self.build_params(request);
        Span::current().record("txn_ref_no", params.txn_ref_no.as_str());
        debug!(
            txn_date_time = %params.txn_date_time,
            amount = %params.amount,
            "Built signed transaction parameters"
        );

        let body = serde_json::to_value(&params)?;

        info!("Submitting transaction to {}", self.endpoint);
        match self.transport.post_json(&self.endpoint, &body).await {
            Ok(resp) => {
                info!(status = resp.status, "Transaction submitted");
                Ok(resp)
            }
            Err(e) => {
                warn!(error = %e, "Transaction initiation failed");
                Err(GatewayError::TransactionInitiation(e))
            }
        }
    }
}
