//! HTTP transport port.

use crate::dto::GatewayResponse;
use crate::error::TransportError;

/// Port trait for posting a JSON body to the gateway.
///
/// Implementations return the body of a successful exchange untouched and
/// map every transport-level failure to [`TransportError`]. Timeouts are the
/// implementation's concern.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<GatewayResponse, TransportError>;
}
