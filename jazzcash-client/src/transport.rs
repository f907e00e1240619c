//! `reqwest` adapter for the HTTP transport port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use jazzcash_types::{GatewayResponse, HttpTransport, TransportError};

/// Posts JSON bodies with a shared `reqwest::Client`.
///
/// No timeout is set unless [`ReqwestTransport::with_timeout`] is used.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client, keeping its timeouts, proxies and TLS setup.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    /// Builds a transport whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(classify)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<GatewayResponse, TransportError> {
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(classify)?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "Gateway responded");

        let resp = GatewayResponse::from_bytes(status.as_u16(), &bytes);
        if !status.is_success() {
            return Err(TransportError::Status {
                status: resp.status,
                body: resp.body,
            });
        }

        Ok(resp)
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}
