//! Caller-facing request and response types.

use serde::{Deserialize, Serialize};

use crate::domain::Amount;

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// Per-call transaction data supplied by the merchant.
///
/// Fields are passed through to the gateway without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Amount in paisa
    pub amount: Amount,
    pub bill_reference: String,
    pub description: String,
    /// Where the gateway redirects or posts back once processing completes
    pub return_url: String,
    /// Merchant passthrough values, sent as `ppmpf_1`..`ppmpf_5`
    #[serde(rename = "customParam1", default, skip_serializing_if = "Option::is_none")]
    pub custom_param_1: Option<String>,
    #[serde(rename = "customParam2", default, skip_serializing_if = "Option::is_none")]
    pub custom_param_2: Option<String>,
    #[serde(rename = "customParam3", default, skip_serializing_if = "Option::is_none")]
    pub custom_param_3: Option<String>,
    #[serde(rename = "customParam4", default, skip_serializing_if = "Option::is_none")]
    pub custom_param_4: Option<String>,
    #[serde(rename = "customParam5", default, skip_serializing_if = "Option::is_none")]
    pub custom_param_5: Option<String>,
}

impl TransactionRequest {
    /// Creates a request without custom parameters.
    pub fn new(
        amount: impl Into<Amount>,
        bill_reference: impl Into<String>,
        description: impl Into<String>,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            bill_reference: bill_reference.into(),
            description: description.into(),
            return_url: return_url.into(),
            ..Default::default()
        }
    }

    /// Sets custom parameter `index` (1 through 5). Other indices are ignored.
    pub fn with_custom_param(mut self, index: usize, value: impl Into<String>) -> Self {
        let slot = match index {
            1 => &mut self.custom_param_1,
            2 => &mut self.custom_param_2,
            3 => &mut self.custom_param_3,
            4 => &mut self.custom_param_4,
            5 => &mut self.custom_param_5,
            _ => return self,
        };
        *slot = Some(value.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

/// Gateway reply, relayed without interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as received. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD; valid UTF-8 is kept byte for byte.
    pub body: String,
}

impl GatewayResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Builds a response from raw body bytes, decoding them as UTF-8.
    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        Self::new(status, String::from_utf8_lossy(bytes))
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
