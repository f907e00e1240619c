//! The exact parameter set submitted to the mobile-wallet endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::GatewayConfig;
use crate::dto::TransactionRequest;

pub const API_VERSION: &str = "1.1";
pub const TXN_TYPE_MWALLET: &str = "MWALLET";
pub const LANGUAGE_EN: &str = "EN";
pub const CURRENCY_PKR: &str = "PKR";

/// `YYYYMMDDHHmmss`, UTC.
pub const TXN_DATE_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Signed request body for `DoMWalletTransaction`.
///
/// One field per protocol key. The serde names are the wire names and
/// [`TransactionParams::fields`] must list the same keys, since the secure
/// hash covers exactly what is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParams {
    #[serde(rename = "pp_Version")]
    pub version: String,
    #[serde(rename = "pp_TxnType")]
    pub txn_type: String,
    #[serde(rename = "pp_Language")]
    pub language: String,
    #[serde(rename = "pp_MerchantID")]
    pub merchant_id: String,
    #[serde(rename = "pp_Password")]
    pub password: String,
    #[serde(rename = "pp_TxnRefNo")]
    pub txn_ref_no: String,
    #[serde(rename = "pp_Amount")]
    pub amount: String,
    #[serde(rename = "pp_TxnCurrency")]
    pub txn_currency: String,
    #[serde(rename = "pp_TxnDateTime")]
    pub txn_date_time: String,
    #[serde(rename = "pp_BillReference")]
    pub bill_reference: String,
    #[serde(rename = "pp_Description")]
    pub description: String,
    #[serde(rename = "pp_ReturnURL")]
    pub return_url: String,
    #[serde(rename = "pp_SecureHash")]
    pub secure_hash: String,
    #[serde(rename = "ppmpf_1")]
    pub ppmpf_1: String,
    #[serde(rename = "ppmpf_2")]
    pub ppmpf_2: String,
    #[serde(rename = "ppmpf_3")]
    pub ppmpf_3: String,
    #[serde(rename = "ppmpf_4")]
    pub ppmpf_4: String,
    #[serde(rename = "ppmpf_5")]
    pub ppmpf_5: String,
}

impl TransactionParams {
    /// Builds the unsigned parameter set for a transaction started at `now`.
    ///
    /// `pp_SecureHash` is left empty; it still takes part in the hash input.
    pub fn new(config: &GatewayConfig, request: TransactionRequest, now: DateTime<Utc>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            txn_type: TXN_TYPE_MWALLET.to_string(),
            language: LANGUAGE_EN.to_string(),
            merchant_id: config.merchant_id.clone(),
            password: config.password.clone(),
            txn_ref_no: txn_ref_no(now),
            amount: request.amount.into_string(),
            txn_currency: CURRENCY_PKR.to_string(),
            txn_date_time: txn_date_time(now),
            bill_reference: request.bill_reference,
            description: request.description,
            return_url: request.return_url,
            secure_hash: String::new(),
            ppmpf_1: request.custom_param_1.unwrap_or_default(),
            ppmpf_2: request.custom_param_2.unwrap_or_default(),
            ppmpf_3: request.custom_param_3.unwrap_or_default(),
            ppmpf_4: request.custom_param_4.unwrap_or_default(),
            ppmpf_5: request.custom_param_5.unwrap_or_default(),
        }
    }

    /// Returns every `(wire key, value)` pair, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 18] {
        [
            ("pp_Version", self.version.as_str()),
            ("pp_TxnType", self.txn_type.as_str()),
            ("pp_Language", self.language.as_str()),
            ("pp_MerchantID", self.merchant_id.as_str()),
            ("pp_Password", self.password.as_str()),
            ("pp_TxnRefNo", self.txn_ref_no.as_str()),
            ("pp_Amount", self.amount.as_str()),
            ("pp_TxnCurrency", self.txn_currency.as_str()),
            ("pp_TxnDateTime", self.txn_date_time.as_str()),
            ("pp_BillReference", self.bill_reference.as_str()),
            ("pp_Description", self.description.as_str()),
            ("pp_ReturnURL", self.return_url.as_str()),
            ("pp_SecureHash", self.secure_hash.as_str()),
            ("ppmpf_1", self.ppmpf_1.as_str()),
            ("ppmpf_2", self.ppmpf_2.as_str()),
            ("ppmpf_3", self.ppmpf_3.as_str()),
            ("ppmpf_4", self.ppmpf_4.as_str()),
            ("ppmpf_5", self.ppmpf_5.as_str()),
        ]
    }

    /// Replaces `pp_SecureHash`.
    pub fn with_secure_hash(mut self, hash: impl Into<String>) -> Self {
        self.secure_hash = hash.into();
        self
    }
}

/// Transaction reference: `T` followed by Unix time in milliseconds.
pub fn txn_ref_no(now: DateTime<Utc>) -> String {
    format!("T{}", now.timestamp_millis())
}

/// Transaction timestamp as 14 digits, UTC, no separators.
pub fn txn_date_time(now: DateTime<Utc>) -> String {
    now.format(TXN_DATE_TIME_FORMAT).to_string()
}
