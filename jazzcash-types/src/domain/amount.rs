//! Transaction amount with a single canonical text form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount as it is sent to and signed for the gateway.
///
/// JazzCash expects the amount in paisa as a decimal string. An amount built
/// from an integer and one built from the same digits as text carry the same
/// canonical string, so they produce the same secure hash. Text is kept
/// verbatim; no validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "AmountRepr", into = "String")]
pub struct Amount(String);

impl Amount {
    /// Returns the canonical string used on the wire and in the hash.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the amount, returning its canonical string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! amount_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Amount {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

amount_from_integer!(u32, u64, i32, i64);

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts either a JSON string or any JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Number(serde_json::Number),
}

impl From<AmountRepr> for Amount {
    fn from(repr: AmountRepr) -> Self {
        match repr {
            AmountRepr::Text(text) => Amount::from(text),
            AmountRepr::Number(n) => Amount::from(n.to_string()),
        }
    }
}
