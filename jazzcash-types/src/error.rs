//! Error types shared between the client and its transport adapters.

/// Failure while exchanging a request with the gateway.
///
/// Each variant's message is the underlying transport message, so wrapping
/// errors can embed it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Timeout(String),

    #[error("{0}")]
    Connect(String),

    /// The gateway answered with a non-success HTTP status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Request(String),
}

impl TransportError {
    /// True for timeouts and connection failures.
    pub fn is_network(&self) -> bool {
        matches!(self, TransportError::Timeout(_) | TransportError::Connect(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_underlying_text() {
        let err = TransportError::Connect("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.is_network());
    }

    #[test]
    fn test_status_message() {
        let err = TransportError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "Request failed with status code 502");
        assert!(!err.is_network());
    }
}
