//! Keyed hash port.

/// Computes a keyed digest over a message, rendered as lowercase hex.
///
/// The key is bound at construction so it never travels with the message.
pub trait KeyedHasher: Send + Sync {
    fn sign(&self, message: &[u8]) -> String;
}
