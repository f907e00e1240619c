//! HMAC-SHA256 signing for the secure hash.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use jazzcash_types::KeyedHasher;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 keyed with the merchant's integrity salt.
///
/// The keyed state is prepared once and cloned per message.
#[derive(Clone)]
pub struct HmacSha256Hasher {
    mac: HmacSha256,
}

impl HmacSha256Hasher {
    pub fn new(integrity_salt: &str) -> Self {
        let mac = HmacSha256::new_from_slice(integrity_salt.as_bytes())
            .expect("HMAC can take key of any size");
        Self { mac }
    }
}

impl KeyedHasher for HmacSha256Hasher {
    fn sign(&self, message: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for HmacSha256Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HmacSha256Hasher(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_value() {
        let hasher = HmacSha256Hasher::new("abc");
        assert_eq!(
            hasher.sign(b"100&1.1"),
            "56ca8314796f856f5b0cfdbd48704620653477c02bb9372f0a61cffe4347ebe3"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = HmacSha256Hasher::new("salt").sign(b"payload");
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_reused_hasher_is_deterministic() {
        let hasher = HmacSha256Hasher::new("salt");
        let first = hasher.sign(b"payload");
        let second = hasher.sign(b"payload");
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_matters() {
        let a = HmacSha256Hasher::new("salt-a").sign(b"payload");
        let b = HmacSha256Hasher::new("salt-b").sign(b"payload");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_salt_is_accepted() {
        let signature = HmacSha256Hasher::new("").sign(b"payload");
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", HmacSha256Hasher::new("topsecret"));
        assert!(!debug.contains("topsecret"));
    }
}
