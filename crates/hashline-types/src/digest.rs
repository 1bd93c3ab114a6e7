use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::TypeError;
use crate::payload::Payload;

/// Content digest of a record payload.
///
/// A `PayloadDigest` is the SHA-256 hash of the payload's UTF-8 bytes
/// and nothing else. The timestamp and the previous-record link are
/// intentionally excluded from the digest input: two records carrying
/// the same payload have the same digest regardless of their position
/// in a chain. Lookup by digest therefore resolves to the first record
/// with that payload, and tamper detection covers payload content, not
/// chain position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PayloadDigest([u8; 32]);

impl PayloadDigest {
    /// Compute the digest of a payload.
    pub fn of_payload(payload: &Payload) -> Self {
        Self::of_bytes(payload.as_str().as_bytes())
    }

    /// Compute the digest of raw bytes.
    pub fn of_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Wrap a pre-computed 32-byte hash.
    pub const fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation (64 lowercase characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for PayloadDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayloadDigest({})", self.short_hex())
    }
}

impl fmt::Display for PayloadDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for PayloadDigest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<PayloadDigest> for [u8; 32] {
    fn from(digest: PayloadDigest) -> Self {
        digest.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn of_bytes_is_deterministic() {
        let data = b"hello world";
        let d1 = PayloadDigest::of_bytes(data);
        let d2 = PayloadDigest::of_bytes(data);
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_payloads_produce_different_digests() {
        let d1 = PayloadDigest::of_bytes(b"hello");
        let d2 = PayloadDigest::of_bytes(b"world");
        assert_ne!(d1, d2);
    }

    #[test]
    fn digest_matches_known_sha256_value() {
        let payload = Payload::new("5645").unwrap();
        let digest = PayloadDigest::of_payload(&payload);
        assert_eq!(
            digest.to_hex(),
            "dae469cdd7440d3ace7b3b51cb955c0642fe38ab1cd74d86573caf9e61409e6a"
        );
    }

    #[test]
    fn hex_roundtrip() {
        let digest = PayloadDigest::of_bytes(b"test");
        let hex = digest.to_hex();
        let parsed = PayloadDigest::from_hex(&hex).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_characters() {
        let err = PayloadDigest::from_hex("zz").unwrap_err();
        assert!(matches!(err, TypeError::InvalidHex(_)));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = PayloadDigest::from_hex("abcdef").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 3
            }
        );
    }

    #[test]
    fn short_hex_is_8_chars() {
        let digest = PayloadDigest::of_bytes(b"test");
        assert_eq!(digest.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let digest = PayloadDigest::of_bytes(b"test");
        let display = format!("{digest}");
        assert_eq!(display.len(), 64);
        assert_eq!(display, digest.to_hex());
    }

    #[test]
    fn serde_roundtrip() {
        let digest = PayloadDigest::of_bytes(b"serde test");
        let json = serde_json::to_string(&digest).unwrap();
        let parsed: PayloadDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    proptest! {
        #[test]
        fn digest_depends_only_on_payload_text(text in "\\PC+") {
            let payload = Payload::new(text.clone()).unwrap();
            let d1 = PayloadDigest::of_payload(&payload);
            let d2 = PayloadDigest::of_bytes(text.as_bytes());
            prop_assert_eq!(d1, d2);
        }

        #[test]
        fn hex_roundtrip_holds(text in "\\PC+") {
            let digest = PayloadDigest::of_bytes(text.as_bytes());
            let parsed = PayloadDigest::from_hex(&digest.to_hex()).unwrap();
            prop_assert_eq!(digest, parsed);
        }
    }
}
