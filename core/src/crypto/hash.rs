//! # Signing Payload Hashes
//!
//! A Stellar signature is never computed over the raw transaction bytes.
//! It is computed over the *signing payload*: the SHA-256 digest of the
//! network ID, an envelope discriminant, and the XDR-encoded transaction
//! body. Fee-bump envelopes get their own payload, distinct from the inner
//! transaction's — sign the wrong one and you've signed nothing.
//!
//! Producing that digest requires an XDR encoder, which is the external
//! decoder's job, not ours. This module only gives the digest a type, so a
//! payload can't be confused with any other 32 bytes wandering through the
//! codebase.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SIGNING_PAYLOAD_LENGTH;

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// Used by [`TransactionHash::of`] and by tests fabricating deterministic
/// payloads. For anything fancier, go find a full SDK.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// The 32-byte signing payload of a transaction or fee-bump envelope.
///
/// This is what Ed25519 signatures on the envelope are actually computed
/// over. The digest is produced by the external transaction decoder (it
/// must be bit-compatible with the network's transaction-hashing rule —
/// verification against anything else is meaningless) and transported
/// here untouched.
///
/// Serializes as a lowercase hex string in human-readable formats, raw
/// bytes otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionHash([u8; SIGNING_PAYLOAD_LENGTH]);

impl TransactionHash {
    /// Wrap an existing 32-byte digest.
    pub fn from_bytes(bytes: [u8; SIGNING_PAYLOAD_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Hash arbitrary bytes with SHA-256 and wrap the digest.
    ///
    /// Convenience for tests and tooling that need *a* well-formed payload;
    /// real payloads come from the decoder.
    pub fn of(data: &[u8]) -> Self {
        Self(sha256_array(data))
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != SIGNING_PAYLOAD_LENGTH {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; SIGNING_PAYLOAD_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNING_PAYLOAD_LENGTH] {
        &self.0
    }

    /// Hex-encoded representation. 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionHash({})", &self.to_hex()[..16])
    }
}

impl Serialize for TransactionHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for TransactionHash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            TransactionHash::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            if bytes.len() != SIGNING_PAYLOAD_LENGTH {
                return Err(serde::de::Error::custom(format!(
                    "expected 32-byte payload, got {}",
                    bytes.len()
                )));
            }
            let mut arr = [0u8; SIGNING_PAYLOAD_LENGTH];
            arr.copy_from_slice(&bytes);
            Ok(TransactionHash(arr))
        }
    }
}
