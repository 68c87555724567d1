//! # Strkey Codec
//!
//! Stellar's human-facing key encoding. A strkey is:
//!
//! ```text
//! base32( version_byte || payload || crc16_xmodem(version_byte || payload) )
//! ```
//!
//! with the RFC 4648 alphabet and no padding. The version byte picks the
//! leading letter: account IDs get `6 << 3` (every address starts with `G`),
//! Ed25519 seeds get `18 << 3` (`S`). The CRC16 trailer detects transcription
//! errors — users copy these strings by hand more often than anyone would
//! like, and a silently corrupted address is a payment to a stranger.
//!
//! We implement exactly the two flavors the analysis pipeline touches.
//! Muxed accounts, pre-auth hashes, and the rest of the strkey zoo belong
//! to a full SDK, not here.

use data_encoding::BASE32_NOPAD;
use thiserror::Error;

use crate::config::{PUBLIC_KEY_LENGTH, STRKEY_VERSION_ACCOUNT_ID, STRKEY_VERSION_SEED};

/// Errors that can occur while decoding a strkey.
///
/// The messages name the rule that failed without echoing the offending
/// string — callers already hold it, and secrets (seeds) must never ride
/// along in error text.
#[derive(Debug, Error)]
pub enum StrkeyError {
    /// The string is not valid unpadded base32.
    #[error("invalid base32: {0}")]
    InvalidBase32(String),

    /// The decoded payload is too short to contain a version byte, a key,
    /// and a checksum.
    #[error("decoded strkey too short: {got} bytes")]
    TooShort { got: usize },

    /// The version byte does not match the expected key kind.
    #[error("wrong strkey version byte: expected {expected:#04x}, got {got:#04x}")]
    WrongVersion { expected: u8, got: u8 },

    /// The embedded payload has an unexpected length.
    #[error("invalid strkey payload length: expected {expected} bytes, got {got}")]
    InvalidPayloadLength { expected: usize, got: usize },

    /// The CRC16 checksum does not match the payload.
    #[error("strkey checksum mismatch")]
    ChecksumMismatch,
}

/// Encode a 32-byte Ed25519 public key as a `G...` account ID.
pub fn encode_account_id(key: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    encode(STRKEY_VERSION_ACCOUNT_ID, key)
}

/// Encode a 32-byte Ed25519 seed as an `S...` secret string.
///
/// The output is a secret. Treat it like one: no logs, no error messages,
/// no clipboard managers you don't trust.
pub fn encode_seed(seed: &[u8; 32]) -> String {
    encode(STRKEY_VERSION_SEED, seed)
}

/// Decode a `G...` account ID back into its raw 32-byte public key.
///
/// Validates the version byte, payload length, and checksum. Anything that
/// fails here is not a Stellar address, whatever it looks like.
pub fn decode_account_id(addr: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], StrkeyError> {
    decode(STRKEY_VERSION_ACCOUNT_ID, addr)
}

fn encode(version: u8, payload: &[u8; 32]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 2);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = crc16_xmodem(&data);
    data.push((checksum & 0xFF) as u8);
    data.push((checksum >> 8) as u8);

    BASE32_NOPAD.encode(&data)
}

fn decode(version: u8, s: &str) -> Result<[u8; 32], StrkeyError> {
    let data = BASE32_NOPAD
        .decode(s.as_bytes())
        .map_err(|e| StrkeyError::InvalidBase32(e.to_string()))?;

    // version byte + payload + 2 checksum bytes
    if data.len() < 3 {
        return Err(StrkeyError::TooShort { got: data.len() });
    }

    let (body, checksum_bytes) = data.split_at(data.len() - 2);
    let expected = crc16_xmodem(body);
    let got = u16::from(checksum_bytes[0]) | (u16::from(checksum_bytes[1]) << 8);
    if expected != got {
        return Err(StrkeyError::ChecksumMismatch);
    }

    if body[0] != version {
        return Err(StrkeyError::WrongVersion {
            expected: version,
            got: body[0],
        });
    }

    let payload = &body[1..];
    if payload.len() != 32 {
        return Err(StrkeyError::InvalidPayloadLength {
            expected: 32,
            got: payload.len(),
        });
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(payload);
    Ok(out)
}

/// CRC16-XModem over the version byte and payload.
///
/// Polynomial 0x1021, initial value 0, no reflection. The same checksum
/// every Stellar SDK computes; interop dies if this drifts by a bit.
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
