//! # Account Addresses
//!
//! A validated Stellar account ID. Construction runs the full strkey
//! decode (version byte, payload length, CRC16 checksum), so holding an
//! `AccountAddress` means holding a string that is, at minimum, a
//! plausible account on *some* Stellar network.
//!
//! Note what validation does **not** prove: that the account exists, that
//! its key is a healthy curve point, or that anyone can sign for it. Those
//! questions belong to the account directory and the matcher respectively.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::crypto::strkey::{self, StrkeyError};

/// Errors that can occur constructing an [`AccountAddress`].
#[derive(Debug, Error)]
pub enum AddressError {
    /// The string is not a well-formed `G...` strkey.
    #[error("not a valid account address: {0}")]
    Malformed(#[from] StrkeyError),
}

/// A validated, strkey-encoded Stellar account ID.
///
/// Equality, ordering, and hashing all operate on the canonical encoded
/// string, so the type works as a map key wherever accounts index data.
///
/// # Examples
///
/// ```
/// use lumen_core::identity::AccountAddress;
///
/// let addr = AccountAddress::new(
///     "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3",
/// ).unwrap();
/// assert!(addr.as_str().starts_with('G'));
///
/// assert!(AccountAddress::new("definitely not an address").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parse and validate a `G...` account ID string.
    pub fn new(addr: impl Into<String>) -> Result<Self, AddressError> {
        let addr = addr.into();
        strkey::decode_account_id(&addr)?;
        Ok(Self(addr))
    }

    /// The encoded address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to the raw 32-byte Ed25519 public key.
    ///
    /// Cannot fail: the string was validated at construction. We still
    /// route through the real decoder rather than caching bytes, because
    /// the address string is the canonical representation and 32 extra
    /// bytes per address is a price nobody asked us to pay.
    pub fn key_bytes(&self) -> [u8; 32] {
        strkey::decode_account_id(&self.0).expect("validated at construction")
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.0)
    }
}

impl std::str::FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AccountAddress::new(s).map_err(serde::de::Error::custom)
    }
}
