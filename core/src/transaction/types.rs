//! Core type definitions for analysed transactions.
//!
//! These types are the decoder's hand-off format: small serde structs that
//! carry exactly what attribution needs. They are read-only snapshots —
//! the analyzer never mutates a transaction, it only reports on one.

use serde::{Deserialize, Serialize};
use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::hash::TransactionHash;
use crate::identity::AccountAddress;

// ---------------------------------------------------------------------------
// TransactionSignature
// ---------------------------------------------------------------------------

/// A raw Ed25519 signature attached to a transaction envelope.
///
/// 64 bytes when honest. Stored as `Vec<u8>` because the wire allows
/// shorter or longer garbage and the analyzer must be able to *carry* a
/// malformed signature far enough to report it as unattributable —
/// verification of a wrong-length signature simply fails, no panics.
///
/// Displays and serializes as base64, the encoding the network's tooling
/// uses for signature bytes everywhere humans see them.
#[derive(Clone, PartialEq, Eq)]
pub struct TransactionSignature {
    bytes: Vec<u8>,
}

impl TransactionSignature {
    /// Wrap a 64-byte raw signature.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Wrap arbitrary signature bytes, length unchecked.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base64-encoded signature, as rendered in attribution reports.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    /// Parse a base64-encoded signature.
    pub fn from_base64(s: &str) -> Result<Self, base64::DecodeError> {
        Ok(Self {
            bytes: BASE64.decode(s)?,
        })
    }
}

impl fmt::Display for TransactionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl fmt::Debug for TransactionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b64 = self.to_base64();
        if b64.len() > 16 {
            write!(f, "TransactionSignature({}...)", &b64[..16])
        } else {
            write!(f, "TransactionSignature({})", b64)
        }
    }
}

impl Serialize for TransactionSignature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base64())
        } else {
            serializer.serialize_bytes(&self.bytes)
        }
    }
}

impl<'de> Deserialize<'de> for TransactionSignature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            TransactionSignature::from_base64(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            Ok(TransactionSignature { bytes })
        }
    }
}

// ---------------------------------------------------------------------------
// OperationKind
// ---------------------------------------------------------------------------

/// Discriminant for the operation a transaction step represents.
///
/// Attribution only cares about an operation's override source account,
/// but the kind rides along so reports and tooling can say *what* the
/// account was asked to authorize. The named variants are the operations
/// the wallet surface renders specially; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationKind {
    /// Fund and create a new account.
    CreateAccount,
    /// Transfer an asset between accounts.
    Payment,
    /// Add, update, or remove a trustline.
    ChangeTrust,
    /// Update account options: thresholds, signers, flags, home domain.
    SetOptions,
    /// Authorize or deauthorize a trustline held against this account.
    AllowTrust,
    /// Any operation the analysis has no special handling for.
    Other,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateAccount => write!(f, "Create Account"),
            Self::Payment => write!(f, "Payment"),
            Self::ChangeTrust => write!(f, "Change Trust"),
            Self::SetOptions => write!(f, "Set Options"),
            Self::AllowTrust => write!(f, "Allow Trust"),
            Self::Other => write!(f, "Other"),
        }
    }
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// One operation inside a transaction.
///
/// An operation may declare its own source account, overriding the
/// transaction-level source for that step. Override sources matter
/// enormously to attribution: their signers are candidates too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// What the operation does.
    pub kind: OperationKind,

    /// Override source account. `None` means the operation acts for the
    /// transaction's source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<AccountAddress>,
}

impl Operation {
    /// An operation acting for the transaction source.
    pub fn new(kind: OperationKind) -> Self {
        Self { kind, source: None }
    }

    /// An operation with its own override source account.
    pub fn with_source(kind: OperationKind, source: AccountAddress) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }

    /// The account this operation actually acts for, given the enclosing
    /// transaction's source.
    pub fn effective_source<'a>(
        &'a self,
        transaction_source: Option<&'a AccountAddress>,
    ) -> Option<&'a AccountAddress> {
        self.source.as_ref().or(transaction_source)
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A decoded Stellar transaction, as seen by the analyzer.
///
/// `source` is optional because malformed envelopes exist in the wild and
/// the collector tolerates them (a missing source simply
/// contributes no candidates). `signing_payload` is optional for the same
/// reason — but *that* absence is fatal, because without the payload there
/// is nothing to verify signatures against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction's source account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<AccountAddress>,

    /// Ordered operations, each optionally carrying an override source.
    #[serde(default)]
    pub operations: Vec<Operation>,

    /// Signatures already attached to the envelope, in envelope order.
    #[serde(default)]
    pub signatures: Vec<TransactionSignature>,

    /// The canonical network hash of this transaction — what the attached
    /// signatures were (allegedly) computed over. Produced by the decoder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_payload: Option<TransactionHash>,
}

// ---------------------------------------------------------------------------
// FeeBumpTransaction
// ---------------------------------------------------------------------------

/// A fee-bump envelope: an outer transaction that re-wraps an inner one
/// solely to replace its fee.
///
/// The outer envelope carries its own signature list, authorized by the
/// fee source account alone, and its own signing payload — a different
/// hash than the inner transaction's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBumpTransaction {
    /// The account paying the replacement fee and authorizing the wrapper.
    pub fee_source: AccountAddress,

    /// The fee-bump envelope's own signatures, in envelope order.
    #[serde(default)]
    pub signatures: Vec<TransactionSignature>,

    /// The fee-bump envelope's own signing payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_payload: Option<TransactionHash>,

    /// The wrapped transaction, analysable entirely on its own.
    pub inner: Transaction,
}

// ---------------------------------------------------------------------------
// TransactionEnvelope
// ---------------------------------------------------------------------------

/// Either envelope flavor, tagged for serde.
///
/// This is the shape tooling reads from disk or the wire:
///
/// ```json
/// { "type": "transaction", "source": "G...", ... }
/// { "type": "fee_bump", "fee_source": "G...", ... }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionEnvelope {
    /// A plain transaction.
    Transaction(Transaction),
    /// A fee-bump wrapper around an inner transaction.
    FeeBump(FeeBumpTransaction),
}
