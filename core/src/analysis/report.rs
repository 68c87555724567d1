//! Attribution report types.
//!
//! The analyzer's entire output vocabulary: one record per attached
//! signature, stating which candidate key (if any) produced it. The shapes
//! serialize directly, so a wallet UI or the CLI can emit a report without
//! re-plumbing it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::UNATTRIBUTED_KEY_PLACEHOLDER;
use crate::identity::AccountAddress;
use crate::transaction::TransactionSignature;

// ---------------------------------------------------------------------------
// SignatureStatus
// ---------------------------------------------------------------------------

/// The outcome of attributing one signature.
///
/// `Unknown` is a first-class outcome, not an error: a signature the
/// candidate set can't explain is exactly what this analysis exists to
/// surface. It may be a pre-signed authorization from a key that has since
/// been rotated out, a signature for a different network's payload, or
/// plain garbage — the analyzer can't tell, and says so honestly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureStatus {
    /// The signature cryptographically verifies under a candidate key.
    Verified,
    /// No candidate key verifies the signature.
    Unknown,
}

impl fmt::Display for SignatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified => write!(f, "Verified"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// SignatureAttribution
// ---------------------------------------------------------------------------

/// The attribution verdict for a single attached signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureAttribution {
    /// The signature this verdict is about, base64-encoded in reports.
    pub signature: TransactionSignature,

    /// The public key the signature verified under, or `None` when no
    /// candidate matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer: Option<AccountAddress>,

    /// Verified or Unknown.
    pub status: SignatureStatus,
}

impl SignatureAttribution {
    /// A verdict attributing `signature` to `signer`.
    pub fn verified(signature: TransactionSignature, signer: AccountAddress) -> Self {
        Self {
            signature,
            signer: Some(signer),
            status: SignatureStatus::Verified,
        }
    }

    /// A verdict for a signature no candidate could explain.
    pub fn unknown(signature: TransactionSignature) -> Self {
        Self {
            signature,
            signer: None,
            status: SignatureStatus::Unknown,
        }
    }

    /// The matched key as display text, with the `---` placeholder for
    /// unattributed signatures.
    pub fn signer_display(&self) -> &str {
        self.signer
            .as_ref()
            .map(AccountAddress::as_str)
            .unwrap_or(UNATTRIBUTED_KEY_PLACEHOLDER)
    }
}

// ---------------------------------------------------------------------------
// FeeBumpAttributionReport
// ---------------------------------------------------------------------------

/// Attribution results for a fee-bump envelope and its inner transaction.
///
/// The two lists are independent analyses over independent signing
/// payloads and candidate sets. An unattributable signature on one side
/// says nothing about the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBumpAttributionReport {
    /// Verdicts for the fee-bump envelope's own signatures, checked
    /// against the fee source account's signers.
    pub fee_bump: Vec<SignatureAttribution>,

    /// Verdicts for the inner transaction's signatures, from the full
    /// per-transaction analysis.
    pub inner: Vec<SignatureAttribution>,
}
