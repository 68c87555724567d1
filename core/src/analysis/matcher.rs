//! Signature-to-signer matching.
//!
//! The cryptographic core: given the signing payload, the attached
//! signatures, and the candidate set, decide who signed what.
//!
//! For each signature, candidates are tried in slice order and the first
//! key that verifies wins. First-match-wins is a pragmatic tie-break with
//! no cryptographic significance — two candidate records could carry the
//! same key, and a signature verifies under both or neither — but it makes
//! the verdict a pure function of (payload, signatures, candidate order),
//! which is what the caller needs for reproducible reports.
//!
//! A candidate whose address refuses to parse into a verifying key is
//! skipped, not fatal: one rotten record in an account's signer list must
//! not poison matching for every other candidate.

use tracing::debug;

use crate::crypto::hash::TransactionHash;
use crate::crypto::keys::SignerPublicKey;
use crate::directory::AccountSigner;
use crate::transaction::TransactionSignature;

use super::report::SignatureAttribution;

/// Attributes each signature to the first candidate that verifies it.
///
/// Returns one verdict per input signature, in input order. Signatures no
/// candidate explains come back as `Unknown` — the normal no-match case,
/// never an error.
pub fn match_signatures(
    payload: &TransactionHash,
    signatures: &[TransactionSignature],
    candidates: &[AccountSigner],
) -> Vec<SignatureAttribution> {
    signatures
        .iter()
        .map(|signature| attribute_one(payload, signature, candidates))
        .collect()
}

fn attribute_one(
    payload: &TransactionHash,
    signature: &TransactionSignature,
    candidates: &[AccountSigner],
) -> SignatureAttribution {
    for candidate in candidates {
        // Malformed candidate key: skip it, try the rest. The record came
        // from a directory we don't control.
        let key = match SignerPublicKey::from_address(candidate.key.as_str()) {
            Ok(key) => key,
            Err(err) => {
                debug!(
                    candidate = %candidate.key,
                    error = %err,
                    "skipping unparseable candidate signer key"
                );
                continue;
            }
        };

        if key.verify(payload.as_bytes(), signature) {
            return SignatureAttribution::verified(signature.clone(), candidate.key.clone());
        }
    }

    SignatureAttribution::unknown(signature.clone())
}
