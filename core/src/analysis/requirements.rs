//! Authorization-weight requirement checks.
//!
//! Attribution says *who* signed. This module answers the follow-up
//! question a wallet asks next: *is that enough?* Every Stellar account
//! sets threshold weights per operation category, and a transaction only
//! clears an account's requirement when the verified signatures collect at
//! least that much weight from the account's signer list.
//!
//! The accounting rules come from the ledger's own signature checking:
//! each signer counts at most once no matter how many signatures its key
//! produced, zero-weight signers count for nothing, and accumulation
//! saturates rather than wraps.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::directory::AccountSigner;
use crate::identity::AccountAddress;

use super::report::{SignatureAttribution, SignatureStatus};

/// A signing-weight requirement one account imposes on a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAuthRequirement {
    /// The account whose authorization is required.
    pub account: AccountAddress,

    /// The weight the verified signatures must collect, taken from the
    /// account's threshold for the operation category in question.
    pub required_weight: u32,
}

/// The outcome of checking one [`AccountAuthRequirement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCheck {
    /// Total weight collected from verified signatures.
    pub collected_weight: u32,

    /// Whether the collected weight meets the requirement.
    pub met: bool,
}

/// Checks whether the verified signatures in an attribution report collect
/// enough weight from `account_signers` to satisfy `requirement`.
///
/// `account_signers` is the signer list of the requiring account (the same
/// snapshot the directory returned during analysis); `attributions` is the
/// report for the transaction. Signatures with status `Unknown` contribute
/// nothing — weight only flows from signatures the analysis actually
/// pinned to a key.
///
/// A requirement of zero is still only met by a positive collected weight,
/// mirroring the ledger rule that *some* valid signature must be present.
pub fn auth_requirement_met(
    requirement: &AccountAuthRequirement,
    account_signers: &[AccountSigner],
    attributions: &[SignatureAttribution],
) -> AuthCheck {
    let verified_keys: HashSet<&AccountAddress> = attributions
        .iter()
        .filter(|a| a.status == SignatureStatus::Verified)
        .filter_map(|a| a.signer.as_ref())
        .collect();

    let mut collected: u32 = 0;
    let mut counted: HashSet<&AccountAddress> = HashSet::new();
    for signer in account_signers {
        if signer.weight == 0 {
            continue;
        }
        if !verified_keys.contains(&signer.key) {
            continue;
        }
        // Each signer key counts once, even if it produced several
        // signatures or appears in the list more than once.
        if counted.insert(&signer.key) {
            collected = collected.saturating_add(u32::from(signer.weight));
        }
    }

    AuthCheck {
        collected_weight: collected,
        met: collected >= requirement.required_weight && collected > 0,
    }
}
