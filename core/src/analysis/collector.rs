//! Candidate signer collection.
//!
//! Before any signature can be attributed, the analyzer must assemble the
//! set of keys that could plausibly have signed: the signers of the
//! transaction's source account plus the signers of every distinct
//! per-operation override source. This module owns that aggregation.
//!
//! Two properties matter more than anything else here:
//!
//! 1. **Partial failure tolerance.** Each account lookup is an independent
//!    network call. One account falling over must not discard the
//!    candidates the other lookups produced — an attribution computed from
//!    a partial candidate set is degraded, not wrong (signatures whose
//!    signers went missing simply report as `Unknown`).
//! 2. **Set semantics.** The same signer record discovered through two
//!    accounts enters the candidate set once. Records are deduplicated by
//!    full structural equality — key *and* weight — and discovery order is
//!    preserved so the matcher iterates a stable, deterministic sequence.

use std::collections::HashSet;

use futures::future::join_all;
use tracing::warn;

use crate::directory::{AccountDirectory, AccountSigner};
use crate::identity::AccountAddress;
use crate::transaction::Transaction;

/// Builds the deduplicated candidate signer set for a transaction.
///
/// Lookups for the transaction source and every distinct operation
/// override source are fanned out concurrently; they have no ordering
/// dependency on each other. The merge afterwards is single-threaded and
/// keeps first-discovery order: transaction source first, then override
/// sources in operation order.
///
/// Lookup failures are logged and skipped. The caller decides whether an
/// empty result is acceptable.
pub async fn collect_candidate_signers<D: AccountDirectory + ?Sized>(
    directory: &D,
    transaction: &Transaction,
) -> Vec<AccountSigner> {
    // Distinct accounts to consult, in discovery order. Resolving each
    // address once is an optimization; correctness only needs the signer
    // dedup below.
    let mut accounts: Vec<&AccountAddress> = Vec::new();
    if let Some(source) = &transaction.source {
        accounts.push(source);
    }
    for op in &transaction.operations {
        if let Some(source) = &op.source {
            if !accounts.contains(&source) {
                accounts.push(source);
            }
        }
    }

    // Fan out: every lookup is an independent round trip.
    let lookups = join_all(
        accounts
            .iter()
            .map(|account| directory.load_signers(account)),
    )
    .await;

    // Single-threaded merge. Nothing shared was written concurrently; the
    // dedup happens here, after all lookups have settled.
    let mut seen: HashSet<AccountSigner> = HashSet::new();
    let mut candidates: Vec<AccountSigner> = Vec::new();
    for (account, outcome) in accounts.iter().zip(lookups) {
        match outcome {
            Ok(signers) => {
                for signer in signers {
                    if seen.insert(signer.clone()) {
                        candidates.push(signer);
                    }
                }
            }
            Err(err) => {
                // Best-effort aggregation: report and keep whatever the
                // other accounts contributed.
                warn!(account = %account, error = %err, "failed to load account signers");
            }
        }
    }

    candidates
}
