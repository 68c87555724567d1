//! The signature analyzer: public entry points and error taxonomy.
//!
//! [`SignatureAnalyzer`] wires the candidate collector and the signature
//! matcher together behind the two operations callers actually want:
//! analyse a transaction, analyse a fee-bump envelope. It owns nothing but
//! the injected directory and holds no state between calls — every report
//! is a pure function of the envelope, the directory's answers, and
//! candidate iteration order.
//!
//! ## What is fatal and what is not
//!
//! The error surface is deliberately tiny. Checks are ordered so the cheap
//! structural rejection happens before any directory traffic:
//!
//! - A missing signing payload is fatal up front: with nothing to verify
//!   against, an attribution report would be fiction.
//! - A failed lookup for the fee-bump's fee source is fatal to the
//!   fee-bump call: the fee source is the *only* account whose signers can
//!   explain the outer signatures, so there is nothing to fall back to.
//! - Everything else — unreachable operation-source accounts, unparseable
//!   candidate keys, signatures that match nobody — degrades the report
//!   instead of aborting it.

use thiserror::Error;
use tracing::debug;

use crate::directory::{AccountDirectory, DirectoryError};
use crate::identity::AccountAddress;
use crate::transaction::{FeeBumpTransaction, Transaction};

use super::collector::collect_candidate_signers;
use super::matcher::match_signatures;
use super::report::{FeeBumpAttributionReport, SignatureAttribution};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures that make an attribution report meaningless.
///
/// Each variant maps to exactly one fatal condition. Degraded-but-honest
/// outcomes (partial candidate sets, unattributed signatures) are encoded
/// in the report itself, never here.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The envelope carries no signing payload. Either the decoder failed
    /// to hash a malformed envelope or the caller forgot to attach it;
    /// both mean there is nothing signatures can be verified against.
    #[error("transaction has no signing payload to verify signatures against")]
    MissingSigningPayload,

    /// The fee-bump envelope's fee source could not be looked up. The fee
    /// source's signers are the only candidates for the outer signature
    /// list, so the outer attribution cannot proceed. The inner
    /// transaction is unaffected and can still be analysed on its own.
    #[error("unable to load signers for fee source {account}")]
    FeeSourceSigners {
        /// The fee source whose lookup failed.
        account: AccountAddress,
        /// The underlying directory failure.
        #[source]
        source: DirectoryError,
    },
}

// ---------------------------------------------------------------------------
// SignatureAnalyzer
// ---------------------------------------------------------------------------

/// Attribution engine over an injected account directory.
///
/// Construct one per directory; reuse freely. The analyzer is stateless
/// between calls, so a shared reference is all concurrent callers need.
///
/// # Examples
///
/// ```no_run
/// use lumen_core::analysis::SignatureAnalyzer;
/// use lumen_core::directory::StaticDirectory;
/// # async fn example(transaction: lumen_core::transaction::Transaction) {
/// let directory = StaticDirectory::new();
/// let analyzer = SignatureAnalyzer::new(directory);
/// let report = analyzer
///     .analyse_transaction_signatures(&transaction)
///     .await
///     .unwrap();
/// for verdict in &report {
///     println!("{} {}", verdict.status, verdict.signer_display());
/// }
/// # }
/// ```
pub struct SignatureAnalyzer<D> {
    directory: D,
}

impl<D: AccountDirectory> SignatureAnalyzer<D> {
    /// Wrap a directory capability.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// The wrapped directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Attribute every signature attached to a transaction.
    ///
    /// Collects candidates from the transaction source and every distinct
    /// operation override source (concurrently, tolerating per-account
    /// lookup failures), then matches each signature against the candidate
    /// set in order. One verdict per signature, in envelope order.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::MissingSigningPayload`] when the envelope carries
    /// no payload — checked before any directory traffic.
    pub async fn analyse_transaction_signatures(
        &self,
        transaction: &Transaction,
    ) -> Result<Vec<SignatureAttribution>, AnalysisError> {
        let payload = transaction
            .signing_payload
            .as_ref()
            .ok_or(AnalysisError::MissingSigningPayload)?;

        let candidates = collect_candidate_signers(&self.directory, transaction).await;
        debug!(candidates = candidates.len(), "candidate signer set collected");

        Ok(match_signatures(
            payload,
            &transaction.signatures,
            &candidates,
        ))
    }

    /// Attribute the signatures of a fee-bump envelope and its inner
    /// transaction.
    ///
    /// The outer signature list is matched against the fee source
    /// account's signers and the fee-bump's own signing payload. The inner
    /// transaction then goes through the full per-transaction analysis,
    /// entirely independent of the outer outcome.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::MissingSigningPayload`] when either scope lacks
    ///   its payload (checked up front for both).
    /// - [`AnalysisError::FeeSourceSigners`] when the fee source lookup
    ///   fails. This aborts only this call: the inner transaction in the
    ///   caller's hands is still analysable via
    ///   [`analyse_transaction_signatures`](Self::analyse_transaction_signatures).
    pub async fn analyse_fee_bump_transaction_signatures(
        &self,
        transaction: &FeeBumpTransaction,
    ) -> Result<FeeBumpAttributionReport, AnalysisError> {
        // Both payloads are structural prerequisites; reject before any
        // directory traffic.
        let outer_payload = transaction
            .signing_payload
            .as_ref()
            .ok_or(AnalysisError::MissingSigningPayload)?;
        if transaction.inner.signing_payload.is_none() {
            return Err(AnalysisError::MissingSigningPayload);
        }

        // The fee-bump envelope is authorized solely by the fee source.
        // No other account can contribute candidates, so this lookup has
        // no partial-failure story: it works or the outer scope is dead.
        let fee_source_signers = self
            .directory
            .load_signers(&transaction.fee_source)
            .await
            .map_err(|source| AnalysisError::FeeSourceSigners {
                account: transaction.fee_source.clone(),
                source,
            })?;
        debug!(
            candidates = fee_source_signers.len(),
            "fee source signers loaded"
        );

        let fee_bump = match_signatures(
            outer_payload,
            &transaction.signatures,
            &fee_source_signers,
        );

        // The inner transaction is a complete transaction with its own
        // payload and its own source accounts; analyse it recursively.
        let inner = self
            .analyse_transaction_signatures(&transaction.inner)
            .await?;

        Ok(FeeBumpAttributionReport { fee_bump, inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SignatureStatus;
    use crate::crypto::{SignerKeypair, TransactionHash};
    use crate::directory::{AccountSigner, StaticDirectory};
    use crate::transaction::{Operation, OperationKind};

    fn address_of(kp: &SignerKeypair) -> AccountAddress {
        AccountAddress::new(kp.address()).unwrap()
    }

    #[tokio::test]
    async fn missing_payload_is_fatal_before_lookup() {
        let analyzer = SignatureAnalyzer::new(StaticDirectory::new());
        let tx = Transaction {
            source: None,
            operations: vec![],
            signatures: vec![],
            signing_payload: None,
        };
        let err = analyzer
            .analyse_transaction_signatures(&tx)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MissingSigningPayload));
    }

    #[tokio::test]
    async fn attributes_across_source_and_override_accounts() {
        let source_kp = SignerKeypair::from_seed(&[1u8; 32]);
        let override_kp = SignerKeypair::from_seed(&[2u8; 32]);
        let account_a = address_of(&SignerKeypair::from_seed(&[11u8; 32]));
        let account_b = address_of(&SignerKeypair::from_seed(&[12u8; 32]));

        let payload = TransactionHash::of(b"cross-account tx");
        let tx = Transaction {
            source: Some(account_a.clone()),
            operations: vec![Operation::with_source(
                OperationKind::Payment,
                account_b.clone(),
            )],
            signatures: vec![
                source_kp.sign(payload.as_bytes()),
                override_kp.sign(payload.as_bytes()),
            ],
            signing_payload: Some(payload),
        };

        let directory = StaticDirectory::new()
            .with_account(
                account_a,
                vec![AccountSigner::new(address_of(&source_kp), 1)],
            )
            .with_account(
                account_b,
                vec![AccountSigner::new(address_of(&override_kp), 2)],
            );

        let report = SignatureAnalyzer::new(directory)
            .analyse_transaction_signatures(&tx)
            .await
            .unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].signer_display(), source_kp.address());
        assert_eq!(report[1].signer_display(), override_kp.address());
    }

    #[tokio::test]
    async fn fee_bump_lookup_failure_is_fatal() {
        let fee_source = address_of(&SignerKeypair::from_seed(&[3u8; 32]));
        let fbtx = FeeBumpTransaction {
            fee_source: fee_source.clone(),
            signatures: vec![],
            signing_payload: Some(TransactionHash::of(b"outer")),
            inner: Transaction {
                source: None,
                operations: vec![],
                signatures: vec![],
                signing_payload: Some(TransactionHash::of(b"inner")),
            },
        };

        // Empty directory: the fee source lookup fails.
        let err = SignatureAnalyzer::new(StaticDirectory::new())
            .analyse_fee_bump_transaction_signatures(&fbtx)
            .await
            .unwrap_err();
        match err {
            AnalysisError::FeeSourceSigners { account, .. } => assert_eq!(account, fee_source),
            other => panic!("expected FeeSourceSigners, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fee_bump_missing_inner_payload_is_fatal() {
        let fee_kp = SignerKeypair::from_seed(&[4u8; 32]);
        let fee_source = address_of(&SignerKeypair::from_seed(&[5u8; 32]));
        let directory = StaticDirectory::new().with_account(
            fee_source.clone(),
            vec![AccountSigner::new(address_of(&fee_kp), 1)],
        );

        let fbtx = FeeBumpTransaction {
            fee_source,
            signatures: vec![],
            signing_payload: Some(TransactionHash::of(b"outer")),
            inner: Transaction {
                source: None,
                operations: vec![],
                signatures: vec![],
                signing_payload: None,
            },
        };

        let err = SignatureAnalyzer::new(directory)
            .analyse_fee_bump_transaction_signatures(&fbtx)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MissingSigningPayload));
    }

    #[tokio::test]
    async fn fee_bump_scopes_use_their_own_payloads() {
        // One keypair signs for both scopes. Each signature only verifies
        // against its own scope's payload, so cross-labelling would show
        // up immediately as Unknown.
        let kp = SignerKeypair::from_seed(&[6u8; 32]);
        let fee_source = address_of(&SignerKeypair::from_seed(&[7u8; 32]));
        let inner_source = address_of(&SignerKeypair::from_seed(&[8u8; 32]));

        let outer_payload = TransactionHash::of(b"outer scope");
        let inner_payload = TransactionHash::of(b"inner scope");

        let fbtx = FeeBumpTransaction {
            fee_source: fee_source.clone(),
            signatures: vec![kp.sign(outer_payload.as_bytes())],
            signing_payload: Some(outer_payload),
            inner: Transaction {
                source: Some(inner_source.clone()),
                operations: vec![],
                signatures: vec![kp.sign(inner_payload.as_bytes())],
                signing_payload: Some(inner_payload),
            },
        };

        let signer = AccountSigner::new(address_of(&kp), 1);
        let directory = StaticDirectory::new()
            .with_account(fee_source, vec![signer.clone()])
            .with_account(inner_source, vec![signer]);

        let report = SignatureAnalyzer::new(directory)
            .analyse_fee_bump_transaction_signatures(&fbtx)
            .await
            .unwrap();

        assert_eq!(report.fee_bump[0].status, SignatureStatus::Verified);
        assert_eq!(report.inner[0].status, SignatureStatus::Verified);
    }

    #[tokio::test]
    async fn rerun_produces_identical_report() {
        let kp = SignerKeypair::from_seed(&[9u8; 32]);
        let stranger = SignerKeypair::from_seed(&[10u8; 32]);
        let account = address_of(&SignerKeypair::from_seed(&[13u8; 32]));

        let payload = TransactionHash::of(b"idempotence");
        let tx = Transaction {
            source: Some(account.clone()),
            operations: vec![],
            signatures: vec![
                kp.sign(payload.as_bytes()),
                stranger.sign(payload.as_bytes()),
            ],
            signing_payload: Some(payload),
        };

        let directory =
            StaticDirectory::new().with_account(account, vec![AccountSigner::new(address_of(&kp), 1)]);
        let analyzer = SignatureAnalyzer::new(directory);

        let first = analyzer.analyse_transaction_signatures(&tx).await.unwrap();
        let second = analyzer.analyse_transaction_signatures(&tx).await.unwrap();
        assert_eq!(first, second);
    }
}
