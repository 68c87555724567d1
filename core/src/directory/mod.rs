//! # Account Directory
//!
//! The one place the analysis suspends. An [`AccountDirectory`] answers a
//! single question — "who may sign for this account right now?" — and in
//! the real deployment each answer is a network round trip to a Horizon
//! instance. The analyzer neither knows nor cares: it receives the
//! capability as an injected dependency and awaits it.
//!
//! That injection is a load-bearing design decision. A directory baked in
//! as a global would make every test a network test and every analysis
//! result a function of whatever the singleton was pointed at that day.
//! Instead, tests hand the analyzer a [`StaticDirectory`] snapshot and get
//! deterministic, offline answers.
//!
//! Directory answers are read-only snapshots: signer sets on a live ledger
//! change between ledgers, and an attribution report is only ever "as of
//! the lookups it performed."

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::AccountAddress;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors a directory lookup can produce.
///
/// Whether a failed lookup is fatal is the *caller's* decision, not the
/// directory's: the candidate collector absorbs these and keeps going,
/// while the fee-bump path treats a failure for the fee source as fatal.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory has no record of the account.
    #[error("account not found in directory: {address}")]
    AccountNotFound {
        /// The address that was looked up.
        address: AccountAddress,
    },

    /// The directory's backing store could not be reached.
    #[error("account directory unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the transport failure.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// AccountSigner
// ---------------------------------------------------------------------------

/// One key authorized to sign on behalf of an account, with its weight.
///
/// A snapshot of a ledger signer record at lookup time. Two records are
/// equal only when **both** the key and the weight match — the dedup the
/// candidate collector performs is over whole records, because an account
/// re-keyed to a different weight is materially different authorization
/// data even under the same public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountSigner {
    /// The signer's public key, as a strkey account address.
    pub key: AccountAddress,

    /// Signing weight, 0–255 per the ledger's signer weight range. A
    /// weight of zero means the key is present but powerless.
    pub weight: u8,
}

impl AccountSigner {
    /// Construct a signer record.
    pub fn new(key: AccountAddress, weight: u8) -> Self {
        Self { key, weight }
    }
}

// ---------------------------------------------------------------------------
// AccountDirectory
// ---------------------------------------------------------------------------

/// The injected lookup capability: current signers for an account.
///
/// Implementations are expected to be cheap to share (`&self` methods,
/// `Send + Sync`) because the collector fans out concurrent lookups over
/// one instance.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Returns the current signer list for `account`.
    ///
    /// An account with no dedicated signers still has at least its master
    /// key; an empty `Vec` is a legal (if unusual) answer and is not an
    /// error. Unknown accounts and transport failures are errors.
    async fn load_signers(
        &self,
        account: &AccountAddress,
    ) -> Result<Vec<AccountSigner>, DirectoryError>;
}

// ---------------------------------------------------------------------------
// StaticDirectory
// ---------------------------------------------------------------------------

/// An in-memory directory backed by a fixed snapshot.
///
/// This is the deterministic stand-in for the network directory: tests
/// build one programmatically, and the CLI deserializes one from a JSON
/// object mapping addresses to signer lists:
///
/// ```json
/// {
///   "GABC...": [ { "key": "GDEF...", "weight": 1 } ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticDirectory {
    accounts: HashMap<AccountAddress, Vec<AccountSigner>>,
}

impl StaticDirectory {
    /// An empty directory. Every lookup fails with `AccountNotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the signer list for an account, replacing any existing entry.
    pub fn insert(&mut self, account: AccountAddress, signers: Vec<AccountSigner>) {
        self.accounts.insert(account, signers);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_account(mut self, account: AccountAddress, signers: Vec<AccountSigner>) -> Self {
        self.insert(account, signers);
        self
    }

    /// Number of accounts in the snapshot.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountDirectory for StaticDirectory {
    async fn load_signers(
        &self,
        account: &AccountAddress,
    ) -> Result<Vec<AccountSigner>, DirectoryError> {
        self.accounts
            .get(account)
            .cloned()
            .ok_or_else(|| DirectoryError::AccountNotFound {
                address: account.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SignerKeypair;

    fn addr() -> AccountAddress {
        AccountAddress::new(SignerKeypair::generate().address()).unwrap()
    }

    #[tokio::test]
    async fn static_directory_returns_recorded_signers() {
        let account = addr();
        let signer = AccountSigner::new(addr(), 5);
        let dir = StaticDirectory::new().with_account(account.clone(), vec![signer.clone()]);

        let signers = dir.load_signers(&account).await.unwrap();
        assert_eq!(signers, vec![signer]);
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let dir = StaticDirectory::new();
        let err = dir.load_signers(&addr()).await.unwrap_err();
        assert!(matches!(err, DirectoryError::AccountNotFound { .. }));
    }

    #[tokio::test]
    async fn empty_signer_list_is_a_legal_answer() {
        let account = addr();
        let dir = StaticDirectory::new().with_account(account.clone(), vec![]);
        assert_eq!(dir.load_signers(&account).await.unwrap(), vec![]);
    }

    #[test]
    fn signer_equality_covers_weight() {
        let key = addr();
        let a = AccountSigner::new(key.clone(), 1);
        let b = AccountSigner::new(key.clone(), 1);
        let c = AccountSigner::new(key, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn snapshot_deserializes_from_json_object() {
        let kp = SignerKeypair::from_seed(&[1u8; 32]);
        let signer_kp = SignerKeypair::from_seed(&[2u8; 32]);
        let json = format!(
            r#"{{ "{}": [ {{ "key": "{}", "weight": 1 }} ] }}"#,
            kp.address(),
            signer_kp.address()
        );
        let dir: StaticDirectory = serde_json::from_str(&json).unwrap();
        assert_eq!(dir.len(), 1);
    }
}
