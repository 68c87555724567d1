//! # Transaction Module
//!
//! Envelope vocabulary for the analysis pipeline. These types describe a
//! transaction the way the analyzer needs to see it — source accounts,
//! per-operation override sources, attached signatures, and the signing
//! payload — and nothing more.
//!
//! ## Architecture
//!
//! ```text
//! types.rs — TransactionSignature, OperationKind, Operation,
//!            Transaction, FeeBumpTransaction, TransactionEnvelope
//! ```
//!
//! ## Where these come from
//!
//! An external decoder. Parsing the XDR wire format is a whole SDK's worth
//! of work that already exists elsewhere; this crate receives the decoded
//! structure plus the precomputed signing payload and takes it from there.
//! The one thing we insist on is that the payload be the *network's* hash
//! of the envelope — attribution against any other digest is theater.
//!
//! Fee-bump envelopes wrap an inner transaction, and the two carry
//! **different** signing payloads. The fee-bump's own signatures are
//! checked against the fee source account; the inner transaction is a
//! complete, independently-analysable transaction in its own right.

pub mod types;

pub use types::{
    FeeBumpTransaction, Operation, OperationKind, Transaction, TransactionEnvelope,
    TransactionSignature,
};
