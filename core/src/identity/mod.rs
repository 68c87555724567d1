//! # Identity Module
//!
//! Account identity for the analysis pipeline. Every account on the Stellar
//! network is identified by a strkey-encoded Ed25519 public key — the
//! familiar 56-character `G...` string users paste into payment fields.
//!
//! The type here is intentionally thin: an [`AccountAddress`] is a string
//! that has *proven* it decodes. That proof is the whole point. Every
//! address flowing into the analyzer was validated exactly once, at the
//! boundary, and everything downstream gets to stop worrying about it.

pub mod address;

pub use address::{AccountAddress, AddressError};
