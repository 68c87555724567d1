// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # LUMEN — Core Library
//!
//! LUMEN answers one deceptively simple question about a signed Stellar
//! transaction: *who actually signed this thing?*
//!
//! A transaction arrives carrying a pile of anonymous Ed25519 signatures.
//! Nothing on the wire says which key produced which signature — the only
//! way to find out is to gather every key that plausibly *could* have
//! signed (the signers of the transaction's source account and of every
//! per-operation override source), then try each signature against each
//! candidate until one verifies. That attribution is the heart of this
//! crate; everything else exists to feed it.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of the
//! analysis pipeline:
//!
//! - **crypto** — Strkey codec, Ed25519 key wrappers, payload hashes.
//!   Don't roll your own.
//! - **identity** — Validated account addresses. An address you couldn't
//!   decode is an address you shouldn't trust.
//! - **directory** — The injected account-directory capability. The one
//!   place the analysis suspends; the one dependency callers control.
//! - **transaction** — Transaction and fee-bump envelope vocabulary, as
//!   handed over by an external decoder.
//! - **analysis** — Candidate collection, signature matching, fee-bump
//!   composition, and authorization-weight checks.
//! - **config** — Network constants and every magic number in one place.
//!
//! ## Design Philosophy
//!
//! 1. The analyzer holds no state between calls. Same inputs, same report.
//! 2. Partial failure is normal: one unreachable account never torpedoes
//!    the candidates collected from the others.
//! 3. A signature that doesn't verify is data, not an error. Only
//!    malformed input gets to be an error.
//! 4. If it attributes a signature, it has tests. Plural.

pub mod analysis;
pub mod config;
pub mod crypto;
pub mod directory;
pub mod identity;
pub mod transaction;
