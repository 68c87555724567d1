//! # Cryptographic Primitives for LUMEN
//!
//! Everything security-related in the analysis pipeline flows through here.
//! We deliberately chose boring, well-audited cryptography:
//!
//! - **Ed25519** for signature verification — fast, deterministic, and
//!   nobody has broken it. The only signature scheme Stellar account keys
//!   use, so the only one we verify.
//! - **SHA-256** for signing payloads — the network hashed its transactions
//!   with SHA-256 in 2015 and the rest of us live with that decision.
//! - **Strkey** for key encoding — base32 with a version byte and a
//!   CRC16-XModem checksum. Not pretty, but it catches fat-fingered
//!   addresses before they catch you.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Everything here is a thin, type-safe wrapper around audited
//! implementations. The strkey codec is encoding, not cryptography — the
//! checksum detects typos, not adversaries.

pub mod hash;
pub mod keys;
pub mod strkey;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy. Life's too short for five levels of `use` statements.
pub use hash::{sha256_array, TransactionHash};
pub use keys::{KeyError, SignerKeypair, SignerPublicKey};
pub use strkey::{decode_account_id, encode_account_id, encode_seed, StrkeyError};
