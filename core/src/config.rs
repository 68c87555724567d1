//! # Network Configuration & Constants
//!
//! Every magic number in LUMEN lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! The passphrases below are consensus-critical: a transaction's signing
//! payload is derived from the network passphrase, so analysing a testnet
//! transaction against the public-network payload verifies exactly nothing.
//! The external decoder owns that derivation; we record the passphrases so
//! callers and tooling agree on which network they're talking about.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Passphrase of the public Stellar network — the real deal. Mistakes here
/// cost real money.
pub const NETWORK_PASSPHRASE_PUBLIC: &str = "Public Global Stellar Network ; September 2015";

/// Passphrase of the SDF test network — where we break things on purpose
/// and call it "testing."
pub const NETWORK_PASSPHRASE_TESTNET: &str = "Test SDF Network ; September 2015";

/// Horizon endpoint for the public network.
pub const HORIZON_URL_PUBLIC: &str = "https://horizon.stellar.org";

/// Horizon endpoint for the test network.
pub const HORIZON_URL_TESTNET: &str = "https://horizon-testnet.stellar.org";

// ---------------------------------------------------------------------------
// Strkey Parameters
// ---------------------------------------------------------------------------

/// Strkey version byte for account IDs. `6 << 3 = 48`, which base32-encodes
/// to the leading `G` every Stellar address wears.
pub const STRKEY_VERSION_ACCOUNT_ID: u8 = 6 << 3;

/// Strkey version byte for Ed25519 seeds. `18 << 3 = 144`, the leading `S`.
/// Seeds are secrets; if one shows up in a log file, rotate it yesterday.
pub const STRKEY_VERSION_SEED: u8 = 18 << 3;

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 public (verifying) key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 seed (secret key) length in bytes.
pub const SEED_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes. If yours isn't, something
/// has gone terribly wrong.
pub const SIGNATURE_LENGTH: usize = 64;

/// Signing payload length in bytes — a single SHA-256 digest.
pub const SIGNING_PAYLOAD_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

/// Placeholder rendered in place of a public key when a signature could not
/// be attributed to any candidate signer.
pub const UNATTRIBUTED_KEY_PLACEHOLDER: &str = "---";

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// The Stellar networks LUMEN knows about.
///
/// Used by tooling to resolve a passphrase and Horizon endpoint pair.
/// There is deliberately no `Custom` variant here: private networks exist,
/// but they pass their passphrase explicitly rather than hiding behind an
/// enum value that looks official.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The public Stellar network.
    Public,
    /// The SDF test network.
    Testnet,
}

impl Network {
    /// Returns the network passphrase transactions on this network are
    /// hashed against.
    pub fn passphrase(&self) -> &'static str {
        match self {
            Self::Public => NETWORK_PASSPHRASE_PUBLIC,
            Self::Testnet => NETWORK_PASSPHRASE_TESTNET,
        }
    }

    /// Returns the canonical Horizon endpoint for this network.
    pub fn horizon_url(&self) -> &'static str {
        match self {
            Self::Public => HORIZON_URL_PUBLIC,
            Self::Testnet => HORIZON_URL_TESTNET,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "Public"),
            Self::Testnet => write!(f, "Test"),
        }
    }
}
