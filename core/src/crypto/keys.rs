//! # Key Management
//!
//! Ed25519 key wrappers for the analysis pipeline.
//!
//! The analyzer's job is verification, so [`SignerPublicKey`] carries the
//! weight here: parse a strkey address, validate that the bytes are an
//! actual curve point, verify signatures. [`SignerKeypair`] is the signing
//! half — tests, demos, and downstream tooling need to *produce* the
//! signatures the analyzer attributes, and making them hand-roll dalek
//! calls would be cruel.
//!
//! ## Security considerations
//!
//! - Seeds are never logged and never appear in `Debug` output. If you add
//!   logging to this module, you will be asked to leave.
//! - Public key bytes are validated as Ed25519 points at parse time. Some
//!   32-byte strings aren't on the curve; we find out here, not mid-match.

use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH,
};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use super::strkey::{self, StrkeyError};
use crate::config::PUBLIC_KEY_LENGTH;
use crate::transaction::TransactionSignature;

/// Errors that can occur during key operations.
///
/// Deliberately vague about *why* key material is bad — leaking details
/// through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The strkey could not be decoded.
    #[error("invalid strkey: {0}")]
    InvalidStrkey(#[from] StrkeyError),

    /// The decoded bytes are not a valid Ed25519 point.
    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

// ---------------------------------------------------------------------------
// SignerPublicKey
// ---------------------------------------------------------------------------

/// The public half of a Stellar signer, safe to share with the world.
///
/// Internally 32 raw Ed25519 bytes, already validated as a curve point.
/// This is the type the matcher hammers on: for every (signature, candidate)
/// pair it calls [`verify`](Self::verify) until something sticks.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SignerPublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl SignerPublicKey {
    /// Parse a `G...` strkey address into a verified public key.
    ///
    /// Rejects both malformed strkeys and well-formed strkeys whose payload
    /// is not a valid Ed25519 point (low-order points and other degenerate
    /// cases included).
    pub fn from_address(addr: &str) -> Result<Self, KeyError> {
        let bytes = strkey::decode_account_id(addr)?;
        // Some values aren't valid points on the curve, and using them
        // could lead to weird behavior.
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Wrap raw bytes, validating the curve point.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Result<Self, KeyError> {
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// The `G...` strkey address for this key.
    pub fn to_address(&self) -> String {
        strkey::encode_account_id(&self.bytes)
    }

    /// Verify a signature over a message against this key.
    ///
    /// Returns `true` if the signature is valid, `false` otherwise. A
    /// boolean, not a `Result`: to the matcher, "doesn't verify" is the
    /// single most ordinary outcome in the codebase, and callers that
    /// just want a yes/no answer shouldn't have to unwrap one.
    pub fn verify(&self, message: &[u8], signature: &TransactionSignature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let sig_bytes: [u8; 64] = match signature.as_bytes().try_into() {
            Ok(b) => b,
            Err(_) => return false,
        };
        let dalek_sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &dalek_sig).is_ok()
    }
}

impl fmt::Display for SignerPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_address())
    }
}

impl fmt::Debug for SignerPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignerPublicKey({})", self.to_address())
    }
}

// ---------------------------------------------------------------------------
// SignerKeypair
// ---------------------------------------------------------------------------

/// An Ed25519 keypair able to sign transaction payloads.
///
/// The `SigningKey` is the crown jewel — guard it with your life. The
/// analyzer never needs one of these; they exist so that tests and tooling
/// can mint signatures worth attributing.
pub struct SignerKeypair {
    signing_key: SigningKey,
}

impl SignerKeypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Construct a keypair deterministically from a 32-byte seed.
    ///
    /// **Warning**: a weak seed makes a weak key. Use a proper CSPRNG or
    /// KDF to produce the seed bytes.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> SignerPublicKey {
        SignerPublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// The `G...` strkey address for this keypair's public key.
    pub fn address(&self) -> String {
        self.public_key().to_address()
    }

    /// The `S...` strkey encoding of the seed.
    ///
    /// **Handle with extreme care.** This is the only secret standing
    /// between an attacker and the associated account.
    pub fn secret(&self) -> String {
        strkey::encode_seed(&self.signing_key.to_bytes())
    }

    /// Sign a message and return the 64-byte signature.
    ///
    /// Ed25519 signatures are deterministic — the same (key, message) pair
    /// always produces the same signature. No nonce management, no
    /// sleepless nights wondering if your RNG was seeded properly.
    pub fn sign(&self, message: &[u8]) -> TransactionSignature {
        let sig = self.signing_key.sign(message);
        TransactionSignature::from_bytes(sig.to_bytes())
    }
}

impl fmt::Debug for SignerKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print seed material in debug output. Not even "partially."
        write!(f, "SignerKeypair(pub={})", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_sign_verify_roundtrip() {
        let kp = SignerKeypair::generate();
        let msg = b"payload bytes";
        let sig = kp.sign(msg);
        assert!(kp.public_key().verify(msg, &sig));
    }

    #[test]
    fn wrong_message_fails_verification() {
        let kp = SignerKeypair::generate();
        let sig = kp.sign(b"correct message");
        assert!(!kp.public_key().verify(b"wrong message", &sig));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let kp1 = SignerKeypair::generate();
        let kp2 = SignerKeypair::generate();
        let sig = kp1.sign(b"message");
        assert!(!kp2.public_key().verify(b"message", &sig));
    }

    #[test]
    fn address_roundtrip_through_strkey() {
        let kp = SignerKeypair::generate();
        let addr = kp.address();
        assert!(addr.starts_with('G'));
        let recovered = SignerPublicKey::from_address(&addr).unwrap();
        assert_eq!(recovered, kp.public_key());
    }

    #[test]
    fn deterministic_from_seed() {
        let seed = [42u8; 32];
        let kp1 = SignerKeypair::from_seed(&seed);
        let kp2 = SignerKeypair::from_seed(&seed);
        assert_eq!(kp1.address(), kp2.address());
    }

    #[test]
    fn deterministic_signatures() {
        // Ed25519 is deterministic — same key + same message = same
        // signature. This is a feature, not a bug.
        let kp = SignerKeypair::from_seed(&[7u8; 32]);
        let msg = b"determinism is underrated";
        assert_eq!(kp.sign(msg).as_bytes(), kp.sign(msg).as_bytes());
    }

    #[test]
    fn malformed_address_rejected() {
        assert!(SignerPublicKey::from_address("not an address").is_err());
        assert!(SignerPublicKey::from_address("").is_err());
    }

    #[test]
    fn seed_strkey_rejected_as_address() {
        let kp = SignerKeypair::generate();
        let secret = kp.secret();
        assert!(secret.starts_with('S'));
        assert!(SignerPublicKey::from_address(&secret).is_err());
    }

    #[test]
    fn debug_does_not_leak_seed() {
        let kp = SignerKeypair::from_seed(&[3u8; 32]);
        let debug_str = format!("{:?}", kp);
        assert!(debug_str.starts_with("SignerKeypair(pub=G"));
        assert!(!debug_str.contains(&kp.secret()));
    }

    #[test]
    fn two_generated_keypairs_differ() {
        // If this fails, your RNG is broken and you should panic (the
        // emotion, not the macro). Well, actually, both.
        let kp1 = SignerKeypair::generate();
        let kp2 = SignerKeypair::generate();
        assert_ne!(kp1.address(), kp2.address());
    }
}
