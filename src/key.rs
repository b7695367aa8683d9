//! # Key Derivation
//!
//! Derivation of an Ed25519 public key from a secret seed. The hash used to
//! expand the seed is a type parameter of [`Ed25519Derivation`] so callers
//! inject it at construction rather than configuring a shared hasher.

use std::any::type_name;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use anyhow::anyhow;
use ed25519_dalek::VerifyingKey;
use ed25519_dalek::hazmat::ExpandedSecretKey;
use sha2::{Digest, Sha512};

use crate::strkey::PAYLOAD_LENGTH;

/// Derives the public key for a secret seed.
pub trait KeyDerivation {
    /// Derive the raw public key for the raw 32-byte `seed`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the seed cannot be expanded into a
    /// key pair.
    fn public_key(&self, seed: &[u8; PAYLOAD_LENGTH]) -> anyhow::Result<[u8; PAYLOAD_LENGTH]>;
}

/// Ed25519 key derivation (RFC 8032) with an injected 64-byte hash.
///
/// `Ed25519Derivation::default()` uses SHA-512, which is what Stellar keys
/// are derived with.
pub struct Ed25519Derivation<D = Sha512> {
    hasher: PhantomData<fn() -> D>,
}

impl<D> Ed25519Derivation<D> {
    /// Create a derivation that expands seeds with `D`.
    #[must_use]
    pub const fn new() -> Self {
        Self { hasher: PhantomData }
    }
}

impl<D> Default for Ed25519Derivation<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Ed25519Derivation<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Ed25519Derivation<D> {}

impl<D> Debug for Ed25519Derivation<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Derivation").field("hasher", &type_name::<D>()).finish()
    }
}

impl<D: Digest> KeyDerivation for Ed25519Derivation<D> {
    fn public_key(&self, seed: &[u8; PAYLOAD_LENGTH]) -> anyhow::Result<[u8; PAYLOAD_LENGTH]> {
        let hash = D::digest(seed);
        let expanded: [u8; 64] = hash
            .as_slice()
            .try_into()
            .map_err(|_| anyhow!("digest output is {} bytes, expected 64", hash.len()))?;
        let secret = ExpandedSecretKey::from_bytes(&expanded);
        Ok(VerifyingKey::from(&secret).to_bytes())
    }
}
