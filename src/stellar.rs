//! # DID Stellar
//!
//! The `did:stellar` method identifies a Stellar account by its Ed25519
//! public key. The DID document is derived entirely from the DID: the account
//! ID is decoded into the raw public key, which is published as a single
//! `Ed25519VerificationKey2020` verification method.

use multibase::Base;
use sha2::Sha512;

use crate::document::{Document, DocumentBuilder, KeyFormat};
use crate::error::Error;
use crate::key::{Ed25519Derivation, KeyDerivation};
use crate::strkey;
use crate::url::{self, Did};

/// Multicodec-style tag written in front of the raw public key to mark it as
/// a raw Ed25519 key for multibase consumers.
pub const ED25519_PUB_TAG: u8 = 0x00;

/// Fragment of the single verification method in a `did:stellar` document.
pub const KEY_FRAGMENT: &str = "0";

/// `DidStellar` provides a type for implementing `did:stellar` document
/// construction and resolution.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Default)]
pub struct DidStellar;

impl DidStellar {
    /// The DID method name.
    pub const METHOD: &'static str = url::METHOD;

    /// Build the DID document for `did`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if `did` is not a `did:stellar`
    /// DID and the StrKey error if the account ID does not decode.
    pub fn document(did: &str) -> crate::Result<Document> {
        let did: Did = did.parse()?;
        let document = Self::build(&did);
        tracing::trace!(did = %did, "built document");
        Ok(document)
    }

    /// Build the DID document for a parsed DID.
    #[must_use]
    pub fn build(did: &Did) -> Document {
        let mut multi_bytes = vec![ED25519_PUB_TAG];
        multi_bytes.extend_from_slice(did.public_key());
        let multikey = multibase::encode(Base::Base58Btc, &multi_bytes);

        DocumentBuilder::new()
            .verification_method(KEY_FRAGMENT, KeyFormat::Ed25519VerificationKey2020 {
                public_key_multibase: multikey,
            })
            .authentication(KEY_FRAGMENT)
            .assertion_method(KEY_FRAGMENT)
            .capability_delegation(KEY_FRAGMENT)
            .capability_invocation(KEY_FRAGMENT)
            .key_agreement(KEY_FRAGMENT)
            .build(did.to_string())
    }

    /// The DID for a StrKey-encoded public key (`G...`).
    ///
    /// # Errors
    ///
    /// Returns the StrKey error if `public_key` is not a valid public key.
    pub fn did(public_key: &str) -> crate::Result<String> {
        let did: Did = format!("did:{}:{public_key}", Self::METHOD).parse()?;
        Ok(did.to_string())
    }

    /// Build the DID document for a StrKey-encoded public key (`G...`).
    ///
    /// # Errors
    ///
    /// Returns the StrKey error if `public_key` is not a valid public key.
    pub fn from_public_key(public_key: &str) -> crate::Result<Document> {
        Self::document(&format!("did:{}:{public_key}", Self::METHOD))
    }

    /// Build the DID document for the account controlled by a StrKey-encoded
    /// secret seed (`S...`).
    ///
    /// # Errors
    ///
    /// Returns the StrKey error if `secret_seed` is not a valid secret seed.
    pub fn from_private_key(secret_seed: &str) -> crate::Result<Document> {
        Self::from_private_key_with(&Ed25519Derivation::<Sha512>::new(), secret_seed)
    }

    /// Build the DID document for the account controlled by `secret_seed`,
    /// deriving its public key with `derivation`.
    ///
    /// # Errors
    ///
    /// Returns the StrKey error if `secret_seed` is not a valid secret seed and
    /// [`Error::KeyDerivation`] if the derivation fails.
    pub fn from_private_key_with(
        derivation: &impl KeyDerivation, secret_seed: &str,
    ) -> crate::Result<Document> {
        let public_key = Self::public_key_with(derivation, secret_seed)?;
        Self::from_public_key(&public_key)
    }

    /// The StrKey-encoded public key (`G...`) for a StrKey-encoded secret seed
    /// (`S...`).
    ///
    /// # Errors
    ///
    /// Returns the StrKey error if `secret_seed` is not a valid secret seed.
    pub fn public_key(secret_seed: &str) -> crate::Result<String> {
        Self::public_key_with(&Ed25519Derivation::<Sha512>::new(), secret_seed)
    }

    fn public_key_with(derivation: &impl KeyDerivation, secret_seed: &str) -> crate::Result<String> {
        let seed = strkey::decode_ed25519_secret_seed(secret_seed)?;
        let public_key = derivation.public_key(&seed).map_err(Error::KeyDerivation)?;
        Ok(strkey::encode_ed25519_public_key(&public_key))
    }
}
