//! # StrKey
//!
//! StrKey is the Stellar text encoding for fixed-length key material. The raw
//! key is prefixed with a version byte that identifies the key type, suffixed
//! with a CRC-16/XMODEM checksum (little-endian), and the resulting 35 bytes
//! are encoded as unpadded RFC 4648 base32. Every encoded key is 56
//! characters long and starts with a character determined by its type: `G`
//! for public keys and `S` for secret seeds.
//!
//! See <https://developers.stellar.org/docs/encyclopedia/security/strkey>

pub mod crc16;

use std::fmt::{Display, Formatter};

use multibase::Base;

use crate::error::Error;
use crate::tracerr;

/// Length of the raw key material carried by a StrKey.
pub const PAYLOAD_LENGTH: usize = 32;

/// Length of a decoded StrKey: version byte, payload and checksum.
pub const DECODED_LENGTH: usize = 1 + PAYLOAD_LENGTH + 2;

/// Length of an encoded StrKey.
pub const ENCODED_LENGTH: usize = 56;

/// Version byte for an Ed25519 public key (`6 << 3`, encodes as `G`).
pub const VERSION_BYTE_ED25519_PUBLIC_KEY: u8 = 6 << 3;

/// Version byte for an Ed25519 secret seed (`18 << 3`, encodes as `S`).
pub const VERSION_BYTE_ED25519_SECRET_SEED: u8 = 18 << 3;

// StrKey is unpadded, uppercase RFC 4648 base32.
const BASE32: Base = Base::Base32Upper;

/// The kind of key material held by a StrKey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Ed25519 public key (account ID).
    Ed25519PublicKey,

    /// Ed25519 secret seed.
    Ed25519SecretSeed,
}

impl KeyType {
    /// The version byte written in front of the key material.
    #[must_use]
    pub const fn version_byte(self) -> u8 {
        match self {
            Self::Ed25519PublicKey => VERSION_BYTE_ED25519_PUBLIC_KEY,
            Self::Ed25519SecretSeed => VERSION_BYTE_ED25519_SECRET_SEED,
        }
    }

    /// The first character of every key of this type.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Ed25519PublicKey => 'G',
            Self::Ed25519SecretSeed => 'S',
        }
    }

    /// Look up the key type for a version byte.
    #[must_use]
    pub const fn from_version_byte(version: u8) -> Option<Self> {
        match version {
            VERSION_BYTE_ED25519_PUBLIC_KEY => Some(Self::Ed25519PublicKey),
            VERSION_BYTE_ED25519_SECRET_SEED => Some(Self::Ed25519SecretSeed),
            _ => None,
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ed25519PublicKey => write!(f, "ed25519 public key"),
            Self::Ed25519SecretSeed => write!(f, "ed25519 secret seed"),
        }
    }
}

/// Encode raw key material as a StrKey.
#[must_use]
pub fn encode(key_type: KeyType, raw: &[u8; PAYLOAD_LENGTH]) -> String {
    let mut bytes = Vec::with_capacity(DECODED_LENGTH);
    bytes.push(key_type.version_byte());
    bytes.extend_from_slice(raw);
    let checksum = crc16::to_le_bytes(&bytes);
    bytes.extend_from_slice(&checksum);
    BASE32.encode(bytes)
}

/// Decode a StrKey of the given type into its raw key material.
///
/// # Errors
///
/// Returns [`Error::MalformedEncoding`] if the text is not unpadded base32 or
/// does not decode to 35 bytes, [`Error::VersionMismatch`] if the key is of
/// another type and [`Error::ChecksumInvalid`] if the checksum is wrong. The
/// checks run in that order.
pub fn decode(key_type: KeyType, text: &str) -> crate::Result<[u8; PAYLOAD_LENGTH]> {
    let bytes = match BASE32.decode(text) {
        Ok(bytes) => bytes,
        Err(e) => tracerr!(Error::MalformedEncoding(format!("issue decoding base32: {e}"))),
    };
    if bytes.len() != DECODED_LENGTH {
        tracerr!(Error::MalformedEncoding(format!(
            "expected {DECODED_LENGTH} bytes, decoded {}",
            bytes.len()
        )));
    }

    let (data, checksum) = bytes.split_at(DECODED_LENGTH - 2);
    let (version, payload) = data.split_at(1);
    if version[0] != key_type.version_byte() {
        tracerr!(Error::VersionMismatch {
            expected: key_type,
            found: version[0],
        });
    }

    let expected = crc16::checksum(data);
    let found = u16::from_le_bytes([checksum[0], checksum[1]]);
    if expected != found {
        tracerr!(Error::ChecksumInvalid { expected, found });
    }

    let mut raw = [0; PAYLOAD_LENGTH];
    raw.copy_from_slice(payload);
    Ok(raw)
}

/// Returns `true` when `text` decodes as a StrKey of the given type.
#[must_use]
pub fn is_valid(key_type: KeyType, text: &str) -> bool {
    decode(key_type, text).is_ok()
}

/// Encode an Ed25519 public key (`G...`).
#[must_use]
pub fn encode_ed25519_public_key(raw: &[u8; PAYLOAD_LENGTH]) -> String {
    encode(KeyType::Ed25519PublicKey, raw)
}

/// Decode an Ed25519 public key (`G...`).
///
/// # Errors
///
/// See [`decode`].
pub fn decode_ed25519_public_key(text: &str) -> crate::Result<[u8; PAYLOAD_LENGTH]> {
    decode(KeyType::Ed25519PublicKey, text)
}

/// Returns `true` for a well-formed Ed25519 public key (`G...`).
#[must_use]
pub fn is_valid_ed25519_public_key(text: &str) -> bool {
    is_valid(KeyType::Ed25519PublicKey, text)
}

/// Encode an Ed25519 secret seed (`S...`).
#[must_use]
pub fn encode_ed25519_secret_seed(raw: &[u8; PAYLOAD_LENGTH]) -> String {
    encode(KeyType::Ed25519SecretSeed, raw)
}

/// Decode an Ed25519 secret seed (`S...`).
///
/// # Errors
///
/// See [`decode`].
pub fn decode_ed25519_secret_seed(text: &str) -> crate::Result<[u8; PAYLOAD_LENGTH]> {
    decode(KeyType::Ed25519SecretSeed, text)
}

/// Returns `true` for a well-formed Ed25519 secret seed (`S...`).
#[must_use]
pub fn is_valid_ed25519_secret_seed(text: &str) -> bool {
    is_valid(KeyType::Ed25519SecretSeed, text)
}
