//! # Errors
//!
//! Error types for StrKey decoding, `did:stellar` identifier parsing and DID
//! resolution.

use thiserror::Error;

use crate::strkey::KeyType;

/// Log an error through `tracing` and return it from the enclosing function.
///
/// Logs at `debug` level: the `is_valid*` checks run the same decode path and
/// an invalid key there is an expected outcome.
///
/// # Example
/// ```ignore
/// tracerr!(Error::MalformedIdentifier(format!("{did} is not a DID")));
/// ```
#[macro_export]
macro_rules! tracerr {
    ($err:expr) => {{
        let err = $err;
        tracing::debug!(code = err.code(), "{err}");
        return Err(err);
    }};
}

/// Errors returned by this crate.
///
/// Every operation returns the first error it detects. Nothing is retried and
/// no error is reclassified on its way up to the caller.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The text is not unpadded RFC 4648 base32 or does not decode to the
    /// expected number of bytes.
    #[error("malformed StrKey encoding: {0}")]
    MalformedEncoding(String),

    /// The decoded version byte does not belong to the requested key type.
    #[error("version byte {found:#04x} does not match {expected}")]
    VersionMismatch {
        /// Key type the caller asked for.
        expected: KeyType,
        /// Version byte found in the decoded payload.
        found: u8,
    },

    /// The embedded CRC16 checksum does not match the payload.
    #[error("checksum {found:#06x} does not match computed {expected:#06x}")]
    ChecksumInvalid {
        /// Checksum computed over the version byte and payload.
        expected: u16,
        /// Checksum carried in the encoded text.
        found: u16,
    },

    /// The DID is not of the form `did:stellar:<public key>`.
    #[error("malformed DID: {0}")]
    MalformedIdentifier(String),

    /// The requested DID URL resource does not exist in the document.
    #[error("not found: {0}")]
    NotFound(String),

    /// The requested representation (media type) cannot be produced.
    #[error("representation not supported: {0}")]
    RepresentationNotSupported(String),

    /// An injected key derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(anyhow::Error),
}

impl Error {
    /// Returns the error code, named after the DID Resolution error
    /// registry where one applies.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedEncoding(_) => "malformed_encoding",
            Self::VersionMismatch { .. } => "version_mismatch",
            Self::ChecksumInvalid { .. } => "checksum_invalid",
            Self::MalformedIdentifier(_) => "invalid_did",
            Self::NotFound(_) => "not_found",
            Self::RepresentationNotSupported(_) => "representation_not_supported",
            Self::KeyDerivation(_) => "key_derivation_failed",
        }
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Transfer the error to a JSON object suitable for resolution metadata.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.code(),
            "errorMessage": self.message(),
        })
    }
}

/// Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_code() {
        let err = Error::MalformedIdentifier("did:key:abc".into());
        assert_eq!(err.code(), "invalid_did");
        assert_eq!(err.message(), "malformed DID: did:key:abc");
    }

    #[test]
    fn checksum_message() {
        let err = Error::ChecksumInvalid {
            expected: 0x31c3,
            found: 0x00ff,
        };
        assert_eq!(err.to_string(), "checksum 0x00ff does not match computed 0x31c3");
    }

    #[test]
    fn version_message() {
        let err = Error::VersionMismatch {
            expected: KeyType::Ed25519PublicKey,
            found: 0x90,
        };
        assert_eq!(err.to_string(), "version byte 0x90 does not match ed25519 public key");
    }

    #[test]
    fn json_err() {
        let err = Error::NotFound("did:stellar:G#1".into());
        assert_eq!(
            err.to_json(),
            json!({"error": "not_found", "errorMessage": "not found: did:stellar:G#1"})
        );
    }

    #[test]
    fn macro_returns_err() {
        fn run() -> Result<()> {
            tracerr!(Error::NotFound("thing".into()))
        }
        let err = run().expect_err("should fail");
        assert!(matches!(err, Error::NotFound(_)));
    }
}
