//! # DID and DID URL
//!
//! Parsing of `did:stellar` identifiers and DID URLs. A DID has exactly three
//! colon-delimited segments: the `did` scheme, the `stellar` method and the
//! account's Ed25519 public key as a StrKey. A DID URL may add a `#fragment`
//! identifying a verification method.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::strkey::{self, PAYLOAD_LENGTH};
use crate::tracerr;

/// The `did:stellar` method name.
pub const METHOD: &str = "stellar";

/// A validated `did:stellar` DID.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Did {
    account_id: String,
    public_key: [u8; PAYLOAD_LENGTH],
}

impl Did {
    /// Create a DID from a raw Ed25519 public key.
    #[must_use]
    pub fn from_public_key(public_key: &[u8; PAYLOAD_LENGTH]) -> Self {
        Self {
            account_id: strkey::encode_ed25519_public_key(public_key),
            public_key: *public_key,
        }
    }

    /// The account ID (`G...` StrKey) identifying the DID subject.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The raw Ed25519 public key decoded from the account ID.
    #[must_use]
    pub const fn public_key(&self) -> &[u8; PAYLOAD_LENGTH] {
        &self.public_key
    }

    /// The DID URL of the verification method identified by `fragment`.
    #[must_use]
    pub fn key_id(&self, fragment: &str) -> String {
        format!("{self}#{fragment}")
    }
}

impl FromStr for Did {
    type Err = Error;

    /// Parse a string into a [`Did`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] when the string does not have
    /// exactly three colon-delimited segments or names another scheme or
    /// method. A malformed account ID returns the StrKey error unchanged.
    fn from_str(s: &str) -> crate::Result<Self> {
        let segments: Vec<&str> = s.split(':').collect();
        let [scheme, method, account_id] = segments.as_slice() else {
            tracerr!(Error::MalformedIdentifier(format!(
                "expected 3 segments, found {}: {s}",
                segments.len()
            )));
        };
        if *scheme != "did" {
            tracerr!(Error::MalformedIdentifier(format!("scheme is not 'did': {s}")));
        }
        if *method != METHOD {
            tracerr!(Error::MalformedIdentifier(format!("method is not '{METHOD}': {s}")));
        }

        let public_key = strkey::decode_ed25519_public_key(account_id)?;
        Ok(Self {
            account_id: (*account_id).to_string(),
            public_key,
        })
    }
}

impl Display for Did {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "did:{METHOD}:{}", self.account_id)
    }
}

/// A `did:stellar` DID URL: a DID with an optional fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Url {
    /// The DID.
    pub did: Did,

    /// The fragment, without the leading `#`.
    pub fragment: Option<String>,
}

impl Url {
    /// The full ID of the resource identified by the URL.
    #[must_use]
    pub fn resource_id(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Url {
    type Err = Error;

    /// Parse a string into a [`Url`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Did::from_str`].
    fn from_str(s: &str) -> crate::Result<Self> {
        let (did, fragment) = match s.split_once('#') {
            Some((did, fragment)) => (did, Some(fragment.to_string())),
            None => (s, None),
        };
        Ok(Self {
            did: did.parse()?,
            fragment,
        })
    }
}

impl Display for Url {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{fragment}", self.did),
            None => write!(f, "{}", self.did),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DID: &str = "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB";

    #[test]
    fn parse_did() {
        let did: Did = DID.parse().expect("should parse");
        assert_eq!(did.account_id(), "GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB");
        assert_eq!(did.to_string(), DID);
        assert_eq!(did.key_id("0"), format!("{DID}#0"));
        assert_eq!(Did::from_public_key(did.public_key()), did);
    }

    #[test]
    fn segments() {
        for bad in [
            "did:stellar",
            "did:stellar:GCFX:extra",
            "stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB",
            "did:key:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB",
            "uri:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB",
        ] {
            let err = bad.parse::<Did>().expect_err("should fail");
            assert!(matches!(err, Error::MalformedIdentifier(_)), "{bad}: {err}");
        }
    }

    #[test]
    fn account_error_unchanged() {
        let err = "did:stellar:invalid".parse::<Did>().expect_err("should fail");
        assert!(matches!(err, Error::MalformedEncoding(_)));
    }

    #[test]
    fn parse_url() {
        let url: Url = format!("{DID}#0").parse().expect("should parse");
        assert_eq!(url.fragment.as_deref(), Some("0"));
        assert_eq!(url.did.to_string(), DID);
        assert_eq!(url.resource_id(), format!("{DID}#0"));

        let url: Url = DID.parse().expect("should parse");
        assert!(url.fragment.is_none());
        assert_eq!(url.to_string(), DID);
    }
}
