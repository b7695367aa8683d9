//! # DID Document
//!
//! A DID Document is a JSON-LD document that contains information related to a
//! DID.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Kind;

/// Contexts added to every DID document built by [`DocumentBuilder::new`].
pub const CONTEXT: [&str; 2] =
    ["https://www.w3.org/ns/did/v1", "https://w3id.org/security/suites/ed25519-2020/v1"];

/// DID Document
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The context of the DID document. Empty for the plain JSON
    /// representation.
    #[serde(rename = "@context", default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<Kind<Value>>,

    /// The DID for a particular DID subject.
    ///
    /// The subject is defined as the entity identified by the DID and described
    /// by the DID document. For `did:stellar` the subject is a ledger account.
    pub id: String,

    /// If set, MUST be a set of verification methods for the DID subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<VerificationMethod>>,

    /// The `authentication` verification relationship is used to specify how
    /// the DID subject is expected to be authenticated, for purposes such
    /// as logging into a website or in any sort of challenge-response
    /// protocol.
    ///
    /// <https://www.w3.org/TR/did-core/#authentication>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<Kind<VerificationMethod>>>,

    /// The `assertion_method` verification relationship is used to specify how
    /// the DID subject is expected to express claims, such as for the
    /// purposes of issuing a Verifiable Credential.
    ///
    /// <https://www.w3.org/TR/did-core/#assertion>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<Kind<VerificationMethod>>>,

    /// The `capability_delegation` verification relationship is used to specify
    /// a mechanism that might be used by the DID subject to delegate a
    /// cryptographic capability to another party.
    ///
    /// <https://www.w3.org/TR/did-core/#capability-delegation>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<Kind<VerificationMethod>>>,

    /// The `capability_invocation` verification relationship is used to specify
    /// a verification method that might be used by the DID subject to
    /// invoke a cryptographic capability.
    ///
    /// <https://www.w3.org/TR/did-core/#capability-invocation>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<Kind<VerificationMethod>>>,

    /// The `key_agreement` verification relationship is used to specify how an
    /// entity can generate encryption material in order to transmit
    /// confidential information intended for the DID subject.
    ///
    /// <https://www.w3.org/TR/did-core/#key-agreement>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<Kind<VerificationMethod>>>,
}

impl Document {
    /// Retrieve a verification method by its ID.
    #[must_use]
    pub fn verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        self.verification_method.as_ref()?.iter().find(|vm| vm.id == id)
    }
}

/// A verification method binds a public key to the DID subject.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    /// A DID URL that identifies the verification method.
    pub id: String,

    /// The DID of the controller of the verification method.
    pub controller: String,

    /// The format of the public key material.
    #[serde(flatten)]
    pub key: KeyFormat,
}

impl VerificationMethod {
    /// Infer the DID from the key ID.
    #[must_use]
    pub fn did(&self) -> String {
        self.id.split('#').next().unwrap_or_default().to_string()
    }
}

/// The format of the public key material.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all_fields = "camelCase")]
#[serde(tag = "type")]
pub enum KeyFormat {
    /// An Ed25519 public key encoded as a base58btc Multibase string.
    ///
    /// <https://w3id.org/security/suites/ed25519-2020/v1>
    Ed25519VerificationKey2020 {
        /// The public key encoded as a Multibase.
        public_key_multibase: String,
    },
}

impl Default for KeyFormat {
    fn default() -> Self {
        Self::Ed25519VerificationKey2020 {
            public_key_multibase: String::new(),
        }
    }
}

impl KeyFormat {
    /// Return the key as a multibase string.
    #[must_use]
    pub fn multibase(&self) -> &str {
        match self {
            Self::Ed25519VerificationKey2020 { public_key_multibase } => public_key_multibase,
        }
    }
}

/// DID Document builder.
///
/// Verification methods and relationships are added by fragment and are
/// expanded into DID URLs (`<did>#<fragment>`) by [`DocumentBuilder::build`].
#[derive(Clone, Debug)]
pub struct DocumentBuilder {
    context: Vec<Kind<Value>>,
    verification_method: Option<Vec<(String, KeyFormat)>>,
    authentication: Option<Vec<String>>,
    assertion_method: Option<Vec<String>>,
    capability_delegation: Option<Vec<String>>,
    capability_invocation: Option<Vec<String>>,
    key_agreement: Option<Vec<String>>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Creates a new `DocumentBuilder` with the default contexts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            context: CONTEXT.iter().map(|ctx| Kind::String((*ctx).to_string())).collect(),
            verification_method: None,
            authentication: None,
            assertion_method: None,
            capability_delegation: None,
            capability_invocation: None,
            key_agreement: None,
        }
    }

    /// Add a context.
    ///
    /// Chain to add multiple contexts.
    #[must_use]
    pub fn context(mut self, context: Kind<Value>) -> Self {
        self.context.push(context);
        self
    }

    /// Add a verification method identified by `fragment`.
    #[must_use]
    pub fn verification_method(mut self, fragment: impl Into<String>, key: KeyFormat) -> Self {
        self.verification_method.get_or_insert(vec![]).push((fragment.into(), key));
        self
    }

    /// Reference a verification method from the `authentication` relationship.
    #[must_use]
    pub fn authentication(mut self, fragment: impl Into<String>) -> Self {
        self.authentication.get_or_insert(vec![]).push(fragment.into());
        self
    }

    /// Reference a verification method from the `assertion_method`
    /// relationship.
    #[must_use]
    pub fn assertion_method(mut self, fragment: impl Into<String>) -> Self {
        self.assertion_method.get_or_insert(vec![]).push(fragment.into());
        self
    }

    /// Reference a verification method from the `capability_delegation`
    /// relationship.
    #[must_use]
    pub fn capability_delegation(mut self, fragment: impl Into<String>) -> Self {
        self.capability_delegation.get_or_insert(vec![]).push(fragment.into());
        self
    }

    /// Reference a verification method from the `capability_invocation`
    /// relationship.
    #[must_use]
    pub fn capability_invocation(mut self, fragment: impl Into<String>) -> Self {
        self.capability_invocation.get_or_insert(vec![]).push(fragment.into());
        self
    }

    /// Reference a verification method from the `key_agreement` relationship.
    #[must_use]
    pub fn key_agreement(mut self, fragment: impl Into<String>) -> Self {
        self.key_agreement.get_or_insert(vec![]).push(fragment.into());
        self
    }

    /// Build the DID Document for `did`.
    #[must_use]
    pub fn build(self, did: impl Into<String>) -> Document {
        let did = did.into();

        let verification_method = self.verification_method.map(|vms| {
            vms.into_iter()
                .map(|(fragment, key)| VerificationMethod {
                    id: format!("{did}#{fragment}"),
                    controller: did.clone(),
                    key,
                })
                .collect()
        });

        Document {
            context: self.context,
            verification_method,
            authentication: to_refs(&did, self.authentication),
            assertion_method: to_refs(&did, self.assertion_method),
            capability_delegation: to_refs(&did, self.capability_delegation),
            capability_invocation: to_refs(&did, self.capability_invocation),
            key_agreement: to_refs(&did, self.key_agreement),
            id: did,
        }
    }
}

fn to_refs(did: &str, fragments: Option<Vec<String>>) -> Option<Vec<Kind<VerificationMethod>>> {
    fragments.map(|f| f.into_iter().map(|key_id| Kind::String(format!("{did}#{key_id}"))).collect())
}

/// DID document metadata. This typically does not change unless the DID
/// document changes.
///
/// `did:stellar` documents are derived from the DID itself, so no created,
/// updated or version metadata exists.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::module_name_repetitions)]
pub struct DocumentMetadata {
    /// Additional metadata specified by the DID method.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub additional: Option<HashMap<String, Value>>,
}
