//! # DID Resolver
//!
//! Resolution of `did:stellar` DIDs into DID documents, and dereferencing of
//! `did:stellar` DID URLs into the resources they identify. Resolution is a
//! local transform of the DID; nothing is fetched from the network.
//!
//! See [DID resolution](https://w3c.github.io/did-resolution) for more.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentMetadata, VerificationMethod};
use crate::error::Error;
use crate::stellar::DidStellar;
use crate::tracerr;
use crate::url::{Did, Url};

impl DidStellar {
    /// Resolve a `did:stellar` DID into its DID document.
    ///
    /// # Errors
    ///
    /// Returns the error produced while building the document, unchanged.
    pub fn resolve(did: &str) -> crate::Result<Resolved> {
        Self::resolve_with(did, &Options::default())
    }

    /// Resolve a `did:stellar` DID with resolution options.
    ///
    /// The `accept` option selects the representation of the document. The
    /// plain JSON representation omits `@context`.
    ///
    /// # Errors
    ///
    /// Returns the error produced while building the document, unchanged.
    pub fn resolve_with(did: &str, options: &Options) -> crate::Result<Resolved> {
        tracing::debug!(did, "resolving");

        let content_type = options.accept.clone().unwrap_or_default();
        let mut document = Self::document(did)?;
        if content_type == ContentType::DidJson {
            document.context.clear();
        }

        Ok(Resolved {
            metadata: Metadata {
                content_type,
                retrieved: Utc::now().trunc_subsecs(0),
            },
            document,
            document_metadata: DocumentMetadata::default(),
        })
    }
}

/// Dereference a `did:stellar` DID URL into a resource.
///
/// A DID URL without a fragment dereferences to the DID document. A fragment
/// dereferences to the verification method it identifies.
///
/// # Errors
///
/// Returns the error produced while parsing the DID URL, unchanged, or
/// [`Error::NotFound`] if the fragment does not identify a verification
/// method in the document.
pub fn dereference(did_url: &str) -> crate::Result<Resource> {
    let url: Url = did_url.parse()?;
    let doc = DidStellar::build(&url.did);
    document_resource(&url, &doc)
}

/// Get a resource from a DID document.
///
/// Uses the `Url` to infer the type of resource to return.
///
/// # Errors
/// Will return an error if the resource is not found in the document.
pub fn document_resource(url: &Url, doc: &Document) -> crate::Result<Resource> {
    if url.fragment.is_none() {
        return Ok(Resource::Document(doc.clone()));
    }
    if let Some(vm) = doc.verification_method(&url.resource_id()) {
        return Ok(Resource::VerificationMethod(vm.clone()));
    }
    tracerr!(Error::NotFound(format!("verification method {url} not found in document")))
}

/// Used to pass additional values to the `resolve` method. Any properties used
/// should be registered in the DID Specification Registries.
///
/// The `accept` property is used by callers to specify the Media Type of the
/// returned document. For example:
///
/// ```json
/// {
///    "accept": "application/did+ld+json"
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// [`accept`](https://www.w3.org/TR/did-spec-registries/#accept) resolution option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<ContentType>,
}

/// Returned by `resolve`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Resolved {
    /// Resolution metadata.
    #[serde(rename = "didResolutionMetadata")]
    pub metadata: Metadata,

    /// The DID document.
    #[serde(rename = "didDocument")]
    pub document: Document,

    /// DID document metadata.
    #[serde(rename = "didDocumentMetadata")]
    pub document_metadata: DocumentMetadata,
}

/// DID resolution metadata.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// The Media Type of the returned document.
    pub content_type: ContentType,

    /// When the document was resolved (UTC, whole seconds).
    pub retrieved: DateTime<Utc>,
}

/// The Media Type of the returned resource.
///
/// Deserializing an unsupported media type fails with
/// [`Error::RepresentationNotSupported`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum ContentType {
    /// JSON-LD representation of a DID document.
    #[default]
    #[serde(rename = "application/did+ld+json")]
    DidLdJson,

    /// Plain JSON representation of a DID document.
    #[serde(rename = "application/did+json")]
    DidJson,
}

impl ContentType {
    /// The media type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DidLdJson => "application/did+ld+json",
            Self::DidJson => "application/did+json",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "application/did+ld+json" => Ok(Self::DidLdJson),
            "application/did+json" => Ok(Self::DidJson),
            _ => tracerr!(Error::RepresentationNotSupported(s.to_string())),
        }
    }
}

impl TryFrom<String> for ContentType {
    type Error = Error;

    fn try_from(value: String) -> crate::Result<Self> {
        value.parse()
    }
}

/// Resource represents the DID document resource returned as a result of DID
/// dereferencing. The resource is a DID document or a subset of a DID document.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Resource {
    ///  DID `Document` resource.
    Document(Document),

    /// `VerificationMethod` resource.
    VerificationMethod(VerificationMethod),
}

impl From<&Did> for Resource {
    fn from(did: &Did) -> Self {
        Self::Document(DidStellar::build(did))
    }
}
