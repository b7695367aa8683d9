//! Tests for building and resolving `did:stellar` documents.

use did_stellar::{DidStellar, Error, Kind, Resource, dereference};
use insta::assert_json_snapshot as assert_snapshot;
use serde_json::Value;
use tracing_subscriber::filter::LevelFilter;

const PUBLIC_KEY: &str = "GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB";
const SECRET_SEED: &str = "SAV76USXIJOBMEQXPANUOQM6F5LIOTLPDIDVRJBFFE2MDJXG24TAPUU7";
const DID: &str = "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB";
const MULTIKEY: &str = "z1APN5d6ZRjZQXsVegnYhKBcyifsU96gpVM5FrD3fdJLVd";

// The seed's account document carries the expected key.
#[test]
fn from_private_key() {
    let doc = DidStellar::from_private_key(SECRET_SEED).expect("should build");
    assert_eq!(doc.id, DID);

    let vms = doc.verification_method.expect("should have methods");
    assert_eq!(vms[0].key.multibase(), MULTIKEY);
}

#[test]
fn from_public_key() {
    let doc = DidStellar::from_public_key(PUBLIC_KEY).expect("should build");
    assert_snapshot!(doc, @r###"
    {
      "@context": [
        "https://www.w3.org/ns/did/v1",
        "https://w3id.org/security/suites/ed25519-2020/v1"
      ],
      "id": "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB",
      "verificationMethod": [
        {
          "id": "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB#0",
          "controller": "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB",
          "type": "Ed25519VerificationKey2020",
          "publicKeyMultibase": "z1APN5d6ZRjZQXsVegnYhKBcyifsU96gpVM5FrD3fdJLVd"
        }
      ],
      "authentication": [
        "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB#0"
      ],
      "assertionMethod": [
        "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB#0"
      ],
      "capabilityDelegation": [
        "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB#0"
      ],
      "capabilityInvocation": [
        "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB#0"
      ],
      "keyAgreement": [
        "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB#0"
      ]
    }
    "###);
}

// The public key derived from the seed matches the published account ID.
#[test]
fn private_and_public_agree() {
    let from_seed = DidStellar::from_private_key(SECRET_SEED).expect("should build");
    let from_key = DidStellar::from_public_key(PUBLIC_KEY).expect("should build");
    assert_eq!(from_seed, from_key);
}

#[test]
fn resolve() {
    let resolved = DidStellar::resolve(DID).expect("should resolve");
    assert_eq!(resolved.document.id, DID);

    let json = serde_json::to_value(&resolved).expect("should serialize");
    assert_eq!(json["didResolutionMetadata"]["contentType"], "application/did+ld+json");
    assert!(json["didResolutionMetadata"]["retrieved"].is_string());
    assert_eq!(json["didDocumentMetadata"], Value::Object(serde_json::Map::new()));
    assert_eq!(json["didDocument"]["verificationMethod"][0]["publicKeyMultibase"], MULTIKEY);
}

// Documents are structured values; the JSON parses back to the same value.
#[test]
fn json_round_trip() {
    let doc = DidStellar::from_public_key(PUBLIC_KEY).expect("should build");
    let json = serde_json::to_string(&doc).expect("should serialize");
    let parsed: did_stellar::Document = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(parsed, doc);
    assert_eq!(parsed.key_agreement, Some(vec![Kind::String(format!("{DID}#0"))]));
}

#[test]
fn malformed_identifier() {
    for did in ["did:stellar", "did:web:example.com", "did:stellar:a:b", PUBLIC_KEY] {
        let err = DidStellar::resolve(did).expect_err("should fail");
        assert!(matches!(err, Error::MalformedIdentifier(_)), "{did}: {err}");
        assert_eq!(err.code(), "invalid_did");
    }
}

// Codec errors surface through the resolver unchanged.
#[test]
fn codec_errors() {
    init_tracing();

    assert!(matches!(
        DidStellar::resolve("did:stellar:invalid"),
        Err(Error::MalformedEncoding(_))
    ));
    assert!(matches!(
        DidStellar::resolve(&format!("did:stellar:{SECRET_SEED}")),
        Err(Error::VersionMismatch { .. })
    ));
    assert!(matches!(
        DidStellar::from_public_key("GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZA"),
        Err(Error::ChecksumInvalid { .. })
    ));
    assert!(matches!(DidStellar::from_private_key("invalid"), Err(Error::MalformedEncoding(_))));
}

#[test]
fn dereference_key() {
    let Resource::VerificationMethod(vm) =
        dereference(&format!("{DID}#0")).expect("should dereference")
    else {
        panic!("should be a verification method");
    };
    assert_eq!(vm.controller, DID);
    assert_eq!(vm.key.multibase(), MULTIKEY);
}

// Errors are logged at debug level where they are detected.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}
