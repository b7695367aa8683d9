//! # DID Stellar
//!
//! Stellar [StrKey](strkey) encoding and `did:stellar` DID resolution.
//!
//! A `did:stellar` DID identifies a Stellar account by its Ed25519 public key:
//!
//! ```text
//! did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB
//! ```
//!
//! The DID document is derived from the DID alone, so resolution never
//! touches the network.
//!
//! ```rust
//! use did_stellar::DidStellar;
//!
//! let resolved = DidStellar::resolve(
//!     "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB",
//! )?;
//! let vms = resolved.document.verification_method.unwrap_or_default();
//! assert_eq!(vms[0].id, "did:stellar:GCFXHS4GXL6BVUCXBWXGTITROWLVYXQKQLF4YH5O5JT3YZXCYPAFBJZB#0");
//! assert_eq!(vms[0].key.multibase(), "z1APN5d6ZRjZQXsVegnYhKBcyifsU96gpVM5FrD3fdJLVd");
//! # Ok::<(), did_stellar::Error>(())
//! ```

mod core;
mod document;
pub mod error;
pub mod key;
mod resolve;
mod stellar;
pub mod strkey;
mod url;

pub use self::core::*;
pub use self::document::*;
pub use self::error::{Error, Result};
pub use self::key::{Ed25519Derivation, KeyDerivation};
pub use self::resolve::{
    ContentType, Metadata, Options, Resolved, Resource, dereference, document_resource,
};
pub use self::stellar::*;
pub use self::url::{Did, METHOD, Url};
