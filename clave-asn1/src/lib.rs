//! ASN.1 types for cryptographic keys and algorithm identifiers.
//!
//! This crate provides serde-based DER representations for the structures
//! defined by PKCS#1 (RFC 8017), PKCS#8/RFC 5958, RFC 5280
//! (`SubjectPublicKeyInfo`), RFC 5915 (`ECPrivateKey`) and RFC 8410
//! (`CurvePrivateKey`), together with the `AlgorithmIdentifier` grammar they
//! all share. Types are plain values: decode with
//! [`picky_asn1_der::from_bytes`], encode with [`picky_asn1_der::to_vec`].

#[macro_use]
mod macros;

pub mod oids;

mod algorithm_identifier;
mod attribute;
mod private_key;
mod private_key_info;
mod public_key;
mod signature;
mod subject_public_key_info;

pub use algorithm_identifier::*;
pub use attribute::*;
pub use private_key::*;
pub use private_key_info::*;
pub use public_key::*;
pub use signature::*;
pub use subject_public_key_info::*;
