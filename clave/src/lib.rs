//! # clave
//!
//! Typed, round-trippable views over PEM/DER-encoded private keys, public
//! keys, algorithm identifiers and signature values, covering PKCS#1,
//! PKCS#8/RFC 5958, RFC 5280 `SubjectPublicKeyInfo` and the RFC 8410
//! Curve25519/Curve448 key formats.
//!
//! This crate only models the data: nothing here signs, verifies or
//! generates keys.

pub mod cipher;
pub mod factory;
pub mod key;
pub mod pem;
pub mod signature;

pub use clave_asn1::{oids, AlgorithmIdentifier, AlgorithmIdentifierParameters};
pub use key::{PrivateKey, PublicKey};
pub use pem::Pem;
pub use signature::Signature;
