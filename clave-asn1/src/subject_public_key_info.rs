use crate::AlgorithmIdentifier;
use oid::ObjectIdentifier;
use picky_asn1::bit_string::BitString;
use picky_asn1::wrapper::BitStringAsn1;
use serde::{Deserialize, Serialize};

/// [RFC 5280 SubjectPublicKeyInfo](https://tools.ietf.org/html/rfc5280#section-4.1)
///
/// ```not_rust
/// SubjectPublicKeyInfo  ::=  SEQUENCE  {
///     algorithm            AlgorithmIdentifier,
///     subjectPublicKey     BIT STRING  }
/// ```
///
/// The bit string payload is opaque at this level: for RSA it nests a DER
/// `RSAPublicKey`, for EC it is the EC point itself, for the RFC 8410
/// algorithms the raw public bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubjectPublicKeyInfo {
    pub algorithm: AlgorithmIdentifier,
    pub subject_public_key: BitStringAsn1,
}

impl SubjectPublicKeyInfo {
    pub fn new(algorithm: AlgorithmIdentifier, subject_public_key: BitStringAsn1) -> Self {
        Self {
            algorithm,
            subject_public_key,
        }
    }

    /// `point` is SEC1 encoded point data.
    pub fn new_ec_key(curve: ObjectIdentifier, point: BitString) -> Self {
        Self {
            algorithm: AlgorithmIdentifier::new_elliptic_curve(curve),
            subject_public_key: point.into(),
        }
    }

    /// `algorithm` is one of the RFC 8410 OIDs, `public_key` the raw key bytes.
    pub fn new_ed_key(algorithm: ObjectIdentifier, public_key: BitString) -> Self {
        let algorithm = match Into::<String>::into(&algorithm).as_str() {
            crate::oids::ED25519 => AlgorithmIdentifier::new_ed25519(),
            crate::oids::X25519 => AlgorithmIdentifier::new_x25519(),
            crate::oids::ED448 => AlgorithmIdentifier::new_ed448(),
            crate::oids::X448 => AlgorithmIdentifier::new_x448(),
            _ => AlgorithmIdentifier::new_unknown(algorithm, None),
        };

        Self {
            algorithm,
            subject_public_key: public_key.into(),
        }
    }

    pub fn public_key_data(&self) -> &[u8] {
        self.subject_public_key.0.payload_view()
    }
}
