//! Signature values and their algorithm-directed decoding.

use clave_asn1::{AlgorithmIdentifier, EcdsaSignatureValue};
use picky_asn1::bit_string::BitString;
use picky_asn1_der::Asn1DerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignatureError {
    /// ASN1 serialization error
    #[error("(ASN1) couldn't serialize {element}: {source}")]
    Asn1Serialization {
        element: &'static str,
        source: Asn1DerError,
    },

    /// ASN1 deserialization error
    #[error("(ASN1) couldn't deserialize {element}: {source}")]
    Asn1Deserialization {
        element: &'static str,
        source: Asn1DerError,
    },
}

/// A signature value, shaped by the algorithm that produced it.
///
/// The variant is selected from the signature algorithm identifier alone;
/// the payload bytes are never inspected to guess their format. RSA
/// signatures are opaque, ECDSA signatures nest a DER `Ecdsa-Sig-Value`
/// inside the bit string and are decoded into it, and signatures of any
/// other algorithm are kept verbatim together with their algorithm for the
/// caller to interpret. Nothing here verifies anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Signature {
    Rsa(Vec<u8>),
    Ecdsa(EcdsaSignatureValue),
    Generic {
        signature: Vec<u8>,
        algorithm: AlgorithmIdentifier,
    },
}

impl Signature {
    /// Interpret the payload of a signature bit string according to the
    /// signature algorithm.
    pub fn from_signature_data(data: &[u8], algorithm: &AlgorithmIdentifier) -> Result<Self, SignatureError> {
        if algorithm.is_rsa_signature() {
            Ok(Self::Rsa(data.to_vec()))
        } else if algorithm.is_ecdsa_signature() {
            let value: EcdsaSignatureValue =
                picky_asn1_der::from_bytes(data).map_err(|e| SignatureError::Asn1Deserialization {
                    element: "ecdsa signature value",
                    source: e,
                })?;
            Ok(Self::Ecdsa(value))
        } else {
            Ok(Self::Generic {
                signature: data.to_vec(),
                algorithm: algorithm.clone(),
            })
        }
    }

    /// Re-encode into the payload of a signature bit string.
    pub fn to_bit_string(&self) -> Result<BitString, SignatureError> {
        let bytes = match self {
            Self::Rsa(signature) => signature.clone(),
            Self::Ecdsa(value) => picky_asn1_der::to_vec(value).map_err(|e| SignatureError::Asn1Serialization {
                element: "ecdsa signature value",
                source: e,
            })?,
            Self::Generic { signature, .. } => signature.clone(),
        };
        Ok(BitString::with_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ECDSA_SIG_VALUE: [u8; 8] = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02];

    #[test]
    fn rsa_signature_is_opaque() {
        let algorithm = AlgorithmIdentifier::new_sha256_with_rsa_encryption();
        let signature = Signature::from_signature_data(&[0xAA, 0xBB], &algorithm).expect("signature");
        assert_eq!(signature, Signature::Rsa(vec![0xAA, 0xBB]));
        assert_eq!(signature.to_bit_string().expect("bit string").payload_view(), [0xAA, 0xBB]);
    }

    #[test]
    fn ecdsa_signature_is_decoded() {
        let algorithm = AlgorithmIdentifier::new_ecdsa_with_sha256();
        let signature = Signature::from_signature_data(&ECDSA_SIG_VALUE, &algorithm).expect("signature");
        match &signature {
            Signature::Ecdsa(value) => {
                assert_eq!(value.r.as_unsigned_bytes_be(), [1]);
                assert_eq!(value.s.as_unsigned_bytes_be(), [2]);
            }
            other => panic!("unexpected signature: {other:?}"),
        }
        assert_eq!(
            signature.to_bit_string().expect("bit string").payload_view(),
            ECDSA_SIG_VALUE
        );
    }

    #[test]
    fn malformed_ecdsa_signature_fails() {
        let algorithm = AlgorithmIdentifier::new_ecdsa_with_sha256();
        let err = Signature::from_signature_data(&[0xAA, 0xBB], &algorithm).expect_err("signature error");
        assert!(matches!(err, SignatureError::Asn1Deserialization { .. }));
    }

    #[test]
    fn unrecognized_algorithm_yields_generic() {
        let algorithm = AlgorithmIdentifier::new_unknown("1.3.6.1.3".try_into().unwrap(), None);
        let signature = Signature::from_signature_data(&[0xAA, 0xBB], &algorithm).expect("signature");
        match &signature {
            Signature::Generic {
                signature,
                algorithm: kept,
            } => {
                assert_eq!(signature, &[0xAA, 0xBB]);
                assert_eq!(kept, &algorithm);
            }
            other => panic!("unexpected signature: {other:?}"),
        }
    }

    #[test]
    fn hmac_is_not_a_key_signature_family() {
        // HMAC identifiers exist in the built-in table but are not RSA or
        // ECDSA signatures, so their signature data stays generic
        let algorithm = AlgorithmIdentifier::new_hmac_with_sha(clave_asn1::ShaVariant::Sha256);
        let signature = Signature::from_signature_data(&[0x01], &algorithm).expect("signature");
        assert!(matches!(signature, Signature::Generic { .. }));
    }
}
