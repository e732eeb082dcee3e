//! Symmetric cipher algorithm identifiers and their block/key geometry.

use clave_asn1::{oids, AlgorithmIdentifier, AlgorithmIdentifierParameters, AlgorithmParameterError};
use oid::ObjectIdentifier;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// IV length doesn't match the cipher block size
    #[error("invalid initialization vector length (expected: {expected}, actual: {actual})")]
    InvalidIvLength { expected: usize, actual: usize },

    /// RC2 effective key bits outside the RFC 2268 table
    #[error("unsupported RC2 effective key bits: {bits}")]
    UnsupportedRc2KeyBits { bits: u32 },

    /// encode attempted while the IV is still pending
    #[error("initialization vector is not set")]
    MissingInitializationVector,

    /// algorithm identifier doesn't name a supported cipher
    #[error("unsupported cipher algorithm: {oid}")]
    UnsupportedCipher { oid: String },

    /// algorithm identifier carries no usable cipher parameters
    #[error("missing cipher parameters")]
    MissingParameters,
}

impl From<AlgorithmParameterError> for CipherError {
    fn from(e: AlgorithmParameterError) -> Self {
        match e {
            AlgorithmParameterError::InvalidIvLength { expected, actual } => {
                Self::InvalidIvLength { expected, actual }
            }
            AlgorithmParameterError::UnsupportedRc2EffectiveKeyBits(bits) => Self::UnsupportedRc2KeyBits { bits },
        }
    }
}

/// CBC cipher suites with an AlgorithmIdentifier encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    DesCbc,
    DesEde3Cbc,
    Rc2Cbc,
}

impl CipherSuite {
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Self::Aes128Cbc => oids::aes128_cbc(),
            Self::Aes192Cbc => oids::aes192_cbc(),
            Self::Aes256Cbc => oids::aes256_cbc(),
            Self::DesCbc => oids::des_cbc(),
            Self::DesEde3Cbc => oids::des_ede3_cbc(),
            Self::Rc2Cbc => oids::rc2_cbc(),
        }
    }

    fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        match Into::<String>::into(oid).as_str() {
            oids::AES128_CBC => Some(Self::Aes128Cbc),
            oids::AES192_CBC => Some(Self::Aes192Cbc),
            oids::AES256_CBC => Some(Self::Aes256Cbc),
            oids::DES_CBC => Some(Self::DesCbc),
            oids::DES_EDE3_CBC => Some(Self::DesEde3Cbc),
            oids::RC2_CBC => Some(Self::Rc2Cbc),
            _ => None,
        }
    }

    pub fn block_size(self) -> usize {
        match self {
            Self::Aes128Cbc | Self::Aes192Cbc | Self::Aes256Cbc => 16,
            Self::DesCbc | Self::DesEde3Cbc | Self::Rc2Cbc => 8,
        }
    }
}

/// A cipher algorithm identifier whose IV may still be pending.
///
/// Encryption workflows often pick the cipher up front and only obtain the
/// IV when the operation actually runs, so the identifier is built in two
/// steps: [`new`](Self::new) leaves the IV pending, and
/// [`with_initialization_vector`](Self::with_initialization_vector) returns
/// a completed copy. Only the completed state encodes; see
/// [`to_algorithm_identifier`](Self::to_algorithm_identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherAlgorithmIdentifier {
    suite: CipherSuite,
    rc2_effective_key_bits: u32,
    iv: Option<Vec<u8>>,
}

/// Effective key bits implied by a bare-IV RC2 parameter encoding.
const RC2_DEFAULT_EFFECTIVE_KEY_BITS: u32 = 64;

impl CipherAlgorithmIdentifier {
    /// Identifier with a pending IV. RC2 gets the default 64 effective key
    /// bits; use [`new_rc2_cbc`](Self::new_rc2_cbc) for other key sizes.
    pub fn new(suite: CipherSuite) -> Self {
        Self {
            suite,
            rc2_effective_key_bits: RC2_DEFAULT_EFFECTIVE_KEY_BITS,
            iv: None,
        }
    }

    /// RC2-CBC identifier with the given effective key bits and a pending
    /// IV. Key bits outside the RFC 2268 version table (40, 64, 128, or any
    /// value of 256 and above) are rejected here, not at encode time.
    pub fn new_rc2_cbc(effective_key_bits: u32) -> Result<Self, CipherError> {
        match effective_key_bits {
            40 | 64 | 128 => {}
            bits if bits >= 256 => {}
            bits => return Err(CipherError::UnsupportedRc2KeyBits { bits }),
        }

        Ok(Self {
            suite: CipherSuite::Rc2Cbc,
            rc2_effective_key_bits: effective_key_bits,
            iv: None,
        })
    }

    pub fn suite(&self) -> CipherSuite {
        self.suite
    }

    pub fn block_size(&self) -> usize {
        self.suite.block_size()
    }

    pub fn key_size(&self) -> usize {
        match self.suite {
            CipherSuite::Aes128Cbc => 16,
            CipherSuite::Aes192Cbc => 24,
            CipherSuite::Aes256Cbc => 32,
            CipherSuite::DesCbc => 8,
            CipherSuite::DesEde3Cbc => 24,
            CipherSuite::Rc2Cbc => (self.rc2_effective_key_bits as usize + 7) / 8,
        }
    }

    /// RC2 only; other suites have no effective-key-bits parameter.
    pub fn effective_key_bits(&self) -> Option<u32> {
        match self.suite {
            CipherSuite::Rc2Cbc => Some(self.rc2_effective_key_bits),
            _ => None,
        }
    }

    pub fn initialization_vector(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    /// Completed copy with the given IV. The length must match the suite's
    /// block size; mismatches are rejected at this point.
    pub fn with_initialization_vector(self, iv: Vec<u8>) -> Result<Self, CipherError> {
        if iv.len() != self.suite.block_size() {
            return Err(CipherError::InvalidIvLength {
                expected: self.suite.block_size(),
                actual: iv.len(),
            });
        }

        Ok(Self { iv: Some(iv), ..self })
    }

    /// Encode into an `AlgorithmIdentifier`. Fails while the IV is pending.
    pub fn to_algorithm_identifier(&self) -> Result<AlgorithmIdentifier, CipherError> {
        let iv = self.iv.clone().ok_or(CipherError::MissingInitializationVector)?;

        let identifier = match self.suite {
            CipherSuite::Aes128Cbc => AlgorithmIdentifier::new_aes128_cbc(iv)?,
            CipherSuite::Aes192Cbc => AlgorithmIdentifier::new_aes192_cbc(iv)?,
            CipherSuite::Aes256Cbc => AlgorithmIdentifier::new_aes256_cbc(iv)?,
            CipherSuite::DesCbc => AlgorithmIdentifier::new_des_cbc(iv)?,
            CipherSuite::DesEde3Cbc => AlgorithmIdentifier::new_des_ede3_cbc(iv)?,
            CipherSuite::Rc2Cbc => AlgorithmIdentifier::new_rc2_cbc(self.rc2_effective_key_bits, iv)?,
        };

        Ok(identifier)
    }

    /// Recover the cipher view of a decoded algorithm identifier.
    pub fn from_algorithm_identifier(identifier: &AlgorithmIdentifier) -> Result<Self, CipherError> {
        let suite = CipherSuite::from_oid(identifier.oid()).ok_or_else(|| CipherError::UnsupportedCipher {
            oid: identifier.oid().into(),
        })?;

        match identifier.parameters() {
            AlgorithmIdentifierParameters::Iv(iv) => Ok(Self {
                suite,
                rc2_effective_key_bits: RC2_DEFAULT_EFFECTIVE_KEY_BITS,
                iv: Some(iv.0.clone()),
            }),
            AlgorithmIdentifierParameters::Rc2(params) => Ok(Self {
                suite,
                rc2_effective_key_bits: params.effective_key_bits(),
                iv: Some(params.iv().to_vec()),
            }),
            _ => Err(CipherError::MissingParameters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const IV8: [u8; 8] = *b"12345678";

    #[rstest]
    #[case(CipherSuite::Aes128Cbc, 16, 16)]
    #[case(CipherSuite::Aes192Cbc, 16, 24)]
    #[case(CipherSuite::Aes256Cbc, 16, 32)]
    #[case(CipherSuite::DesCbc, 8, 8)]
    #[case(CipherSuite::DesEde3Cbc, 8, 24)]
    #[case(CipherSuite::Rc2Cbc, 8, 8)]
    fn block_and_key_sizes(#[case] suite: CipherSuite, #[case] block: usize, #[case] key: usize) {
        let cipher = CipherAlgorithmIdentifier::new(suite);
        assert_eq!(cipher.block_size(), block);
        assert_eq!(cipher.key_size(), key);
    }

    #[test]
    fn aes_identifier_round_trip() {
        let cipher = CipherAlgorithmIdentifier::new(CipherSuite::Aes128Cbc)
            .with_initialization_vector(vec![0xA5; 16])
            .expect("iv");

        let identifier = cipher.to_algorithm_identifier().expect("identifier");
        assert_eq!(
            identifier,
            AlgorithmIdentifier::new_aes128_cbc(vec![0xA5; 16]).expect("identifier")
        );

        let recovered = CipherAlgorithmIdentifier::from_algorithm_identifier(&identifier).expect("cipher");
        assert_eq!(recovered, cipher);
    }

    #[test]
    fn pending_iv_does_not_encode() {
        let cipher = CipherAlgorithmIdentifier::new(CipherSuite::Aes256Cbc);
        assert_eq!(
            cipher.to_algorithm_identifier().unwrap_err(),
            CipherError::MissingInitializationVector
        );
    }

    #[test]
    fn iv_of_wrong_length_is_rejected_when_set() {
        let err = CipherAlgorithmIdentifier::new(CipherSuite::Aes128Cbc)
            .with_initialization_vector(vec![0xA5; 4])
            .unwrap_err();
        assert_eq!(err, CipherError::InvalidIvLength { expected: 16, actual: 4 });
    }

    #[test]
    fn rc2_key_bits_are_validated_at_construction() {
        assert!(CipherAlgorithmIdentifier::new_rc2_cbc(40).is_ok());
        assert!(CipherAlgorithmIdentifier::new_rc2_cbc(512).is_ok());
        assert_eq!(
            CipherAlgorithmIdentifier::new_rc2_cbc(56).unwrap_err(),
            CipherError::UnsupportedRc2KeyBits { bits: 56 }
        );
    }

    #[test]
    fn rc2_bare_iv_encoding_implies_64_bits() {
        // RFC 2268 short form: parameters are a bare octet-string IV
        let encoded = [
            48, 20, 6, 8, 42, 134, 72, 134, 247, 13, 3, 2, 4, 8, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38,
        ];
        let identifier: AlgorithmIdentifier = picky_asn1_der::from_bytes(&encoded).expect("identifier");
        let cipher = CipherAlgorithmIdentifier::from_algorithm_identifier(&identifier).expect("cipher");
        assert_eq!(cipher.effective_key_bits(), Some(64));
        assert_eq!(cipher.initialization_vector(), Some(IV8.as_slice()));
        assert_eq!(cipher.key_size(), 8);
    }

    #[test]
    fn rc2_large_key_round_trip() {
        let cipher = CipherAlgorithmIdentifier::new_rc2_cbc(512)
            .expect("rc2")
            .with_initialization_vector(IV8.to_vec())
            .expect("iv");
        let identifier = cipher.to_algorithm_identifier().expect("identifier");
        let recovered = CipherAlgorithmIdentifier::from_algorithm_identifier(&identifier).expect("cipher");
        assert_eq!(recovered.effective_key_bits(), Some(512));
        assert_eq!(recovered.key_size(), 64);
    }

    #[test]
    fn non_cipher_identifier_is_rejected() {
        let identifier = AlgorithmIdentifier::new_sha256_with_rsa_encryption();
        assert!(matches!(
            CipherAlgorithmIdentifier::from_algorithm_identifier(&identifier),
            Err(CipherError::UnsupportedCipher { .. })
        ));
    }
}
