use clave_asn1::{oids, AlgorithmIdentifier};
use oid::ObjectIdentifier;
use std::fmt;

/// Curve25519/Curve448 key algorithms defined by RFC 8410.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdAlgorithm {
    /// Curve25519-based EdDSA
    Ed25519,
    /// Curve25519-based Diffie-Hellman
    X25519,
    /// Curve448-based EdDSA
    Ed448,
    /// Curve448-based Diffie-Hellman
    X448,
}

impl EdAlgorithm {
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        match Into::<String>::into(oid).as_str() {
            oids::ED25519 => Some(Self::Ed25519),
            oids::X25519 => Some(Self::X25519),
            oids::ED448 => Some(Self::Ed448),
            oids::X448 => Some(Self::X448),
            _ => None,
        }
    }

    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Self::Ed25519 => oids::ed25519(),
            Self::X25519 => oids::x25519(),
            Self::Ed448 => oids::ed448(),
            Self::X448 => oids::x448(),
        }
    }

    /// Raw key size in octets (RFC 7748 / RFC 8032).
    pub fn key_size(self) -> usize {
        match self {
            Self::Ed25519 | Self::X25519 => 32,
            Self::Ed448 => 57,
            Self::X448 => 56,
        }
    }
}

impl From<EdAlgorithm> for AlgorithmIdentifier {
    fn from(algorithm: EdAlgorithm) -> Self {
        match algorithm {
            EdAlgorithm::Ed25519 => AlgorithmIdentifier::new_ed25519(),
            EdAlgorithm::X25519 => AlgorithmIdentifier::new_x25519(),
            EdAlgorithm::Ed448 => AlgorithmIdentifier::new_ed448(),
            EdAlgorithm::X448 => AlgorithmIdentifier::new_x448(),
        }
    }
}

impl fmt::Display for EdAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::X25519 => write!(f, "X25519"),
            Self::Ed448 => write!(f, "Ed448"),
            Self::X448 => write!(f, "X448"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EdAlgorithm::Ed25519, "Ed25519", 32)]
    #[case(EdAlgorithm::X25519, "X25519", 32)]
    #[case(EdAlgorithm::Ed448, "Ed448", 57)]
    #[case(EdAlgorithm::X448, "X448", 56)]
    fn oid_round_trip_and_geometry(#[case] algorithm: EdAlgorithm, #[case] name: &str, #[case] key_size: usize) {
        assert_eq!(EdAlgorithm::from_oid(&algorithm.oid()), Some(algorithm));
        assert_eq!(algorithm.to_string(), name);
        assert_eq!(algorithm.key_size(), key_size);
        assert!(AlgorithmIdentifier::from(algorithm).is_a(algorithm.oid()));
    }

    #[test]
    fn unrelated_oid_is_not_an_ed_algorithm() {
        assert_eq!(EdAlgorithm::from_oid(&oids::rsa_encryption()), None);
    }
}
