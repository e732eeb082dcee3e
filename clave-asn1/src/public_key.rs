use picky_asn1::wrapper::IntegerAsn1;
use serde::{Deserialize, Serialize};

/// [PKCS #1 RSAPublicKey](https://tools.ietf.org/html/rfc8017#appendix-A.1.1)
///
/// ```not_rust
/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER   -- e
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub modulus: IntegerAsn1,
    pub public_exponent: IntegerAsn1,
}

impl RsaPublicKey {
    pub fn new(modulus: IntegerAsn1, public_exponent: IntegerAsn1) -> Self {
        Self {
            modulus,
            public_exponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsa_public_key() {
        let expected = [0x30, 0x08, 0x02, 0x01, 0x55, 0x02, 0x03, 0x01, 0x00, 0x01];
        let key = RsaPublicKey::new(
            vec![0x55].into(),
            IntegerAsn1::from_bytes_be_unsigned(vec![0x01, 0x00, 0x01]),
        );
        check_serde!(key: RsaPublicKey in expected);
    }
}
