use picky_asn1::wrapper::IntegerAsn1;
use serde::{Deserialize, Serialize};

/// [RFC 3279 ECDSA signature value](https://tools.ietf.org/html/rfc3279#section-2.2.3)
///
/// ```not_rust
/// Ecdsa-Sig-Value  ::=  SEQUENCE  {
///     r     INTEGER,
///     s     INTEGER  }
/// ```
///
/// This is the structure nested inside the signature BIT STRING of
/// ECDSA-signed material.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EcdsaSignatureValue {
    pub r: IntegerAsn1,
    pub s: IntegerAsn1,
}

impl EcdsaSignatureValue {
    pub fn new(r: IntegerAsn1, s: IntegerAsn1) -> Self {
        Self { r, s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecdsa_signature_value() {
        let expected = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02];
        let signature = EcdsaSignatureValue::new(vec![1].into(), vec![2].into());
        check_serde!(signature: EcdsaSignatureValue in expected);
    }

    #[test]
    fn ecdsa_signature_value_preserves_high_bit_integers() {
        let expected = [0x30, 0x08, 0x02, 0x03, 0x00, 0x8F, 0x01, 0x02, 0x01, 0x42];
        let signature = EcdsaSignatureValue::new(
            IntegerAsn1::from_bytes_be_unsigned(vec![0x8F, 0x01]),
            IntegerAsn1::from_bytes_be_unsigned(vec![0x42]),
        );
        check_serde!(signature: EcdsaSignatureValue in expected);
    }
}
