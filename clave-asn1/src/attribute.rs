use oid::ObjectIdentifier;
use picky_asn1::wrapper::{Asn1SetOf, ObjectIdentifierAsn1};
use picky_asn1_der::Asn1RawDer;
use serde::{Deserialize, Serialize};

/// [X.501 Attribute](https://tools.ietf.org/html/rfc5958#section-2)
///
/// ```not_rust
/// Attribute ::= SEQUENCE {
///     type    OBJECT IDENTIFIER,
///     values  SET OF AttributeValue }
/// ```
///
/// Attribute values are carried verbatim: interpreting them is up to the
/// caller. This is enough for the PKCS#8 `attributes` field, which this
/// crate never needs to look into.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Attribute {
    pub ty: ObjectIdentifierAsn1,
    pub values: Asn1SetOf<Asn1RawDer>,
}

impl Attribute {
    pub fn new(ty: ObjectIdentifier, values: Vec<Asn1RawDer>) -> Self {
        Self {
            ty: ty.into(),
            values: values.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_with_opaque_value() {
        // friendlyName-style attribute carrying one UTF8String value
        let expected = [
            0x30, 0x1D, 0x06, 0x0A, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x09, 0x09, 0x14, 0x31, 0x0F, 0x0C,
            0x0D, b'C', b'u', b'r', b'd', b'l', b'e', b' ', b'C', b'h', b'a', b'i', b'n', b's',
        ];

        let mut value = vec![0x0C, 0x0D];
        value.extend_from_slice(b"Curdle Chains");
        let attribute = Attribute::new(
            "1.2.840.113549.1.9.9.20".try_into().unwrap(),
            vec![Asn1RawDer(value)],
        );

        check_serde!(attribute: Attribute in expected);
    }
}
