use crate::{AlgorithmIdentifier, Attribute};
use picky_asn1::bit_string::BitString;
use picky_asn1::wrapper::{
    Asn1SetOf, BitStringAsn1, ImplicitContextTag0, ImplicitContextTag1, OctetStringAsn1, Optional,
};
use serde::{de, Serialize};
use std::fmt;

/// Version marker for the PKCS#8 v1 (`PrivateKeyInfo`) encoding.
pub const PRIVATE_KEY_INFO_VERSION_1: u8 = 0;
/// Version marker for the RFC 5958 v2 (`OneAsymmetricKey`) encoding.
pub const PRIVATE_KEY_INFO_VERSION_2: u8 = 1;

/// [RFC 5958 OneAsymmetricKey](https://tools.ietf.org/html/rfc5958#section-2),
/// superseding [PKCS #8 PrivateKeyInfo](https://tools.ietf.org/html/rfc5208#section-5).
///
/// ```not_rust
/// OneAsymmetricKey ::= SEQUENCE {
///     version                   Version,
///     privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
///     privateKey                PrivateKey,
///     attributes            [0] Attributes OPTIONAL,
///     ...,
///     [[2: publicKey        [1] PublicKey OPTIONAL ]],
///     ...
///   }
///
///   Version ::= INTEGER { v1(0), v2(1) } (v1, ..., v2)
///
///   PrivateKey ::= OCTET STRING
///
///   PublicKey ::= BIT STRING
/// ```
///
/// The private key octets are opaque at this level: their interpretation
/// depends on `private_key_algorithm` and happens when a concrete key is
/// requested. Versions other than v1 and v2 are rejected on decode.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PrivateKeyInfo {
    pub version: u8,
    pub private_key_algorithm: AlgorithmIdentifier,
    pub private_key: OctetStringAsn1,
    pub attributes: Optional<Option<ImplicitContextTag0<Asn1SetOf<Attribute>>>>,
    pub public_key: Optional<Option<ImplicitContextTag1<BitStringAsn1>>>,
}

impl PrivateKeyInfo {
    pub fn new(private_key_algorithm: AlgorithmIdentifier, private_key: OctetStringAsn1) -> Self {
        Self {
            version: PRIVATE_KEY_INFO_VERSION_1,
            private_key_algorithm,
            private_key,
            attributes: Optional(None),
            public_key: Optional(None),
        }
    }

    /// Copy with the given attribute set attached.
    pub fn with_attributes(self, attributes: Asn1SetOf<Attribute>) -> Self {
        Self {
            attributes: Optional(Some(ImplicitContextTag0(attributes))),
            ..self
        }
    }

    /// Copy with an explicit public key. The version is raised to v2, as
    /// RFC 5958 requires whenever `publicKey` is present.
    pub fn with_public_key(self, public_key: BitString) -> Self {
        Self {
            version: PRIVATE_KEY_INFO_VERSION_2,
            public_key: Optional(Some(ImplicitContextTag1(public_key.into()))),
            ..self
        }
    }

    pub fn attributes(&self) -> Option<&Asn1SetOf<Attribute>> {
        self.attributes.0.as_ref().map(|tagged| &tagged.0)
    }

    pub fn public_key_bit_string(&self) -> Option<&BitString> {
        self.public_key.0.as_ref().map(|tagged| &tagged.0 .0)
    }

    pub fn private_key_data(&self) -> &[u8] {
        &self.private_key.0
    }
}

impl<'de> de::Deserialize<'de> for PrivateKeyInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = PrivateKeyInfo;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid DER-encoded PrivateKeyInfo (pkcs8)")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let version = seq_next_element!(seq, PrivateKeyInfo, "version");
                if version != PRIVATE_KEY_INFO_VERSION_1 && version != PRIVATE_KEY_INFO_VERSION_2 {
                    return Err(serde_invalid_value!(
                        PrivateKeyInfo,
                        "unsupported version (valid version numbers: 0, 1)",
                        "a supported PrivateKeyInfo"
                    ));
                }

                let private_key_algorithm: AlgorithmIdentifier =
                    seq_next_element!(seq, PrivateKeyInfo, "private key algorithm");
                let private_key: OctetStringAsn1 = seq_next_element!(seq, PrivateKeyInfo, "private key octets");
                let attributes = seq.next_element()?.unwrap_or_default();
                let public_key = seq.next_element()?.unwrap_or_default();

                Ok(PrivateKeyInfo {
                    version,
                    private_key_algorithm,
                    private_key,
                    attributes,
                    public_key,
                })
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{oids, RsaPrivateKey};
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;
    use picky_asn1_der::Asn1RawDer;

    #[test]
    fn pkcs_8_rsa_private_key() {
        let encoded = BASE64
            .decode(
                "MIIBVgIBADANBgkqhkiG9w0BAQEFAASCAUAwggE8AgEAAkEAq7BFUpkGp3+LQmlQ\
                 Yx2eqzDV+xeG8kx/sQFV18S5JhzGeIJNA72wSeukEPojtqUyX2J0CciPBh7eqclQ\
                 2zpAswIDAQABAkAgisq4+zRdrzkwH1ITV1vpytnkO/NiHcnePQiOW0VUybPyHoGM\
                 /jf75C5xET7ZQpBe5kx5VHsPZj0CBb3b+wSRAiEA2mPWCBytosIU/ODRfq6EiV04\
                 lt6waE7I2uSPqIC20LcCIQDJQYIHQII+3YaPqyhGgqMexuuuGx+lDKD6/Fu/JwPb\
                 5QIhAKthiYcYKlL9h8bjDsQhZDUACPasjzdsDEdq8inDyLOFAiEAmCr/tZwA3qeA\
                 ZoBzI10DGPIuoKXBd3nk/eBxPkaxlEECIQCNymjsoI7GldtujVnr1qT+3yedLfHK\
                 srDVjIT3LsvTqw==",
            )
            .expect("invalid base64");

        let pki: PrivateKeyInfo = picky_asn1_der::from_bytes(&encoded).expect("pkcs8 rsa key");

        assert_eq!(pki.version, PRIVATE_KEY_INFO_VERSION_1);
        assert!(pki.private_key_algorithm.is_a(oids::rsa_encryption()));
        assert!(pki.attributes().is_none());
        assert!(pki.public_key_bit_string().is_none());

        let rsa: RsaPrivateKey = picky_asn1_der::from_bytes(pki.private_key_data()).expect("nested rsa key");
        assert_eq!(rsa.modulus.as_unsigned_bytes_be(), &encoded[36..100]);
        assert_eq!(rsa.public_exponent.as_unsigned_bytes_be(), &encoded[102..105]);

        // the canonical rsaEncryption identifier drops the NULL parameter,
        // so re-encoding shrinks by two bytes but decodes back to the same value
        let reencoded = picky_asn1_der::to_vec(&pki).expect("pkcs8 rsa key");
        assert_eq!(reencoded.len(), encoded.len() - 2);
        let reparsed: PrivateKeyInfo = picky_asn1_der::from_bytes(&reencoded).expect("pkcs8 rsa key");
        assert_eq!(reparsed, pki);
    }

    #[test]
    fn rfc8410_v1_ed25519_key() {
        let encoded = BASE64
            .decode("MC4CAQAwBQYDK2VwBCIEINTuctv5E1hK1bbY8fdp+K06/nwoy/HU++CXqI9EdVhC")
            .expect("invalid base64");

        let pki = PrivateKeyInfo::new(
            AlgorithmIdentifier::new_ed25519(),
            OctetStringAsn1::from(encoded[14..48].to_vec()),
        );
        check_serde!(pki: PrivateKeyInfo in encoded);
    }

    #[test]
    fn rfc8410_v2_ed25519_key_with_attributes_and_public_key() {
        let encoded = BASE64
            .decode(
                "MHICAQEwBQYDK2VwBCIEINTuctv5E1hK1bbY8fdp+K06/nwoy/HU++CXqI9EdVhC\
                 oB8wHQYKKoZIhvcNAQkJFDEPDA1DdXJkbGUgQ2hhaW5zgSEAGb9ECWmEzf6FQbrB\
                 Z9w7lshQhqowtrbLDFw4rXAxZuE=",
            )
            .expect("invalid base64");

        let mut attribute_value = vec![0x0C, 0x0D];
        attribute_value.extend_from_slice(b"Curdle Chains");
        let attributes = Asn1SetOf::from(vec![Attribute::new(
            "1.2.840.113549.1.9.9.20".try_into().unwrap(),
            vec![Asn1RawDer(attribute_value)],
        )]);

        let pki = PrivateKeyInfo::new(
            AlgorithmIdentifier::new_ed25519(),
            OctetStringAsn1::from(encoded[14..48].to_vec()),
        )
        .with_attributes(attributes)
        .with_public_key(BitString::with_bytes(&encoded[84..116]));

        assert_eq!(pki.version, PRIVATE_KEY_INFO_VERSION_2);
        check_serde!(pki: PrivateKeyInfo in encoded);
    }

    #[test]
    fn unsupported_version_fails() {
        let mut encoded = BASE64
            .decode("MC4CAQAwBQYDK2VwBCIEINTuctv5E1hK1bbY8fdp+K06/nwoy/HU++CXqI9EdVhC")
            .expect("invalid base64");
        encoded[4] = 2;
        assert!(picky_asn1_der::from_bytes::<PrivateKeyInfo>(&encoded).is_err());
    }
}
