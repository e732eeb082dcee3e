use crate::EcParameters;
use oid::ObjectIdentifier;
use picky_asn1::bit_string::BitString;
use picky_asn1::wrapper::{
    BitStringAsn1, ExplicitContextTag0, ExplicitContextTag1, IntegerAsn1, OctetStringAsn1, Optional,
};
use serde::{de, Deserialize, Serialize};
use std::fmt;

/// [PKCS #1: RSA Cryptography Specifications Version 2.2](https://tools.ietf.org/html/rfc8017.html#appendix-A.1.2)
///
/// # Section A.1.2
///
/// An RSA private key should be represented with the ASN.1 type RSAPrivateKey:
///
/// ```not_rust
///      RSAPrivateKey ::= SEQUENCE {
///          version           Version,
///          modulus           INTEGER,  -- n
///          publicExponent    INTEGER,  -- e
///          privateExponent   INTEGER,  -- d
///          prime1            INTEGER,  -- p
///          prime2            INTEGER,  -- q
///          exponent1         INTEGER,  -- d mod (p-1)
///          exponent2         INTEGER,  -- d mod (q-1)
///          coefficient       INTEGER,  -- (inverse of q) mod p
///          otherPrimeInfos   OtherPrimeInfos OPTIONAL
///      }
/// ```
///
/// Multi-prime keys (version 1 with `otherPrimeInfos`) are not supported:
/// the version must encode 0.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub version: IntegerAsn1,
    pub modulus: IntegerAsn1,
    pub public_exponent: IntegerAsn1,
    pub private_exponent: IntegerAsn1,
    pub prime_1: IntegerAsn1,
    pub prime_2: IntegerAsn1,
    pub exponent_1: IntegerAsn1,
    pub exponent_2: IntegerAsn1,
    pub coefficient: IntegerAsn1,
}

impl RsaPrivateKey {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        modulus: IntegerAsn1,
        public_exponent: IntegerAsn1,
        private_exponent: IntegerAsn1,
        primes: (IntegerAsn1, IntegerAsn1),
        exponents: (IntegerAsn1, IntegerAsn1),
        coefficient: IntegerAsn1,
    ) -> Self {
        Self {
            version: vec![0].into(),
            modulus,
            public_exponent,
            private_exponent,
            prime_1: primes.0,
            prime_2: primes.1,
            exponent_1: exponents.0,
            exponent_2: exponents.1,
            coefficient,
        }
    }

    pub fn into_public_components(self) -> (IntegerAsn1, IntegerAsn1) {
        (self.modulus, self.public_exponent)
    }
}

impl<'de> de::Deserialize<'de> for RsaPrivateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = RsaPrivateKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid DER-encoded RSAPrivateKey")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let version: IntegerAsn1 = seq_next_element!(seq, RsaPrivateKey, "version");
                if version.as_unsigned_bytes_be() != [0] {
                    return Err(serde_invalid_value!(
                        RsaPrivateKey,
                        "unsupported version (valid version number: 0)",
                        "a supported RSAPrivateKey"
                    ));
                }

                Ok(RsaPrivateKey {
                    version,
                    modulus: seq_next_element!(seq, RsaPrivateKey, "modulus"),
                    public_exponent: seq_next_element!(seq, RsaPrivateKey, "public exponent"),
                    private_exponent: seq_next_element!(seq, RsaPrivateKey, "private exponent"),
                    prime_1: seq_next_element!(seq, RsaPrivateKey, "first prime factor"),
                    prime_2: seq_next_element!(seq, RsaPrivateKey, "second prime factor"),
                    exponent_1: seq_next_element!(seq, RsaPrivateKey, "first factor exponent"),
                    exponent_2: seq_next_element!(seq, RsaPrivateKey, "second factor exponent"),
                    coefficient: seq_next_element!(seq, RsaPrivateKey, "crt coefficient"),
                })
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}

/// [RFC 5915 Elliptic Curve Private Key Structure](https://tools.ietf.org/html/rfc5915#section-3)
///
/// ```not_rust
/// ECPrivateKey ::= SEQUENCE {
///     version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
///     privateKey     OCTET STRING,
///     parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
///     publicKey  [1] BIT STRING OPTIONAL }
/// ```
///
/// The private scalar is kept as the fixed-width octet string it is encoded
/// as, never as a bare integer: leading zero bytes are significant.
///
/// RFC 5915 asks for `parameters` to always be present, but OpenSSL strips
/// them when nesting this structure inside a PKCS#8 `PrivateKeyInfo`, and
/// `ring` omits them too. Both fields are therefore truly optional here and
/// absent fields are skipped on re-encode.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EcPrivateKey {
    pub version: IntegerAsn1,
    pub private_key: OctetStringAsn1,
    pub parameters: Optional<Option<ExplicitContextTag0<EcParameters>>>,
    pub public_key: Optional<Option<ExplicitContextTag1<BitStringAsn1>>>,
}

impl EcPrivateKey {
    pub fn new(private_key: Vec<u8>, curve: Option<ObjectIdentifier>, public_key: Option<BitString>) -> Self {
        Self {
            version: vec![1].into(),
            private_key: private_key.into(),
            parameters: Optional(curve.map(|oid| ExplicitContextTag0(EcParameters::from(oid)))),
            public_key: Optional(public_key.map(|bs| ExplicitContextTag1(bs.into()))),
        }
    }

    pub fn private_key_octets(&self) -> &[u8] {
        &self.private_key.0
    }

    pub fn parameters(&self) -> Option<&EcParameters> {
        self.parameters.0.as_ref().map(|tagged| &tagged.0)
    }

    /// The curve from the `parameters` field, when present and named.
    pub fn named_curve(&self) -> Option<&ObjectIdentifier> {
        self.parameters().and_then(EcParameters::named_curve)
    }

    /// Copy of this key with the `parameters` field replaced by the given
    /// named curve.
    pub fn with_named_curve(self, curve: ObjectIdentifier) -> Self {
        Self {
            parameters: Optional(Some(ExplicitContextTag0(EcParameters::from(curve)))),
            ..self
        }
    }

    pub fn public_key_bit_string(&self) -> Option<&BitString> {
        self.public_key.0.as_ref().map(|tagged| &tagged.0 .0)
    }
}

impl<'de> de::Deserialize<'de> for EcPrivateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = EcPrivateKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid DER-encoded ECPrivateKey")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let version: IntegerAsn1 = seq_next_element!(seq, EcPrivateKey, "version");
                if version.as_unsigned_bytes_be() != [1] {
                    return Err(serde_invalid_value!(
                        EcPrivateKey,
                        "unsupported version (valid version number: 1)",
                        "a supported ECPrivateKey"
                    ));
                }

                let private_key: OctetStringAsn1 = seq_next_element!(seq, EcPrivateKey, "private key octets");
                let parameters = seq.next_element()?.unwrap_or_default();
                let public_key = seq.next_element()?.unwrap_or_default();

                Ok(EcPrivateKey {
                    version,
                    private_key,
                    parameters,
                    public_key,
                })
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}

/// [RFC 8410 private key](https://tools.ietf.org/html/rfc8410#section-7)
///
/// ```not_rust
/// CurvePrivateKey ::= OCTET STRING
/// ```
///
/// The raw Curve25519/Curve448 secret wrapped into a nested octet string,
/// as carried by the `privateKey` field of `OneAsymmetricKey`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurvePrivateKey(pub OctetStringAsn1);

impl CurvePrivateKey {
    pub fn secret(&self) -> &[u8] {
        &self.0 .0
    }
}

impl From<Vec<u8>> for CurvePrivateKey {
    fn from(secret: Vec<u8>) -> Self {
        Self(secret.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oids;

    fn small_rsa_private_key() -> RsaPrivateKey {
        RsaPrivateKey::new(
            vec![0x55].into(),
            vec![0x03].into(),
            vec![0x07].into(),
            (vec![0x05].into(), vec![0x0B].into()),
            (vec![0x01].into(), vec![0x03].into()),
            vec![0x02].into(),
        )
    }

    #[test]
    fn rsa_private_key() {
        let expected = [
            0x30, 0x1B, 0x02, 0x01, 0x00, 0x02, 0x01, 0x55, 0x02, 0x01, 0x03, 0x02, 0x01, 0x07, 0x02, 0x01, 0x05,
            0x02, 0x01, 0x0B, 0x02, 0x01, 0x01, 0x02, 0x01, 0x03, 0x02, 0x01, 0x02,
        ];
        let key = small_rsa_private_key();
        check_serde!(key: RsaPrivateKey in expected);
    }

    #[test]
    fn rsa_private_key_invalid_version() {
        let encoded = [
            0x30, 0x1B, 0x02, 0x01, 0x01, 0x02, 0x01, 0x55, 0x02, 0x01, 0x03, 0x02, 0x01, 0x07, 0x02, 0x01, 0x05,
            0x02, 0x01, 0x0B, 0x02, 0x01, 0x01, 0x02, 0x01, 0x03, 0x02, 0x01, 0x02,
        ];
        assert!(picky_asn1_der::from_bytes::<RsaPrivateKey>(&encoded).is_err());
    }

    #[test]
    fn rsa_private_key_public_components() {
        let (modulus, public_exponent) = small_rsa_private_key().into_public_components();
        assert_eq!(modulus.as_unsigned_bytes_be(), [0x55]);
        assert_eq!(public_exponent.as_unsigned_bytes_be(), [0x03]);
    }

    #[test]
    fn ec_private_key() {
        let expected = [
            0x30, 0x1C, 0x02, 0x01, 0x01, 0x04, 0x03, 0x01, 0x02, 0x03, 0xA0, 0x0A, 0x06, 0x08, 0x2A, 0x86, 0x48,
            0xCE, 0x3D, 0x03, 0x01, 0x07, 0xA1, 0x06, 0x03, 0x04, 0x00, 0x04, 0x01, 0x02,
        ];
        let key = EcPrivateKey::new(
            vec![1, 2, 3],
            Some(oids::secp256r1()),
            Some(BitString::with_bytes([0x04, 0x01, 0x02].as_slice())),
        );
        check_serde!(key: EcPrivateKey in expected);
    }

    #[test]
    fn ec_private_key_without_parameters() {
        // ring strips the curve parameters when producing PKCS#8
        let encoded = [
            0x30, 0x10, 0x02, 0x01, 0x01, 0x04, 0x03, 0x01, 0x02, 0x03, 0xA1, 0x06, 0x03, 0x04, 0x00, 0x04, 0x01,
            0x02,
        ];
        let key: EcPrivateKey = picky_asn1_der::from_bytes(&encoded).expect("ec private key");
        assert!(key.named_curve().is_none());
        assert!(key.public_key_bit_string().is_some());

        let reencoded = picky_asn1_der::to_vec(&key).expect("ec private key");
        assert_eq!(reencoded, encoded);
    }

    #[test]
    fn ec_private_key_without_public_key() {
        let encoded = [
            0x30, 0x14, 0x02, 0x01, 0x01, 0x04, 0x03, 0x01, 0x02, 0x03, 0xA0, 0x0A, 0x06, 0x08, 0x2A, 0x86, 0x48,
            0xCE, 0x3D, 0x03, 0x01, 0x07,
        ];
        let key: EcPrivateKey = picky_asn1_der::from_bytes(&encoded).expect("ec private key");
        assert_eq!(key.named_curve(), Some(&oids::secp256r1()));
        assert!(key.public_key_bit_string().is_none());
    }

    #[test]
    fn ec_private_key_invalid_version() {
        let encoded = [0x30, 0x08, 0x02, 0x01, 0x00, 0x04, 0x03, 0x01, 0x02, 0x03];
        assert!(picky_asn1_der::from_bytes::<EcPrivateKey>(&encoded).is_err());
    }

    #[test]
    fn ec_private_key_named_curve_backfill() {
        let key = EcPrivateKey::new(vec![1, 2, 3], None, None);
        assert!(key.named_curve().is_none());
        let key = key.with_named_curve(oids::secp384r1());
        assert_eq!(key.named_curve(), Some(&oids::secp384r1()));
    }

    #[test]
    fn curve_private_key() {
        let expected = [0x04, 0x03, 0x0A, 0x0B, 0x0C];
        let key = CurvePrivateKey::from(vec![0x0A, 0x0B, 0x0C]);
        check_serde!(key: CurvePrivateKey in expected);
    }
}
