use crate::oids;
use oid::ObjectIdentifier;
use picky_asn1::tag::{Tag, TagPeeker};
use picky_asn1::wrapper::{IntegerAsn1, ObjectIdentifierAsn1, OctetStringAsn1};
use picky_asn1_der::Asn1RawDer;
use serde::{de, ser};
use std::fmt;

const AES_BLOCK_SIZE: usize = 16;
const DES_BLOCK_SIZE: usize = 8;

/// Parameter values rejected when building an algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmParameterError {
    /// IV length doesn't match the cipher block size
    InvalidIvLength { expected: usize, actual: usize },
    /// RC2 effective key bits without an RFC 2268 version encoding
    UnsupportedRc2EffectiveKeyBits(u32),
}

impl fmt::Display for AlgorithmParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIvLength { expected, actual } => {
                write!(f, "invalid IV length (expected: {expected}, actual: {actual})")
            }
            Self::UnsupportedRc2EffectiveKeyBits(bits) => {
                write!(f, "unsupported RC2 effective key bits: {bits}")
            }
        }
    }
}

impl std::error::Error for AlgorithmParameterError {}

/// [X.509 AlgorithmIdentifier](https://tools.ietf.org/html/rfc5280#section-4.1.1.2)
///
/// ```not_rust
/// AlgorithmIdentifier  ::=  SEQUENCE  {
///      algorithm               OBJECT IDENTIFIER,
///      parameters              ANY DEFINED BY algorithm OPTIONAL  }
/// ```
///
/// Identifiers with an algorithm from the built-in table decode into typed
/// parameters and enforce the parameter shape their RFC mandates. Any other
/// algorithm decodes into [`AlgorithmIdentifierParameters::Unknown`], which
/// keeps the parameter element verbatim so that re-encoding reproduces the
/// input bytes.
#[derive(Debug, PartialEq, Clone)]
pub struct AlgorithmIdentifier {
    algorithm: ObjectIdentifierAsn1,
    parameters: AlgorithmIdentifierParameters,
}

impl AlgorithmIdentifier {
    pub fn oid(&self) -> &ObjectIdentifier {
        &self.algorithm.0
    }

    pub fn parameters(&self) -> &AlgorithmIdentifierParameters {
        &self.parameters
    }

    pub fn is_a(&self, algorithm: ObjectIdentifier) -> bool {
        algorithm.eq(&self.algorithm.0)
    }

    pub fn is_one_of(&self, algorithms: impl IntoIterator<Item = ObjectIdentifier>) -> bool {
        algorithms.into_iter().any(|oid| self.is_a(oid))
    }

    /// Whether this is a PKCS#1 v1.5 RSA signature algorithm.
    pub fn is_rsa_signature(&self) -> bool {
        self.is_one_of([
            oids::md5_with_rsa_encryption(),
            oids::sha1_with_rsa_encryption(),
            oids::sha224_with_rsa_encryption(),
            oids::sha256_with_rsa_encryption(),
            oids::sha384_with_rsa_encryption(),
            oids::sha512_with_rsa_encryption(),
        ])
    }

    /// Whether this is an ECDSA signature algorithm.
    pub fn is_ecdsa_signature(&self) -> bool {
        self.is_one_of([
            oids::ecdsa_with_sha1(),
            oids::ecdsa_with_sha224(),
            oids::ecdsa_with_sha256(),
            oids::ecdsa_with_sha384(),
            oids::ecdsa_with_sha512(),
        ])
    }

    /// Whether this is an HMAC algorithm.
    pub fn is_hmac(&self) -> bool {
        self.is_one_of([
            oids::hmac_with_sha1(),
            oids::hmac_with_sha224(),
            oids::hmac_with_sha256(),
            oids::hmac_with_sha384(),
            oids::hmac_with_sha512(),
        ])
    }

    /// Whether keys identified by `key_algorithm` can be used with this
    /// signature algorithm. Always false for non-signature algorithms.
    pub fn supports_key_algorithm(&self, key_algorithm: &AlgorithmIdentifier) -> bool {
        if self.is_rsa_signature() {
            key_algorithm.is_a(oids::rsa_encryption())
        } else if self.is_ecdsa_signature() {
            key_algorithm.is_a(oids::ec_public_key())
        } else {
            false
        }
    }

    pub fn new_rsa_encryption() -> Self {
        Self {
            algorithm: oids::rsa_encryption().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_md5_with_rsa_encryption() -> Self {
        Self {
            algorithm: oids::md5_with_rsa_encryption().into(),
            parameters: AlgorithmIdentifierParameters::Null,
        }
    }

    pub fn new_sha1_with_rsa_encryption() -> Self {
        Self {
            algorithm: oids::sha1_with_rsa_encryption().into(),
            parameters: AlgorithmIdentifierParameters::Null,
        }
    }

    pub fn new_sha224_with_rsa_encryption() -> Self {
        Self {
            algorithm: oids::sha224_with_rsa_encryption().into(),
            parameters: AlgorithmIdentifierParameters::Null,
        }
    }

    pub fn new_sha256_with_rsa_encryption() -> Self {
        Self {
            algorithm: oids::sha256_with_rsa_encryption().into(),
            parameters: AlgorithmIdentifierParameters::Null,
        }
    }

    pub fn new_sha384_with_rsa_encryption() -> Self {
        Self {
            algorithm: oids::sha384_with_rsa_encryption().into(),
            parameters: AlgorithmIdentifierParameters::Null,
        }
    }

    pub fn new_sha512_with_rsa_encryption() -> Self {
        Self {
            algorithm: oids::sha512_with_rsa_encryption().into(),
            parameters: AlgorithmIdentifierParameters::Null,
        }
    }

    pub fn new_ecdsa_with_sha1() -> Self {
        Self {
            algorithm: oids::ecdsa_with_sha1().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_ecdsa_with_sha224() -> Self {
        Self {
            algorithm: oids::ecdsa_with_sha224().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_ecdsa_with_sha256() -> Self {
        Self {
            algorithm: oids::ecdsa_with_sha256().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_ecdsa_with_sha384() -> Self {
        Self {
            algorithm: oids::ecdsa_with_sha384().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_ecdsa_with_sha512() -> Self {
        Self {
            algorithm: oids::ecdsa_with_sha512().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_elliptic_curve<P: Into<EcParameters>>(ec_params: P) -> Self {
        Self {
            algorithm: oids::ec_public_key().into(),
            parameters: AlgorithmIdentifierParameters::Ec(ec_params.into()),
        }
    }

    pub fn new_ed25519() -> Self {
        Self {
            algorithm: oids::ed25519().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_x25519() -> Self {
        Self {
            algorithm: oids::x25519().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_ed448() -> Self {
        Self {
            algorithm: oids::ed448().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_x448() -> Self {
        Self {
            algorithm: oids::x448().into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_md5() -> Self {
        Self {
            algorithm: oids::md5().into(),
            parameters: AlgorithmIdentifierParameters::Null,
        }
    }

    pub fn new_sha(variant: ShaVariant) -> Self {
        Self {
            algorithm: variant.into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_hmac_with_sha(variant: ShaVariant) -> Self {
        let algorithm = match variant {
            ShaVariant::Sha1 => oids::hmac_with_sha1(),
            ShaVariant::Sha224 => oids::hmac_with_sha224(),
            ShaVariant::Sha256 => oids::hmac_with_sha256(),
            ShaVariant::Sha384 => oids::hmac_with_sha384(),
            ShaVariant::Sha512 => oids::hmac_with_sha512(),
        };
        Self {
            algorithm: algorithm.into(),
            parameters: AlgorithmIdentifierParameters::None,
        }
    }

    pub fn new_aes128_cbc(iv: Vec<u8>) -> Result<Self, AlgorithmParameterError> {
        Self::new_cbc_cipher(oids::aes128_cbc(), AES_BLOCK_SIZE, iv)
    }

    pub fn new_aes192_cbc(iv: Vec<u8>) -> Result<Self, AlgorithmParameterError> {
        Self::new_cbc_cipher(oids::aes192_cbc(), AES_BLOCK_SIZE, iv)
    }

    pub fn new_aes256_cbc(iv: Vec<u8>) -> Result<Self, AlgorithmParameterError> {
        Self::new_cbc_cipher(oids::aes256_cbc(), AES_BLOCK_SIZE, iv)
    }

    pub fn new_des_cbc(iv: Vec<u8>) -> Result<Self, AlgorithmParameterError> {
        Self::new_cbc_cipher(oids::des_cbc(), DES_BLOCK_SIZE, iv)
    }

    pub fn new_des_ede3_cbc(iv: Vec<u8>) -> Result<Self, AlgorithmParameterError> {
        Self::new_cbc_cipher(oids::des_ede3_cbc(), DES_BLOCK_SIZE, iv)
    }

    pub fn new_rc2_cbc(effective_key_bits: u32, iv: Vec<u8>) -> Result<Self, AlgorithmParameterError> {
        Ok(Self {
            algorithm: oids::rc2_cbc().into(),
            parameters: AlgorithmIdentifierParameters::Rc2(Rc2CbcParameters::new(effective_key_bits, iv)?),
        })
    }

    fn new_cbc_cipher(
        algorithm: ObjectIdentifier,
        block_size: usize,
        iv: Vec<u8>,
    ) -> Result<Self, AlgorithmParameterError> {
        if iv.len() != block_size {
            return Err(AlgorithmParameterError::InvalidIvLength {
                expected: block_size,
                actual: iv.len(),
            });
        }

        Ok(Self {
            algorithm: algorithm.into(),
            parameters: AlgorithmIdentifierParameters::Iv(iv.into()),
        })
    }

    /// Identifier with an algorithm outside the built-in table. Parameters
    /// are kept as a raw DER element (or absent) and round-trip verbatim.
    pub fn new_unknown(algorithm: ObjectIdentifier, parameters: Option<Asn1RawDer>) -> Self {
        Self {
            algorithm: algorithm.into(),
            parameters: AlgorithmIdentifierParameters::Unknown(parameters),
        }
    }

    /// Identifier with an externally-resolved algorithm. This is the escape
    /// hatch for algorithm identifier providers that recognize OIDs outside
    /// the built-in table: the plain DER decode of such an identifier still
    /// yields the generic form.
    pub fn new_with_parameters(algorithm: ObjectIdentifier, parameters: AlgorithmIdentifierParameters) -> Self {
        Self {
            algorithm: algorithm.into(),
            parameters,
        }
    }
}

impl ser::Serialize for AlgorithmIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<<S as ser::Serializer>::Ok, <S as ser::Serializer>::Error>
    where
        S: ser::Serializer,
    {
        use ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.algorithm)?;
        match &self.parameters {
            AlgorithmIdentifierParameters::None => {}
            AlgorithmIdentifierParameters::Null => {
                seq.serialize_element(&())?;
            }
            AlgorithmIdentifierParameters::Ec(ec_params) => {
                seq.serialize_element(ec_params)?;
            }
            AlgorithmIdentifierParameters::Iv(iv) => {
                seq.serialize_element(iv)?;
            }
            AlgorithmIdentifierParameters::Rc2(rc2_params) => {
                seq.serialize_element(rc2_params)?;
            }
            AlgorithmIdentifierParameters::Unknown(raw) => {
                if let Some(raw) = raw {
                    seq.serialize_element(raw)?;
                }
            }
        }
        seq.end()
    }
}

impl<'de> de::Deserialize<'de> for AlgorithmIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = AlgorithmIdentifier;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid DER-encoded algorithm identifier")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let oid: ObjectIdentifierAsn1 = seq_next_element!(seq, AlgorithmIdentifier, "algorithm oid");

                let parameters = match Into::<String>::into(&oid.0).as_str() {
                    // NULL parameters tolerated on decode, canonical form is absent.
                    oids::RSA_ENCRYPTION => {
                        let _: Option<()> = seq.next_element()?;
                        AlgorithmIdentifierParameters::None
                    }
                    // NULL parameters canonical, absence tolerated on decode.
                    oids::MD5_WITH_RSA_ENCRYPTION
                    | oids::SHA1_WITH_RSA_ENCRYPTION
                    | oids::SHA224_WITH_RSA_ENCRYPTION
                    | oids::SHA256_WITH_RSA_ENCRYPTION
                    | oids::SHA384_WITH_RSA_ENCRYPTION
                    | oids::SHA512_WITH_RSA_ENCRYPTION
                    | oids::MD5 => {
                        let _: Option<()> = seq.next_element()?;
                        AlgorithmIdentifierParameters::Null
                    }
                    // RFC 5758: parameters must be omitted.
                    oids::ECDSA_WITH_SHA1
                    | oids::ECDSA_WITH_SHA224
                    | oids::ECDSA_WITH_SHA256
                    | oids::ECDSA_WITH_SHA384
                    | oids::ECDSA_WITH_SHA512 => {
                        let trailing: Option<Asn1RawDer> = seq.next_element()?;
                        if trailing.is_some() {
                            return Err(serde_invalid_value!(
                                AlgorithmIdentifier,
                                "ECDSA signature identifier with parameters",
                                "no parameters for this algorithm"
                            ));
                        }
                        AlgorithmIdentifierParameters::None
                    }
                    oids::EC_PUBLIC_KEY => AlgorithmIdentifierParameters::Ec(seq_next_element!(
                        seq,
                        AlgorithmIdentifier,
                        "elliptic curve parameters"
                    )),
                    // RFC 8410: parameters must be absent.
                    oids::ED25519 | oids::X25519 | oids::ED448 | oids::X448 => {
                        let trailing: Option<Asn1RawDer> = seq.next_element()?;
                        if trailing.is_some() {
                            return Err(serde_invalid_value!(
                                AlgorithmIdentifier,
                                "curve25519/curve448 identifier with parameters",
                                "no parameters for this algorithm"
                            ));
                        }
                        AlgorithmIdentifierParameters::None
                    }
                    // RFC 8018: no parameters at all.
                    oids::HMAC_WITH_SHA1 => {
                        let trailing: Option<Asn1RawDer> = seq.next_element()?;
                        if trailing.is_some() {
                            return Err(serde_invalid_value!(
                                AlgorithmIdentifier,
                                "hmacWithSHA1 identifier with parameters",
                                "no parameters for this algorithm"
                            ));
                        }
                        AlgorithmIdentifierParameters::None
                    }
                    // RFC 4231: absent canonically, NULL tolerated.
                    oids::HMAC_WITH_SHA224
                    | oids::HMAC_WITH_SHA256
                    | oids::HMAC_WITH_SHA384
                    | oids::HMAC_WITH_SHA512 => {
                        let _: Option<()> = seq.next_element()?;
                        AlgorithmIdentifierParameters::None
                    }
                    // RFC 5754: absent canonically, NULL tolerated.
                    oids::SHA1 | oids::SHA224 | oids::SHA256 | oids::SHA384 | oids::SHA512 => {
                        let _: Option<()> = seq.next_element()?;
                        AlgorithmIdentifierParameters::None
                    }
                    oids::AES128_CBC | oids::AES192_CBC | oids::AES256_CBC => {
                        let iv: OctetStringAsn1 =
                            seq_next_element!(seq, AlgorithmIdentifier, "AES-CBC initialization vector");
                        if iv.0.len() != AES_BLOCK_SIZE {
                            return Err(serde_invalid_value!(
                                AlgorithmIdentifier,
                                "AES-CBC initialization vector with an invalid length",
                                "a 16-byte initialization vector"
                            ));
                        }
                        AlgorithmIdentifierParameters::Iv(iv)
                    }
                    oids::DES_CBC | oids::DES_EDE3_CBC => {
                        let iv: OctetStringAsn1 =
                            seq_next_element!(seq, AlgorithmIdentifier, "DES-CBC initialization vector");
                        if iv.0.len() != DES_BLOCK_SIZE {
                            return Err(serde_invalid_value!(
                                AlgorithmIdentifier,
                                "DES-CBC initialization vector with an invalid length",
                                "an 8-byte initialization vector"
                            ));
                        }
                        AlgorithmIdentifierParameters::Iv(iv)
                    }
                    oids::RC2_CBC => {
                        let tag_peeker: TagPeeker = seq_next_element!(seq, AlgorithmIdentifier, "RC2-CBC parameters");
                        match tag_peeker.next_tag {
                            // RFC 2268 legacy short form: bare IV, 64 effective key bits.
                            Tag::OCTET_STRING => {
                                let iv: OctetStringAsn1 =
                                    seq_next_element!(seq, AlgorithmIdentifier, "RC2-CBC initialization vector");
                                let params = Rc2CbcParameters::new(64, iv.0).map_err(|_| {
                                    serde_invalid_value!(
                                        AlgorithmIdentifier,
                                        "RC2-CBC initialization vector with an invalid length",
                                        "an 8-byte initialization vector"
                                    )
                                })?;
                                AlgorithmIdentifierParameters::Rc2(params)
                            }
                            Tag::SEQUENCE => AlgorithmIdentifierParameters::Rc2(seq_next_element!(
                                seq,
                                AlgorithmIdentifier,
                                "RC2-CBC parameters"
                            )),
                            _ => {
                                return Err(serde_invalid_value!(
                                    AlgorithmIdentifier,
                                    "unsupported RC2-CBC parameter shape",
                                    "an octet string or a RC2-CBC parameter sequence"
                                ));
                            }
                        }
                    }
                    _ => {
                        let raw: Option<Asn1RawDer> = seq.next_element()?;
                        AlgorithmIdentifierParameters::Unknown(raw)
                    }
                };

                Ok(AlgorithmIdentifier {
                    algorithm: oid,
                    parameters,
                })
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum AlgorithmIdentifierParameters {
    None,
    Null,
    Ec(EcParameters),
    /// CBC initialization vector (AES, DES, DES-EDE3 and the RC2 short form).
    Iv(OctetStringAsn1),
    Rc2(Rc2CbcParameters),
    /// Verbatim parameter element of an algorithm outside the built-in table.
    Unknown(Option<Asn1RawDer>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum EcParameters {
    NamedCurve(ObjectIdentifierAsn1),
    ImplicitCurve,
    //SpecifiedCurve(SpecifiedECDomain) // see [X9.62]
}

impl EcParameters {
    pub fn named_curve(&self) -> Option<&ObjectIdentifier> {
        match self {
            Self::NamedCurve(oid) => Some(&oid.0),
            Self::ImplicitCurve => None,
        }
    }
}

impl From<ObjectIdentifierAsn1> for EcParameters {
    fn from(oid: ObjectIdentifierAsn1) -> Self {
        Self::NamedCurve(oid)
    }
}

impl From<ObjectIdentifier> for EcParameters {
    fn from(oid: ObjectIdentifier) -> Self {
        Self::NamedCurve(oid.into())
    }
}

impl From<()> for EcParameters {
    fn from(_: ()) -> Self {
        Self::ImplicitCurve
    }
}

impl ser::Serialize for EcParameters {
    fn serialize<S>(&self, serializer: S) -> Result<<S as ser::Serializer>::Ok, <S as ser::Serializer>::Error>
    where
        S: ser::Serializer,
    {
        match &self {
            EcParameters::NamedCurve(oid) => oid.serialize(serializer),
            EcParameters::ImplicitCurve => ().serialize(serializer),
        }
    }
}

impl<'de> de::Deserialize<'de> for EcParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = EcParameters;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("valid DER-encoded elliptic curve parameters")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let tag_peeker: TagPeeker = seq_next_element!(seq, EcParameters, "choice tag");
                match tag_peeker.next_tag {
                    Tag::OID => Ok(EcParameters::NamedCurve(seq_next_element!(
                        seq,
                        EcParameters,
                        "named curve oid"
                    ))),
                    Tag::NULL => {
                        seq.next_element::<()>()?;
                        Ok(EcParameters::ImplicitCurve)
                    }
                    _ => Err(serde_invalid_value!(
                        EcParameters,
                        "unsupported or unknown elliptic curve parameter",
                        "a supported elliptic curve parameter"
                    )),
                }
            }
        }

        deserializer.deserialize_enum("EcParameters", &["NamedCurve", "ImplicitCurve"], Visitor)
    }
}

/// [RC2-CBC parameters](https://tools.ietf.org/html/rfc8018#appendix-B.2.3)
///
/// ```not_rust
/// RC2-CBC-Parameter ::= SEQUENCE {
///     rc2ParameterVersion INTEGER OPTIONAL,
///     iv OCTET STRING (SIZE(8)) }
/// ```
///
/// The version integer maps to the effective key bits through the RFC 2268
/// table; values of 256 and above encode the bit count itself. Decoded
/// values are normalized to the effective bit count.
#[derive(Debug, PartialEq, Clone)]
pub struct Rc2CbcParameters {
    effective_key_bits: u32,
    iv: OctetStringAsn1,
}

impl Rc2CbcParameters {
    pub fn new(effective_key_bits: u32, iv: Vec<u8>) -> Result<Self, AlgorithmParameterError> {
        if rc2_effective_key_bits_to_version(effective_key_bits).is_none() {
            return Err(AlgorithmParameterError::UnsupportedRc2EffectiveKeyBits(
                effective_key_bits,
            ));
        }

        if iv.len() != DES_BLOCK_SIZE {
            return Err(AlgorithmParameterError::InvalidIvLength {
                expected: DES_BLOCK_SIZE,
                actual: iv.len(),
            });
        }

        Ok(Self {
            effective_key_bits,
            iv: iv.into(),
        })
    }

    pub fn effective_key_bits(&self) -> u32 {
        self.effective_key_bits
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv.0
    }
}

fn rc2_effective_key_bits_to_version(bits: u32) -> Option<u32> {
    match bits {
        40 => Some(160),
        64 => Some(120),
        128 => Some(58),
        bits if bits >= 256 => Some(bits),
        _ => None,
    }
}

fn rc2_version_to_effective_key_bits(version: u32) -> Option<u32> {
    match version {
        160 => Some(40),
        120 => Some(64),
        58 => Some(128),
        version if version >= 256 => Some(version),
        _ => None,
    }
}

fn u32_to_be_bytes_minimal(value: u32) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(3);
    bytes[start..].to_vec()
}

impl ser::Serialize for Rc2CbcParameters {
    fn serialize<S>(&self, serializer: S) -> Result<<S as ser::Serializer>::Ok, <S as ser::Serializer>::Error>
    where
        S: ser::Serializer,
    {
        use ser::SerializeSeq;

        let version = rc2_effective_key_bits_to_version(self.effective_key_bits)
            .ok_or_else(|| ser::Error::custom("RC2 effective key bits without a version encoding"))?;

        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&IntegerAsn1::from_bytes_be_unsigned(u32_to_be_bytes_minimal(version)))?;
        seq.serialize_element(&self.iv)?;
        seq.end()
    }
}

impl<'de> de::Deserialize<'de> for Rc2CbcParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Rc2CbcParameters;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("valid DER-encoded RC2-CBC parameters")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let version: IntegerAsn1 = seq_next_element!(seq, Rc2CbcParameters, "rc2 parameter version");
                let version_bytes = version.as_unsigned_bytes_be();
                if version_bytes.len() > 4 {
                    return Err(serde_invalid_value!(
                        Rc2CbcParameters,
                        "rc2 parameter version is too large",
                        "a small version integer"
                    ));
                }
                let version = version_bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b));

                let effective_key_bits = rc2_version_to_effective_key_bits(version).ok_or_else(|| {
                    serde_invalid_value!(
                        Rc2CbcParameters,
                        "rc2 parameter version outside the RFC 2268 table",
                        "a version from the RFC 2268 table"
                    )
                })?;

                let iv: OctetStringAsn1 = seq_next_element!(seq, Rc2CbcParameters, "initialization vector");
                if iv.0.len() != DES_BLOCK_SIZE {
                    return Err(serde_invalid_value!(
                        Rc2CbcParameters,
                        "initialization vector with an invalid length",
                        "an 8-byte initialization vector"
                    ));
                }

                Ok(Rc2CbcParameters {
                    effective_key_bits,
                    iv,
                })
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShaVariant {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl From<ShaVariant> for ObjectIdentifierAsn1 {
    fn from(variant: ShaVariant) -> Self {
        match variant {
            ShaVariant::Sha1 => oids::sha1().into(),
            ShaVariant::Sha224 => oids::sha224().into(),
            ShaVariant::Sha256 => oids::sha256().into(),
            ShaVariant::Sha384 => oids::sha384().into(),
            ShaVariant::Sha512 => oids::sha512().into(),
        }
    }
}

/// Structure-only view of an algorithm identifier: the OID plus the verbatim
/// parameter element, with no interpretation applied.
#[derive(Debug, PartialEq, Clone)]
pub struct RawAlgorithmIdentifier {
    algorithm: ObjectIdentifierAsn1,
    parameters: Option<Asn1RawDer>,
}

impl RawAlgorithmIdentifier {
    pub fn new(algorithm: ObjectIdentifier, parameters: Option<Asn1RawDer>) -> Self {
        Self {
            algorithm: algorithm.into(),
            parameters,
        }
    }

    pub fn oid(&self) -> &ObjectIdentifier {
        &self.algorithm.0
    }

    pub fn parameters(&self) -> Option<&Asn1RawDer> {
        self.parameters.as_ref()
    }

    pub fn into_parts(self) -> (ObjectIdentifier, Option<Asn1RawDer>) {
        (self.algorithm.0, self.parameters)
    }
}

impl ser::Serialize for RawAlgorithmIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<<S as ser::Serializer>::Ok, <S as ser::Serializer>::Error>
    where
        S: ser::Serializer,
    {
        use ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.algorithm)?;
        if let Some(parameters) = &self.parameters {
            seq.serialize_element(parameters)?;
        }
        seq.end()
    }
}

impl<'de> de::Deserialize<'de> for RawAlgorithmIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = RawAlgorithmIdentifier;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid DER-encoded algorithm identifier")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let algorithm: ObjectIdentifierAsn1 =
                    seq_next_element!(seq, RawAlgorithmIdentifier, "algorithm oid");
                let parameters: Option<Asn1RawDer> = seq.next_element()?;
                Ok(RawAlgorithmIdentifier { algorithm, parameters })
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}
