//! OIDs used by key and algorithm identifier structures

macro_rules! define_oid {
    ($uppercase:ident => $lowercase:ident => $str_value:literal) => {
        pub const $uppercase: &str = $str_value;

        pub fn $lowercase() -> oid::ObjectIdentifier {
            use std::convert::TryInto;
            use std::sync::OnceLock;

            static OID: OnceLock<oid::ObjectIdentifier> = OnceLock::new();
            OID.get_or_init(|| $uppercase.try_into().expect("hardcoded oid is well-formed"))
                .clone()
        }
    };
    ( $( $uppercase:ident => $lowercase:ident => $str_value:literal, )+ ) => {
        $( define_oid! { $uppercase => $lowercase => $str_value } )+
    };
}

define_oid! {
    // RSADSI (PKCS#1)
    RSA_ENCRYPTION => rsa_encryption => "1.2.840.113549.1.1.1",
    MD5_WITH_RSA_ENCRYPTION => md5_with_rsa_encryption => "1.2.840.113549.1.1.4",
    SHA1_WITH_RSA_ENCRYPTION => sha1_with_rsa_encryption => "1.2.840.113549.1.1.5",
    SHA256_WITH_RSA_ENCRYPTION => sha256_with_rsa_encryption => "1.2.840.113549.1.1.11",
    SHA384_WITH_RSA_ENCRYPTION => sha384_with_rsa_encryption => "1.2.840.113549.1.1.12",
    SHA512_WITH_RSA_ENCRYPTION => sha512_with_rsa_encryption => "1.2.840.113549.1.1.13",
    SHA224_WITH_RSA_ENCRYPTION => sha224_with_rsa_encryption => "1.2.840.113549.1.1.14",

    // RSADSI digest algorithms
    MD5 => md5 => "1.2.840.113549.2.5",
    HMAC_WITH_SHA1 => hmac_with_sha1 => "1.2.840.113549.2.7",
    HMAC_WITH_SHA224 => hmac_with_sha224 => "1.2.840.113549.2.8",
    HMAC_WITH_SHA256 => hmac_with_sha256 => "1.2.840.113549.2.9",
    HMAC_WITH_SHA384 => hmac_with_sha384 => "1.2.840.113549.2.10",
    HMAC_WITH_SHA512 => hmac_with_sha512 => "1.2.840.113549.2.11",

    // RSADSI encryption algorithms
    RC2_CBC => rc2_cbc => "1.2.840.113549.3.2",
    DES_EDE3_CBC => des_ede3_cbc => "1.2.840.113549.3.7",

    // ANSI-X962
    EC_PUBLIC_KEY => ec_public_key => "1.2.840.10045.2.1",
    SECP192R1 => secp192r1 => "1.2.840.10045.3.1.1",
    SECP256R1 => secp256r1 => "1.2.840.10045.3.1.7",
    ECDSA_WITH_SHA1 => ecdsa_with_sha1 => "1.2.840.10045.4.1",
    ECDSA_WITH_SHA224 => ecdsa_with_sha224 => "1.2.840.10045.4.3.1",
    ECDSA_WITH_SHA256 => ecdsa_with_sha256 => "1.2.840.10045.4.3.2",
    ECDSA_WITH_SHA384 => ecdsa_with_sha384 => "1.2.840.10045.4.3.3",
    ECDSA_WITH_SHA512 => ecdsa_with_sha512 => "1.2.840.10045.4.3.4",

    // Certicom Object Identifiers
    SECP384R1 => secp384r1 => "1.3.132.0.34",
    SECP521R1 => secp521r1 => "1.3.132.0.35",

    // RFC 8410
    X25519 => x25519 => "1.3.101.110",
    X448 => x448 => "1.3.101.111",
    ED25519 => ed25519 => "1.3.101.112",
    ED448 => ed448 => "1.3.101.113",

    // OIW
    DES_CBC => des_cbc => "1.3.14.3.2.7",
    SHA1 => sha1 => "1.3.14.3.2.26",

    // NIST hash algorithms
    SHA256 => sha256 => "2.16.840.1.101.3.4.2.1",
    SHA384 => sha384 => "2.16.840.1.101.3.4.2.2",
    SHA512 => sha512 => "2.16.840.1.101.3.4.2.3",
    SHA224 => sha224 => "2.16.840.1.101.3.4.2.4",

    // NIST aes-cbc
    AES128_CBC => aes128_cbc => "2.16.840.1.101.3.4.1.2",
    AES192_CBC => aes192_cbc => "2.16.840.1.101.3.4.1.22",
    AES256_CBC => aes256_cbc => "2.16.840.1.101.3.4.1.42",
}
