macro_rules! serde_invalid_value {
    ($typ:ident, $unexp:expr, $exp:expr) => {{
        serde::de::Error::invalid_value(
            serde::de::Unexpected::Other(concat!("[", stringify!($typ), "] ", $unexp)),
            &$exp,
        )
    }};
}

macro_rules! seq_next_element {
    ($seq:ident, $typ:ident, $missing_elem:literal) => {{
        $seq.next_element()?.ok_or_else(|| {
            serde_invalid_value!(
                $typ,
                concat!("missing ", $missing_elem),
                concat!("valid DER-encoded ", stringify!($typ))
            )
        })?
    }};
    ($seq:ident, $typ_hint:ty, $typ:ident, $missing_elem:literal) => {{
        $seq.next_element::<$typ_hint>()?.ok_or_else(|| {
            serde_invalid_value!(
                $typ,
                concat!("missing ", $missing_elem),
                concat!("valid DER-encoded ", stringify!($typ))
            )
        })?
    }};
}

#[cfg(test)]
macro_rules! check_serde {
    ($item:ident: $type:ident in $encoded:ident) => {
        let encoded = &$encoded[..];

        let serialized = picky_asn1_der::to_vec(&$item).expect(concat!("failed ", stringify!($item), " serialization"));
        pretty_assertions::assert_eq!(
            serialized,
            encoded,
            concat!("serialized ", stringify!($item), " doesn't match")
        );

        let deserialized: $type = picky_asn1_der::from_bytes(encoded).expect(concat!(
            "failed ",
            stringify!($item),
            " deserialization"
        ));
        pretty_assertions::assert_eq!(
            deserialized,
            $item,
            concat!("deserialized ", stringify!($item), " doesn't match")
        );
    };
}
