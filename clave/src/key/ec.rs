use crate::key::KeyError;
use num_bigint_dig::BigUint;

const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_COMPRESSED_EVEN: u8 = 0x02;
const TAG_COMPRESSED_ODD: u8 = 0x03;

/// Fixed-width unsigned big-endian encoding of an integer.
///
/// EC scalars and point coordinates keep their leading zero octets, so this
/// is deliberately not the ASN.1 INTEGER encoding: the width is imposed by
/// the caller and the value is left-padded to it.
pub fn integer_to_fixed_octets(value: &BigUint, width: usize) -> Result<Vec<u8>, KeyError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > width {
        return Err(KeyError::Ec {
            context: format!("integer does not fit into {width} octets"),
        });
    }

    let mut octets = vec![0; width - bytes.len()];
    octets.extend_from_slice(&bytes);
    Ok(octets)
}

/// Inverse of [`integer_to_fixed_octets`]; leading zero octets are simply
/// ignored by the integer interpretation.
pub fn octets_to_integer(octets: &[u8]) -> BigUint {
    BigUint::from_bytes_be(octets)
}

/// SEC1 elliptic curve point encoding.
///
/// Uncompressed points are split into their coordinates at construction.
/// Compressed points are carried verbatim: recovering coordinates from them
/// requires curve arithmetic, which is out of scope here, so
/// [`coordinates`](Self::coordinates) reports an error for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcPoint {
    Uncompressed { x: Vec<u8>, y: Vec<u8> },
    Compressed(Vec<u8>),
}

impl EcPoint {
    pub fn from_bytes(data: &[u8]) -> Result<Self, KeyError> {
        match data.first() {
            Some(&TAG_UNCOMPRESSED) => {
                let coordinates = &data[1..];
                if coordinates.is_empty() || coordinates.len() % 2 != 0 {
                    return Err(KeyError::Ec {
                        context: "uncompressed EC point with uneven coordinate octets".to_owned(),
                    });
                }
                let (x, y) = coordinates.split_at(coordinates.len() / 2);
                Ok(Self::Uncompressed {
                    x: x.to_vec(),
                    y: y.to_vec(),
                })
            }
            Some(&TAG_COMPRESSED_EVEN) | Some(&TAG_COMPRESSED_ODD) => Ok(Self::Compressed(data.to_vec())),
            Some(tag) => Err(KeyError::Ec {
                context: format!("invalid EC point tag: {tag:#04x}"),
            }),
            None => Err(KeyError::Ec {
                context: "empty EC point".to_owned(),
            }),
        }
    }

    /// Uncompressed point from raw coordinates. The field width is derived
    /// from whichever coordinate is binary-larger and both are padded to it.
    pub fn from_coordinates(x: &BigUint, y: &BigUint) -> Self {
        let width = usize::max((x.bits() + 7) / 8, (y.bits() + 7) / 8).max(1);

        // both coordinates fit by construction
        let x = integer_to_fixed_octets(x, width).unwrap_or_default();
        let y = integer_to_fixed_octets(y, width).unwrap_or_default();

        Self::Uncompressed { x, y }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Uncompressed { x, y } => {
                let mut bytes = Vec::with_capacity(1 + x.len() + y.len());
                bytes.push(TAG_UNCOMPRESSED);
                bytes.extend_from_slice(x);
                bytes.extend_from_slice(y);
                bytes
            }
            Self::Compressed(data) => data.clone(),
        }
    }

    /// Coordinates of the point. Compressed points cannot be expanded
    /// without curve arithmetic and are reported as an error.
    pub fn coordinates(&self) -> Result<(BigUint, BigUint), KeyError> {
        match self {
            Self::Uncompressed { x, y } => Ok((octets_to_integer(x), octets_to_integer(y))),
            Self::Compressed(_) => Err(KeyError::Ec {
                context: "cannot recover coordinates of a compressed EC point without curve arithmetic".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0u32, 1, vec![0x00])]
    #[case(0u32, 2, vec![0x00, 0x00])]
    #[case(1u32, 1, vec![0x01])]
    #[case(1u32, 2, vec![0x00, 0x01])]
    #[case(1u32, 8, vec![0, 0, 0, 0, 0, 0, 0, 1])]
    #[case(256u32, 2, vec![0x01, 0x00])]
    #[case(4294967295u32, 4, vec![0xFF, 0xFF, 0xFF, 0xFF])]
    fn fixed_octets_conversion(#[case] value: u32, #[case] width: usize, #[case] expected: Vec<u8>) {
        let octets = integer_to_fixed_octets(&BigUint::from(value), width).expect("conversion");
        assert_eq!(octets, expected);
        assert_eq!(octets_to_integer(&octets), BigUint::from(value));
    }

    #[test]
    fn fixed_octets_value_too_large() {
        assert!(integer_to_fixed_octets(&BigUint::from(256u32), 1).is_err());
    }

    #[test]
    fn uncompressed_point_from_bytes() {
        let point = EcPoint::from_bytes(&[0x04, 0x01, 0x02, 0x03, 0x04]).expect("point");
        assert_eq!(
            point,
            EcPoint::Uncompressed {
                x: vec![0x01, 0x02],
                y: vec![0x03, 0x04],
            }
        );
        assert_eq!(point.to_bytes(), [0x04, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn point_from_coordinates_pads_to_larger_coordinate() {
        let point = EcPoint::from_coordinates(&BigUint::from(0x0102u32), &BigUint::from(0x03u32));
        assert_eq!(
            point,
            EcPoint::Uncompressed {
                x: vec![0x01, 0x02],
                y: vec![0x00, 0x03],
            }
        );
    }

    #[test]
    fn point_coordinates_round_trip() {
        let x = BigUint::from(0xDEADBEEFu32);
        let y = BigUint::from(0x42u32);
        let point = EcPoint::from_coordinates(&x, &y);
        let (rx, ry) = point.coordinates().expect("coordinates");
        assert_eq!((rx, ry), (x, y));
    }

    #[test]
    fn compressed_point_is_kept_verbatim() {
        let point = EcPoint::from_bytes(&[0x03, 0x01, 0x02]).expect("point");
        assert_eq!(point.to_bytes(), [0x03, 0x01, 0x02]);
        assert!(matches!(point.coordinates(), Err(KeyError::Ec { .. })));
    }

    #[test]
    fn invalid_point_tag() {
        assert!(matches!(EcPoint::from_bytes(&[0x00]), Err(KeyError::Ec { .. })));
        assert!(matches!(EcPoint::from_bytes(&[]), Err(KeyError::Ec { .. })));
    }

    #[test]
    fn uneven_uncompressed_point() {
        assert!(matches!(
            EcPoint::from_bytes(&[0x04, 0x01, 0x02, 0x03]),
            Err(KeyError::Ec { .. })
        ));
    }
}
