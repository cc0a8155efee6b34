//! Bit packing with a self-delimiting padding marker.
//!
//! A payload of `n` bits is prefixed with `p - 1` zero bits and a single one
//! bit, where `p = 8 - n % 8` (so `p` is in `1..=8`). The result is a whole
//! number of bytes, written most-significant bit first. Unpacking drops
//! everything up to and including the first one bit of the first byte.
//!
//! ```text
//! payload  1 0 1            (n = 3, p = 5)
//! packed   0 0 0 0 1 1 0 1  -> 0x0D
//! ```

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use bitvec::prelude::*;

use crate::error::{Error, Result};

/// Pack a bit sequence (elements 0 or 1) into bytes behind a padding marker.
///
/// # Errors
/// Returns `Error::InvalidBit` for the first element that is not 0 or 1;
/// nothing is produced in that case.
pub fn pack(bits: &[u8]) -> Result<Vec<u8>> {
    if let Some(index) = bits.iter().position(|&b| b > 1) {
        return Err(Error::InvalidBit {
            index,
            value: bits[index] as u32,
        });
    }

    let padding = 8 - bits.len() % 8;
    let mut packed: BitVec<u8, Msb0> = BitVec::with_capacity(bits.len() + padding);
    packed.resize(padding - 1, false);
    packed.push(true);
    packed.extend(bits.iter().map(|&b| b == 1));
    debug_assert_eq!(packed.len() % 8, 0);
    Ok(packed.into_vec())
}

/// Recover the payload bits from packed bytes.
///
/// Unlike a lenient reader that would hand back an empty or shifted payload,
/// empty input and a zero first byte are treated as corrupt.
///
/// # Errors
/// Returns `Error::MissingPaddingMarker` if `bytes` is empty or its first
/// byte is zero.
pub fn unpack(bytes: &[u8]) -> Result<Vec<u8>> {
    let view = bytes.view_bits::<Msb0>();
    let marker = match view.first_one() {
        Some(i) if i < 8 => i,
        _ => return Err(Error::MissingPaddingMarker),
    };
    Ok(view[marker + 1..].iter().by_vals().map(u8::from).collect())
}

/// Pack `bits` and write them to `writer`. Returns the number of bytes written.
pub fn write_packed<W: Write>(writer: &mut W, bits: &[u8]) -> Result<usize> {
    let bytes = pack(bits)?;
    writer.write_all(&bytes)?;
    Ok(bytes.len())
}

/// Read all of `reader` and unpack it.
pub fn read_packed<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    unpack(&bytes)
}

/// Pack `bits` into the file at `path`, creating or truncating it.
///
/// The bits are validated before the file is opened, so a format error
/// leaves the destination untouched.
pub fn write_bit_string(path: impl AsRef<Path>, bits: &[u8]) -> Result<usize> {
    let bytes = pack(bits)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(bytes.len())
}

/// Read and unpack the file at `path`.
pub fn read_bit_string(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    read_packed(&mut file)
}

/// Parse a string of '0' and '1' characters into bits.
///
/// # Errors
/// Returns `Error::InvalidBit` with the character code of the first other character.
pub fn parse_bits(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .enumerate()
        .map(|(index, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(Error::InvalidBit {
                index,
                value: other as u32,
            }),
        })
        .collect()
}

/// Render bits as a string of '0' and '1'.
pub fn format_bits(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn marker_fills_the_first_byte() {
        let bits = parse_bits("101").unwrap();
        assert_eq!(pack(&bits).unwrap(), vec![0b0000_1101]);
    }

    #[test]
    fn whole_byte_payload_gets_a_full_marker_byte() {
        let bits = parse_bits("11110000").unwrap();
        assert_eq!(pack(&bits).unwrap(), vec![0b0000_0001, 0b1111_0000]);
        assert_eq!(unpack(&[0b0000_0001, 0b1111_0000]).unwrap(), bits);
    }

    #[test]
    fn seven_bit_payload_uses_marker_only() {
        let bits = parse_bits("0000000").unwrap();
        assert_eq!(pack(&bits).unwrap(), vec![0b1000_0000]);
        assert_eq!(unpack(&[0b1000_0000]).unwrap(), bits);
    }

    #[test]
    fn empty_payload_is_a_single_marker_byte() {
        assert_eq!(pack(&[]).unwrap(), vec![0b0000_0001]);
        assert!(unpack(&[0b0000_0001]).unwrap().is_empty());
    }

    #[test]
    fn pack_rejects_non_binary_values() {
        assert!(matches!(
            pack(&[0, 1, 7, 1]),
            Err(Error::InvalidBit { index: 2, value: 7 })
        ));
    }

    #[test]
    fn unpack_requires_a_marker() {
        assert!(matches!(unpack(&[]), Err(Error::MissingPaddingMarker)));
        assert!(matches!(
            unpack(&[0x00, 0xFF]),
            Err(Error::MissingPaddingMarker)
        ));
    }

    #[test]
    fn unpack_rejects_zero_first_byte_even_with_later_ones() {
        assert!(matches!(
            unpack(&[0x00, 0xAA]),
            Err(Error::MissingPaddingMarker)
        ));
        assert_eq!(unpack(&[0x01, 0xAA]).unwrap(), parse_bits("10101010").unwrap());
    }

    #[test]
    fn parse_and_format_bits() {
        assert_eq!(parse_bits("0110").unwrap(), vec![0, 1, 1, 0]);
        assert_eq!(format_bits(&[1, 0, 0, 1]), "1001");
        assert!(matches!(
            parse_bits("01x"),
            Err(Error::InvalidBit { index: 2, value: 0x78 })
        ));
    }

    #[test]
    fn write_does_not_touch_destination_on_bad_bits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        assert!(write_bit_string(&path, &[0, 3]).is_err());
        assert!(!path.exists());

        assert_eq!(write_bit_string(&path, &[1, 0, 1]).unwrap(), 1);
        assert_eq!(read_bit_string(&path).unwrap(), vec![1, 0, 1]);
    }

    proptest! {
        #[test]
        fn prop_pack_unpack_roundtrip(bits in prop::collection::vec(0u8..2, 1..200)) {
            let packed = pack(&bits).unwrap();
            prop_assert_eq!(packed.len(), bits.len() / 8 + 1);
            prop_assert_eq!(unpack(&packed).unwrap(), bits);
        }

        #[test]
        fn prop_write_read_in_memory(bits in prop::collection::vec(0u8..2, 0..64)) {
            let mut buf = Vec::new();
            let n = write_packed(&mut buf, &bits).unwrap();
            prop_assert_eq!(n, buf.len());
            prop_assert_eq!(read_packed(&mut buf.as_slice()).unwrap(), bits);
        }
    }
}
