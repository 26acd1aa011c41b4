//! Variable-length integer primitives shared by both formats.
//!
//! Values are split into 5-bit chunks, least significant first. Every chunk
//! except the last carries the continuation flag `0x20`, and the resulting
//! 6-bit value indexes a 64-character alphabet.

use crate::core::constants::{
    CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, MAX_PRECISION, POWERS_OF_TEN,
};
use crate::error::PolylineError;

/// Appends the varint form of `value` to `out`.
pub fn encode_unsigned(mut value: u64, alphabet: &[u8; 64], out: &mut String) {
    while value > CHUNK_MASK {
        let chunk = (value & CHUNK_MASK) | CONTINUATION_BIT;
        out.push(alphabet[chunk as usize] as char);
        value >>= CHUNK_BITS;
    }
    out.push(alphabet[value as usize] as char);
}

/// Appends the zigzag-mapped varint form of `value` to `out`.
pub fn encode_signed(value: i64, alphabet: &[u8; 64], out: &mut String) {
    encode_unsigned(zigzag(value), alphabet, out);
}

/// Decodes one unsigned varint starting at `start`.
///
/// Returns the value and the index of the first unconsumed byte.
pub fn decode_unsigned(
    encoded: &str,
    start: usize,
    table: &[i8; 128],
) -> Result<(u64, usize), PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (index, &byte) in encoded.as_bytes().iter().enumerate().skip(start) {
        let value = table
            .get(byte as usize)
            .copied()
            .filter(|v| *v >= 0)
            .ok_or_else(|| invalid_character(encoded, index))? as u64;

        let chunk = value & CHUNK_MASK;
        if shift >= u64::BITS || (shift > 0 && chunk >> (u64::BITS - shift) != 0) {
            return Err(PolylineError::IntegerOverflow);
        }
        result |= chunk << shift;
        shift += CHUNK_BITS;

        if value & CONTINUATION_BIT == 0 {
            return Ok((result, index + 1));
        }
    }

    Err(PolylineError::ExtraContinueBit)
}

// Every byte before `index` was accepted as ASCII, so `index` is a char boundary
fn invalid_character(encoded: &str, index: usize) -> PolylineError {
    let c = encoded
        .get(index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    PolylineError::InvalidEncodedCharacter(c)
}

/// Decodes one zigzag-mapped varint starting at `start`.
pub fn decode_signed(
    encoded: &str,
    start: usize,
    table: &[i8; 128],
) -> Result<(i64, usize), PolylineError> {
    let (value, next) = decode_unsigned(encoded, start, table)?;
    Ok((unzigzag(value), next))
}

/// Maps a signed delta onto an unsigned value, small magnitudes staying small.
pub fn zigzag(value: i64) -> u64 {
    let shifted = value << 1;
    if value < 0 {
        !shifted as u64
    } else {
        shifted as u64
    }
}

/// Inverse of [`zigzag`].
pub fn unzigzag(value: u64) -> i64 {
    let value = if value & 1 == 1 { !value } else { value };
    (value as i64) >> 1
}

/// Round half away from zero, independent of the platform's rounding mode.
pub fn round_half_away(value: f64) -> f64 {
    value.signum() * (value.abs() + 0.5).floor()
}

/// Returns `10^precision`, rejecting precisions outside 0-15.
pub fn precision_factor(precision: u8) -> Result<f64, PolylineError> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::InvalidPrecisionValue(precision));
    }
    Ok(POWERS_OF_TEN[precision as usize])
}

/// Scales `value` by `factor` and rounds it to an integer.
pub fn scale(value: f64, factor: f64) -> i64 {
    round_half_away(value * factor) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{
        FLEXIBLE_ALPHABET, FLEXIBLE_DECODING_TABLE, POLYLINE_ALPHABET, POLYLINE_DECODING_TABLE,
    };

    fn encoded_unsigned(value: u64) -> String {
        let mut out = String::new();
        encode_unsigned(value, FLEXIBLE_ALPHABET, &mut out);
        out
    }

    #[test]
    fn test_encode_unsigned_single_chunk() {
        assert_eq!(encoded_unsigned(0), "A");
        assert_eq!(encoded_unsigned(1), "B");
        assert_eq!(encoded_unsigned(31), "f");
    }

    #[test]
    fn test_encode_unsigned_multi_chunk() {
        // 37 = 0b1_00101: low chunk 5 with continuation, then 1
        assert_eq!(encoded_unsigned(37), "lB");
        assert_eq!(encoded_unsigned(32), "gB");
    }

    #[test]
    fn test_decode_unsigned_reports_next_index() -> Result<(), PolylineError> {
        let (value, next) = decode_unsigned("BlBA", 1, &FLEXIBLE_DECODING_TABLE)?;
        assert_eq!(value, 37);
        assert_eq!(next, 3);
        Ok(())
    }

    #[test]
    fn test_decode_unsigned_large_value() -> Result<(), PolylineError> {
        let value = 1_234_567_890_123u64;
        let encoded = encoded_unsigned(value);
        let (decoded, next) = decode_unsigned(&encoded, 0, &FLEXIBLE_DECODING_TABLE)?;
        assert_eq!(decoded, value);
        assert_eq!(next, encoded.len());
        Ok(())
    }

    #[test]
    fn test_decode_unsigned_truncated() {
        // 'g' is 32: an empty payload with the continuation flag set
        let result = decode_unsigned("g", 0, &FLEXIBLE_DECODING_TABLE);
        assert_eq!(result, Err(PolylineError::ExtraContinueBit));

        let result = decode_unsigned("", 0, &FLEXIBLE_DECODING_TABLE);
        assert_eq!(result, Err(PolylineError::ExtraContinueBit));
    }

    #[test]
    fn test_decode_unsigned_invalid_character() {
        let result = decode_unsigned("A=", 1, &FLEXIBLE_DECODING_TABLE);
        assert_eq!(result, Err(PolylineError::InvalidEncodedCharacter('=')));

        let result = decode_unsigned("é", 0, &POLYLINE_DECODING_TABLE);
        assert_eq!(result, Err(PolylineError::InvalidEncodedCharacter('é')));

        let result = decode_unsigned("_p~iFé", 5, &POLYLINE_DECODING_TABLE);
        assert_eq!(result, Err(PolylineError::InvalidEncodedCharacter('é')));
    }

    #[test]
    fn test_decode_unsigned_overflow() {
        let encoded = "_".repeat(14) + "B";
        let result = decode_unsigned(&encoded, 0, &FLEXIBLE_DECODING_TABLE);
        assert_eq!(result, Err(PolylineError::IntegerOverflow));
    }

    #[test]
    fn test_zigzag_mapping() {
        assert_eq!(zigzag(0), 0);
        assert_eq!(zigzag(-1), 1);
        assert_eq!(zigzag(1), 2);
        assert_eq!(zigzag(-2), 3);
        assert_eq!(zigzag(2), 4);

        for value in [0, 1, -1, 17, -17, 1 << 40, -(1 << 40), (1 << 62) - 1, -(1 << 62)] {
            assert_eq!(unzigzag(zigzag(value)), value);
        }
    }

    #[test]
    fn test_signed_varint_polyline_alphabet() -> Result<(), PolylineError> {
        // Latitude 38.5 at precision 5 from the reference algorithm description
        let mut out = String::new();
        encode_signed(3_850_000, POLYLINE_ALPHABET, &mut out);
        assert_eq!(out, "_p~iF");

        let (value, next) = decode_signed(&out, 0, &POLYLINE_DECODING_TABLE)?;
        assert_eq!(value, 3_850_000);
        assert_eq!(next, 5);
        Ok(())
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(2.5), 3.0);
        assert_eq!(round_half_away(-2.5), -3.0);
        assert_eq!(round_half_away(2.4999), 2.0);
        assert_eq!(round_half_away(-0.5), -1.0);
        assert_eq!(round_half_away(0.0), 0.0);
    }

    #[test]
    fn test_precision_factor() -> Result<(), PolylineError> {
        assert_eq!(precision_factor(0)?, 1.0);
        assert_eq!(precision_factor(5)?, 100_000.0);
        assert_eq!(
            precision_factor(16),
            Err(PolylineError::InvalidPrecisionValue(16))
        );
        Ok(())
    }
}
