//! Integer Byte Conversion
//!
//! Converts malachite `Integer` values to and from big-endian byte strings,
//! both as fixed-width two's complement and in minimal form. Conversions go
//! through base-256 digits of the magnitude and run in linear time.
//!
//! ## Minimal form
//!
//! - Unsigned: big-endian magnitude without leading zero bytes. Zero is the
//!   empty string.
//! - Signed: shortest two's-complement string that keeps the sign. Zero is the
//!   empty string, `127` is `7F`, `128` is `00 80`, `-1` is `FF`, `-129` is
//!   `FF 7F`.
//!
//! A negative `v` is handled through `!v = -v - 1`, which is non-negative:
//! the two's-complement bytes of `v` are the inverted bytes of `!v`.

use entities_abi_types::{NumericalType, NumericalWidth};
use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::{Integer, Natural};

use crate::error::CodecError;

const BITS_PER_BYTE: u64 = 8;
const SIGN_BIT: u8 = 0x80;

/// Big-endian magnitude; zero is empty
fn magnitude_to_be_bytes(magnitude: &Natural) -> Vec<u8> {
    PowerOf2Digits::<u8>::to_power_of_2_digits_desc(magnitude, BITS_PER_BYTE)
}

fn be_bytes_to_magnitude<I>(bytes: I) -> Result<Natural, CodecError>
where
    I: Iterator<Item = u8>,
{
    <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(BITS_PER_BYTE, bytes)
        .ok_or_else(|| CodecError::malformed("byte digit out of range"))
}

/// `|v| - 1` for a negative `v`
fn complement_magnitude(value: &Integer) -> Natural {
    (!value).unsigned_abs()
}

/// Minimal two's-complement bytes of a negative value
fn negative_to_be_bytes(value: &Integer) -> Vec<u8> {
    let mut out: Vec<u8> = magnitude_to_be_bytes(&complement_magnitude(value))
        .into_iter()
        .map(|byte| !byte)
        .collect();
    if out.first().map_or(true, |&first| first & SIGN_BIT == 0) {
        out.insert(0, 0xFF);
    }
    out
}

/// Decode big-endian bytes, as two's complement when `signed`
///
/// The empty string decodes to zero.
pub fn from_be_bytes(bytes: &[u8], signed: bool) -> Result<Integer, CodecError> {
    match bytes.first() {
        Some(&first) if signed && first & SIGN_BIT != 0 => {
            let complement = be_bytes_to_magnitude(bytes.iter().map(|byte| !byte))?;
            Ok(!Integer::from(complement))
        }
        _ => Ok(Integer::from(be_bytes_to_magnitude(bytes.iter().copied())?)),
    }
}

/// Encode into exactly `size` big-endian two's-complement bytes
///
/// Returns `None` if the value does not fit.
pub fn to_fixed_be_bytes(value: &Integer, size: usize) -> Option<Vec<u8>> {
    let (minimal, padding) = if *value >= Integer::ZERO {
        (magnitude_to_be_bytes(&value.unsigned_abs()), 0x00)
    } else {
        (negative_to_be_bytes(value), 0xFF)
    };

    if minimal.len() > size {
        return None;
    }
    let mut out = vec![padding; size - minimal.len()];
    out.extend_from_slice(&minimal);
    Some(out)
}

/// Encode in minimal form
pub fn to_minimal_be_bytes(value: &Integer, signed: bool) -> Vec<u8> {
    if *value < Integer::ZERO {
        return negative_to_be_bytes(value);
    }

    let mut magnitude = magnitude_to_be_bytes(&value.unsigned_abs());
    if signed && magnitude.first().map_or(false, |&first| first & SIGN_BIT != 0) {
        magnitude.insert(0, 0x00);
    }
    magnitude
}

/// Whether `bytes` is the minimal form for its own value
pub fn is_minimal(bytes: &[u8], signed: bool) -> bool {
    match bytes {
        [] => true,
        [first] => *first != 0x00,
        [first, second, ..] => {
            if !signed {
                return *first != 0x00;
            }
            let redundant_zero = *first == 0x00 && second & SIGN_BIT == 0;
            let redundant_sign = *first == 0xFF && second & SIGN_BIT != 0;
            !redundant_zero && !redundant_sign
        }
    }
}

/// Whether `value` is representable by `ty`
pub fn fits(value: &Integer, ty: NumericalType) -> bool {
    let negative = *value < Integer::ZERO;
    match (ty.width(), ty.is_signed()) {
        (NumericalWidth::Unbounded, true) => true,
        (NumericalWidth::Unbounded, false) => !negative,
        (NumericalWidth::Fixed(bits), false) => {
            !negative && value.unsigned_abs().significant_bits() <= u64::from(bits)
        }
        (NumericalWidth::Fixed(bits), true) => {
            // One bit is reserved for the sign
            let magnitude = if negative {
                complement_magnitude(value)
            } else {
                value.unsigned_abs()
            };
            magnitude.significant_bits() < u64::from(bits)
        }
    }
}
