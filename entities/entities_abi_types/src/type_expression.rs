//! Type Expression Module
//!
//! Textual form of [`TypeDescriptor`]s, as found in ABI definitions.
//!
//! ## Grammar
//!
//! ```text
//! type     := "bool" | "bytes" | "nothing" | "TokenIdentifier"
//!           | "Address" | "H256" | "BigUint" | "BigInt"
//!           | ("u" | "i") bits
//!           | "array" count "<" type ">"
//! ```
//!
//! `bits` must be a multiple of 8 up to [`MAX_NUMERICAL_BITS`](crate::MAX_NUMERICAL_BITS)
//! and `count` must be greater than zero. Arrays nest at most
//! [`MAX_TYPE_NESTING`] levels deep. Printing and parsing are inverse
//! operations.

use std::fmt;
use std::str::FromStr;

use crate::type_descriptor::{
    ArrayVecType, FixedBytesKind, NumericalType, NumericalWidth, TypeDescriptor, TypeError,
};

/// Deepest array nesting accepted when parsing a type expression
pub const MAX_TYPE_NESTING: usize = 32;

impl fmt::Display for NumericalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.width(), self.is_signed()) {
            (NumericalWidth::Fixed(bits), false) => write!(f, "u{}", bits),
            (NumericalWidth::Fixed(bits), true) => write!(f, "i{}", bits),
            (NumericalWidth::Unbounded, false) => f.write_str("BigUint"),
            (NumericalWidth::Unbounded, true) => f.write_str("BigInt"),
        }
    }
}

impl fmt::Display for FixedBytesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedBytesKind::Address => f.write_str("Address"),
            FixedBytesKind::H256 => f.write_str("H256"),
        }
    }
}

impl fmt::Display for ArrayVecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array{}<{}>", self.length(), self.element_type())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Boolean => f.write_str("bool"),
            TypeDescriptor::Numerical(ty) => ty.fmt(f),
            TypeDescriptor::FixedBytes32(kind) => kind.fmt(f),
            TypeDescriptor::VariableBytes => f.write_str("bytes"),
            TypeDescriptor::StringIdentifier => f.write_str("TokenIdentifier"),
            TypeDescriptor::Nothing => f.write_str("nothing"),
            TypeDescriptor::FixedLengthArray(array) => array.fmt(f),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = TypeError;

    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        parse_type(expression.trim(), 0)
    }
}

fn parse_type(expression: &str, depth: usize) -> Result<TypeDescriptor, TypeError> {
    let descriptor = match expression {
        "bool" => TypeDescriptor::Boolean,
        "bytes" => TypeDescriptor::VariableBytes,
        "nothing" => TypeDescriptor::Nothing,
        "TokenIdentifier" => TypeDescriptor::StringIdentifier,
        "Address" => TypeDescriptor::address(),
        "H256" => TypeDescriptor::h256(),
        "BigUint" => TypeDescriptor::big_uint(),
        "BigInt" => TypeDescriptor::big_int(),
        _ => {
            if let Some(rest) = expression.strip_prefix("array") {
                return parse_array(expression, rest, depth);
            }
            return parse_numerical(expression);
        }
    };
    Ok(descriptor)
}

fn parse_numerical(expression: &str) -> Result<TypeDescriptor, TypeError> {
    let unknown = || TypeError::UnknownType(expression.to_string());

    let (signed, digits) = if let Some(digits) = expression.strip_prefix('u') {
        (false, digits)
    } else if let Some(digits) = expression.strip_prefix('i') {
        (true, digits)
    } else {
        return Err(unknown());
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unknown());
    }
    let bits: u32 = digits.parse().map_err(|_| unknown())?;
    Ok(TypeDescriptor::Numerical(NumericalType::fixed(bits, signed)?))
}

fn parse_array(expression: &str, rest: &str, depth: usize) -> Result<TypeDescriptor, TypeError> {
    if depth >= MAX_TYPE_NESTING {
        return Err(TypeError::NestingTooDeep(MAX_TYPE_NESTING));
    }
    let unknown = || TypeError::UnknownType(expression.to_string());

    let open = rest.find('<').ok_or_else(unknown)?;
    let inner = rest[open + 1..].strip_suffix('>').ok_or_else(unknown)?;
    let count = &rest[..open];

    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unknown());
    }
    let length: usize = count.parse().map_err(|_| unknown())?;
    let element = parse_type(inner.trim(), depth + 1)?;
    Ok(TypeDescriptor::FixedLengthArray(ArrayVecType::new(length, element)?))
}
