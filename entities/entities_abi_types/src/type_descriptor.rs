//! Type Descriptor Module
//!
//! Provides the immutable descriptors that identify the shape of an ABI value.
//!
//! A [`TypeDescriptor`] is a closed sum type: every category the codec knows
//! about is one variant, and category metadata (numerical width, fixed-bytes
//! kind, array length and element type) lives inside the variant. Two
//! descriptors are equal iff their categories and all metadata match,
//! recursively for arrays.

use thiserror::Error;

/// Largest fixed bit width accepted for a numerical type.
pub const MAX_NUMERICAL_BITS: u32 = 256;

/// Number of bytes held by a fixed-bytes (address or hash) value.
pub const FIXED_BYTES_LENGTH: usize = 32;

/// Type construction errors
///
/// Raised when a descriptor or a value cannot be built. These never reach
/// encode or decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A fixed-length array was declared with zero elements
    #[error("invalid type construction: array length must be greater than zero")]
    ZeroLengthArray,
    /// A fixed-length array value was given the wrong number of items
    #[error("invalid type construction: array expects {expected} items, got {actual}")]
    ArrayLengthMismatch { expected: usize, actual: usize },
    /// An array item does not match the array's element type
    #[error("invalid type construction: array item {index} has type {actual}, expected {expected}")]
    HeterogeneousArray {
        index: usize,
        expected: String,
        actual: String,
    },
    /// A fixed-bytes value was given a slice of the wrong length
    #[error("invalid type construction: fixed bytes expect {expected} bytes, got {actual}")]
    FixedBytesLength { expected: usize, actual: usize },
    /// Numerical width is not a multiple of 8 within the supported range
    #[error("invalid type construction: unsupported numerical width of {0} bits")]
    InvalidNumericalWidth(u32),
    /// A type expression names no known type
    #[error("invalid type construction: unknown type `{0}`")]
    UnknownType(String),
    /// A type expression nests arrays deeper than the parser accepts
    #[error("invalid type construction: type nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Width of a numerical type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericalWidth {
    /// Fixed number of bits (multiple of 8)
    Fixed(u32),
    /// Arbitrary precision; nested encoding carries a length prefix
    Unbounded,
}

/// Numerical type metadata: width and signedness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericalType {
    width: NumericalWidth,
    signed: bool,
}

impl NumericalType {
    pub const U8: NumericalType = NumericalType::fixed_unchecked(8, false);
    pub const U16: NumericalType = NumericalType::fixed_unchecked(16, false);
    pub const U32: NumericalType = NumericalType::fixed_unchecked(32, false);
    pub const U64: NumericalType = NumericalType::fixed_unchecked(64, false);
    pub const I8: NumericalType = NumericalType::fixed_unchecked(8, true);
    pub const I16: NumericalType = NumericalType::fixed_unchecked(16, true);
    pub const I32: NumericalType = NumericalType::fixed_unchecked(32, true);
    pub const I64: NumericalType = NumericalType::fixed_unchecked(64, true);
    pub const BIG_UINT: NumericalType = NumericalType {
        width: NumericalWidth::Unbounded,
        signed: false,
    };
    pub const BIG_INT: NumericalType = NumericalType {
        width: NumericalWidth::Unbounded,
        signed: true,
    };

    const fn fixed_unchecked(bits: u32, signed: bool) -> Self {
        Self {
            width: NumericalWidth::Fixed(bits),
            signed,
        }
    }

    /// Create a fixed-width numerical type
    ///
    /// # Arguments
    /// * `bits` - Bit width; must be a non-zero multiple of 8, at most [`MAX_NUMERICAL_BITS`]
    /// * `signed` - Whether values are two's-complement signed
    ///
    /// # Returns
    /// * `Ok(NumericalType)` - The type
    /// * `Err(TypeError::InvalidNumericalWidth)` - Unsupported width
    pub fn fixed(bits: u32, signed: bool) -> Result<Self, TypeError> {
        if bits == 0 || bits % 8 != 0 || bits > MAX_NUMERICAL_BITS {
            return Err(TypeError::InvalidNumericalWidth(bits));
        }
        Ok(Self::fixed_unchecked(bits, signed))
    }

    /// Create an unbounded (arbitrary precision) numerical type
    pub fn unbounded(signed: bool) -> Self {
        if signed {
            Self::BIG_INT
        } else {
            Self::BIG_UINT
        }
    }

    pub fn width(&self) -> NumericalWidth {
        self.width
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Size in bytes of the nested encoding, or `None` for unbounded types
    pub fn size_in_bytes(&self) -> Option<usize> {
        match self.width {
            NumericalWidth::Fixed(bits) => Some((bits / 8) as usize),
            NumericalWidth::Unbounded => None,
        }
    }
}

/// Semantic label of a 32-byte fixed value
///
/// Both kinds share the same wire behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedBytesKind {
    Address,
    H256,
}

/// Fixed-length array type: a declared element count and an element type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayVecType {
    length: usize,
    element: Box<TypeDescriptor>,
}

impl ArrayVecType {
    /// Create an array type
    ///
    /// # Returns
    /// * `Err(TypeError::ZeroLengthArray)` - If `length` is zero
    pub fn new(length: usize, element: TypeDescriptor) -> Result<Self, TypeError> {
        if length == 0 {
            return Err(TypeError::ZeroLengthArray);
        }
        Ok(Self {
            length,
            element: Box::new(element),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn element_type(&self) -> &TypeDescriptor {
        &self.element
    }
}

/// Descriptor of an ABI value's shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Boolean,
    Numerical(NumericalType),
    FixedBytes32(FixedBytesKind),
    VariableBytes,
    StringIdentifier,
    Nothing,
    FixedLengthArray(ArrayVecType),
}

impl TypeDescriptor {
    pub fn u8() -> Self {
        TypeDescriptor::Numerical(NumericalType::U8)
    }

    pub fn u16() -> Self {
        TypeDescriptor::Numerical(NumericalType::U16)
    }

    pub fn u32() -> Self {
        TypeDescriptor::Numerical(NumericalType::U32)
    }

    pub fn u64() -> Self {
        TypeDescriptor::Numerical(NumericalType::U64)
    }

    pub fn i8() -> Self {
        TypeDescriptor::Numerical(NumericalType::I8)
    }

    pub fn i16() -> Self {
        TypeDescriptor::Numerical(NumericalType::I16)
    }

    pub fn i32() -> Self {
        TypeDescriptor::Numerical(NumericalType::I32)
    }

    pub fn i64() -> Self {
        TypeDescriptor::Numerical(NumericalType::I64)
    }

    pub fn big_uint() -> Self {
        TypeDescriptor::Numerical(NumericalType::BIG_UINT)
    }

    pub fn big_int() -> Self {
        TypeDescriptor::Numerical(NumericalType::BIG_INT)
    }

    pub fn address() -> Self {
        TypeDescriptor::FixedBytes32(FixedBytesKind::Address)
    }

    pub fn h256() -> Self {
        TypeDescriptor::FixedBytes32(FixedBytesKind::H256)
    }

    /// Create a fixed-length array descriptor
    pub fn array(length: usize, element: TypeDescriptor) -> Result<Self, TypeError> {
        Ok(TypeDescriptor::FixedLengthArray(ArrayVecType::new(length, element)?))
    }

    /// Size of the nested encoding if it does not depend on the value
    ///
    /// Variable-bytes, identifiers, unbounded numbers and arrays of any of
    /// those have no static size.
    pub fn static_nested_size(&self) -> Option<usize> {
        match self {
            TypeDescriptor::Boolean => Some(1),
            TypeDescriptor::Numerical(ty) => ty.size_in_bytes(),
            TypeDescriptor::FixedBytes32(_) => Some(FIXED_BYTES_LENGTH),
            TypeDescriptor::VariableBytes => None,
            TypeDescriptor::StringIdentifier => None,
            TypeDescriptor::Nothing => Some(0),
            TypeDescriptor::FixedLengthArray(array) => array
                .element_type()
                .static_nested_size()
                .and_then(|size| size.checked_mul(array.length())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numerical_fixed_widths() {
        assert_eq!(NumericalType::fixed(8, false).unwrap(), NumericalType::U8);
        assert_eq!(NumericalType::fixed(64, true).unwrap(), NumericalType::I64);
        assert_eq!(NumericalType::fixed(256, false).unwrap().size_in_bytes(), Some(32));
    }

    #[test]
    fn test_numerical_invalid_widths() {
        assert_eq!(NumericalType::fixed(0, false), Err(TypeError::InvalidNumericalWidth(0)));
        assert_eq!(NumericalType::fixed(12, false), Err(TypeError::InvalidNumericalWidth(12)));
        assert_eq!(NumericalType::fixed(264, true), Err(TypeError::InvalidNumericalWidth(264)));
    }

    #[test]
    fn test_unbounded_has_no_size() {
        assert_eq!(NumericalType::unbounded(false).size_in_bytes(), None);
        assert!(NumericalType::unbounded(true).is_signed());
    }

    #[test]
    fn test_zero_length_array_rejected() {
        let result = ArrayVecType::new(0, TypeDescriptor::Boolean);
        assert_eq!(result, Err(TypeError::ZeroLengthArray));
    }

    #[test]
    fn test_descriptor_equality_is_structural() {
        let a = TypeDescriptor::array(3, TypeDescriptor::u16()).unwrap();
        let b = TypeDescriptor::array(3, TypeDescriptor::u16()).unwrap();
        let c = TypeDescriptor::array(3, TypeDescriptor::i16()).unwrap();
        let d = TypeDescriptor::array(4, TypeDescriptor::u16()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(TypeDescriptor::address(), TypeDescriptor::h256());
    }

    #[test]
    fn test_static_nested_size() {
        let row = TypeDescriptor::array(3, TypeDescriptor::u32()).unwrap();
        let nested = TypeDescriptor::array(2, row).unwrap();
        assert_eq!(nested.static_nested_size(), Some(24));
        assert_eq!(TypeDescriptor::VariableBytes.static_nested_size(), None);
        assert_eq!(TypeDescriptor::Nothing.static_nested_size(), Some(0));
        let dynamic = TypeDescriptor::array(2, TypeDescriptor::big_uint()).unwrap();
        assert_eq!(dynamic.static_nested_size(), None);
    }
}
