//! Typed Value Module
//!
//! Provides the in-memory representation of ABI values.
//!
//! A [`TypedValue`] is a tagged union whose tag always corresponds to a
//! [`TypeDescriptor`] category. Values are immutable once built: payload
//! structs keep their fields private and hand out borrows. Equality is
//! structural, recursing into arrays.

use malachite::Integer;

use crate::type_descriptor::{
    ArrayVecType, FixedBytesKind, NumericalType, TypeDescriptor, TypeError, FIXED_BYTES_LENGTH,
};

/// Arbitrary-precision integer together with its declared numerical type
///
/// The logical integer is stored exactly. Whether it fits the declared width
/// is checked when it is encoded, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericalValue {
    ty: NumericalType,
    value: Integer,
}

impl NumericalValue {
    pub fn new(ty: NumericalType, value: impl Into<Integer>) -> Self {
        Self {
            ty,
            value: value.into(),
        }
    }

    pub fn numerical_type(&self) -> NumericalType {
        self.ty
    }

    pub fn value(&self) -> &Integer {
        &self.value
    }
}

/// Exactly 32 bytes labelled as an address or a hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBytesValue {
    kind: FixedBytesKind,
    bytes: [u8; FIXED_BYTES_LENGTH],
}

impl FixedBytesValue {
    pub fn new(kind: FixedBytesKind, bytes: [u8; FIXED_BYTES_LENGTH]) -> Self {
        Self { kind, bytes }
    }

    /// Copy a slice into a fixed-bytes value
    ///
    /// # Returns
    /// * `Err(TypeError::FixedBytesLength)` - If the slice is not exactly 32 bytes
    pub fn from_slice(kind: FixedBytesKind, bytes: &[u8]) -> Result<Self, TypeError> {
        let bytes: [u8; FIXED_BYTES_LENGTH] =
            bytes.try_into().map_err(|_| TypeError::FixedBytesLength {
                expected: FIXED_BYTES_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self { kind, bytes })
    }

    pub fn kind(&self) -> FixedBytesKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8; FIXED_BYTES_LENGTH] {
        &self.bytes
    }
}

/// Variable-length byte string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BytesValue {
    data: Vec<u8>,
}

impl BytesValue {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// String-like identifier (e.g. a token identifier)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenIdentifierValue {
    identifier: String,
}

impl TokenIdentifierValue {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Raw UTF-8 form, as written on the wire
    pub fn as_bytes(&self) -> &[u8] {
        self.identifier.as_bytes()
    }
}

/// Fixed-length homogeneous collection of values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayVec {
    ty: ArrayVecType,
    items: Vec<TypedValue>,
}

impl ArrayVec {
    /// Create an array value
    ///
    /// # Returns
    /// * `Err(TypeError::ArrayLengthMismatch)` - Item count differs from the declared length
    /// * `Err(TypeError::HeterogeneousArray)` - An item's type differs from the element type
    pub fn new(ty: ArrayVecType, items: Vec<TypedValue>) -> Result<Self, TypeError> {
        if items.len() != ty.length() {
            return Err(TypeError::ArrayLengthMismatch {
                expected: ty.length(),
                actual: items.len(),
            });
        }

        for (index, item) in items.iter().enumerate() {
            let actual = item.type_descriptor();
            if &actual != ty.element_type() {
                return Err(TypeError::HeterogeneousArray {
                    index,
                    expected: ty.element_type().to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        Ok(Self { ty, items })
    }

    pub fn array_type(&self) -> &ArrayVecType {
        &self.ty
    }

    pub fn items(&self) -> &[TypedValue] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: arrays are never declared with zero elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An ABI value tagged with its category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypedValue {
    Boolean(bool),
    Numerical(NumericalValue),
    FixedBytes32(FixedBytesValue),
    VariableBytes(BytesValue),
    StringIdentifier(TokenIdentifierValue),
    Nothing,
    FixedLengthArray(ArrayVec),
}

impl TypedValue {
    /// Descriptor this value conforms to
    pub fn type_descriptor(&self) -> TypeDescriptor {
        match self {
            TypedValue::Boolean(_) => TypeDescriptor::Boolean,
            TypedValue::Numerical(value) => TypeDescriptor::Numerical(value.numerical_type()),
            TypedValue::FixedBytes32(value) => TypeDescriptor::FixedBytes32(value.kind()),
            TypedValue::VariableBytes(_) => TypeDescriptor::VariableBytes,
            TypedValue::StringIdentifier(_) => TypeDescriptor::StringIdentifier,
            TypedValue::Nothing => TypeDescriptor::Nothing,
            TypedValue::FixedLengthArray(array) => {
                TypeDescriptor::FixedLengthArray(array.array_type().clone())
            }
        }
    }

    pub fn boolean(value: bool) -> Self {
        TypedValue::Boolean(value)
    }

    pub fn numerical(ty: NumericalType, value: impl Into<Integer>) -> Self {
        TypedValue::Numerical(NumericalValue::new(ty, value))
    }

    pub fn u8(value: u8) -> Self {
        Self::numerical(NumericalType::U8, value)
    }

    pub fn u16(value: u16) -> Self {
        Self::numerical(NumericalType::U16, value)
    }

    pub fn u32(value: u32) -> Self {
        Self::numerical(NumericalType::U32, value)
    }

    pub fn u64(value: u64) -> Self {
        Self::numerical(NumericalType::U64, value)
    }

    pub fn i8(value: i8) -> Self {
        Self::numerical(NumericalType::I8, value)
    }

    pub fn i16(value: i16) -> Self {
        Self::numerical(NumericalType::I16, value)
    }

    pub fn i32(value: i32) -> Self {
        Self::numerical(NumericalType::I32, value)
    }

    pub fn i64(value: i64) -> Self {
        Self::numerical(NumericalType::I64, value)
    }

    pub fn big_uint(value: impl Into<Integer>) -> Self {
        Self::numerical(NumericalType::BIG_UINT, value)
    }

    pub fn big_int(value: impl Into<Integer>) -> Self {
        Self::numerical(NumericalType::BIG_INT, value)
    }

    pub fn address(bytes: [u8; FIXED_BYTES_LENGTH]) -> Self {
        TypedValue::FixedBytes32(FixedBytesValue::new(FixedBytesKind::Address, bytes))
    }

    pub fn h256(bytes: [u8; FIXED_BYTES_LENGTH]) -> Self {
        TypedValue::FixedBytes32(FixedBytesValue::new(FixedBytesKind::H256, bytes))
    }

    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        TypedValue::VariableBytes(BytesValue::new(data.into()))
    }

    pub fn token_identifier(identifier: impl Into<String>) -> Self {
        TypedValue::StringIdentifier(TokenIdentifierValue::new(identifier))
    }

    pub fn nothing() -> Self {
        TypedValue::Nothing
    }

    /// Build an array value, checking arity and element types
    pub fn array(ty: ArrayVecType, items: Vec<TypedValue>) -> Result<Self, TypeError> {
        Ok(TypedValue::FixedLengthArray(ArrayVec::new(ty, items)?))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            TypedValue::Numerical(value) => Some(value.value()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TypedValue::FixedBytes32(value) => Some(value.bytes()),
            TypedValue::VariableBytes(value) => Some(value.data()),
            TypedValue::StringIdentifier(value) => Some(value.as_bytes()),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[TypedValue]> {
        match self {
            TypedValue::FixedLengthArray(array) => Some(array.items()),
            _ => None,
        }
    }
}
