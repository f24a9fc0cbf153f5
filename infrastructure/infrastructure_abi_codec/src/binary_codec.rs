//! Dispatching Codec
//!
//! [`BinaryCodec`] is the single entry point of the crate. Decoding routes on
//! the [`TypeDescriptor`], encoding routes on the [`TypedValue`]'s own tag.
//! Every dispatch site is an exhaustive `match` without a wildcard arm, so a
//! new category fails to compile until each site handles it.
//!
//! The codec holds only an immutable [`CodecConfig`]; it is `Copy`, `Send`
//! and `Sync` and can be shared across threads freely.

use entities_abi_types::{TypeDescriptor, TypedValue};
use tracing::trace;

use crate::array::ArrayVecCodec;
use crate::boolean::BooleanBinaryCodec;
use crate::bytes::BytesBinaryCodec;
use crate::config::CodecConfig;
use crate::cursor::Cursor;
use crate::error::CodecError;
use crate::fixed_bytes::FixedBytesBinaryCodec;
use crate::nothing::NothingCodec;
use crate::numerical::NumericalBinaryCodec;
use crate::token_identifier::TokenIdentifierCodec;

/// Encoding mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Embedded inside a larger structure; self-delimiting
    Nested,
    /// Occupies a whole standalone buffer
    TopLevel,
}

/// Dispatching binary codec
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec {
    config: CodecConfig,
    boolean: BooleanBinaryCodec,
    numerical: NumericalBinaryCodec,
    fixed_bytes: FixedBytesBinaryCodec,
    bytes: BytesBinaryCodec,
    token_identifier: TokenIdentifierCodec,
    nothing: NothingCodec,
    array: ArrayVecCodec,
}

impl BinaryCodec {
    /// Codec with the default (lenient) configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            config,
            boolean: BooleanBinaryCodec::new(config),
            numerical: NumericalBinaryCodec::new(config),
            ..Self::default()
        }
    }

    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Decode a nested value from the start of `data`
    ///
    /// # Returns
    /// * `Ok((value, bytes_consumed))` - Decoded value and the bytes it occupied
    /// * `Err(CodecError)` - Underflow or malformed input
    pub fn decode_nested(
        &self,
        data: &[u8],
        ty: &TypeDescriptor,
    ) -> Result<(TypedValue, usize), CodecError> {
        let mut cursor = Cursor::new(data);
        self.decode_nested_at(&mut cursor, ty)
    }

    /// Decode a nested value at the cursor's position and advance it
    pub fn decode_nested_at(
        &self,
        cursor: &mut Cursor<'_>,
        ty: &TypeDescriptor,
    ) -> Result<(TypedValue, usize), CodecError> {
        trace!(ty = %ty, position = cursor.position(), "decode nested");

        match ty {
            TypeDescriptor::Boolean => {
                let (value, consumed) = self.boolean.decode_nested(cursor)?;
                Ok((TypedValue::Boolean(value), consumed))
            }
            TypeDescriptor::Numerical(numerical_type) => {
                let (value, consumed) = self.numerical.decode_nested(cursor, *numerical_type)?;
                Ok((TypedValue::Numerical(value), consumed))
            }
            TypeDescriptor::FixedBytes32(kind) => {
                let (value, consumed) = self.fixed_bytes.decode_nested(cursor, *kind)?;
                Ok((TypedValue::FixedBytes32(value), consumed))
            }
            TypeDescriptor::VariableBytes => {
                let (value, consumed) = self.bytes.decode_nested(cursor)?;
                Ok((TypedValue::VariableBytes(value), consumed))
            }
            TypeDescriptor::StringIdentifier => {
                let (value, consumed) = self.token_identifier.decode_nested(cursor)?;
                Ok((TypedValue::StringIdentifier(value), consumed))
            }
            TypeDescriptor::Nothing => Ok((TypedValue::Nothing, self.nothing.decode_nested())),
            TypeDescriptor::FixedLengthArray(array_type) => {
                let (value, consumed) = self.array.decode_nested(self, cursor, array_type)?;
                Ok((TypedValue::FixedLengthArray(value), consumed))
            }
        }
    }

    /// Decode a value that occupies the whole of `data`
    pub fn decode_top_level(
        &self,
        data: &[u8],
        ty: &TypeDescriptor,
    ) -> Result<TypedValue, CodecError> {
        trace!(ty = %ty, len = data.len(), "decode top-level");

        let value = match ty {
            TypeDescriptor::Boolean => TypedValue::Boolean(self.boolean.decode_top_level(data)?),
            TypeDescriptor::Numerical(numerical_type) => {
                TypedValue::Numerical(self.numerical.decode_top_level(data, *numerical_type)?)
            }
            TypeDescriptor::FixedBytes32(kind) => {
                TypedValue::FixedBytes32(self.fixed_bytes.decode_top_level(data, *kind)?)
            }
            TypeDescriptor::VariableBytes => {
                TypedValue::VariableBytes(self.bytes.decode_top_level(data))
            }
            TypeDescriptor::StringIdentifier => {
                TypedValue::StringIdentifier(self.token_identifier.decode_top_level(data)?)
            }
            TypeDescriptor::Nothing => {
                self.nothing.decode_top_level(data)?;
                TypedValue::Nothing
            }
            TypeDescriptor::FixedLengthArray(array_type) => {
                TypedValue::FixedLengthArray(self.array.decode_top_level(self, data, array_type)?)
            }
        };
        Ok(value)
    }

    /// Decode in the given mode; nested decoding must consume all of `data`
    pub fn decode(
        &self,
        data: &[u8],
        ty: &TypeDescriptor,
        mode: EncodingMode,
    ) -> Result<TypedValue, CodecError> {
        match mode {
            EncodingMode::TopLevel => self.decode_top_level(data, ty),
            EncodingMode::Nested => {
                let (value, consumed) = self.decode_nested(data, ty)?;
                if consumed != data.len() {
                    return Err(CodecError::malformed(format!(
                        "{} trailing bytes after nested {}",
                        data.len() - consumed,
                        ty
                    )));
                }
                Ok(value)
            }
        }
    }

    pub fn encode_nested(&self, value: &TypedValue) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        self.encode_nested_into(value, &mut out)?;
        Ok(out)
    }

    /// Append the nested encoding of `value` to `out`
    ///
    /// On error `out` may hold a partial encoding and should be discarded.
    pub fn encode_nested_into(
        &self,
        value: &TypedValue,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        trace!(ty = %value.type_descriptor(), "encode nested");

        match value {
            TypedValue::Boolean(v) => out.extend_from_slice(&self.boolean.encode_nested(*v)),
            TypedValue::Numerical(v) => out.extend_from_slice(&self.numerical.encode_nested(v)?),
            TypedValue::FixedBytes32(v) => {
                out.extend_from_slice(&self.fixed_bytes.encode_nested(v))
            }
            TypedValue::VariableBytes(v) => out.extend_from_slice(&self.bytes.encode_nested(v)?),
            TypedValue::StringIdentifier(v) => {
                out.extend_from_slice(&self.token_identifier.encode_nested(v)?)
            }
            TypedValue::Nothing => out.extend_from_slice(&self.nothing.encode_nested()),
            TypedValue::FixedLengthArray(v) => self.array.encode_nested_into(self, v, out)?,
        }
        Ok(())
    }

    pub fn encode_top_level(&self, value: &TypedValue) -> Result<Vec<u8>, CodecError> {
        trace!(ty = %value.type_descriptor(), "encode top-level");

        let encoded = match value {
            TypedValue::Boolean(v) => self.boolean.encode_top_level(*v),
            TypedValue::Numerical(v) => self.numerical.encode_top_level(v)?,
            TypedValue::FixedBytes32(v) => self.fixed_bytes.encode_top_level(v),
            TypedValue::VariableBytes(v) => self.bytes.encode_top_level(v),
            TypedValue::StringIdentifier(v) => self.token_identifier.encode_top_level(v),
            TypedValue::Nothing => self.nothing.encode_top_level(),
            TypedValue::FixedLengthArray(v) => self.array.encode_top_level(self, v)?,
        };
        Ok(encoded)
    }

    pub fn encode(&self, value: &TypedValue, mode: EncodingMode) -> Result<Vec<u8>, CodecError> {
        match mode {
            EncodingMode::Nested => self.encode_nested(value),
            EncodingMode::TopLevel => self.encode_top_level(value),
        }
    }
}
