//! Fixed-Length Array Codec
//!
//! An array is the concatenation of its elements' nested encodings in order,
//! with no overall prefix: the count is part of the type. Both modes use the
//! same layout; a top-level array must also consume its whole buffer.
//!
//! Elements are decoded and encoded through the dispatching
//! [`BinaryCodec`], so arrays of any element type (arrays included) share
//! one cursor.

use entities_abi_types::{ArrayVec, ArrayVecType};

use crate::binary_codec::BinaryCodec;
use crate::cursor::Cursor;
use crate::error::CodecError;

/// Array codec
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayVecCodec;

impl ArrayVecCodec {
    /// Decode `ty.length()` elements from the shared cursor
    ///
    /// Returns the array and the sum of the elements' consumed bytes.
    pub fn decode_nested(
        &self,
        codec: &BinaryCodec,
        cursor: &mut Cursor<'_>,
        ty: &ArrayVecType,
    ) -> Result<(ArrayVec, usize), CodecError> {
        // The declared count is untrusted; reserve no more than the input could hold
        let mut items = Vec::with_capacity(ty.length().min(cursor.remaining()));
        let mut consumed = 0;

        for _ in 0..ty.length() {
            let (item, item_size) = codec.decode_nested_at(cursor, ty.element_type())?;
            items.push(item);
            consumed += item_size;
        }

        Ok((ArrayVec::new(ty.clone(), items)?, consumed))
    }

    pub fn decode_top_level(
        &self,
        codec: &BinaryCodec,
        data: &[u8],
        ty: &ArrayVecType,
    ) -> Result<ArrayVec, CodecError> {
        let mut cursor = Cursor::new(data);
        let (array, _) = self.decode_nested(codec, &mut cursor, ty)?;

        if !cursor.is_exhausted() {
            return Err(CodecError::malformed(format!(
                "{} trailing bytes after {}",
                cursor.remaining(),
                ty
            )));
        }
        Ok(array)
    }

    pub fn encode_nested_into(
        &self,
        codec: &BinaryCodec,
        array: &ArrayVec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        for item in array.items() {
            codec.encode_nested_into(item, out)?;
        }
        Ok(())
    }

    pub fn encode_nested(
        &self,
        codec: &BinaryCodec,
        array: &ArrayVec,
    ) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        self.encode_nested_into(codec, array, &mut out)?;
        Ok(out)
    }

    pub fn encode_top_level(
        &self,
        codec: &BinaryCodec,
        array: &ArrayVec,
    ) -> Result<Vec<u8>, CodecError> {
        self.encode_nested(codec, array)
    }
}
