//! Fixed Bytes Codec
//!
//! Addresses and H256 hashes: exactly 32 raw bytes, no prefix, in both modes.

use entities_abi_types::{FixedBytesKind, FixedBytesValue, FIXED_BYTES_LENGTH};

use crate::cursor::Cursor;
use crate::error::CodecError;

/// Fixed 32-byte codec
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedBytesBinaryCodec;

impl FixedBytesBinaryCodec {
    pub fn decode_nested(
        &self,
        cursor: &mut Cursor<'_>,
        kind: FixedBytesKind,
    ) -> Result<(FixedBytesValue, usize), CodecError> {
        let bytes = cursor.read_bytes(FIXED_BYTES_LENGTH)?;
        let value = FixedBytesValue::from_slice(kind, bytes)?;
        Ok((value, FIXED_BYTES_LENGTH))
    }

    pub fn decode_top_level(
        &self,
        data: &[u8],
        kind: FixedBytesKind,
    ) -> Result<FixedBytesValue, CodecError> {
        if data.len() > FIXED_BYTES_LENGTH {
            return Err(CodecError::malformed(format!(
                "{} expects {} bytes, got {}",
                kind,
                FIXED_BYTES_LENGTH,
                data.len()
            )));
        }

        let mut cursor = Cursor::new(data);
        let (value, _) = self.decode_nested(&mut cursor, kind)?;
        Ok(value)
    }

    pub fn encode_nested(&self, value: &FixedBytesValue) -> Vec<u8> {
        value.bytes().to_vec()
    }

    pub fn encode_top_level(&self, value: &FixedBytesValue) -> Vec<u8> {
        self.encode_nested(value)
    }
}
