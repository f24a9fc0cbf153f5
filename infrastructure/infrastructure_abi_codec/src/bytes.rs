//! Variable Bytes Codec
//!
//! Nested: 4-byte big-endian length followed by the bytes.
//! Top-level: the raw bytes; the buffer boundary gives the length.

use entities_abi_types::BytesValue;

use crate::cursor::{write_length_prefixed, Cursor};
use crate::error::CodecError;

/// Variable-length bytes codec
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesBinaryCodec;

impl BytesBinaryCodec {
    pub fn decode_nested(
        &self,
        cursor: &mut Cursor<'_>,
    ) -> Result<(BytesValue, usize), CodecError> {
        let (payload, consumed) = cursor.read_length_prefixed()?;
        Ok((BytesValue::from_slice(payload), consumed))
    }

    pub fn decode_top_level(&self, data: &[u8]) -> BytesValue {
        BytesValue::from_slice(data)
    }

    pub fn encode_nested(&self, value: &BytesValue) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        write_length_prefixed(&mut out, value.data())?;
        Ok(out)
    }

    pub fn encode_top_level(&self, value: &BytesValue) -> Vec<u8> {
        value.data().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_framing() {
        let codec = BytesBinaryCodec;
        let value = BytesValue::new(vec![1, 2, 3, 4, 5]);
        let encoded = codec.encode_nested(&value).unwrap();
        assert_eq!(encoded, vec![0, 0, 0, 5, 1, 2, 3, 4, 5]);

        let mut cursor = Cursor::new(&encoded);
        let (decoded, consumed) = codec.decode_nested(&mut cursor).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, 9);
    }

    #[test]
    fn test_empty_bytes() {
        let codec = BytesBinaryCodec;
        let value = BytesValue::default();
        assert_eq!(codec.encode_nested(&value).unwrap(), vec![0, 0, 0, 0]);
        assert!(codec.encode_top_level(&value).is_empty());
        assert_eq!(codec.decode_top_level(&[]), value);
    }

    #[test]
    fn test_declared_length_exceeds_buffer() {
        let codec = BytesBinaryCodec;
        let mut cursor = Cursor::new(&[0, 0, 0, 4, 0xAA]);
        assert_eq!(
            codec.decode_nested(&mut cursor),
            Err(CodecError::Underflow { needed: 4, remaining: 1 })
        );
    }
}
