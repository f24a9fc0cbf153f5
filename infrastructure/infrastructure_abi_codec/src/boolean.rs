//! Boolean Codec
//!
//! Nested: exactly one byte, `0x01` for true and `0x00` for false.
//! Top-level: empty for false, `0x01` for true.

use crate::config::CodecConfig;
use crate::cursor::Cursor;
use crate::error::CodecError;

const TRUE_BYTE: u8 = 0x01;
const FALSE_BYTE: u8 = 0x00;

/// Boolean codec
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanBinaryCodec {
    config: CodecConfig,
}

impl BooleanBinaryCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn decode_nested(&self, cursor: &mut Cursor<'_>) -> Result<(bool, usize), CodecError> {
        let byte = cursor.read_u8()?;
        Ok((byte_to_bool(byte)?, 1))
    }

    pub fn decode_top_level(&self, data: &[u8]) -> Result<bool, CodecError> {
        match data {
            [] => Ok(false),
            [FALSE_BYTE] if self.config.strict_canonical => Err(CodecError::malformed(
                "top-level false must be encoded as an empty buffer",
            )),
            [byte] => byte_to_bool(*byte),
            _ => Err(CodecError::malformed(format!(
                "top-level boolean must be at most 1 byte, got {}",
                data.len()
            ))),
        }
    }

    pub fn encode_nested(&self, value: bool) -> Vec<u8> {
        if value {
            vec![TRUE_BYTE]
        } else {
            vec![FALSE_BYTE]
        }
    }

    pub fn encode_top_level(&self, value: bool) -> Vec<u8> {
        if value {
            vec![TRUE_BYTE]
        } else {
            Vec::new()
        }
    }
}

fn byte_to_bool(byte: u8) -> Result<bool, CodecError> {
    match byte {
        TRUE_BYTE => Ok(true),
        FALSE_BYTE => Ok(false),
        other => Err(CodecError::malformed(format!(
            "invalid boolean byte 0x{:02x}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_asymmetry() {
        let codec = BooleanBinaryCodec::default();
        assert_eq!(codec.encode_nested(false), vec![0x00]);
        assert_eq!(codec.encode_nested(true), vec![0x01]);
        assert!(codec.encode_top_level(false).is_empty());
        assert_eq!(codec.encode_top_level(true), vec![0x01]);
    }

    #[test]
    fn test_decode_nested() {
        let codec = BooleanBinaryCodec::default();
        let data = [0x01, 0x00];
        let mut cursor = Cursor::new(&data);
        assert_eq!(codec.decode_nested(&mut cursor).unwrap(), (true, 1));
        assert_eq!(codec.decode_nested(&mut cursor).unwrap(), (false, 1));
        assert!(codec.decode_nested(&mut cursor).unwrap_err().is_underflow());
    }

    #[test]
    fn test_decode_invalid_byte() {
        let codec = BooleanBinaryCodec::default();
        let mut cursor = Cursor::new(&[0x02]);
        assert!(codec.decode_nested(&mut cursor).unwrap_err().is_malformed());
        assert!(codec.decode_top_level(&[0x02]).unwrap_err().is_malformed());
    }

    #[test]
    fn test_decode_top_level() {
        let codec = BooleanBinaryCodec::default();
        assert!(!codec.decode_top_level(&[]).unwrap());
        assert!(codec.decode_top_level(&[0x01]).unwrap());
        assert!(!codec.decode_top_level(&[0x00]).unwrap());
        assert!(codec.decode_top_level(&[0x01, 0x00]).unwrap_err().is_malformed());
    }

    #[test]
    fn test_strict_rejects_explicit_false() {
        let codec = BooleanBinaryCodec::new(CodecConfig::strict());
        assert!(codec.decode_top_level(&[0x00]).unwrap_err().is_malformed());
        assert!(!codec.decode_top_level(&[]).unwrap());
    }
}
