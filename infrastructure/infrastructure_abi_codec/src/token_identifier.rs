//! Token Identifier Codec
//!
//! Same framing as variable bytes, applied to the identifier's UTF-8 form.
//! Decoding rejects bytes that are not valid UTF-8.

use entities_abi_types::TokenIdentifierValue;

use crate::cursor::{write_length_prefixed, Cursor};
use crate::error::CodecError;

/// String identifier codec
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIdentifierCodec;

impl TokenIdentifierCodec {
    pub fn decode_nested(
        &self,
        cursor: &mut Cursor<'_>,
    ) -> Result<(TokenIdentifierValue, usize), CodecError> {
        let (payload, consumed) = cursor.read_length_prefixed()?;
        Ok((identifier_from_utf8(payload)?, consumed))
    }

    pub fn decode_top_level(&self, data: &[u8]) -> Result<TokenIdentifierValue, CodecError> {
        identifier_from_utf8(data)
    }

    pub fn encode_nested(&self, value: &TokenIdentifierValue) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        write_length_prefixed(&mut out, value.as_bytes())?;
        Ok(out)
    }

    pub fn encode_top_level(&self, value: &TokenIdentifierValue) -> Vec<u8> {
        value.as_bytes().to_vec()
    }
}

fn identifier_from_utf8(bytes: &[u8]) -> Result<TokenIdentifierValue, CodecError> {
    let identifier = std::str::from_utf8(bytes)
        .map_err(|e| CodecError::malformed(format!("identifier is not valid UTF-8: {}", e)))?;
    Ok(TokenIdentifierValue::new(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_nested() {
        let codec = TokenIdentifierCodec;
        let value = TokenIdentifierValue::new("MEX-455c57");
        let encoded = codec.encode_nested(&value).unwrap();
        assert_eq!(&encoded[..4], &[0, 0, 0, 10]);
        assert_eq!(&encoded[4..], b"MEX-455c57");

        let mut cursor = Cursor::new(&encoded);
        assert_eq!(codec.decode_nested(&mut cursor).unwrap(), (value, 14));
    }

    #[test]
    fn test_top_level_is_raw_utf8() {
        let codec = TokenIdentifierCodec;
        let value = TokenIdentifierValue::new("EGLD");
        assert_eq!(codec.encode_top_level(&value), b"EGLD".to_vec());
        assert_eq!(codec.decode_top_level(b"EGLD").unwrap(), value);
    }

    #[test]
    fn test_invalid_utf8() {
        let codec = TokenIdentifierCodec;
        assert!(codec.decode_top_level(&[0xC3, 0x28]).unwrap_err().is_malformed());
    }
}
