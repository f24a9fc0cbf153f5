//! Nothing Codec
//!
//! Zero bytes in both modes.

use crate::error::CodecError;

/// Codec for the zero-content marker
#[derive(Debug, Clone, Copy, Default)]
pub struct NothingCodec;

impl NothingCodec {
    pub fn decode_nested(&self) -> usize {
        0
    }

    /// A top-level buffer for nothing must be empty
    pub fn decode_top_level(&self, data: &[u8]) -> Result<(), CodecError> {
        if data.is_empty() {
            Ok(())
        } else {
            Err(CodecError::malformed(format!(
                "nothing expects an empty buffer, got {} bytes",
                data.len()
            )))
        }
    }

    pub fn encode_nested(&self) -> Vec<u8> {
        Vec::new()
    }

    pub fn encode_top_level(&self) -> Vec<u8> {
        Vec::new()
    }
}
