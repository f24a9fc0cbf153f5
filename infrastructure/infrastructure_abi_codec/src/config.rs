//! Codec Configuration
//!
//! In-process settings for [`BinaryCodec`](crate::BinaryCodec). There are no
//! files, flags or environment variables behind it.

/// Codec settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Reject top-level encodings that are valid but not minimal
    ///
    /// Covers numerical buffers with a redundant leading `0x00` (or redundant
    /// `0xFF` sign byte), the single byte `0x00` for zero, and a top-level
    /// boolean written as `0x00`.
    pub strict_canonical: bool,
}

impl CodecConfig {
    /// Lenient decoding; every decodable buffer is accepted
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Canonical-only decoding
    pub fn strict() -> Self {
        Self {
            strict_canonical: true,
        }
    }
}
