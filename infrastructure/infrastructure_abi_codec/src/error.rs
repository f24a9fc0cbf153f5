//! Codec Errors
//!
//! Failures raised by the per-type codecs and the dispatching codec.

use entities_abi_types::TypeError;
use thiserror::Error;

/// Encoding/decoding errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer is shorter than the type requires
    #[error("underflow: needed {needed} bytes, {remaining} remaining")]
    Underflow { needed: usize, remaining: usize },
    /// Bytes are present but are not a valid encoding of the declared type
    #[error("malformed value: {0}")]
    MalformedValue(String),
    /// A numerical value does not fit its declared width
    #[error("malformed value: {value} does not fit {ty}")]
    ValueOutOfRange { value: String, ty: String },
    /// A decoded array could not be rebuilt as a typed value
    #[error(transparent)]
    InvalidType(#[from] TypeError),
}

impl CodecError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        CodecError::MalformedValue(message.into())
    }

    /// Whether this error belongs to the malformed-value class
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CodecError::MalformedValue(_) | CodecError::ValueOutOfRange { .. }
        )
    }

    pub fn is_underflow(&self) -> bool {
        matches!(self, CodecError::Underflow { .. })
    }
}
