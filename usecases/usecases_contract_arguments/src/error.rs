//! Serializer Errors

use infrastructure_abi_codec::CodecError;
use thiserror::Error;

/// Argument (de)serialization errors
///
/// Every failure aborts the whole call; no partial list is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializerError {
    /// Number of buffers (or values) differs from the number of descriptors
    #[error("arity mismatch: expected {expected} arguments, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    /// A value's type differs from the endpoint parameter it is passed for
    #[error("argument {index}: expected type {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
    /// Encoding or decoding of one argument failed
    #[error("argument {index}: {source}")]
    Codec {
        index: usize,
        #[source]
        source: CodecError,
    },
    /// A segment of an argument string is not valid hex
    #[error("argument {index}: malformed value: invalid hex ({reason})")]
    InvalidHex { index: usize, reason: String },
}

impl SerializerError {
    /// Index of the argument that failed, when the failure is per-argument
    pub fn index(&self) -> Option<usize> {
        match self {
            SerializerError::ArityMismatch { .. } => None,
            SerializerError::TypeMismatch { index, .. }
            | SerializerError::Codec { index, .. }
            | SerializerError::InvalidHex { index, .. } => Some(*index),
        }
    }

    /// Whether this error belongs to the malformed-value class
    pub fn is_malformed(&self) -> bool {
        match self {
            SerializerError::Codec { source, .. } => source.is_malformed(),
            SerializerError::InvalidHex { .. } => true,
            _ => false,
        }
    }
}
