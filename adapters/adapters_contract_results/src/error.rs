//! Query Response Errors

use thiserror::Error;
use usecases_contract_arguments::SerializerError;

/// Errors raised while interpreting a contract query response
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryResponseError {
    /// A return-data item is not valid base64
    #[error("return data item {index} is not valid base64: {reason}")]
    InvalidBase64 { index: usize, reason: String },
    /// The payload has a field of the wrong shape
    #[error("invalid query payload: {0}")]
    InvalidPayload(String),
    /// Typed output could not be decoded
    #[error(transparent)]
    Serializer(#[from] SerializerError),
}
