//! Argument Serializer Module
//!
//! Bridges "one argument or result per standalone buffer" and "one typed value
//! per ordered type descriptor". Each buffer is encoded and decoded in
//! top-level mode, independently of its neighbours.
//!
//! Contract-call data carries arguments as `@`-separated hex segments; the
//! `*_string` functions read and write that form.

use entities_abi_types::{TypeDescriptor, TypedValue};
use infrastructure_abi_codec::BinaryCodec;
use tracing::debug;

use crate::endpoint::EndpointDefinition;
use crate::error::SerializerError;

/// Separator between hex-encoded arguments in call data
pub const ARGUMENTS_SEPARATOR: &str = "@";

/// Argument (de)serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgSerializer {
    codec: BinaryCodec,
}

impl ArgSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codec(codec: BinaryCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &BinaryCodec {
        &self.codec
    }

    /// Top-level encode each value, preserving order
    pub fn values_to_buffers(
        &self,
        values: &[TypedValue],
    ) -> Result<Vec<Vec<u8>>, SerializerError> {
        debug!(count = values.len(), "serializing arguments");

        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                self.codec
                    .encode_top_level(value)
                    .map_err(|source| SerializerError::Codec { index, source })
            })
            .collect()
    }

    /// Top-level decode buffer `i` against descriptor `i`
    ///
    /// # Returns
    /// * `Ok(values)` - One value per buffer, in order
    /// * `Err(SerializerError::ArityMismatch)` - Lengths differ; nothing is decoded
    /// * `Err(SerializerError::Codec)` - The first buffer that failed to decode
    pub fn buffers_to_values<B: AsRef<[u8]>>(
        &self,
        buffers: &[B],
        descriptors: &[TypeDescriptor],
    ) -> Result<Vec<TypedValue>, SerializerError> {
        if buffers.len() != descriptors.len() {
            return Err(SerializerError::ArityMismatch {
                expected: descriptors.len(),
                actual: buffers.len(),
            });
        }

        debug!(count = buffers.len(), "deserializing arguments");

        buffers
            .iter()
            .zip(descriptors)
            .enumerate()
            .map(|(index, (buffer, ty))| {
                self.codec
                    .decode_top_level(buffer.as_ref(), ty)
                    .map_err(|source| SerializerError::Codec { index, source })
            })
            .collect()
    }

    /// Encode values as `@`-joined hex; an empty list gives an empty string
    pub fn values_to_string(&self, values: &[TypedValue]) -> Result<String, SerializerError> {
        let buffers = self.values_to_buffers(values)?;
        let segments: Vec<String> = buffers.iter().map(hex::encode).collect();
        Ok(segments.join(ARGUMENTS_SEPARATOR))
    }

    /// Decode `@`-joined hex arguments
    ///
    /// An empty string stands for either zero arguments or one argument with
    /// an empty encoding (`false`, `0`, empty bytes, nothing); the number of
    /// descriptors decides which.
    pub fn string_to_values(
        &self,
        arguments: &str,
        descriptors: &[TypeDescriptor],
    ) -> Result<Vec<TypedValue>, SerializerError> {
        let buffers = if arguments.is_empty() && descriptors.len() == 1 {
            vec![Vec::new()]
        } else {
            string_to_buffers(arguments)?
        };
        self.buffers_to_values(&buffers, descriptors)
    }

    /// Encode call arguments after checking them against the endpoint's inputs
    pub fn encode_call_arguments(
        &self,
        endpoint: &EndpointDefinition,
        values: &[TypedValue],
    ) -> Result<Vec<Vec<u8>>, SerializerError> {
        let expected = endpoint.input();
        if values.len() != expected.len() {
            return Err(SerializerError::ArityMismatch {
                expected: expected.len(),
                actual: values.len(),
            });
        }

        for (index, (value, parameter)) in values.iter().zip(expected).enumerate() {
            let actual = value.type_descriptor();
            if &actual != parameter.type_descriptor() {
                return Err(SerializerError::TypeMismatch {
                    index,
                    expected: parameter.type_descriptor().to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        debug!(endpoint = endpoint.name(), "encoding call arguments");
        self.values_to_buffers(values)
    }

    /// Decode call results against the endpoint's outputs
    pub fn decode_call_results<B: AsRef<[u8]>>(
        &self,
        endpoint: &EndpointDefinition,
        buffers: &[B],
    ) -> Result<Vec<TypedValue>, SerializerError> {
        debug!(endpoint = endpoint.name(), "decoding call results");
        self.buffers_to_values(buffers, &endpoint.output_types())
    }
}

/// Split `@`-joined hex into raw buffers
pub fn string_to_buffers(arguments: &str) -> Result<Vec<Vec<u8>>, SerializerError> {
    if arguments.is_empty() {
        return Ok(Vec::new());
    }

    arguments
        .split(ARGUMENTS_SEPARATOR)
        .enumerate()
        .map(|(index, segment)| {
            hex::decode(segment).map_err(|e| SerializerError::InvalidHex {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
