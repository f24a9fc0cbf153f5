//! Numerical Codec
//!
//! Encodes arbitrary-precision integers against a declared [`NumericalType`].
//!
//! | Width | Nested | Top-level |
//! |---|---|---|
//! | fixed `n` bits | `n / 8` bytes, big-endian two's complement | minimal form |
//! | unbounded | 4-byte length prefix + minimal form | minimal form |
//!
//! The value must fit the declared width when encoding; nothing is truncated.

use entities_abi_types::{NumericalType, NumericalValue, NumericalWidth};
use malachite::Integer;

use crate::config::CodecConfig;
use crate::cursor::{write_length_prefixed, Cursor};
use crate::error::CodecError;
use crate::integer_bytes::{
    fits, from_be_bytes, is_minimal, to_fixed_be_bytes, to_minimal_be_bytes,
};

/// Numerical codec
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericalBinaryCodec {
    config: CodecConfig,
}

impl NumericalBinaryCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn decode_nested(
        &self,
        cursor: &mut Cursor<'_>,
        ty: NumericalType,
    ) -> Result<(NumericalValue, usize), CodecError> {
        match ty.width() {
            NumericalWidth::Fixed(bits) => {
                let size = (bits / 8) as usize;
                let bytes = cursor.read_bytes(size)?;
                let value = from_be_bytes(bytes, ty.is_signed())?;
                Ok((NumericalValue::new(ty, value), size))
            }
            NumericalWidth::Unbounded => {
                let (payload, consumed) = cursor.read_length_prefixed()?;
                let value = self.decode_minimal(payload, ty)?;
                Ok((NumericalValue::new(ty, value), consumed))
            }
        }
    }

    pub fn decode_top_level(
        &self,
        data: &[u8],
        ty: NumericalType,
    ) -> Result<NumericalValue, CodecError> {
        let value = self.decode_minimal(data, ty)?;
        Ok(NumericalValue::new(ty, value))
    }

    pub fn encode_nested(&self, value: &NumericalValue) -> Result<Vec<u8>, CodecError> {
        let ty = value.numerical_type();
        check_fits(value.value(), ty)?;

        match ty.width() {
            NumericalWidth::Fixed(bits) => to_fixed_be_bytes(value.value(), (bits / 8) as usize)
                .ok_or_else(|| out_of_range(value.value(), ty)),
            NumericalWidth::Unbounded => {
                let payload = to_minimal_be_bytes(value.value(), ty.is_signed());
                let mut out = Vec::new();
                write_length_prefixed(&mut out, &payload)?;
                Ok(out)
            }
        }
    }

    pub fn encode_top_level(&self, value: &NumericalValue) -> Result<Vec<u8>, CodecError> {
        let ty = value.numerical_type();
        check_fits(value.value(), ty)?;
        Ok(to_minimal_be_bytes(value.value(), ty.is_signed()))
    }

    fn decode_minimal(&self, data: &[u8], ty: NumericalType) -> Result<Integer, CodecError> {
        if self.config.strict_canonical && !is_minimal(data, ty.is_signed()) {
            return Err(CodecError::malformed(format!(
                "non-canonical {} encoding of {} bytes",
                ty,
                data.len()
            )));
        }

        let value = from_be_bytes(data, ty.is_signed())?;
        if !fits(&value, ty) {
            return Err(out_of_range(&value, ty));
        }
        Ok(value)
    }
}

fn check_fits(value: &Integer, ty: NumericalType) -> Result<(), CodecError> {
    if fits(value, ty) {
        Ok(())
    } else {
        Err(out_of_range(value, ty))
    }
}

fn out_of_range(value: &Integer, ty: NumericalType) -> CodecError {
    CodecError::ValueOutOfRange {
        value: value.to_string(),
        ty: ty.to_string(),
    }
}
