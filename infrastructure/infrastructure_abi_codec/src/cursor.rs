//! Read Cursor
//!
//! A shared, advancing read position over one borrowed buffer. Nested decoders
//! read through the same cursor, so arrays (and arrays of arrays) decode
//! without slicing or copying the input.

use crate::error::CodecError;

/// Size of the big-endian length prefix used by length-framed nested encodings
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Read cursor over a byte buffer
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Read exactly `count` bytes and advance
    ///
    /// On underflow the cursor does not move.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(CodecError::Underflow {
                needed: count,
                remaining,
            });
        }
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..self.position])
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a 4-byte big-endian unsigned length prefix
    pub fn read_length_prefix(&mut self) -> Result<usize, CodecError> {
        let bytes = self.read_bytes(LENGTH_PREFIX_SIZE)?;
        let length = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        Ok(length as usize)
    }

    /// Read a length prefix followed by that many bytes
    ///
    /// Returns the payload and the total bytes consumed (prefix included).
    pub fn read_length_prefixed(&mut self) -> Result<(&'a [u8], usize), CodecError> {
        let start = self.position;
        let length = self.read_length_prefix()?;
        match self.read_bytes(length) {
            Ok(payload) => Ok((payload, LENGTH_PREFIX_SIZE + length)),
            Err(err) => {
                self.position = start;
                Err(err)
            }
        }
    }
}

/// Append a 4-byte big-endian length prefix followed by `payload`
pub fn write_length_prefixed(out: &mut Vec<u8>, payload: &[u8]) -> Result<(), CodecError> {
    let length = u32::try_from(payload.len()).map_err(|_| {
        CodecError::malformed(format!(
            "payload of {} bytes exceeds the 4-byte length prefix",
            payload.len()
        ))
    })?;
    out.reserve(LENGTH_PREFIX_SIZE + payload.len());
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_advances() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_u8().unwrap(), 3);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_underflow_does_not_advance() {
        let data = [1u8, 2, 3];
        let mut cursor = Cursor::new(&data);
        assert_eq!(
            cursor.read_bytes(8),
            Err(CodecError::Underflow { needed: 8, remaining: 3 })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_length_prefixed() {
        let data = [0u8, 0, 0, 2, 0xAA, 0xBB, 0xCC];
        let mut cursor = Cursor::new(&data);
        let (payload, consumed) = cursor.read_length_prefixed().unwrap();
        assert_eq!(payload, &[0xAA, 0xBB]);
        assert_eq!(consumed, 6);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_length_prefixed_underflow_restores_position() {
        let data = [0u8, 0, 0, 9, 0xAA];
        let mut cursor = Cursor::new(&data);
        assert_eq!(
            cursor.read_length_prefixed(),
            Err(CodecError::Underflow { needed: 9, remaining: 1 })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_write_length_prefixed() {
        let mut out = vec![0xFF];
        write_length_prefixed(&mut out, b"abc").unwrap();
        assert_eq!(out, vec![0xFF, 0, 0, 0, 3, b'a', b'b', b'c']);
    }
}
