//! Little-endian byte reading for the fixed BLP2 header
//!
//! Fields are decoded one by one from a cursor instead of overlaying the
//! buffer onto a struct, so the result does not depend on host endianness
//! or alignment.

use crate::error::FormatError;

use super::ParseResult;

/// Trait for reading binary data from a byte slice
pub trait ByteReader {
    /// Read exactly `N` bytes
    fn read_array<const N: usize>(&mut self) -> ParseResult<[u8; N]>;

    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self) -> ParseResult<u8> {
        let [value] = self.read_array()?;
        Ok(value)
    }

    /// Read a single unsigned 32-bit integer in little-endian format
    fn read_u32_le(&mut self) -> ParseResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Read `N` consecutive little-endian unsigned 32-bit integers
    fn read_u32_array<const N: usize>(&mut self) -> ParseResult<[u32; N]> {
        let mut values = [0; N];
        for value in &mut values {
            *value = self.read_u32_le()?;
        }
        Ok(values)
    }
}

/// A cursor for reading binary data from a byte slice
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the beginning of the data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl ByteReader for Cursor<'_> {
    fn read_array<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        let end = self.position + N;
        let bytes = self
            .data
            .get(self.position..end)
            .and_then(|slice| <[u8; N]>::try_from(slice).ok())
            .ok_or(FormatError::TooShortForHeader {
                expected: end,
                actual: self.data.len(),
            })?;
        self.position = end;
        Ok(bytes)
    }
}
