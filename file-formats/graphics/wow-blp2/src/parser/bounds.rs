//! Bounds checking for mipmap windows

use crate::error::DataError;
use log::error;

/// Check that `offset + size` stays within an input of `input_len` bytes
pub fn check_bounds(input_len: usize, offset: u32, size: u32) -> Result<(), DataError> {
    let end = u64::from(offset) + u64::from(size);
    if end > input_len as u64 {
        error!("Mipmap window {offset}+{size} is out of bounds! {end} > {input_len}");
        return Err(DataError::TruncatedMipData {
            requested_offset: offset,
            requested_length: size,
            available_length: input_len,
        });
    }

    Ok(())
}

/// Get a slice from input data after bounds checking
pub fn get_bounded_slice(input: &[u8], offset: u32, size: u32) -> Result<&[u8], DataError> {
    check_bounds(input.len(), offset, size)?;
    let start = offset as usize;
    input
        .get(start..start + size as usize)
        .ok_or(DataError::TruncatedMipData {
            requested_offset: offset,
            requested_length: size,
            available_length: input.len(),
        })
}
