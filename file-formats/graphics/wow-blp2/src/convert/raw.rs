use super::{pixel_count, require};
use crate::error::DataError;
use crate::types::Bgra;

/// Raw BGRA mipmaps already hold final pixels, four bytes each.
pub fn raw_bgra(window: &[u8], width: u32, height: u32) -> Result<Vec<Bgra>, DataError> {
    let n = pixel_count(width, height)?;
    let expected = n
        .checked_mul(4)
        .ok_or(DataError::DimensionsOverflow { width, height })?;
    let (pixels, _) = require(window, expected)?.as_chunks::<4>();

    Ok(pixels.iter().copied().map(Bgra::from_bytes).collect())
}
