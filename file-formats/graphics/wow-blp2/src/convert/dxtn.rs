//! Adapter around an external S3TC block decompressor.
//!
//! The codec writes four bytes per pixel in its own channel order. Those bytes
//! land in canonical pixel slots as is, and red and blue are then exchanged
//! exactly once to reach the canonical BGRA layout.

use super::{pixel_count, require};
use crate::error::DataError;
use crate::types::{Bgra, DxtnFormat};
use log::*;

/// External S3TC decompressor.
///
/// Implementations must be pure: the same blocks always produce the same
/// pixels, and no state is shared between calls.
pub trait BlockDecoder {
    /// Compressed bytes needed for a `width` x `height` image
    fn compressed_size(&self, format: DxtnFormat, width: usize, height: usize) -> usize;

    /// Decompress `blocks` into `width * height` pixels, four bytes each, in the
    /// codec's channel order
    fn decompress(&self, format: DxtnFormat, blocks: &[u8], width: usize, height: usize)
    -> Vec<u8>;
}

/// [`BlockDecoder`] backed by the `texpresso` crate, which emits RGBA
#[derive(Debug, Clone, Copy, Default)]
pub struct Texpresso;

impl From<DxtnFormat> for texpresso::Format {
    fn from(v: DxtnFormat) -> Self {
        match v {
            DxtnFormat::Dxt1 => Self::Bc1,
            DxtnFormat::Dxt3 => Self::Bc2,
            DxtnFormat::Dxt5 => Self::Bc3,
        }
    }
}

impl BlockDecoder for Texpresso {
    fn compressed_size(&self, format: DxtnFormat, width: usize, height: usize) -> usize {
        texpresso::Format::from(format).compressed_size(width, height)
    }

    fn decompress(
        &self,
        format: DxtnFormat,
        blocks: &[u8],
        width: usize,
        height: usize,
    ) -> Vec<u8> {
        let mut output = vec![0; width * height * 4];
        texpresso::Format::from(format).decompress(blocks, width, height, &mut output);
        output
    }
}

/// Decompress a block-compressed mipmap into canonical pixels.
pub fn decode_dxtn<D>(
    codec: &D,
    format: DxtnFormat,
    window: &[u8],
    width: u32,
    height: u32,
) -> Result<Vec<Bgra>, DataError>
where
    D: BlockDecoder + ?Sized,
{
    let n = pixel_count(width, height)?;
    if n == 0 {
        return Ok(Vec::new());
    }
    let output_len = n
        .checked_mul(4)
        .ok_or(DataError::DimensionsOverflow { width, height })?;

    let (w, h) = (width as usize, height as usize);
    let blocks = require(window, codec.compressed_size(format, w, h))?;
    trace!(
        "{format:?}: {} block bytes for {width}x{height}",
        blocks.len()
    );

    let output = codec.decompress(format, blocks, w, h);
    if output.len() != output_len {
        error!(
            "{format:?} codec returned {} bytes for {width}x{height}",
            output.len()
        );
        return Err(DataError::BlockCodecOutput {
            expected: output_len,
            actual: output.len(),
        });
    }

    let (pixels, _) = output.as_chunks::<4>();
    Ok(pixels
        .iter()
        .map(|&bytes| Bgra::from_bytes(bytes).swap_red_blue())
        .collect())
}
