//! Unpack mipmap bytes into canonical BGRA pixels.

mod dxtn;
mod image;
mod palette;
mod raw;

pub use dxtn::{BlockDecoder, Texpresso, decode_dxtn};
pub use self::image::to_rgba_image;
pub use palette::{paletted_alpha1, paletted_alpha4, paletted_alpha8, paletted_no_alpha};
pub use raw::raw_bgra;

use crate::error::{DataError, Error};
use crate::mipmap::locate;
use crate::parser::bounds::get_bounded_slice;
use crate::types::{Bgra, Blp2Header, BlpFormat, Palette, bgra_bytes};
use log::*;

/// One fully decoded mipmap level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMipmap {
    level: usize,
    width: u32,
    height: u32,
    pixels: Vec<Bgra>,
}

impl DecodedMipmap {
    /// Level that was actually decoded, after clamping
    pub fn level(&self) -> usize {
        self.level
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order, in the row order of the file
    pub fn pixels(&self) -> &[Bgra] {
        &self.pixels
    }

    /// Take ownership of the pixels
    pub fn into_pixels(self) -> Vec<Bgra> {
        self.pixels
    }

    /// Pixels flattened to `B, G, R, A` bytes
    pub fn to_bgra_bytes(&self) -> Vec<u8> {
        bgra_bytes(&self.pixels)
    }
}

/// Decode mip `level` of a BLP2 file held in `input` using the default block
/// codec.
pub fn decode_mipmap(
    header: &Blp2Header,
    input: &[u8],
    level: usize,
) -> Result<DecodedMipmap, Error> {
    decode_mipmap_with(header, input, level, &Texpresso)
}

/// Decode mip `level` of a BLP2 file held in `input` with a caller-supplied
/// block codec.
pub fn decode_mipmap_with<D>(
    header: &Blp2Header,
    input: &[u8],
    level: usize,
    codec: &D,
) -> Result<DecodedMipmap, Error>
where
    D: BlockDecoder + ?Sized,
{
    let format = header.format();
    let mip = locate(header, level, input.len())?;
    let window = get_bounded_slice(input, mip.offset, mip.size)?;
    debug!(
        "Decoding {format} mipmap {} ({}x{}, {} bytes)",
        mip.level,
        mip.width,
        mip.height,
        window.len()
    );

    let pixels = decode_pixels(
        format,
        window,
        mip.width,
        mip.height,
        header.palette(),
        codec,
    )?;

    Ok(DecodedMipmap {
        level: mip.level,
        width: mip.width,
        height: mip.height,
        pixels,
    })
}

/// Dispatch a mipmap window to the unpacking rule of its format.
pub fn decode_pixels<D>(
    format: BlpFormat,
    window: &[u8],
    width: u32,
    height: u32,
    palette: &Palette,
    codec: &D,
) -> Result<Vec<Bgra>, Error>
where
    D: BlockDecoder + ?Sized,
{
    let pixels = match format {
        BlpFormat::PalettedNoAlpha => paletted_no_alpha(window, palette, width, height)?,
        BlpFormat::PalettedAlpha1 => paletted_alpha1(window, palette, width, height)?,
        BlpFormat::PalettedAlpha4 => paletted_alpha4(window, palette, width, height)?,
        BlpFormat::PalettedAlpha8 => paletted_alpha8(window, palette, width, height)?,
        BlpFormat::RawBgra => raw_bgra(window, width, height)?,
        BlpFormat::Dxt1NoAlpha
        | BlpFormat::Dxt1Alpha1
        | BlpFormat::Dxt3Alpha4
        | BlpFormat::Dxt3Alpha8
        | BlpFormat::Dxt5Alpha8 => match format.dxtn_format() {
            Some(dxtn) => decode_dxtn(codec, dxtn, window, width, height)?,
            None => return Err(unsupported(format)),
        },
        BlpFormat::Jpeg | BlpFormat::Unknown { .. } => return Err(unsupported(format)),
    };
    Ok(pixels)
}

fn unsupported(format: BlpFormat) -> Error {
    debug!("No unpack rule for {format:?}");
    Error::UnsupportedFormat {
        format_name: format.friendly_name().to_owned(),
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, DataError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(DataError::DimensionsOverflow { width, height })
}

/// The first `expected` bytes of `window`, or a truncation error.
pub(crate) fn require(window: &[u8], expected: usize) -> Result<&[u8], DataError> {
    window.get(..expected).ok_or_else(|| {
        error!(
            "Mipmap window holds {} bytes but {expected} are required",
            window.len()
        );
        DataError::TruncatedPixelData {
            expected,
            actual: window.len(),
        }
    })
}
