use super::DecodedMipmap;
use crate::error::{DataError, Error};
use ::image::RgbaImage;

/// Turn a decoded mipmap into an RGBA image buffer.
///
/// Rows keep their decoded order: row 0 of the mipmap is the top row of the
/// image buffer.
pub fn to_rgba_image(mipmap: &DecodedMipmap) -> Result<RgbaImage, Error> {
    let (width, height) = (mipmap.width(), mipmap.height());
    let overflow = DataError::DimensionsOverflow { width, height };

    let mut raw = Vec::with_capacity(mipmap.pixels().len() * 4);
    if width > 0 && height > 0 {
        for row in mipmap.pixels().chunks_exact(width as usize) {
            raw.extend(row.iter().flat_map(|pixel| pixel.to_rgba()));
        }
    }

    RgbaImage::from_raw(width, height, raw).ok_or(Error::Data(overflow))
}
