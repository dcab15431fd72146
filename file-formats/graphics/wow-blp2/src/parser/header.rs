use super::ParseResult;
use super::reader::{ByteReader, Cursor};
use crate::error::FormatError;
use crate::types::*;
use log::*;

/// Validate the magic and the fixed-size region, then read the header.
pub fn parse_header(input: &[u8]) -> ParseResult<Blp2Header> {
    parse_magic(input)?;

    if input.len() < HEADER_SIZE {
        error!(
            "BLP2 header needs {HEADER_SIZE} bytes but only {} are available",
            input.len()
        );
        return Err(FormatError::TooShortForHeader {
            expected: HEADER_SIZE,
            actual: input.len(),
        });
    }

    let mut reader = Cursor::new(input);
    let _magic: [u8; 4] = reader.read_array()?;
    let content_type = reader.read_u32_le()?;
    let encoding = reader.read_u8()?;
    let alpha_depth = reader.read_u8()?;
    let alpha_encoding = reader.read_u8()?;
    let has_mipmaps = reader.read_u8()?;
    let width = reader.read_u32_le()?;
    let height = reader.read_u32_le()?;
    let offsets = reader.read_u32_array::<MAX_MIPMAPS>()?;
    let sizes = reader.read_u32_array::<MAX_MIPMAPS>()?;
    let palette = parse_palette(&mut reader)?;
    debug_assert_eq!(reader.position(), HEADER_SIZE);

    let mipmap_locator = MipmapLocator::new(offsets, sizes);
    let mipmap_count = mipmap_locator.count();

    trace!(
        "BLP2 header: type={content_type} encoding={encoding} alpha_depth={alpha_depth} \
         alpha_encoding={alpha_encoding} has_mipmaps={has_mipmaps} size={width}x{height} \
         mipmaps={mipmap_count}"
    );
    if has_mipmaps == 0 && mipmap_count > 1 {
        debug!("Header flag says no mipmaps but the offsets table lists {mipmap_count}");
    }

    Ok(Blp2Header {
        content_type,
        encoding,
        alpha_depth,
        alpha_encoding,
        has_mipmaps,
        width,
        height,
        mipmap_locator,
        mipmap_count,
        palette,
    })
}

fn parse_magic(input: &[u8]) -> ParseResult<()> {
    let magic: [u8; 4] = input
        .get(..4)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(FormatError::TooShortForMagic {
            expected: 4,
            actual: input.len(),
        })?;

    match magic {
        BLP2_MAGIC => Ok(()),
        BLP1_MAGIC => {
            error!("BLP1 files are not supported");
            Err(FormatError::UnsupportedVersion)
        }
        _ => Err(FormatError::UnknownMagic { magic }),
    }
}

fn parse_palette(reader: &mut impl ByteReader) -> ParseResult<Palette> {
    let mut colors = [Bgra::default(); PALETTE_SIZE];
    for color in &mut colors {
        *color = Bgra::from_bytes(reader.read_array()?);
    }
    Ok(Palette::new(colors))
}
