use super::format::BlpFormat;
use super::locator::{MAX_MIPMAPS, MipmapLocator};
use super::pixel::Bgra;
use crate::error::DataError;
use custom_debug::Debug;
use wow_utils::debug;

/// Magic of the supported container version
pub const BLP2_MAGIC: [u8; 4] = *b"BLP2";
/// Magic of the legacy container version, recognised only to reject it
pub const BLP1_MAGIC: [u8; 4] = *b"BLP1";
/// Number of colours in the header palette
pub const PALETTE_SIZE: usize = 256;
/// Size of the fixed BLP2 header region in bytes
pub const HEADER_SIZE: usize = 4 + 4 + 4 + 4 + 4 + MAX_MIPMAPS * 4 * 2 + PALETTE_SIZE * 4;

/// The 256 colour lookup table stored in every BLP2 header.
///
/// Only meaningful for paletted formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    #[debug(with = debug::trimmed_collection_fmt)]
    colors: [Bgra; PALETTE_SIZE],
}

impl Palette {
    /// Wrap a full colour table
    pub const fn new(colors: [Bgra; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Colour at a palette index
    pub const fn color(&self, index: u8) -> Bgra {
        self.colors[index as usize]
    }

    /// All colours in index order
    pub const fn colors(&self) -> &[Bgra; PALETTE_SIZE] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([Bgra::default(); PALETTE_SIZE])
    }
}

/// Parsed BLP2 header. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Blp2Header {
    pub(crate) content_type: u32,
    pub(crate) encoding: u8,
    pub(crate) alpha_depth: u8,
    pub(crate) alpha_encoding: u8,
    pub(crate) has_mipmaps: u8,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) mipmap_locator: MipmapLocator,
    pub(crate) mipmap_count: usize,
    pub(crate) palette: Palette,
}

impl Blp2Header {
    /// Header `type` field, 0 for JPEG content
    pub const fn content_type(&self) -> u32 {
        self.content_type
    }

    /// Raw `encoding` byte
    pub const fn encoding(&self) -> u8 {
        self.encoding
    }

    /// Raw `alphaDepth` byte, normally 0, 1, 4 or 8
    pub const fn alpha_depth(&self) -> u8 {
        self.alpha_depth
    }

    /// Raw `alphaEncoding` byte
    pub const fn alpha_encoding(&self) -> u8 {
        self.alpha_encoding
    }

    /// The has-mipmaps flag exactly as stored in the file.
    ///
    /// Decoding never looks at it; [`Self::mipmap_count`] is derived from the
    /// offsets table instead.
    pub const fn has_mipmaps_flag(&self) -> u8 {
        self.has_mipmaps
    }

    /// Width of mipmap level 0 in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of mipmap level 0 in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Offsets and sizes table
    pub const fn mipmap_locator(&self) -> &MipmapLocator {
        &self.mipmap_locator
    }

    /// Number of leading non-zero mipmap offsets, at most 16
    pub const fn mipmap_count(&self) -> usize {
        self.mipmap_count
    }

    /// Colour table for paletted formats
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Classify the header fields
    pub fn format(&self) -> BlpFormat {
        BlpFormat::classify(
            self.content_type,
            self.encoding,
            self.alpha_depth,
            self.alpha_encoding,
        )
    }

    /// Friendly name of [`Self::format`]
    pub fn friendly_format(&self) -> &'static str {
        self.format().friendly_name()
    }

    /// Packed classification code, see [`BlpFormat::code`]
    pub fn format_code(&self) -> u32 {
        self.format().code()
    }

    /// Map a requested level onto an existing one.
    ///
    /// Levels past the last mipmap resolve to the last (smallest) mipmap instead
    /// of failing. Fails only when the header declares no mipmaps at all.
    pub fn clamp_level(&self, level: usize) -> Result<usize, DataError> {
        match self.mipmap_count {
            0 => Err(DataError::NoMipmaps),
            count => Ok(level.min(count - 1)),
        }
    }

    /// `(width, height)` of a mipmap after clamping the level
    pub fn mipmap_size(&self, level: usize) -> Result<(u32, u32), DataError> {
        let level = self.clamp_level(level)?;
        Ok((self.width >> level, self.height >> level))
    }
}
