use std::fmt;

/// Value of the header `type` field for JPEG payloads
pub const CONTENT_JPEG: u32 = 0;

/// How pixels are stored, as declared by the header `encoding` byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Encoding {
    /// 8-bit palette indices followed by an optional alpha plane
    Uncompressed,
    /// S3TC blocks, variant selected by the alpha encoding
    Dxtc,
    /// 32-bit BGRA pixels stored as is
    RawBgra,
}

impl Encoding {
    /// Value stored in the file
    pub const fn raw(self) -> u8 {
        match self {
            Self::Uncompressed => 1,
            Self::Dxtc => 2,
            Self::RawBgra => 3,
        }
    }
}

impl TryFrom<u8> for Encoding {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Uncompressed),
            2 => Ok(Self::Dxtc),
            3 => Ok(Self::RawBgra),
            _ => Err(value),
        }
    }
}

/// Which S3TC algorithm compresses the blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxtnFormat {
    /// DXT1 compression (BC1)
    Dxt1,
    /// DXT3 compression (BC2)
    Dxt3,
    /// DXT5 compression (BC3)
    Dxt5,
}

impl DxtnFormat {
    /// Value of the header `alphaEncoding` byte selecting this algorithm
    pub const fn alpha_encoding(self) -> u8 {
        match self {
            Self::Dxt1 => 0,
            Self::Dxt3 => 1,
            Self::Dxt5 => 7,
        }
    }

    /// Returns the block size in bytes for this DXT format
    pub const fn block_size(self) -> usize {
        match self {
            Self::Dxt1 => 8,
            Self::Dxt3 | Self::Dxt5 => 16,
        }
    }
}

impl TryFrom<u8> for DxtnFormat {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dxt1),
            1 => Ok(Self::Dxt3),
            7 => Ok(Self::Dxt5),
            _ => Err(value),
        }
    }
}

/// Canonical classification of a BLP2 header.
///
/// Combines the `type`, `encoding`, `alphaDepth` and `alphaEncoding` fields into
/// the key that selects an unpack routine. Classification itself never fails:
/// combinations without a routine become [`BlpFormat::Unknown`] and are only
/// rejected when pixels are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlpFormat {
    /// JPEG payload
    Jpeg,
    /// Palette indices, alpha forced opaque
    PalettedNoAlpha,
    /// Palette indices with a 1-bit alpha bitmap
    PalettedAlpha1,
    /// Palette indices with 4-bit alpha nibbles
    PalettedAlpha4,
    /// Palette indices with 8-bit alpha bytes
    PalettedAlpha8,
    /// 32-bit BGRA pixels
    RawBgra,
    /// DXT1 without alpha
    Dxt1NoAlpha,
    /// DXT1 with 1-bit alpha
    Dxt1Alpha1,
    /// DXT3 declared with 4-bit alpha
    Dxt3Alpha4,
    /// DXT3 declared with 8-bit alpha
    Dxt3Alpha8,
    /// DXT5 with 8-bit alpha
    Dxt5Alpha8,
    /// Any combination without a decoder
    Unknown {
        /// Raw `encoding` byte
        encoding: u8,
        /// Raw `alphaDepth` byte
        alpha_depth: u8,
        /// Raw `alphaEncoding` byte
        alpha_encoding: u8,
    },
}

impl BlpFormat {
    /// Every format that has a friendly name
    pub const KNOWN: [Self; 11] = [
        Self::Jpeg,
        Self::PalettedNoAlpha,
        Self::PalettedAlpha1,
        Self::PalettedAlpha4,
        Self::PalettedAlpha8,
        Self::RawBgra,
        Self::Dxt1NoAlpha,
        Self::Dxt1Alpha1,
        Self::Dxt3Alpha4,
        Self::Dxt3Alpha8,
        Self::Dxt5Alpha8,
    ];

    /// Classify raw header fields.
    ///
    /// Uncompressed images ignore `alpha_encoding`, raw BGRA images ignore both
    /// alpha fields, and everything else is treated as block compressed.
    pub fn classify(content_type: u32, encoding: u8, alpha_depth: u8, alpha_encoding: u8) -> Self {
        if content_type == CONTENT_JPEG {
            return Self::Jpeg;
        }

        match Encoding::try_from(encoding) {
            Ok(Encoding::Uncompressed) => match alpha_depth {
                0 => Self::PalettedNoAlpha,
                1 => Self::PalettedAlpha1,
                4 => Self::PalettedAlpha4,
                8 => Self::PalettedAlpha8,
                _ => Self::Unknown {
                    encoding,
                    alpha_depth,
                    alpha_encoding: 0,
                },
            },
            Ok(Encoding::RawBgra) => Self::RawBgra,
            _ => match (encoding, alpha_depth, DxtnFormat::try_from(alpha_encoding)) {
                (2, 0, Ok(DxtnFormat::Dxt1)) => Self::Dxt1NoAlpha,
                (2, 1, Ok(DxtnFormat::Dxt1)) => Self::Dxt1Alpha1,
                (2, 4, Ok(DxtnFormat::Dxt3)) => Self::Dxt3Alpha4,
                (2, 8, Ok(DxtnFormat::Dxt3)) => Self::Dxt3Alpha8,
                (2, 8, Ok(DxtnFormat::Dxt5)) => Self::Dxt5Alpha8,
                _ => Self::Unknown {
                    encoding,
                    alpha_depth,
                    alpha_encoding,
                },
            },
        }
    }

    /// Human readable description, `"Unknown"` for unrecognised combinations
    pub const fn friendly_name(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::PalettedNoAlpha => "Uncompressed paletted image, no alpha",
            Self::PalettedAlpha1 => "Uncompressed paletted image, 1-bit alpha",
            Self::PalettedAlpha4 => "Uncompressed paletted image, 4-bit alpha",
            Self::PalettedAlpha8 => "Uncompressed paletted image, 8-bit alpha",
            Self::RawBgra => "Uncompressed raw 32-bit BGRA",
            Self::Dxt1NoAlpha => "DXT1, no alpha",
            Self::Dxt1Alpha1 => "DXT1, 1-bit alpha",
            Self::Dxt3Alpha4 => "DXT3, 4-bit alpha",
            Self::Dxt3Alpha8 => "DXT3, 8-bit alpha",
            Self::Dxt5Alpha8 => "DXT5, 8-bit alpha",
            Self::Unknown { .. } => "Unknown",
        }
    }

    /// Block algorithm for block-compressed formats
    pub const fn dxtn_format(self) -> Option<DxtnFormat> {
        match self {
            Self::Dxt1NoAlpha | Self::Dxt1Alpha1 => Some(DxtnFormat::Dxt1),
            Self::Dxt3Alpha4 | Self::Dxt3Alpha8 => Some(DxtnFormat::Dxt3),
            Self::Dxt5Alpha8 => Some(DxtnFormat::Dxt5),
            _ => None,
        }
    }

    /// Whether the image colours come from the header palette
    pub const fn is_paletted(self) -> bool {
        matches!(
            self,
            Self::PalettedNoAlpha
                | Self::PalettedAlpha1
                | Self::PalettedAlpha4
                | Self::PalettedAlpha8
        )
    }

    /// Packed `encoding << 16 | alphaDepth << 8 | alphaEncoding` form, 0 for JPEG
    pub const fn code(self) -> u32 {
        const fn pack(encoding: u8, alpha_depth: u8, alpha_encoding: u8) -> u32 {
            ((encoding as u32) << 16) | ((alpha_depth as u32) << 8) | alpha_encoding as u32
        }

        let uncompressed = Encoding::Uncompressed.raw();
        let dxtc = Encoding::Dxtc.raw();
        match self {
            Self::Jpeg => 0,
            Self::PalettedNoAlpha => pack(uncompressed, 0, 0),
            Self::PalettedAlpha1 => pack(uncompressed, 1, 0),
            Self::PalettedAlpha4 => pack(uncompressed, 4, 0),
            Self::PalettedAlpha8 => pack(uncompressed, 8, 0),
            Self::RawBgra => pack(Encoding::RawBgra.raw(), 0, 0),
            Self::Dxt1NoAlpha => pack(dxtc, 0, 0),
            Self::Dxt1Alpha1 => pack(dxtc, 1, 0),
            Self::Dxt3Alpha4 => pack(dxtc, 4, 1),
            Self::Dxt3Alpha8 => pack(dxtc, 8, 1),
            Self::Dxt5Alpha8 => pack(dxtc, 8, 7),
            Self::Unknown {
                encoding,
                alpha_depth,
                alpha_encoding,
            } => pack(encoding, alpha_depth, alpha_encoding),
        }
    }
}

impl fmt::Display for BlpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}
