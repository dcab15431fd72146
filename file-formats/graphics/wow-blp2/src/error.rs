use thiserror::Error;

/// Errors raised while validating the magic and the fixed-size header
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input is shorter than the 4-byte magic
    #[error("Invalid BLP file: too short to contain magic ({actual} bytes, {expected} expected)")]
    TooShortForMagic {
        /// Bytes required for the magic
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },
    /// Input carries the legacy `BLP1` magic
    #[error("Invalid BLP file: unsupported format BLP1")]
    UnsupportedVersion,
    /// Input carries neither `BLP1` nor `BLP2`
    #[error("Invalid BLP file: unknown magic \"{}\"", .magic.escape_ascii())]
    UnknownMagic {
        /// The first four bytes of the input
        magic: [u8; 4],
    },
    /// Input is shorter than the fixed BLP2 header
    #[error("Invalid BLP2 file: too short to contain header ({actual} bytes, {expected} expected)")]
    TooShortForHeader {
        /// Bytes required for the header
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },
}

/// Errors raised while locating or unpacking mipmap data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The offsets table declares no mipmap at all
    #[error("Invalid BLP2 file: the header declares no mipmap levels")]
    NoMipmaps,
    /// The mipmap window reaches past the end of the input
    #[error(
        "Invalid BLP2 file: mipmap data is truncated (offset {requested_offset} + length {requested_length} exceeds {available_length} bytes)"
    )]
    TruncatedMipData {
        /// Offset declared in the header
        requested_offset: u32,
        /// Length declared in the header
        requested_length: u32,
        /// Size of the whole input buffer
        available_length: usize,
    },
    /// The mipmap window is smaller than its format requires
    #[error("Invalid BLP2 mipmap: too short ({expected} expected, {actual} provided)")]
    TruncatedPixelData {
        /// Bytes the format requires for the mipmap dimensions
        expected: usize,
        /// Bytes present in the mipmap window
        actual: usize,
    },
    /// Byte counts for the mipmap dimensions do not fit in `usize`
    #[error("Invalid BLP2 mipmap: dimensions {width}x{height} are too large")]
    DimensionsOverflow {
        /// Mipmap width in pixels
        width: u32,
        /// Mipmap height in pixels
        height: u32,
    },
    /// The block codec produced a buffer of the wrong size
    #[error("Block decompression produced {actual} bytes, {expected} expected")]
    BlockCodecOutput {
        /// Bytes expected from the codec (`width * height * 4`)
        expected: usize,
        /// Bytes the codec returned
        actual: usize,
    },
}

/// Any failure of the decoding pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Magic or header is malformed
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Mipmap data is missing or malformed
    #[error(transparent)]
    Data(#[from] DataError),
    /// The header classifies to a format with no unpack routine
    #[error("Unsupported BLP2 format: {format_name}")]
    UnsupportedFormat {
        /// Friendly name of the classified format
        format_name: String,
    },
}

/// Errors that appear when loading from the file system
#[derive(Debug, Error)]
pub enum LoadError {
    /// File system error when reading the BLP file
    #[error("File system error with file {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
    /// The file was read but could not be decoded
    #[error(transparent)]
    Decode(#[from] Error),
}

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;
