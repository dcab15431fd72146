use crate::convert::{BlockDecoder, DecodedMipmap, decode_mipmap, decode_mipmap_with};
use crate::error::{LoadError, Result};
use crate::mipmap::mipmap_info;
use crate::parser::parse_header;
use crate::types::{Blp2Header, MipmapWindow};
use log::*;
use std::path::Path;

/// A BLP2 file held in memory together with its parsed header.
#[derive(Debug, Clone)]
pub struct Blp2Texture {
    header: Blp2Header,
    data: Vec<u8>,
}

impl Blp2Texture {
    /// Parse the header of an in-memory BLP2 file.
    ///
    /// Mipmap data is not touched until a level is decoded.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let header = parse_header(&data)?;
        Ok(Self { header, data })
    }

    /// Read a BLP2 file from the file system.
    pub fn load<Q>(path: Q) -> std::result::Result<Self, LoadError>
    where
        Q: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| LoadError::FileSystem(path.to_owned(), e))?;
        debug!("Loaded {} bytes from {}", data.len(), path.display());
        Ok(Self::from_bytes(data)?)
    }

    /// Parsed header
    pub fn header(&self) -> &Blp2Header {
        &self.header
    }

    /// The whole input buffer, header included
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Decode a mip level with the default block codec.
    ///
    /// Levels past the last mipmap are clamped, check
    /// [`DecodedMipmap::level`] for the level actually decoded.
    pub fn decode(&self, level: usize) -> Result<DecodedMipmap> {
        decode_mipmap(&self.header, &self.data, level)
    }

    /// Decode a mip level with a caller-supplied block codec.
    pub fn decode_with<D>(&self, level: usize, codec: &D) -> Result<DecodedMipmap>
    where
        D: BlockDecoder + ?Sized,
    {
        decode_mipmap_with(&self.header, &self.data, level, codec)
    }

    /// Every mip level declared by the header
    pub fn mipmap_info(&self) -> Vec<MipmapWindow> {
        mipmap_info(&self.header)
    }
}
