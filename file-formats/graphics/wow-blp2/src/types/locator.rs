use custom_debug::Debug;
use std::ops::Range;
use wow_utils::debug;

/// Maximum amount of mipmap levels a BLP2 header can describe
pub const MAX_MIPMAPS: usize = 16;

/// Offsets and sizes of every mipmap level inside the BLP2 file.
///
/// Levels `0..N` come first; the remaining entries are zero. `N` is the count
/// of leading non-zero offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MipmapLocator {
    #[debug(with = debug::trimmed_collection_fmt)]
    offsets: [u32; MAX_MIPMAPS],
    #[debug(with = debug::trimmed_collection_fmt)]
    sizes: [u32; MAX_MIPMAPS],
}

impl MipmapLocator {
    /// Wrap the raw tables read from the header
    pub const fn new(offsets: [u32; MAX_MIPMAPS], sizes: [u32; MAX_MIPMAPS]) -> Self {
        Self { offsets, sizes }
    }

    /// Byte offsets to each mipmap level
    pub const fn offsets(&self) -> &[u32; MAX_MIPMAPS] {
        &self.offsets
    }

    /// Byte sizes of each mipmap level
    pub const fn sizes(&self) -> &[u32; MAX_MIPMAPS] {
        &self.sizes
    }

    /// Number of leading non-zero offsets
    pub fn count(&self) -> usize {
        self.offsets.iter().take_while(|&&offset| offset != 0).count()
    }

    /// `(offset, size)` for the given level
    pub fn entry(&self, level: usize) -> Option<(u32, u32)> {
        Some((*self.offsets.get(level)?, *self.sizes.get(level)?))
    }
}

/// Where a mipmap lives in the input and how large it is once decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipmapWindow {
    /// Level actually used after clamping
    pub level: usize,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Absolute byte offset in the input
    pub offset: u32,
    /// Byte length of the mipmap payload
    pub size: u32,
}

impl MipmapWindow {
    /// Byte range of the payload within the input buffer
    pub fn byte_range(&self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.size as usize
    }

    /// Number of pixels the mipmap decodes to
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
