//! Assembles BLP2 files in memory

use wow_blp2::{HEADER_SIZE, MAX_MIPMAPS, PALETTE_SIZE};

pub struct Blp2Builder {
    content_type: u32,
    encoding: u8,
    alpha_depth: u8,
    alpha_encoding: u8,
    width: u32,
    height: u32,
    palette: [[u8; 4]; PALETTE_SIZE],
    mipmaps: Vec<Vec<u8>>,
}

impl Blp2Builder {
    pub fn new(encoding: u8, alpha_depth: u8, alpha_encoding: u8, width: u32, height: u32) -> Self {
        Self {
            content_type: 1,
            encoding,
            alpha_depth,
            alpha_encoding,
            width,
            height,
            palette: [[0; 4]; PALETTE_SIZE],
            mipmaps: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: u32) -> Self {
        self.content_type = content_type;
        self
    }

    /// Set one palette entry, `B, G, R, A`
    pub fn color(mut self, index: u8, bgra: [u8; 4]) -> Self {
        self.palette[usize::from(index)] = bgra;
        self
    }

    pub fn mipmap(mut self, data: Vec<u8>) -> Self {
        self.mipmaps.push(data);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        assert!(self.mipmaps.len() <= MAX_MIPMAPS);

        let mut data = Vec::with_capacity(HEADER_SIZE);
        data.extend_from_slice(b"BLP2");
        data.extend_from_slice(&self.content_type.to_le_bytes());
        data.extend_from_slice(&[
            self.encoding,
            self.alpha_depth,
            self.alpha_encoding,
            u8::from(self.mipmaps.len() > 1),
        ]);
        data.extend_from_slice(&self.width.to_le_bytes());
        data.extend_from_slice(&self.height.to_le_bytes());

        let mut offsets = [0u32; MAX_MIPMAPS];
        let mut sizes = [0u32; MAX_MIPMAPS];
        let mut next = HEADER_SIZE;
        for (i, mipmap) in self.mipmaps.iter().enumerate() {
            offsets[i] = next as u32;
            sizes[i] = mipmap.len() as u32;
            next += mipmap.len();
        }
        for value in offsets.iter().chain(&sizes) {
            data.extend_from_slice(&value.to_le_bytes());
        }
        for color in &self.palette {
            data.extend_from_slice(color);
        }
        assert_eq!(data.len(), HEADER_SIZE);

        for mipmap in &self.mipmaps {
            data.extend_from_slice(mipmap);
        }
        data
    }
}

/// A DXT1 block where every texel is opaque pure red
pub const DXT1_RED: [u8; 8] = [0x00, 0xF8, 0x00, 0x00, 0, 0, 0, 0];

/// A DXT5 block where every texel is opaque pure blue
pub const DXT5_BLUE: [u8; 16] = [
    0xFF, 0x00, 0, 0, 0, 0, 0, 0, // alpha endpoints and indices
    0x1F, 0x00, 0x00, 0x00, 0, 0, 0, 0, // colour endpoints and indices
];
