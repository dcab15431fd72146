/// One decoded pixel in the canonical blue, green, red, alpha order.
///
/// This is the layout BLP2 stores its palette and raw BGRA mipmaps in, and the
/// layout every decode path converges on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bgra {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
    /// Alpha channel
    pub a: u8,
}

impl Bgra {
    /// Build a pixel from its channels in storage order
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Read four bytes laid out as B, G, R, A
    pub const fn from_bytes([b, g, r, a]: [u8; 4]) -> Self {
        Self { b, g, r, a }
    }

    /// Bytes in B, G, R, A order
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Bytes in R, G, B, A order, as most image encoders expect
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Exchange the red and blue channels
    pub const fn swap_red_blue(self) -> Self {
        Self {
            b: self.r,
            g: self.g,
            r: self.b,
            a: self.a,
        }
    }
}

/// Flatten pixels into a B, G, R, A byte stream.
pub fn bgra_bytes(pixels: &[Bgra]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_bytes()).collect()
}
