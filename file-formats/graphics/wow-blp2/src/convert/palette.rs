//! Paletted mipmaps: one palette index per pixel, then an optional alpha plane.

use super::{pixel_count, require};
use crate::error::DataError;
use crate::types::{Bgra, Palette};

/// Every pixel is a palette colour with alpha forced to 255.
///
/// Expects `width * height` index bytes.
pub fn paletted_no_alpha(
    window: &[u8],
    palette: &Palette,
    width: u32,
    height: u32,
) -> Result<Vec<Bgra>, DataError> {
    let n = pixel_count(width, height)?;
    let indices = require(window, n)?;

    Ok(indices
        .iter()
        .map(|&index| palette.color(index).with_alpha(u8::MAX))
        .collect())
}

/// Palette colour plus a 1-bit alpha bitmap.
///
/// The bitmap follows the indices. Bits are read LSB first, bit `i` belongs to
/// pixel `i`; a set bit is opaque.
pub fn paletted_alpha1(
    window: &[u8],
    palette: &Palette,
    width: u32,
    height: u32,
) -> Result<Vec<Bgra>, DataError> {
    let n = pixel_count(width, height)?;
    let expected = alpha_plane_len(n, n.div_ceil(8), width, height)?;
    let (indices, alpha) = require(window, expected)?.split_at(n);

    Ok(indices
        .chunks(8)
        .zip(alpha)
        .flat_map(|(chunk, &bits)| {
            chunk.iter().enumerate().map(move |(bit, &index)| {
                let a = if bits & (1 << bit) != 0 { u8::MAX } else { 0 };
                palette.color(index).with_alpha(a)
            })
        })
        .collect())
}

/// Palette colour plus 4-bit alpha, two pixels per byte.
///
/// The low nibble holds the even pixel. A nibble `v` widens to `v << 4 | v`.
pub fn paletted_alpha4(
    window: &[u8],
    palette: &Palette,
    width: u32,
    height: u32,
) -> Result<Vec<Bgra>, DataError> {
    let n = pixel_count(width, height)?;
    let expected = alpha_plane_len(n, n.div_ceil(2), width, height)?;
    let (indices, alpha) = require(window, expected)?.split_at(n);

    Ok(indices
        .chunks(2)
        .zip(alpha)
        .flat_map(|(pair, &nibbles)| {
            pair.iter().enumerate().map(move |(half, &index)| {
                let nibble = (nibbles >> (half * 4)) & 0x0F;
                palette.color(index).with_alpha((nibble << 4) | nibble)
            })
        })
        .collect())
}

/// Palette colour plus one alpha byte per pixel.
pub fn paletted_alpha8(
    window: &[u8],
    palette: &Palette,
    width: u32,
    height: u32,
) -> Result<Vec<Bgra>, DataError> {
    let n = pixel_count(width, height)?;
    let expected = alpha_plane_len(n, n, width, height)?;
    let (indices, alpha) = require(window, expected)?.split_at(n);

    Ok(indices
        .iter()
        .zip(alpha)
        .map(|(&index, &a)| palette.color(index).with_alpha(a))
        .collect())
}

fn alpha_plane_len(
    indices: usize,
    alpha: usize,
    width: u32,
    height: u32,
) -> Result<usize, DataError> {
    indices
        .checked_add(alpha)
        .ok_or(DataError::DimensionsOverflow { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PALETTE_SIZE;
    use pretty_assertions::assert_eq;

    /// Entry `i` is `(i, i, i, 255)`
    fn grey_palette() -> Palette {
        let mut colors = [Bgra::default(); PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = Bgra::new(i as u8, i as u8, i as u8, 255);
        }
        Palette::new(colors)
    }

    /// Entry `i` has a deliberately wrong alpha of 7
    fn translucent_palette() -> Palette {
        let mut colors = [Bgra::default(); PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = Bgra::new(i as u8, 0, 255 - i as u8, 7);
        }
        Palette::new(colors)
    }

    #[test]
    fn test_no_alpha_uses_palette() {
        let pixels = paletted_no_alpha(&[0, 1, 2, 3], &grey_palette(), 2, 2).unwrap();
        let expected: Vec<_> = (0..4).map(|i| Bgra::new(i, i, i, 255)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_no_alpha_forces_opaque() {
        let pixels = paletted_no_alpha(&[10, 20], &translucent_palette(), 2, 1).unwrap();
        assert_eq!(pixels, vec![Bgra::new(10, 0, 245, 255), Bgra::new(20, 0, 235, 255)]);
    }

    #[test]
    fn test_alpha1_bit_order() {
        let mut window: Vec<u8> = (0..8).collect();
        window.push(0b1010_0000);
        let pixels = paletted_alpha1(&window, &grey_palette(), 8, 1).unwrap();

        let alphas: Vec<u8> = pixels.iter().map(|p| p.a).collect();
        assert_eq!(alphas, vec![0, 0, 0, 0, 0, 255, 0, 255]);
        assert_eq!(pixels[5], Bgra::new(5, 5, 5, 255));
    }

    #[test]
    fn test_alpha1_lsb_first() {
        let mut window: Vec<u8> = (0..8).collect();
        window.push(0b0000_0101);
        let pixels = paletted_alpha1(&window, &translucent_palette(), 4, 2).unwrap();

        assert_eq!(pixels[0].a, 255);
        assert_eq!(pixels[1].a, 0);
        assert_eq!(pixels[2].a, 255);
        assert!(pixels[3..].iter().all(|p| p.a == 0));
    }

    #[test]
    fn test_alpha1_partial_last_byte() {
        // 3x3 = 9 pixels, bitmap spans two bytes
        let mut window: Vec<u8> = vec![0; 9];
        window.extend([0xFF, 0b0000_0001]);
        let pixels = paletted_alpha1(&window, &grey_palette(), 3, 3).unwrap();
        assert_eq!(pixels.len(), 9);
        assert!(pixels.iter().all(|p| p.a == 255));
    }

    #[test]
    fn test_alpha4_expands_nibbles() {
        let window = [1, 2, 3, 4, 0x0A, 0xF5];
        let pixels = paletted_alpha4(&window, &grey_palette(), 2, 2).unwrap();

        let alphas: Vec<u8> = pixels.iter().map(|p| p.a).collect();
        assert_eq!(alphas, vec![0xAA, 0x00, 0x55, 0xFF]);
        assert_eq!(pixels[0], Bgra::new(1, 1, 1, 0xAA));
    }

    #[test]
    fn test_alpha4_odd_pixel_count() {
        let window = [0, 0, 0, 0x21, 0x03];
        let pixels = paletted_alpha4(&window, &grey_palette(), 3, 1).unwrap();
        let alphas: Vec<u8> = pixels.iter().map(|p| p.a).collect();
        assert_eq!(alphas, vec![0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_alpha8_reads_trailing_plane() {
        let window = [4, 5, 6, 7, 10, 20, 30, 40];
        let pixels = paletted_alpha8(&window, &translucent_palette(), 2, 2).unwrap();
        assert_eq!(
            pixels,
            vec![
                Bgra::new(4, 0, 251, 10),
                Bgra::new(5, 0, 250, 20),
                Bgra::new(6, 0, 249, 30),
                Bgra::new(7, 0, 248, 40),
            ]
        );
    }

    #[test]
    fn test_extra_bytes_are_ignored() {
        let pixels = paletted_no_alpha(&[1, 2, 3, 4, 99, 99], &grey_palette(), 2, 2).unwrap();
        assert_eq!(pixels.len(), 4);
    }

    #[test]
    fn test_one_byte_short() {
        let palette = grey_palette();
        let cases: [(fn(&[u8], &Palette, u32, u32) -> Result<Vec<Bgra>, DataError>, usize); 4] = [
            (paletted_no_alpha, 16),
            (paletted_alpha1, 16 + 2),
            (paletted_alpha4, 16 + 8),
            (paletted_alpha8, 32),
        ];
        for (decode, expected) in cases {
            let window = vec![0; expected - 1];
            assert_eq!(
                decode(&window, &palette, 4, 4),
                Err(DataError::TruncatedPixelData {
                    expected,
                    actual: expected - 1
                })
            );
            assert!(decode(&vec![0; expected], &palette, 4, 4).is_ok());
        }
    }

    #[test]
    fn test_empty_mipmap() {
        assert_eq!(paletted_alpha1(&[], &grey_palette(), 4, 0), Ok(vec![]));
    }
}
