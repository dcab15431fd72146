//! Resolve a requested mip level to a byte window and pixel dimensions.
//!
//! Requests past the last mipmap are served by the smallest available one;
//! [`MipmapWindow::level`] reports the level actually used so callers can
//! tell when that happened.

use crate::error::DataError;
use crate::parser::bounds::check_bounds;
use crate::types::{Blp2Header, MipmapWindow};
use log::*;

/// Locate a mipmap inside an input buffer of `input_len` bytes.
///
/// The window is bounds checked against the input before it is returned, so
/// slicing the input with [`MipmapWindow::byte_range`] cannot fail.
pub fn locate(
    header: &Blp2Header,
    level: usize,
    input_len: usize,
) -> Result<MipmapWindow, DataError> {
    let window = window(header, level)?;
    if window.level != level {
        warn!(
            "Mipmap level {level} requested but only {} available, using level {}",
            header.mipmap_count(),
            window.level
        );
    }
    trace!("Mipmap window: {window:?}");

    check_bounds(input_len, window.offset, window.size)?;
    Ok(window)
}

/// Describe every mipmap level declared by the header, without bounds checks.
pub fn mipmap_info(header: &Blp2Header) -> Vec<MipmapWindow> {
    (0..header.mipmap_count())
        .filter_map(|level| window(header, level).ok())
        .collect()
}

fn window(header: &Blp2Header, level: usize) -> Result<MipmapWindow, DataError> {
    let level = header.clamp_level(level)?;
    let (width, height) = header.mipmap_size(level)?;
    let (offset, size) = header
        .mipmap_locator()
        .entry(level)
        .ok_or(DataError::NoMipmaps)?;

    Ok(MipmapWindow {
        level,
        width,
        height,
        offset,
        size,
    })
}
