//! Per-file work: print infos or write one mip level as an image

use crate::cli::OutputFormat;
use crate::utils::format_bytes;
use anyhow::{Context, Result};
use log::*;
use std::fs;
use std::path::Path;
use wow_blp2::{Blp2Texture, to_rgba_image};

/// Options shared by every file of a batch
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    pub format: OutputFormat,
    pub miplevel: usize,
}

/// Decode `input` and save the requested mip level to `output`.
///
/// Parent directories of `output` are created as needed.
pub fn convert_file(input: &Path, output: &Path, options: ConvertOptions) -> Result<()> {
    let texture = Blp2Texture::load(input)?;
    let mipmap = texture.decode(options.miplevel)?;
    if mipmap.level() != options.miplevel {
        info!(
            "{}: mip level {} not present, converting level {}",
            input.display(),
            options.miplevel,
            mipmap.level()
        );
    }

    let image = to_rgba_image(&mipmap)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    image
        .save_with_format(output, options.format.image_format())
        .with_context(|| format!("Failed to save the image to {}", output.display()))?;

    debug!(
        "{} -> {} ({}x{})",
        input.display(),
        output.display(),
        mipmap.width(),
        mipmap.height()
    );
    Ok(())
}

/// Header summary of a BLP2 file, without decoding pixels
pub fn describe_file(input: &Path) -> Result<String> {
    let texture = Blp2Texture::load(input)?;
    let header = texture.header();
    let name = input.file_name().unwrap_or(input.as_os_str());

    Ok(format!(
        "Infos about `{}`:\n  \
         - Version:    BLP2\n  \
         - Format:     {}\n  \
         - Dimensions: {}x{}\n  \
         - Mip levels: {}\n  \
         - File size:  {}\n",
        name.to_string_lossy(),
        header.friendly_format(),
        header.width(),
        header.height(),
        header.mipmap_count(),
        format_bytes(texture.data().len() as u64),
    ))
}
