//! Command line definition for blp-converter

use clap::{Parser, ValueEnum};
use image::ImageFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blp-converter")]
#[command(about = "Convert BLP image files to PNG or TGA format", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Display information about the BLP file(s), no conversion
    #[arg(short, long)]
    pub infos: bool,

    /// Folder where the converted image(s) must be written to
    #[arg(short = 'o', long, default_value = "./")]
    pub dest: PathBuf,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// The specific mip level to convert
    #[arg(short, long, default_value_t = 0)]
    pub miplevel: usize,

    /// Number of parallel jobs, 0 uses every CPU
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// BLP files, or directories searched recursively for BLP files
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Png,
    Tga,
}

impl OutputFormat {
    /// File extension written for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tga => "tga",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Tga => ImageFormat::Tga,
        }
    }
}
