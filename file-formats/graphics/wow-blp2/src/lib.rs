//! Decoder for World of Warcraft BLP2 texture files.
//!
//! Parses the fixed 1172-byte BLP2 header, classifies the pixel format,
//! locates a mipmap level inside the file and unpacks it into a flat array of
//! BGRA pixels. Paletted (0, 1, 4 and 8-bit alpha), raw BGRA and DXT1/3/5
//! encodings are supported; JPEG content and legacy BLP1 files are rejected.
//!
//! # Examples
//!
//! ```no_run
//! use wow_blp2::Blp2Texture;
//!
//! let texture = Blp2Texture::load("Interface/Icons/INV_Misc_QuestionMark.blp")?;
//! println!("Format: {}", texture.header().format());
//!
//! let mipmap = texture.decode(0)?;
//! println!("{}x{}", mipmap.width(), mipmap.height());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Mipmap unpacking and image conversion
pub mod convert;
/// Error types
pub mod error;
/// Mipmap level resolution
pub mod mipmap;
/// Header parsing
pub mod parser;
mod texture;
/// Header, format and pixel types
pub mod types;

pub use convert::{BlockDecoder, DecodedMipmap, Texpresso, decode_mipmap, to_rgba_image};
pub use error::{DataError, Error, FormatError, LoadError, Result};
pub use mipmap::locate;
pub use parser::parse_header;
pub use texture::Blp2Texture;
pub use types::*;
