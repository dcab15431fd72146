//! blp-converter library
//!
//! Batch conversion of BLP2 textures to PNG or TGA images.

#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod batch;
pub mod cli;
pub mod convert;
pub mod utils;
