//! Turns a raw byte buffer into a validated [`Blp2Header`](crate::types::Blp2Header).

/// Bounds checks for mipmap windows
pub mod bounds;
mod header;
/// Native byte reading utilities
mod reader;

use crate::error::FormatError;

pub use header::parse_header;

/// Result type for header parsing operations
pub type ParseResult<T> = Result<T, FormatError>;
