/// Header classification
pub mod format;
/// BLP2 header and palette
pub mod header;
/// Mipmap offsets table and mipmap windows
pub mod locator;
/// Canonical pixel type
pub mod pixel;

pub use format::*;
pub use header::*;
pub use locator::*;
pub use pixel::*;
