//! Shared utilities for the blp-converter CLI

pub mod format;
pub mod progress;

pub use format::*;
pub use progress::*;
