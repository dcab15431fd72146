//! Small helpers shared between the workspace crates.

pub mod debug;
