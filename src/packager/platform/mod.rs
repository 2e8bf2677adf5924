//! Platform-specific packagers.

pub mod darwin;
pub mod windows;
