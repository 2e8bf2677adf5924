//! Shared building blocks for the platform packagers.

pub mod data;
pub mod exec;
pub mod fs;
pub mod http;
pub mod template;
