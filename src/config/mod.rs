//! Declarative configuration for package construction.
//!
//! A [`PackageConfig`] is decoded once from external input (the CLI adapter
//! reads YAML) and is read-only for the remainder of the build; packagers
//! never mutate it. Field names stay PascalCase on the wire so existing
//! configuration documents keep working.

mod assets;
mod darwin;
mod package;
mod windows;

// Re-export all public types
pub use assets::AssetCatalog;
pub use darwin::DarwinOptions;
pub use package::PackageConfig;
pub use windows::WindowsOptions;
