//! Installer package construction for distributable binaries.
//!
//! `mkpkg` builds platform-native installer packages from a declarative
//! configuration describing the product:
//! - macOS `.pkg` via `pkgbuild` and `productbuild`
//! - Windows `.msi` via the WiX toolset (chain present, not yet exposed)
//!
//! Linux packaging is declared unsupported.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use config::{AssetCatalog, DarwinOptions, PackageConfig, WindowsOptions};
pub use error::{Error, Result};
pub use packager::TargetOs;
