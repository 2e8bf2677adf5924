//! Root package configuration.

use serde::{Deserialize, Serialize};

use super::{DarwinOptions, WindowsOptions};
use crate::error::{Error, Result};

/// Root configuration for a package build.
///
/// # Examples
///
/// ```no_run
/// use mkpkg::PackageConfig;
///
/// let config = PackageConfig {
///     name: "Example CLI".into(),
///     bin_name: "example".into(),
///     identifier: "com.example.cli".into(),
///     version: "v0.1.0".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageConfig {
    /// Human-friendly name of the project, eg: "The Go Programming Language"
    pub name: String,

    /// Name of the binary, eg: "go"
    pub bin_name: String,

    /// Short description of the project
    pub description: String,

    /// URL for the project, eg: "https://golang.org"
    #[serde(rename = "SiteURL")]
    pub site_url: String,

    /// App identifier in reverse-domain notation, eg: "com.googlecode.go"
    pub identifier: String,

    /// Semantic version identifier with "v" prefix, eg: "v1.0.0"
    pub version: String,

    /// Darwin-specific configuration details
    pub darwin: DarwinOptions,

    /// MSI-specific configuration details
    #[serde(rename = "MSI")]
    pub msi: WindowsOptions,
}

impl PackageConfig {
    /// Checks the invariants every platform build depends on.
    ///
    /// Identifier and binary name feed directly into tool arguments and
    /// install paths, so an empty value must be rejected before any work
    /// directory is created.
    pub fn validate(&self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "Identifier must not be empty".to_string(),
            });
        }
        if self.bin_name.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "BinName must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
