//! Package construction pipeline.
//!
//! The pipeline is strictly sequential: staging, template rendering, and
//! external tool invocations run one after another with no overlap, and a
//! failure at any step aborts the remainder of that platform build. Work
//! directories use well-known relative names in the working directory
//! (`darwin/`, `darwinpkg/`, `package/`, `pkg/`, `windows/`, `wix/`,
//! `msi/`); a single build per working directory at a time is the caller's
//! responsibility.

pub mod platform;
pub mod utils;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::PackageConfig;
use crate::error::{Error, Result};

/// Operating systems a package can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOs {
    /// macOS `.pkg`
    Darwin,
    /// Declared unsupported
    Linux,
    /// `.msi`; packager exists but is not exposed as complete
    Windows,
}

impl FromStr for TargetOs {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "darwin" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            other => Err(format!(
                "unknown operating system: {other}. One of: darwin,windows,linux"
            )),
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
        };
        f.write_str(name)
    }
}

/// Builds the installer package for `target` inside `workdir`.
///
/// Darwin delegates to [`platform::darwin`]. Linux has no packager, and the
/// windows chain is not exposed until it has been validated end to end, so
/// both report the platform as unsupported rather than running an
/// unfinished pipeline.
pub async fn build(config: &PackageConfig, target: TargetOs, workdir: &Path) -> Result<()> {
    config.validate()?;

    match target {
        TargetOs::Darwin => platform::darwin::build(config, workdir).await,
        TargetOs::Linux | TargetOs::Windows => Err(Error::NotSupported {
            platform: target.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PackageConfig {
        PackageConfig {
            name: "Example CLI".into(),
            bin_name: "example".into(),
            identifier: "com.example.cli".into(),
            version: "v0.1.0".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn linux_is_not_supported() {
        let dir = tempfile::tempdir().unwrap();
        let result = build(&config(), TargetOs::Linux, dir.path()).await;
        match result {
            Err(Error::NotSupported { platform }) => assert_eq!(platform, "linux"),
            other => panic!("expected NotSupported, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn windows_is_not_supported() {
        let dir = tempfile::tempdir().unwrap();
        let result = build(&config(), TargetOs::Windows, dir.path()).await;
        assert!(matches!(result, Err(Error::NotSupported { .. })));
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_before_any_build() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config();
        config.identifier.clear();
        let result = build(&config, TargetOs::Darwin, dir.path()).await;
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn target_os_parses_known_names() {
        assert_eq!("darwin".parse::<TargetOs>().unwrap(), TargetOs::Darwin);
        assert_eq!("windows".parse::<TargetOs>().unwrap(), TargetOs::Windows);
        assert!("solaris".parse::<TargetOs>().is_err());
    }
}
