//! Command line adapter.
//!
//! Thin layer over the packager core: parses flags, decodes the YAML
//! configuration into a [`PackageConfig`], and hands it to
//! [`crate::packager::build`]. All domain logic lives in the core; this
//! module only reports the error string it returns.

use clap::Parser;
use std::path::PathBuf;

use crate::config::PackageConfig;
use crate::error::{Error, Result};
use crate::packager::{self, TargetOs};

/// mkpkg creates installer packages for a distributable binary
#[derive(Parser, Debug)]
#[command(
    name = "mkpkg",
    version,
    about = "Creates installer packages for a distributable binary",
    long_about = "mkpkg creates platform-native installer packages (.pkg, .msi) for a \
distributable binary, driven by a YAML configuration file.

Run with --blank to print a starting-point configuration."
)]
pub struct Args {
    /// Path to config.yaml file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Operating system to create package for. One of: darwin,windows,linux
    #[arg(long, value_name = "OS")]
    pub os: Option<String>,

    /// Print blank YAML configuration file
    #[arg(long)]
    pub blank: bool,
}

/// Parses arguments, runs the requested build, and returns the process
/// exit code.
pub async fn run() -> Result<i32> {
    let args = Args::parse();
    run_with_args(args).await
}

async fn run_with_args(args: Args) -> Result<i32> {
    if args.blank {
        print!("{}", BLANK_CONFIG);
        return Ok(0);
    }

    let (Some(config_path), Some(os)) = (&args.config, &args.os) else {
        eprintln!("both --config and --os are required (or use --blank)");
        return Ok(1);
    };

    let target: TargetOs = os
        .parse()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let raw = tokio::fs::read_to_string(config_path).await?;
    let config: PackageConfig = serde_yaml::from_str(&raw).map_err(|e| Error::InvalidConfig {
        reason: format!("decoding {}: {}", config_path.display(), e),
    })?;

    let workdir = std::env::current_dir()?;
    packager::build(&config, target, &workdir).await?;
    Ok(0)
}

/// Starting-point configuration printed by `--blank`.
const BLANK_CONFIG: &str = r#"Name: "Example CLI"
BinName: "example"
Identifier: "com.example.cli"
Version: "v0.1.0"
Description: "example is a command line tool"
SiteURL: "https://example.com"
Darwin:
  WelcomeMsg: |
    The following steps will guide you through installing the example command
    line client. Once installed you'll have access to example from the command
    line.
  ConclusionMsg: |
    Thanks for installing example. For documentation and tutorials see
    https://example.com/docs
  MinOSXVersion: "10.6.0"
  BgPngPath: assets/darwin/bg.png
  BinPath: /usr/local/bin/example
"#;
