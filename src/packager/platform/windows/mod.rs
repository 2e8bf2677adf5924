//! Windows `.msi` construction via the WiX toolset.
//!
//! The harvest/compile/link chain below is written end to end, but it has
//! never been validated against a production toolkit run, so [`build`]
//! refuses to start it and reports the platform as unsupported instead of
//! running an unverified pipeline.

mod template;
mod toolset;
mod version;

use std::path::Path;

use crate::config::{AssetCatalog, PackageConfig};
use crate::error::{Error, Result};
use crate::packager::utils::{
    data::{self, FileSource, StagedFileSet},
    exec, fs,
    template::render,
};

/// Flip once the heat/candle/light argument contracts have been checked
/// against a real WiX run.
const CHAIN_VALIDATED: bool = false;

/// Builds `msi/<BinName>.msi` for `config` inside `workdir`.
///
/// Currently fails fast with [`Error::NotSupported`] before any tool runs;
/// see the module documentation.
pub async fn build(
    config: &PackageConfig,
    catalog: &AssetCatalog,
    workdir: &Path,
) -> Result<()> {
    if !CHAIN_VALIDATED {
        return Err(Error::NotSupported {
            platform: "windows".to_string(),
        });
    }
    msi(config, catalog, workdir).await
}

/// The full MSI chain: install toolkit, write manifest and assets, then
/// harvest, compile, and link.
async fn msi(config: &PackageConfig, catalog: &AssetCatalog, workdir: &Path) -> Result<()> {
    log::info!("Building windows package for {}", config.name);

    // WiX toolkit, fetched and digest-verified.
    let wix = fs::DirGuard::create(workdir.join("wix")).await?;
    toolset::install_wix(catalog, wix.path()).await?;

    // Rendered manifest plus static assets from the catalog.
    let data_files = windows_data(config, catalog)?;
    let win = fs::DirGuard::create(workdir.join("windows")).await?;
    data::write_data_files(&data_files, win.path()).await?;

    // Harvest the binary-output directory into a generated fragment.
    let bin_dir = workdir.join(&config.bin_name);
    let appfiles = win.path().join("AppFiles.wxs");
    exec::run_tool(
        win.path(),
        &wix.path().join("heat").display().to_string(),
        &[
            "dir".to_string(),
            bin_dir.display().to_string(),
            "-nologo".to_string(),
            "-gg".to_string(),
            "-g1".to_string(),
            "-srd".to_string(),
            "-sfrag".to_string(),
            "-cg".to_string(),
            "AppFiles".to_string(),
            "-template".to_string(),
            "fragment".to_string(),
            "-dr".to_string(),
            "INSTALLDIR".to_string(),
            "-var".to_string(),
            "var.SourceDir".to_string(),
            "-out".to_string(),
            appfiles.display().to_string(),
        ],
    )
    .await?;

    // Compile manifest and fragment.
    let (major, minor, patch) = version::extract(&config.version);
    let arch = msi_arch()?;
    exec::run_tool(
        win.path(),
        &wix.path().join("candle").display().to_string(),
        &[
            "-nologo".to_string(),
            "-arch".to_string(),
            arch.to_string(),
            format!("-dVersion={}", config.version),
            format!("-dProductVersion={}.{}.{}", major, minor, patch),
            format!(
                "-dIsLegacyOsSupported={}",
                version::legacy_os_supported(&config.version)
            ),
            format!("-dArch={}", arch),
            format!("-dSourceDir={}", bin_dir.display()),
            win.path().join("installer.wxs").display().to_string(),
            appfiles.display().to_string(),
        ],
    )
    .await?;

    // msi/ is the surviving output; its location is known to downstream
    // release tooling.
    let msi_dir = workdir.join("msi");
    tokio::fs::create_dir_all(&msi_dir).await?;

    exec::run_tool(
        win.path(),
        &wix.path().join("light").display().to_string(),
        &[
            "-nologo".to_string(),
            "-dcl:high".to_string(),
            "-ext".to_string(),
            "WixUIExtension".to_string(),
            "-ext".to_string(),
            "WixUtilExtension".to_string(),
            "AppFiles.wixobj".to_string(),
            "installer.wixobj".to_string(),
            "-o".to_string(),
            // The file name itself carries no meaning downstream.
            msi_dir.join(format!("{}.msi", config.bin_name)).display().to_string(),
        ],
    )
    .await
}

/// Rendered manifest plus the fixed remote assets the installer embeds.
fn windows_data(config: &PackageConfig, catalog: &AssetCatalog) -> Result<StagedFileSet> {
    let mut files = StagedFileSet::new();

    files.insert(
        "installer.wxs".to_string(),
        FileSource::inline(render(template::INSTALLER_WXS, config)?),
    );
    for asset in ["LICENSE.rtf", "images/Banner.jpg", "images/Dialog.jpg", "images/DialogLeft.jpg", "images/app.ico"] {
        let name = asset.rsplit('/').next().unwrap_or(asset);
        files.insert(
            asset.to_string(),
            FileSource::remote(catalog.asset_url(&format!("windows/{}", name))),
        );
    }

    Ok(files)
}

/// Maps the host architecture to the compiler's `-arch` value.
fn msi_arch() -> Result<&'static str> {
    match std::env::consts::ARCH {
        "x86_64" => Ok("x64"),
        "x86" => Ok("x86"),
        other => Err(Error::NotSupported {
            platform: format!("windows on {other}"),
        }),
    }
}
