//! macOS `.pkg` construction.
//!
//! Two-stage build: `pkgbuild` wraps the staged filesystem payload into a
//! component package, then `productbuild` wraps that component with the
//! installer UI metadata from the rendered Distribution definition.

mod template;

use std::path::Path;

use crate::config::PackageConfig;
use crate::error::{Error, Result};
use crate::packager::utils::{
    data::{self, FileSource, StagedFileSet},
    exec, fs,
    template::render,
};

/// Builds `pkg/<Name>.pkg` for `config` inside `workdir`.
pub async fn build(config: &PackageConfig, workdir: &Path) -> Result<()> {
    build_on_host(config, workdir, std::env::consts::OS).await
}

/// Host-parameterized entry point.
///
/// `pkgbuild` and `productbuild` only exist on macOS, so any other host is
/// rejected before the build touches the filesystem.
pub(crate) async fn build_on_host(
    config: &PackageConfig,
    workdir: &Path,
    host: &str,
) -> Result<()> {
    if host != "macos" {
        return Err(Error::UnsupportedHost {
            target: "darwin",
            host: host.to_string(),
        });
    }

    log::info!("Building darwin package for {}", config.name);

    let data_files = darwin_data(config).await?;

    // Rendered scripts and resources consumed by the two build tools.
    let darwin_dir = fs::DirGuard::create(workdir.join("darwin")).await?;
    data::write_data_files(&data_files, darwin_dir.path()).await?;

    // Destination filesystem layout, mirrored under darwinpkg/.
    let staged = stage(config, workdir).await?;

    // Component package holding the payload.
    let dest = fs::DirGuard::create(workdir.join("package")).await?;
    let component_pkg = dest.path().join(format!("{}.pkg", config.identifier));
    exec::run_tool(
        workdir,
        "pkgbuild",
        &[
            "--identifier".to_string(),
            config.identifier.clone(),
            "--version".to_string(),
            config.version.clone(),
            "--scripts".to_string(),
            darwin_dir.path().join("scripts").display().to_string(),
            "--root".to_string(),
            staged.path().display().to_string(),
            component_pkg.display().to_string(),
        ],
    )
    .await?;

    // pkg/ is the surviving output; its location is known to downstream
    // release tooling.
    let pkg_dir = workdir.join("pkg");
    tokio::fs::create_dir_all(&pkg_dir).await?;

    exec::run_tool(
        workdir,
        "productbuild",
        &[
            "--distribution".to_string(),
            darwin_dir.path().join("Distribution").display().to_string(),
            "--resources".to_string(),
            darwin_dir.path().join("Resources").display().to_string(),
            "--package-path".to_string(),
            dest.path().display().to_string(),
            // The file name itself carries no meaning downstream.
            pkg_dir.join(format!("{}.pkg", config.name)).display().to_string(),
        ],
    )
    .await
}

/// Renders the Distribution definition, install scripts, and resource
/// files the packaging process consumes.
async fn darwin_data(config: &PackageConfig) -> Result<StagedFileSet> {
    let mut files = StagedFileSet::new();

    files.insert(
        "Distribution".to_string(),
        FileSource::inline(render(template::DISTRIBUTION, config)?),
    );
    files.insert(
        "scripts/preinstall".to_string(),
        FileSource::inline(render(template::PREINSTALL, config)?),
    );
    files.insert(
        "scripts/postinstall".to_string(),
        FileSource::inline(render(template::POSTINSTALL, config)?),
    );
    files.insert(
        "Resources/welcome.txt".to_string(),
        FileSource::inline(config.darwin.welcome_msg.clone()),
    );
    files.insert(
        "Resources/conclusion.txt".to_string(),
        FileSource::inline(config.darwin.conclusion_msg.clone()),
    );

    // The Distribution definition only references bg.png when a path is
    // configured; an empty placeholder keeps the file set uniform.
    let bg = if config.darwin.bg_png_path.is_empty() {
        Vec::new()
    } else {
        tokio::fs::read(&config.darwin.bg_png_path).await?
    };
    files.insert("Resources/bg.png".to_string(), FileSource::Inline(bg));

    Ok(files)
}

/// Mirrors the destination filesystem under `darwinpkg/`: the PATH drop-in
/// at `etc/paths.d/<BinName>` and the binary itself under
/// `usr/local/<BinName>/bin/`, mode and mtime preserved.
async fn stage(config: &PackageConfig, workdir: &Path) -> Result<fs::DirGuard> {
    let work = fs::DirGuard::create(workdir.join("darwinpkg")).await?;

    let paths_dir = work.path().join("etc/paths.d");
    tokio::fs::create_dir_all(&paths_dir).await?;
    let paths_body = format!("/usr/local/{}/bin", config.bin_name);
    tokio::fs::write(paths_dir.join(&config.bin_name), paths_body).await?;

    let bin_dir = work.path().join("usr/local").join(&config.bin_name).join("bin");
    tokio::fs::create_dir_all(&bin_dir).await?;
    fs::copy_preserving(
        Path::new(&config.darwin.bin_path),
        &bin_dir.join(&config.bin_name),
    )
    .await?;

    Ok(work)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bin_path: &str) -> PackageConfig {
        PackageConfig {
            name: "Example CLI".into(),
            bin_name: "example".into(),
            identifier: "com.example.cli".into(),
            version: "v0.5.0".into(),
            darwin: crate::config::DarwinOptions {
                bin_path: bin_path.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn distribution_omits_optional_elements_when_fields_are_empty() {
        let rendered = render(template::DISTRIBUTION, &config("/tmp/example")).unwrap();
        assert!(!rendered.contains("<background"));
        assert!(!rendered.contains("<welcome"));
        assert!(!rendered.contains("<conclusion"));
        assert!(!rendered.contains("<allowed-os-versions"));
        // The mandatory skeleton is still there.
        assert!(rendered.contains("<title>Example CLI</title>"));
        assert!(rendered.contains(r#"<pkg-ref id="com.example.cli.pkg" auth="Root">"#));
    }

    #[test]
    fn distribution_emits_populated_optional_elements_verbatim() {
        let mut config = config("/tmp/example");
        config.darwin.welcome_msg = "hi there".into();
        config.darwin.conclusion_msg = "all done".into();
        config.darwin.bg_png_path = "assets/bg.png".into();
        config.darwin.min_osx_version = "10.6.0".into();

        let rendered = render(template::DISTRIBUTION, &config).unwrap();
        assert!(rendered.contains(r#"<background mime-type="image/png" file="bg.png"/>"#));
        assert!(rendered.contains(r#"<welcome mime-type="text/plain" file="welcome.txt"/>"#));
        assert!(rendered.contains(r#"<conclusion mime-type="text/plain" file="conclusion.txt"/>"#));
        assert!(rendered.contains(r#"<os-version min="10.6.0" />"#));
    }

    #[test]
    fn scripts_point_at_the_install_root() {
        let preinstall = render(template::PREINSTALL, &config("/tmp/example")).unwrap();
        assert!(preinstall.starts_with("#!/bin/bash"));
        assert!(preinstall.contains("PROJROOT=/usr/local/example"));

        let postinstall = render(template::POSTINSTALL, &config("/tmp/example")).unwrap();
        assert!(postinstall.contains("find bin -exec chmod ugo+rx \\{\\} \\;"));
    }

    #[tokio::test]
    async fn staging_mirrors_the_destination_layout() {
        let base = tempfile::tempdir().unwrap();
        let bin = base.path().join("example");
        std::fs::write(&bin, b"binary bytes").unwrap();

        let config = config(bin.to_str().unwrap());
        let work = stage(&config, base.path()).await.unwrap();

        let paths_file = work.path().join("etc/paths.d/example");
        assert_eq!(
            std::fs::read_to_string(paths_file).unwrap(),
            "/usr/local/example/bin"
        );
        assert_eq!(
            std::fs::read(work.path().join("usr/local/example/bin/example")).unwrap(),
            b"binary bytes"
        );
    }

    #[tokio::test]
    async fn wrong_host_fails_before_creating_any_files() {
        let base = tempfile::tempdir().unwrap();
        let result = build_on_host(&config("/tmp/example"), base.path(), "linux").await;
        assert!(matches!(result, Err(Error::UnsupportedHost { .. })));
        assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
    }

    // On a real mac pkgbuild exists and the build could run to completion;
    // everywhere else the component build fails at launch and the cleanup
    // invariant must still hold.
    #[cfg(not(target_os = "macos"))]
    #[tokio::test]
    async fn failed_component_build_leaves_no_work_directories() {
        let base = tempfile::tempdir().unwrap();
        let bin = base.path().join("example");
        std::fs::write(&bin, b"binary bytes").unwrap();

        let config = config(bin.to_str().unwrap());
        let result = build_on_host(&config, base.path(), "macos").await;
        assert!(result.is_err());

        assert!(!base.path().join("darwin").exists());
        assert!(!base.path().join("darwinpkg").exists());
        assert!(!base.path().join("package").exists());
    }
}
