//! WiX toolset acquisition.
//!
//! Fetches the pinned toolkit archive, verifies its digest, and unpacks it
//! beside the build's other work directories.

use std::io::{Cursor, Read};
use std::path::Path;

use crate::config::AssetCatalog;
use crate::error::{Error, Result};
use crate::packager::utils::{data, http};

/// Downloads and unpacks the WiX binaries into `dest`.
///
/// The archive digest must match the catalog's pinned SHA-256 before
/// anything is written to disk.
pub async fn install_wix(catalog: &AssetCatalog, dest: &Path) -> Result<()> {
    let body = http::get(&catalog.wix_archive_url).await?;
    data::verify_sha256(&catalog.wix_archive_url, &catalog.wix_sha256, &body)?;

    let dest = dest.to_path_buf();
    tokio::task::spawn_blocking(move || extract_zip(&body, &dest))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))?
}

fn extract_zip(body: &[u8], dest: &Path) -> Result<()> {
    let mut archive = zip::ZipArchive::new(Cursor::new(body))
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;

        // Skips entries whose names would escape the destination.
        let Some(rel) = entry.enclosed_name() else {
            continue;
        };
        let out = dest.join(rel);

        if entry.is_dir() {
            std::fs::create_dir_all(&out)?;
            continue;
        }
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        std::fs::write(&out, bytes)?;
    }
    Ok(())
}
