//! Staged data file materialization.
//!
//! Each packager assembles a [`StagedFileSet`] of the scripts, manifests,
//! and resources its external tools consume, then writes the whole set to
//! disk in one pass. Remote entries are fetched at write time and verified
//! against a pinned digest where one is given.

use std::collections::BTreeMap;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// A single staged file: literal bytes, or a remote asset fetched at build time.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Literal file content
    Inline(Vec<u8>),
    /// Content fetched from a fixed remote location
    Remote {
        /// Asset location
        url: String,
        /// Expected hex SHA-256 of the fetched bytes, when pinned
        sha256: Option<String>,
    },
}

impl FileSource {
    /// Literal content entry.
    pub fn inline(body: impl Into<Vec<u8>>) -> Self {
        Self::Inline(body.into())
    }

    /// Remote entry without a pinned digest.
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote {
            url: url.into(),
            sha256: None,
        }
    }
}

/// Mapping of relative output path to file source.
///
/// Transient: created per build, written below a work directory, and
/// discarded once the tool invocation that consumes it completes.
pub type StagedFileSet = BTreeMap<String, FileSource>;

/// Writes each staged file under `base`, creating parent directories and
/// fetching remote entries first.
///
/// All files are written with executable permission bits; some of the
/// outputs are scripts and the extra bits are harmless on the rest.
pub async fn write_data_files(files: &StagedFileSet, base: &Path) -> Result<()> {
    for (name, source) in files {
        let dst = base.join(name);
        if let Some(parent) = dst.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = match source {
            FileSource::Inline(bytes) => bytes.clone(),
            FileSource::Remote { url, sha256 } => {
                let bytes = super::http::get(url).await?;
                if let Some(expected) = sha256 {
                    verify_sha256(url, expected, &bytes)?;
                }
                bytes
            }
        };

        tokio::fs::write(&dst, &body).await?;
        set_executable(&dst).await?;
    }
    Ok(())
}

/// Compares the SHA-256 of `body` against a pinned hex digest.
pub fn verify_sha256(url: &str, expected: &str, body: &[u8]) -> Result<()> {
    let actual = hex::encode(Sha256::digest(body));
    if actual != expected {
        return Err(Error::Integrity {
            url: url.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

#[cfg(unix)]
async fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
