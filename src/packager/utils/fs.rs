//! Filesystem helpers for staging work trees.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Scoped owner of a well-known work directory.
///
/// The directory tree is removed when the guard drops, so staging residue
/// is cleared on success and failure paths alike.
pub struct DirGuard {
    path: PathBuf,
}

impl DirGuard {
    /// Creates `path` (and any missing parents) and takes ownership of its
    /// removal.
    pub async fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        tokio::fs::create_dir_all(&path).await?;
        Ok(Self { path })
    }

    /// The guarded directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to remove {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Copies `src` to `dst`, preserving the source file mode and mtime.
///
/// The copy goes through `<dst>.tmp` followed by an atomic rename, so a
/// partially written destination is never observable.
pub async fn copy_preserving(src: &Path, dst: &Path) -> Result<()> {
    let src = src.to_path_buf();
    let dst = dst.to_path_buf();
    tokio::task::spawn_blocking(move || copy_preserving_sync(&src, &dst))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))?
}

fn copy_preserving_sync(src: &Path, dst: &Path) -> Result<()> {
    let meta = std::fs::metadata(src)?;

    let mut tmp_name = dst.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = dst.with_file_name(tmp_name);

    // std::fs::copy carries permission bits along on unix; set them
    // explicitly anyway so the behavior holds everywhere.
    std::fs::copy(src, &tmp)?;
    std::fs::set_permissions(&tmp, meta.permissions())?;

    let modified = meta.modified()?;
    let file = std::fs::OpenOptions::new().write(true).open(&tmp)?;
    file.set_modified(modified)?;
    drop(file);

    std::fs::rename(&tmp, dst)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dir_guard_removes_tree_on_drop() {
        let base = tempfile::tempdir().unwrap();
        let work = base.path().join("work");
        {
            let guard = DirGuard::create(&work).await.unwrap();
            tokio::fs::write(guard.path().join("file"), b"x").await.unwrap();
            assert!(work.exists());
        }
        assert!(!work.exists());
    }

    #[tokio::test]
    async fn copy_preserves_mode_and_mtime() {
        let base = tempfile::tempdir().unwrap();
        let src = base.path().join("binary");
        std::fs::write(&src, b"#!/bin/sh\n").unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&src, std::fs::Permissions::from_mode(0o741)).unwrap();
        }

        let dst = base.path().join("out/binary");
        std::fs::create_dir_all(dst.parent().unwrap()).unwrap();
        copy_preserving(&src, &dst).await.unwrap();

        let src_meta = std::fs::metadata(&src).unwrap();
        let dst_meta = std::fs::metadata(&dst).unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), b"#!/bin/sh\n");
        assert_eq!(
            src_meta.modified().unwrap(),
            dst_meta.modified().unwrap()
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            assert_eq!(dst_meta.permissions().mode() & 0o777, 0o741);
        }
    }

    #[tokio::test]
    async fn copy_leaves_no_temporary_file_behind() {
        let base = tempfile::tempdir().unwrap();
        let src = base.path().join("binary");
        std::fs::write(&src, b"payload").unwrap();

        let dst = base.path().join("binary-copy");
        copy_preserving(&src, &dst).await.unwrap();

        assert!(dst.exists());
        assert!(!base.path().join("binary-copy.tmp").exists());
    }

    #[tokio::test]
    async fn copy_of_missing_source_is_an_io_error() {
        let base = tempfile::tempdir().unwrap();
        let result = copy_preserving(
            &base.path().join("missing"),
            &base.path().join("dst"),
        )
        .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
