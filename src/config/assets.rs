//! Remote asset locations used by the packaging process.

/// Remote asset locations and their pinned digests.
///
/// Modeled as an injectable table rather than ambient constants so tests
/// can point fetches at a local fixture server.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    /// Base URL for static installer assets (license text, artwork, icons)
    pub storage_base: String,

    /// Location of the WiX toolset binaries archive
    pub wix_archive_url: String,

    /// Expected SHA-256 of the toolset archive, hex encoded
    pub wix_sha256: String,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self {
            storage_base: "https://storage.googleapis.com/go-builder-data/release/".to_string(),
            wix_archive_url: "https://storage.googleapis.com/go-builder-data/wix311-binaries.zip"
                .to_string(),
            wix_sha256: "da034c489bd1dd6d8e1623675bf5e899f32d74d6d8312f8dd125a084543193de"
                .to_string(),
        }
    }
}

impl AssetCatalog {
    /// Full URL of a named static asset under the storage base.
    pub fn asset_url(&self, name: &str) -> String {
        format!("{}{}", self.storage_base, name)
    }
}
