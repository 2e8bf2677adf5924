//! HTTP fetching for remote build assets.

use crate::error::{Error, Result};

/// Plain GET of a fixed asset location, returning the body bytes.
///
/// A transport error or non-2xx status is a fetch failure; no retries are
/// attempted anywhere in the pipeline.
pub async fn get(url: &str) -> Result<Vec<u8>> {
    log::info!("Fetching {}", url);

    let response = reqwest::get(url).await.map_err(|e| Error::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            url: url.to_string(),
            reason: format!("unexpected status {}", status),
        });
    }

    let bytes = response.bytes().await.map_err(|e| Error::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(bytes.to_vec())
}
