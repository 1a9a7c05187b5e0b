use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::{
    env::Credentials,
    error::{Error, Result},
    workflow::artifact::{LatestArtifact, github_api_request_builder},
};

/// Downloads the archive of a selected artifact from GitHub.
///
/// # Errors
///
/// Returns [`Error::Access`] if the server answers 403, and [`Error::Http`]
/// on transport failures or other non-success statuses. A `410 Gone` means
/// the artifact expired between selection and download.
pub fn download_artifact(artifact: &LatestArtifact, credentials: &Credentials) -> Result<Vec<u8>> {
    let url = &artifact.archive_download_url;
    debug!("requesting download from {url}…");

    let response = github_api_request_builder(url, credentials).send()?;
    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        let body = response.text()?;
        error!("failed to request download from {url}: 403 {body}");
        return Err(Error::Access {
            url: url.clone(),
            body,
        });
    }
    if status == StatusCode::GONE {
        error!("failed to request download from {url}: artifact expired or removed");
    }

    let bytes = response.error_for_status()?.bytes()?;
    info!("downloaded {} bytes from {url}", bytes.len());
    Ok(bytes.to_vec())
}
