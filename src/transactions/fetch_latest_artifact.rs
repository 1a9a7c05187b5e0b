use tracing::info;

use crate::{
    env::Credentials,
    error::Result,
    transactions::{fetch_artifacts, select_latest},
    workflow::artifact::LatestArtifact,
};

/// Fetches the most recent non-expired artifact named `name` of a repository.
///
/// Credentials are resolved from the environment before any request is made.
///
/// # Errors
///
/// Returns [`crate::Error::Auth`] if credentials are absent, and otherwise
/// whatever [`fetch_artifacts`] or [`select_latest`] surface.
pub fn fetch_latest_artifact(repo: &str, name: &str) -> Result<LatestArtifact> {
    let credentials = Credentials::from_env()?;
    let artifacts = fetch_artifacts(repo, &credentials)?;
    let latest = select_latest(&artifacts, name)?;
    info!(
        "latest artifact named {name}: created {} at {}",
        latest.created_at, latest.archive_download_url
    );
    Ok(latest)
}
