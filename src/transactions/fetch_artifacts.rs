use reqwest::StatusCode;
use tracing::{debug, error};

use crate::{
    env::Credentials,
    error::{Error, Result},
    workflow::artifact::{Artifacts, github_api_request_builder},
};

fn artifacts_url(repo: &str) -> String {
    format!("https://api.github.com/repos/{repo}/actions/artifacts?per_page=100")
}

/// Fetches the first page of artifacts of a repository from GitHub.
///
/// # Errors
///
/// Returns [`Error::Access`] if the server answers 403, [`Error::Parse`] if
/// the body is not a valid artifact listing, and [`Error::Http`] if the
/// transport fails or the server answers another non-success status.
pub fn fetch_artifacts(repo: &str, credentials: &Credentials) -> Result<Artifacts> {
    let url = artifacts_url(repo);
    debug!("fetching artifacts from {url}…");

    let response = github_api_request_builder(&url, credentials).send()?;
    if response.status() == StatusCode::FORBIDDEN {
        let body = response.text()?;
        error!("failed to fetch artifacts from {url}: 403 {body}");
        return Err(Error::Access { url, body });
    }
    let body = response.error_for_status()?.text()?;

    let artifacts: Artifacts = serde_json::from_str(&body)?;
    debug!("{} artifacts available", artifacts.total_count);
    Ok(artifacts)
}
