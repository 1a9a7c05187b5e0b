//! Artifacts from GitHub REST API and related functions.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use reqwest::{blocking, header};
use serde::Deserialize;

use crate::env::Credentials;

/// One page of artifacts from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct Artifacts {
    /// How many artifacts the repository holds across all pages.
    pub total_count: u64,
    /// The artifacts of this page, in API order.
    pub artifacts: Vec<Artifact>,
}

/// Represents an artifact from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct Artifact {
    pub id: u64,
    pub name: String,
    pub size_in_bytes: u64,
    pub archive_download_url: String,
    pub expired: bool,
    pub created_at: String,
    pub expires_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} at {})",
            self.name, self.id, self.archive_download_url
        )
    }
}

/// An artifact chosen by a selection, reduced to when it was created and
/// where to download it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestArtifact {
    /// When the chosen artifact was created, in UTC.
    pub created_at: DateTime<Utc>,
    /// Where the chosen artifact's archive can be downloaded from.
    pub archive_download_url: String,
}

/// Builds an authenticated blocking request for GitHub REST API.
pub fn github_api_request_builder(url: &str, credentials: &Credentials) -> blocking::RequestBuilder {
    blocking::Client::new()
        .get(url)
        .header(header::ACCEPT, "application/vnd.github+json")
        .basic_auth(&credentials.username, Some(&credentials.token))
        .header("X-GitHub-Api-Version", "2022-11-28")
        .header("User-Agent", "artifact-select/0.1")
}

#[cfg(test)]
mod tests {
    use super::Artifacts;

    #[test]
    fn deserializes_artifact_listing() {
        let body = r#"{
            "total_count": 2,
            "artifacts": [
                {
                    "id": 11,
                    "node_id": "MDg6QXJ0aWZhY3QxMQ==",
                    "name": "model",
                    "size_in_bytes": 12345,
                    "url": "https://api.github.com/repos/o/r/actions/artifacts/11",
                    "archive_download_url": "https://api.github.com/repos/o/r/actions/artifacts/11/zip",
                    "expired": false,
                    "created_at": "2024-01-02T03:04:05Z",
                    "expires_at": "2024-04-02T03:04:05Z",
                    "updated_at": "2024-01-02T03:04:06Z"
                },
                {
                    "id": 12,
                    "name": "report",
                    "size_in_bytes": 678,
                    "archive_download_url": "https://api.github.com/repos/o/r/actions/artifacts/12/zip",
                    "expired": true,
                    "created_at": "2024-01-03T00:00:00Z"
                }
            ]
        }"#;

        let artifacts: Artifacts = serde_json::from_str(body).unwrap();
        assert_eq!(artifacts.total_count, 2);
        assert_eq!(artifacts.artifacts.len(), 2);
        assert_eq!(artifacts.artifacts[0].name, "model");
        assert!(!artifacts.artifacts[0].expired);
        assert_eq!(artifacts.artifacts[1].expires_at, None);
    }

    #[test]
    fn listing_with_missing_required_field_is_rejected() {
        let body = r#"{
            "total_count": 1,
            "artifacts": [{ "id": 11, "name": "model", "expired": false }]
        }"#;
        assert!(serde_json::from_str::<Artifacts>(body).is_err());
    }

    #[test]
    fn display_includes_name_id_and_url() {
        let body = r#"{
            "id": 11,
            "name": "model",
            "size_in_bytes": 1,
            "archive_download_url": "https://example.com/11/zip",
            "expired": false,
            "created_at": "2024-01-02T03:04:05Z"
        }"#;
        let artifact: super::Artifact = serde_json::from_str(body).unwrap();
        assert_eq!(
            artifact.to_string(),
            "model (11 at https://example.com/11/zip)"
        );
    }
}
