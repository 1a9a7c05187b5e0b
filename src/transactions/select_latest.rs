use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    workflow::artifact::{Artifacts, LatestArtifact},
};

/// The timestamp layout GitHub uses for `created_at`.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// How many artifacts a single unpaginated API request can return.
const PAGE_SIZE: u64 = 100;

/// Whether a listing holds more artifacts than one page could carry.
pub(crate) fn is_truncated(artifacts: &Artifacts) -> bool {
    artifacts.total_count > PAGE_SIZE
}

/// Selects the most recent non-expired artifact named `name` from a listing.
///
/// Matching artifacts sharing a creation timestamp keep their API order, so
/// the first-encountered one wins.
///
/// # Errors
///
/// Returns [`Error::Timestamp`] if a matching artifact carries an unparseable
/// `created_at`, and [`Error::NotFound`] if nothing matches.
pub fn select_latest(artifacts: &Artifacts, name: &str) -> Result<LatestArtifact> {
    if is_truncated(artifacts) {
        warn!("some artifacts were not retrieved due to GitHub artifact pagination");
    }

    let mut matches = artifacts
        .artifacts
        .iter()
        .filter(|artifact| artifact.name == name && !artifact.expired)
        .map(|artifact| {
            let created_at = NaiveDateTime::parse_from_str(&artifact.created_at, CREATED_AT_FORMAT)
                .map_err(|source| Error::Timestamp {
                    value: artifact.created_at.clone(),
                    source,
                })?
                .and_utc();
            Ok(LatestArtifact {
                created_at,
                archive_download_url: artifact.archive_download_url.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!("{} artifacts named {name}", matches.len());

    // Stable sort keeps API order among equal timestamps.
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let last = matches
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(name.to_owned()))?;
    debug!(
        "last artifact: {} at {}",
        last.created_at, last.archive_download_url
    );
    Ok(last)
}
