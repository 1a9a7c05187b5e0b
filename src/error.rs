//! The closed set of errors this crate surfaces.

use thiserror::Error as ThisError;

/// A shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while fetching and selecting artifacts.
#[derive(Debug, ThisError)]
pub enum Error {
    /// GitHub credentials are absent from the environment.
    #[error("GitHub credentials not found. Make sure GITHUB_USERNAME and GITHUB_TOKEN are set.")]
    Auth,

    /// The server refused the request.
    #[error("error 403 when requesting {url}: {body}")]
    Access {
        /// The URL the refused request was sent to.
        url: String,
        /// The raw response body that came with the refusal.
        body: String,
    },

    /// The response body is not a valid artifact listing.
    #[error("failed to parse artifact data: {0}")]
    Parse(#[from] serde_json::Error),

    /// An artifact carries a creation timestamp GitHub should never produce.
    #[error("invalid creation timestamp {value:?}: {source}")]
    Timestamp {
        /// The `created_at` string that failed to parse.
        value: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },

    /// No non-expired artifact matches the requested name.
    #[error("no artifact found with name {0}")]
    NotFound(String),

    /// The transport layer failed before a usable response arrived.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
