//! Defines the environment variables to use.

use std::env;

use crate::error::{Error, Result};

/// Basic Auth credentials for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// The GitHub username.
    pub username: String,
    /// The GitHub personal access token.
    pub token: String,
}

impl Credentials {
    /// Resolves credentials from `GITHUB_USERNAME` and `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        match (env::var("GITHUB_USERNAME"), env::var("GITHUB_TOKEN")) {
            (Ok(username), Ok(token)) if !username.is_empty() && !token.is_empty() => {
                Ok(Self { username, token })
            }
            _ => Err(Error::Auth),
        }
    }
}
