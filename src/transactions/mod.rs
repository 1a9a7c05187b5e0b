//! Pre-made transactions.

mod download_artifact;
mod fetch_artifacts;
mod fetch_latest_artifact;
mod select_latest;

pub use download_artifact::*;
pub use fetch_artifacts::*;
pub use fetch_latest_artifact::*;
pub use select_latest::*;
