//! Fetches artifact metadata from the GitHub REST API and selects the most
//! recent non-expired artifact matching a name.
//!
//! The flow is strictly linear: [`transactions::fetch_artifacts`] requests
//! one page of artifacts, [`transactions::select_latest`] filters and sorts
//! it, and [`transactions::fetch_latest_artifact`] composes the two with
//! credentials from [`env::Credentials::from_env`].

pub mod env;
pub mod error;
pub mod transactions;
pub mod workflow;

pub use error::{Error, Result};
