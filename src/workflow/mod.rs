//! Data models of GitHub Actions workflows.

pub mod artifact;
