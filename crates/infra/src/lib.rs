//! Infrastructure layer: adapters for external services.

pub mod github;

pub use github::{ClientInitError, HttpGitHubClient};
