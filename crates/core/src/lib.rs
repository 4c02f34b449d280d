//! `gitstats-core` — configuration, error taxonomy, and the GitHub port.
//!
//! This crate does no I/O; the HTTP adapter lives in `gitstats-infra`.

pub mod api;
pub mod config;
pub mod error;
pub mod records;

pub use api::GitHubApi;
pub use config::{AppConfig, ConfigError};
pub use error::{GitHubError, GitHubResult};
pub use records::{IssueRecord, NewIssue, RepoRecord, UserRecord};
