//! GitHub REST adapter.

pub mod classify;
pub mod client;

pub use classify::classify;
pub use client::{ClientInitError, HttpGitHubClient};
