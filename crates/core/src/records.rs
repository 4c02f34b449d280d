//! Upstream payloads as returned by the GitHub REST API.
//!
//! Only the fields the service reads are declared; everything else in the
//! upstream JSON is ignored.

use serde::{Deserialize, Serialize};

/// `GET /user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login: String,
    pub followers: u64,
    pub following: u64,
}

/// An entry of `GET /users/{owner}/repos`, or the body of `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    /// `null` or absent upstream when the repository has no description.
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// Body of a successful `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub html_url: String,
    #[serde(default)]
    pub number: Option<u64>,
}

/// A validated issue to be opened upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}
