use serde::{Deserialize, Serialize};

use gitstats_core::{GitHubError, IssueRecord, NewIssue, RepoRecord, UserRecord};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /v1/github/{repo_name}/issues`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported in the error envelope rather than as an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateIssueRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl CreateIssueRequest {
    /// Require a non-blank title and a body (which may be empty).
    pub fn validate(self) -> Result<NewIssue, GitHubError> {
        let title = self
            .title
            .ok_or_else(|| GitHubError::validation("title is required"))?;
        if title.trim().is_empty() {
            return Err(GitHubError::validation("title must not be empty"));
        }
        let body = self
            .body
            .ok_or_else(|| GitHubError::validation("body is required"))?;

        Ok(NewIssue { title, body })
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
}

impl From<RepoRecord> for RepositorySummary {
    fn from(repo: RepoRecord) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            html_url: repo.html_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub repositories: Vec<RepositorySummary>,
}

impl UserSummary {
    /// Combine the user and their repository listing; listing order is kept.
    pub fn from_records(user: UserRecord, repos: Vec<RepoRecord>) -> Self {
        Self {
            username: user.login,
            followers: user.followers,
            following: user.following,
            repositories: repos.into_iter().map(RepositorySummary::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDetail {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

impl From<RepoRecord> for RepositoryDetail {
    fn from(repo: RepoRecord) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            html_url: repo.html_url,
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCreated {
    pub issue_url: String,
}

impl From<IssueRecord> for IssueCreated {
    fn from(issue: IssueRecord) -> Self {
        Self {
            issue_url: issue.html_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of every non-2xx response. `code` always equals the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub code: u16,
}
