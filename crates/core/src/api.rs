//! Port for the upstream GitHub API.

use async_trait::async_trait;

use crate::error::GitHubResult;
use crate::records::{IssueRecord, NewIssue, RepoRecord, UserRecord};

/// Calls the service makes against GitHub.
///
/// Implementations classify every failure into [`crate::GitHubError`] before
/// returning; callers only propagate.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// The user the configured token belongs to.
    async fn authenticated_user(&self) -> GitHubResult<UserRecord>;

    /// Public repositories of `owner`, in upstream listing order.
    async fn list_user_repositories(&self, owner: &str) -> GitHubResult<Vec<RepoRecord>>;

    async fn get_repository(&self, owner: &str, name: &str) -> GitHubResult<RepoRecord>;

    /// Open an issue. Not idempotent: every call creates a new issue.
    async fn create_issue(&self, owner: &str, repo: &str, issue: &NewIssue) -> GitHubResult<IssueRecord>;
}
