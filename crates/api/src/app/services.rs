use std::sync::Arc;

use gitstats_core::{AppConfig, GitHubApi, GitHubResult, NewIssue};

use crate::app::dto::{IssueCreated, RepositoryDetail, UserSummary};

/// Per-process services shared by all handlers (read-only).
#[derive(Clone)]
pub struct AppServices {
    github: Arc<dyn GitHubApi>,
    owner: String,
}

impl AppServices {
    pub fn new(config: &AppConfig, github: Arc<dyn GitHubApi>) -> Self {
        Self {
            github,
            owner: config.owner.clone(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Authenticated user plus the owner's repositories.
    ///
    /// Both calls run concurrently. A failed user call returns at once; a
    /// failed listing waits for the user call so its error takes precedence.
    pub async fn user_summary(&self) -> GitHubResult<UserSummary> {
        let mut user = self.github.authenticated_user();
        let mut repos = self.github.list_user_repositories(&self.owner);

        let (user, repos) = tokio::select! {
            biased;
            user = &mut user => (user?, repos.await?),
            repos = &mut repos => (user.await?, repos?),
        };

        Ok(UserSummary::from_records(user, repos))
    }

    pub async fn repository_detail(&self, repo_name: &str) -> GitHubResult<RepositoryDetail> {
        let repo = self.github.get_repository(&self.owner, repo_name).await?;
        Ok(repo.into())
    }

    pub async fn create_issue(&self, repo_name: &str, issue: &NewIssue) -> GitHubResult<IssueCreated> {
        let created = self.github.create_issue(&self.owner, repo_name, issue).await?;
        tracing::info!(repo = repo_name, issue_url = %created.html_url, "issue created");
        Ok(created.into())
    }
}
