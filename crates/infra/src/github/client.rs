//! `reqwest`-backed implementation of [`GitHubApi`].

use std::error::Error as _;

use async_trait::async_trait;
use reqwest::{
    Client, Method, RequestBuilder, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use gitstats_core::{
    AppConfig, GitHubApi, GitHubError, GitHubResult, IssueRecord, NewIssue, RepoRecord, UserRecord,
};

use super::classify::classify;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const CLIENT_USER_AGENT: &str = concat!("gitstats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid GitHub API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("GitHub token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// GitHub REST client.
///
/// Credentials and timeout are fixed at construction. Every call goes through
/// [`HttpGitHubClient::execute`], which is the only place responses are
/// classified.
#[derive(Clone)]
pub struct HttpGitHubClient {
    http: Client,
    base_url: Url,
}

impl HttpGitHubClient {
    pub fn new(config: &AppConfig) -> Result<Self, ClientInitError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| ClientInitError::InvalidBaseUrl {
            url: config.api_base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientInitError::InvalidBaseUrl {
                url: config.api_base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ClientInitError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL with `segments` appended, each percent-encoded as a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> GitHubResult<T> {
        let request = request.build().map_err(|e| GitHubError::connection(transport_cause(&e)))?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, %url, "github request");

        let response = self.http.execute(request).await.map_err(|e| {
            let cause = transport_cause(&e);
            tracing::warn!(%method, %url, %cause, "github transport failure");
            GitHubError::Connection { cause }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| GitHubError::connection(transport_cause(&e)))?;

        if let Some(err) = classify(status, &headers, &String::from_utf8_lossy(&body)) {
            tracing::warn!(%method, %url, status = status.as_u16(), error = %err, "github request failed");
            return Err(err);
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "github response did not match expected shape");
            GitHubError::decode(e)
        })
    }
}

#[async_trait]
impl GitHubApi for HttpGitHubClient {
    async fn authenticated_user(&self) -> GitHubResult<UserRecord> {
        self.execute(self.http.get(self.endpoint(&["user"]))).await
    }

    async fn list_user_repositories(&self, owner: &str) -> GitHubResult<Vec<RepoRecord>> {
        self.execute(self.http.get(self.endpoint(&["users", owner, "repos"])))
            .await
    }

    async fn get_repository(&self, owner: &str, name: &str) -> GitHubResult<RepoRecord> {
        self.execute(self.http.get(self.endpoint(&["repos", owner, name])))
            .await
    }

    async fn create_issue(&self, owner: &str, repo: &str, issue: &NewIssue) -> GitHubResult<IssueRecord> {
        let url = self.endpoint(&["repos", owner, repo, "issues"]);
        self.execute(self.http.request(Method::POST, url).json(issue))
            .await
    }
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Flatten a transport error and its sources into one line.
fn transport_cause(err: &reqwest::Error) -> String {
    let mut cause = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        cause.push_str(": ");
        cause.push_str(&inner.to_string());
        source = inner.source();
    }
    cause
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    fn client_for(server: &MockServer) -> HttpGitHubClient {
        HttpGitHubClient::new(&AppConfig::new(server.uri(), "test-token", "octocat")).unwrap()
    }

    #[tokio::test]
    async fn attaches_bearer_token_and_github_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("accept", GITHUB_MEDIA_TYPE))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"login": "octocat", "followers": 1, "following": 2})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).authenticated_user().await.unwrap();
        assert_eq!(user.login, "octocat");
    }

    #[tokio::test]
    async fn path_segments_are_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/a%20b%2Fc"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_repository("octocat", "a b/c")
            .await
            .unwrap_err();
        assert_eq!(err, GitHubError::NotFound);
    }

    #[tokio::test]
    async fn base_url_path_prefix_is_preserved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let cfg = AppConfig::new(format!("{}/api/v3/", server.uri()), "t", "octocat");
        let repos = HttpGitHubClient::new(&cfg)
            .unwrap()
            .list_user_repositories("octocat")
            .await
            .unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn create_issue_posts_title_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/octocat/hello/issues"))
            .and(body_json(json!({"title": "Bug", "body": "Details"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"number": 7, "html_url": "https://github.com/octocat/hello/issues/7"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let issue = NewIssue {
            title: "Bug".to_string(),
            body: "Details".to_string(),
        };
        let created = client_for(&server)
            .create_issue("octocat", "hello", &issue)
            .await
            .unwrap();
        assert_eq!(created.html_url, "https://github.com/octocat/hello/issues/7");
        assert_eq!(created.number, Some(7));
    }

    #[tokio::test]
    async fn unexpected_success_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).authenticated_user().await.unwrap_err();
        assert!(matches!(err, GitHubError::Decode { .. }));
        assert_eq!(err.status_code(), 502);
    }

    #[tokio::test]
    async fn timeout_is_a_connection_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let cfg = AppConfig::new(server.uri(), "t", "octocat").with_request_timeout(Duration::from_millis(100));
        let err = HttpGitHubClient::new(&cfg)
            .unwrap()
            .authenticated_user()
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::Connection { .. }));
        assert_eq!(err.status_code(), 503);
    }

    #[test]
    fn rejects_unusable_configuration() {
        let bad_url = AppConfig::new("not a url", "t", "o");
        assert!(matches!(
            HttpGitHubClient::new(&bad_url),
            Err(ClientInitError::InvalidBaseUrl { .. })
        ));

        let bad_token = AppConfig::new("https://api.github.com", "line\nbreak", "o");
        assert!(matches!(
            HttpGitHubClient::new(&bad_token),
            Err(ClientInitError::InvalidToken)
        ));
    }
}
