//! Upstream error taxonomy.

use thiserror::Error;

/// Result type used for every call that may reach GitHub.
pub type GitHubResult<T> = Result<T, GitHubError>;

/// Classified failure of a GitHub-backed operation.
///
/// The `Display` text of each variant is the message rendered in the wire
/// error envelope; [`GitHubError::status_code`] is the wire status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GitHubError {
    /// The requested resource does not exist upstream.
    #[error("Resource not found on GitHub")]
    NotFound,

    /// The configured token was rejected.
    #[error("Authentication error with GitHub API")]
    Auth,

    /// The token is valid but lacks access (and the rate limit is not exhausted).
    #[error("Forbidden: Access denied to GitHub resource")]
    Forbidden,

    /// The primary rate limit is exhausted. `reset` is the raw
    /// `X-RateLimit-Reset` value, or `"unknown"`.
    #[error("GitHub API rate limit exceeded. Resets at {reset}")]
    RateLimited { reset: String },

    /// Any other non-success status, passed through with the body verbatim.
    #[error("GitHub API error: {body}")]
    Upstream { status: u16, body: String },

    /// Transport failure (DNS, refused connection, timeout).
    #[error("Error connecting to GitHub API: {cause}")]
    Connection { cause: String },

    /// A success response whose body did not match the expected shape.
    #[error("Invalid response from GitHub API: {cause}")]
    Decode { cause: String },

    /// Local request validation failed; no upstream call was made.
    #[error("{0}")]
    Validation(String),
}

impl GitHubError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn connection(cause: impl ToString) -> Self {
        Self::Connection {
            cause: cause.to_string(),
        }
    }

    pub fn decode(cause: impl ToString) -> Self {
        Self::Decode {
            cause: cause.to_string(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Auth => 401,
            Self::Forbidden => 403,
            Self::RateLimited { .. } => 429,
            Self::Upstream { status, .. } => *status,
            Self::Connection { .. } => 503,
            Self::Decode { .. } => 502,
            Self::Validation(_) => 400,
        }
    }
}
