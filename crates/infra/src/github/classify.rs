//! Response classification.
//!
//! Maps a completed upstream response onto [`GitHubError`]. Transport failures
//! never reach this function; the client turns those into
//! [`GitHubError::Connection`] directly.

use reqwest::{StatusCode, header::HeaderMap};

use gitstats_core::GitHubError;

pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Classify an upstream response. Returns `None` for success statuses.
///
/// Order matters: an exhausted rate limit is reported as `RateLimited` even
/// though GitHub sends it as a 403.
pub fn classify(status: StatusCode, headers: &HeaderMap, body: &str) -> Option<GitHubError> {
    if status == StatusCode::FORBIDDEN && rate_limit_exhausted(headers) {
        let reset = header_str(headers, RATE_LIMIT_RESET)
            .unwrap_or("unknown")
            .to_string();
        return Some(GitHubError::RateLimited { reset });
    }

    match status {
        StatusCode::NOT_FOUND => Some(GitHubError::NotFound),
        StatusCode::UNAUTHORIZED => Some(GitHubError::Auth),
        StatusCode::FORBIDDEN => Some(GitHubError::Forbidden),
        s if s.is_client_error() || s.is_server_error() => Some(GitHubError::Upstream {
            status: s.as_u16(),
            body: body.to_string(),
        }),
        _ => None,
    }
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    header_str(headers, RATE_LIMIT_REMAINING)
        .and_then(|v| v.parse::<u64>().ok())
        .is_some_and(|remaining| remaining == 0)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for &(k, v) in pairs {
            map.insert(k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn success_statuses_are_not_errors() {
        assert_eq!(classify(StatusCode::OK, &HeaderMap::new(), "{}"), None);
        assert_eq!(classify(StatusCode::CREATED, &HeaderMap::new(), "{}"), None);
    }

    #[test]
    fn forbidden_with_zero_remaining_is_rate_limited() {
        let h = headers(&[("x-ratelimit-remaining", "0"), ("x-ratelimit-reset", "1700000000")]);
        assert_eq!(
            classify(StatusCode::FORBIDDEN, &h, "rate limited"),
            Some(GitHubError::RateLimited {
                reset: "1700000000".to_string()
            })
        );
    }

    #[test]
    fn rate_limit_without_reset_header_reports_unknown() {
        let h = headers(&[("x-ratelimit-remaining", "0")]);
        let err = classify(StatusCode::FORBIDDEN, &h, "").unwrap();
        assert_eq!(err.to_string(), "GitHub API rate limit exceeded. Resets at unknown");
        assert_eq!(err.status_code(), 429);
    }

    #[test]
    fn forbidden_with_remaining_quota_is_forbidden() {
        let h = headers(&[("x-ratelimit-remaining", "42")]);
        assert_eq!(classify(StatusCode::FORBIDDEN, &h, ""), Some(GitHubError::Forbidden));
    }

    #[test]
    fn forbidden_without_rate_limit_headers_is_forbidden() {
        assert_eq!(
            classify(StatusCode::FORBIDDEN, &HeaderMap::new(), ""),
            Some(GitHubError::Forbidden)
        );
    }

    #[test]
    fn unparsable_remaining_header_is_not_a_rate_limit() {
        let h = headers(&[("x-ratelimit-remaining", "soon")]);
        assert_eq!(classify(StatusCode::FORBIDDEN, &h, ""), Some(GitHubError::Forbidden));
    }

    #[test]
    fn zero_remaining_only_matters_on_403() {
        let h = headers(&[("x-ratelimit-remaining", "0")]);
        assert_eq!(classify(StatusCode::NOT_FOUND, &h, ""), Some(GitHubError::NotFound));
        assert_eq!(classify(StatusCode::UNAUTHORIZED, &h, ""), Some(GitHubError::Auth));
    }

    #[test]
    fn other_errors_pass_status_and_body_through() {
        let body = r#"{"message":"Validation Failed","errors":[{"field":"title","code":"missing_field"}]}"#;
        assert_eq!(
            classify(StatusCode::UNPROCESSABLE_ENTITY, &HeaderMap::new(), body),
            Some(GitHubError::Upstream {
                status: 422,
                body: body.to_string()
            })
        );
        assert_eq!(
            classify(StatusCode::BAD_GATEWAY, &HeaderMap::new(), "oops"),
            Some(GitHubError::Upstream {
                status: 502,
                body: "oops".to_string()
            })
        );
    }
}
