use std::time::Duration;

use reqwest::{header::HeaderMap, StatusCode};
use thiserror::Error;

/// Failures talking to Sqorz. Unknown organizations and series come back
/// as 404, so `UnknownResource` carries the request path to show which id
/// was wrong.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Sqorz has nothing at {path} - check the organization or series id")]
    UnknownResource { path: String, body: String },

    #[error("Sqorz is throttling requests{}", retry_hint(.retry_after))]
    Throttled { retry_after: Option<Duration> },

    #[error("Sqorz is unavailable (HTTP {status}): {body}")]
    Unavailable { status: u16, body: String },

    #[error("Sqorz rejected {path} (HTTP {status}): {body}")]
    Rejected { path: String, status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(wait) => format!(", retry after {}s", wait.as_secs()),
        None => String::new(),
    }
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        let body = body.trim();
        if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let cut: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", cut, body.len())
        }
    }

    /// Map a failed Sqorz response for `path` onto an error.
    pub fn from_response(status: StatusCode, path: &str, headers: &HeaderMap, body: &str) -> Self {
        let body = Self::truncate_body(body);
        match status {
            StatusCode::NOT_FOUND | StatusCode::GONE => ApiError::UnknownResource {
                path: path.to_string(),
                body,
            },
            StatusCode::TOO_MANY_REQUESTS => ApiError::Throttled {
                retry_after: headers
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse::<u64>().ok())
                    .map(Duration::from_secs),
            },
            s if s.is_server_error() => ApiError::Unavailable {
                status: s.as_u16(),
                body,
            },
            s => ApiError::Rejected {
                path: path.to_string(),
                status: s.as_u16(),
                body,
            },
        }
    }
}
