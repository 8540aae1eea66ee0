//
//  confluence-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Confluence v2 API
//!
//! This module provides the error type shared by every request, plus the
//! response shapes that recur across endpoints (page links and the
//! `results`/`meta`/`_links` envelope used by expanded collections).
//!
//! # Example
//!
//! ```rust
//! use confluence_sdk::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_not_found() => println!("No such resource"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Error type for all Confluence API operations.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Http` | The server answered with a non-2xx status |
/// | `Decode` | A 2xx body is not a JSON object |
/// | `Encode` | A request body field could not be serialized |
/// | `Network` | The transport failed before a response arrived |
/// | `InvalidUrl` | The configured site URL cannot be parsed |
///
/// Nothing is retried or defaulted at this layer: every error reaches the
/// caller unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server returned a non-success status.
    ///
    /// `message` is the human-readable part of Confluence's error envelope
    /// when one could be found, otherwise the raw body.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Extracted error message.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The body of a successful response could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A request body field could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The site URL is not a valid absolute URL.
    #[error("Invalid site URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ApiError {
    /// Builds an [`ApiError::Http`] from a status and raw body, extracting a
    /// readable message from the Confluence error envelope.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = extract_error_message(&body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                "empty response body".to_string()
            } else {
                body.clone()
            }
        });
        Self::Http {
            status,
            message,
            body,
        }
    }

    /// The HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `true` for 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// `true` for 401 Unauthorized and 403 Forbidden.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// `true` for 429 Too Many Requests.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Pulls the human-readable message out of a Confluence error body.
///
/// The v2 API answers with:
/// ```json
/// {"errors": [{"status": 404, "code": "NOT_FOUND", "title": "Not Found", "detail": null}]}
/// ```
///
/// Older gateways answer with `{"message": "..."}`. Returns `None` if neither
/// shape is recognized.
fn extract_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(first) = json
        .get("errors")
        .and_then(|e| e.as_array())
        .and_then(|arr| arr.first())
    {
        let title = first.get("title").and_then(|t| t.as_str());
        let detail = first.get("detail").and_then(|d| d.as_str());
        return match (title, detail) {
            (Some(title), Some(detail)) => Some(format!("{title}: {detail}")),
            (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
            (None, None) => first
                .get("code")
                .and_then(|c| c.as_str())
                .map(str::to_string),
        };
    }

    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v2_error_envelope() {
        let body = r#"{"errors":[{"status":404,"code":"NOT_FOUND","title":"Not Found","detail":null}]}"#;
        let err = ApiError::from_status(404, body);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        match err {
            ApiError::Http { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_title_and_detail() {
        let body = r#"{"errors":[{"title":"Bad Request","detail":"limit must be positive"}]}"#;
        let err = ApiError::from_status(400, body);
        assert_eq!(err.to_string(), "HTTP 400: Bad Request: limit must be positive");
    }

    #[test]
    fn test_message_envelope() {
        let err = ApiError::from_status(401, r#"{"message":"Unauthorized; scope does not match"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized; scope does not match");
    }

    #[test]
    fn test_plain_body_fallback() {
        let err = ApiError::from_status(502, "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(ApiError::from_status(500, "").to_string(), "HTTP 500: empty response body");
    }

    #[test]
    fn test_rate_limited() {
        assert!(ApiError::from_status(429, "").is_rate_limited());
        assert!(!ApiError::Decode("x".to_string()).is_rate_limited());
    }
}
