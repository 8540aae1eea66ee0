//
//  confluence-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Static credentials attached to every request by the reqwest transports.
//!
//! ## Supported Credentials
//!
//! - **Basic**: Atlassian account email plus an API token, the standard way
//!   to call Confluence Cloud from scripts.
//! - **Bearer**: a pre-issued access token, for sites fronted by a gateway or
//!   for OAuth tokens obtained elsewhere.
//!
//! Obtaining or refreshing tokens is out of scope; the caller supplies them.
//!
//! ## Example
//!
//! ```rust
//! use confluence_sdk::auth::AuthCredential;
//!
//! let credential = AuthCredential::basic("me@example.com", "api-token");
//! assert_eq!(credential.kind(), "basic");
//! // Secrets never show up in debug output
//! assert!(!format!("{:?}", credential).contains("api-token"));
//! ```

use std::fmt;

use reqwest::RequestBuilder;

/// Credentials applied to outgoing requests.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// HTTP Basic authentication with an account email and API token.
    Basic {
        /// Atlassian account email.
        username: String,
        /// API token created at id.atlassian.com.
        token: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The access token.
        token: String,
    },
}

impl AuthCredential {
    /// Creates a [`AuthCredential::Basic`] credential.
    pub fn basic(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Creates a [`AuthCredential::Bearer`] credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Short name of the credential type, for display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
        }
    }

    /// Adds the authorization header to an async request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, token } => request.basic_auth(username, Some(token)),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }

    /// Adds the authorization header to a blocking request.
    pub fn apply_to_blocking(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match self {
            Self::Basic { username, token } => request.basic_auth(username, Some(token)),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("token", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// Masks a secret for display, keeping the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_tokens() {
        let basic = format!("{:?}", AuthCredential::basic("me@example.com", "s3cret"));
        assert!(basic.contains("me@example.com"));
        assert!(!basic.contains("s3cret"));

        let bearer = format!("{:?}", AuthCredential::bearer("abc123"));
        assert!(!bearer.contains("abc123"));
    }

    #[test]
    fn test_blocking_basic_auth_header() {
        let client = reqwest::blocking::Client::new();
        let request = AuthCredential::basic("user", "pass")
            .apply_to_blocking(client.get("https://example.com"))
            .build()
            .unwrap();
        // base64("user:pass")
        assert_eq!(
            request.headers()["authorization"].to_str().unwrap(),
            "Basic dXNlcjpwYXNz"
        );
    }

    #[test]
    fn test_async_bearer_header() {
        let client = reqwest::Client::new();
        let request = AuthCredential::bearer("tok")
            .apply_to_request(client.get("https://example.com"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers()["authorization"].to_str().unwrap(),
            "Bearer tok"
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "");
    }
}
