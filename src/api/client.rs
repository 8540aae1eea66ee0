//
//  confluence-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Clients for the Confluence API
//!
//! The two reqwest-backed transports:
//!
//! - [`Confluence`]: blocking, for scripts and synchronous code
//! - [`AsyncConfluence`]: async, for code already running on tokio
//!
//! Both hold the site URL, derive the v2 API root from it
//! (`{site}/wiki/api/v2`), attach credentials and hand raw responses back to
//! the request layer, which owns status checking and decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use url::Url;

use crate::api::common::ApiError;
use crate::api::model::RawData;
use crate::api::transport::{AsyncTransport, HttpResponse, Transport};
use crate::auth::AuthCredential;
use crate::config::Config;

/// Path of the v2 REST API under a site URL.
pub const API_PATH: &str = "/wiki/api/v2";

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Derives the API root from a site URL.
///
/// # Example
///
/// ```rust
/// use confluence_sdk::api::client::root_url_for;
///
/// assert_eq!(
///     root_url_for("https://acme.atlassian.net/").unwrap(),
///     "https://acme.atlassian.net/wiki/api/v2"
/// );
/// assert!(root_url_for("acme.atlassian.net").is_err());
/// ```
pub fn root_url_for(site_url: &str) -> Result<String, ApiError> {
    let trimmed = site_url.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl {
        url: site_url.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl {
            url: site_url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(format!("{trimmed}{API_PATH}"))
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, crate::VERSION)
}

/// Timeout from config; `0` means none.
fn configured_timeout(config: &Config) -> Option<Duration> {
    match config.http.timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}

fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

/// Blocking transport for a Confluence Cloud site.
///
/// # Example
///
/// ```rust,no_run
/// use confluence_sdk::api::Confluence;
/// use confluence_sdk::api::methods::page::GetPagesRequest;
/// use confluence_sdk::api::model::Request;
/// use confluence_sdk::auth::AuthCredential;
///
/// let client = Confluence::new("https://acme.atlassian.net")?
///     .with_auth(AuthCredential::basic("me@example.com", "api-token"));
///
/// let pages = GetPagesRequest::default().sync(&client)?;
/// for page in pages.results().unwrap_or(&[]) {
///     println!("{}", page.title());
/// }
/// # Ok::<(), confluence_sdk::api::ApiError>(())
/// ```
pub struct Confluence {
    http: reqwest::blocking::Client,
    site_url: String,
    root_url: String,
    auth: Option<AuthCredential>,
}

impl Confluence {
    /// Creates a client for `site_url` with the default timeout.
    pub fn new(site_url: &str) -> Result<Self, ApiError> {
        Self::with_options(site_url, Some(DEFAULT_TIMEOUT), default_user_agent())
    }

    /// Creates a client from the CLI configuration, including credentials.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let user_agent = config
            .http
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);
        let mut client = Self::with_options(config.site_url()?, configured_timeout(config), user_agent)?;
        client.auth = config.credential();
        Ok(client)
    }

    fn with_options(
        site_url: &str,
        timeout: Option<Duration>,
        user_agent: String,
    ) -> Result<Self, ApiError> {
        let root_url = root_url_for(site_url)?;
        let mut builder = reqwest::blocking::Client::builder().user_agent(user_agent);
        // The blocking builder applies its own 30s default unless told otherwise.
        builder = builder.timeout(timeout);
        Ok(Self {
            http: builder.build()?,
            site_url: site_url.trim().trim_end_matches('/').to_string(),
            root_url,
            auth: None,
        })
    }

    /// Sets the credentials attached to every request.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// The site URL without a trailing slash.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// `true` if credentials are configured.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    fn send(&self, mut request: reqwest::blocking::RequestBuilder) -> Result<HttpResponse, ApiError> {
        if let Some(auth) = &self.auth {
            request = auth.apply_to_blocking(request);
        }
        let response = request.send()?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.text()?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Transport for Confluence {
    fn root_url(&self) -> &str {
        &self.root_url
    }

    fn get(&self, url: &str, params: Option<&[(String, String)]>) -> Result<HttpResponse, ApiError> {
        let mut request = self.http.get(url);
        if let Some(params) = params {
            request = request.query(params);
        }
        self.send(request)
    }

    fn post(
        &self,
        url: &str,
        params: Option<&[(String, String)]>,
        body: Option<&RawData>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = self.http.post(url);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request)
    }
}

/// Async transport for a Confluence Cloud site.
///
/// # Example
///
/// ```rust,no_run
/// use confluence_sdk::api::AsyncConfluence;
/// use confluence_sdk::api::methods::space::GetSpacesRequest;
/// use confluence_sdk::api::model::Request;
///
/// # async fn example() -> Result<(), confluence_sdk::api::ApiError> {
/// let client = AsyncConfluence::new("https://acme.atlassian.net")?;
/// let spaces = GetSpacesRequest::default().send(&client).await?;
/// println!("{} spaces", spaces.results().map(<[_]>::len).unwrap_or(0));
/// # Ok(())
/// # }
/// ```
pub struct AsyncConfluence {
    http: reqwest::Client,
    site_url: String,
    root_url: String,
    auth: Option<AuthCredential>,
}

impl AsyncConfluence {
    /// Creates a client for `site_url` with the default timeout.
    pub fn new(site_url: &str) -> Result<Self, ApiError> {
        Self::with_options(site_url, Some(DEFAULT_TIMEOUT), default_user_agent())
    }

    /// Creates a client from the CLI configuration, including credentials.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let user_agent = config
            .http
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);
        let mut client = Self::with_options(config.site_url()?, configured_timeout(config), user_agent)?;
        client.auth = config.credential();
        Ok(client)
    }

    fn with_options(
        site_url: &str,
        timeout: Option<Duration>,
        user_agent: String,
    ) -> Result<Self, ApiError> {
        let root_url = root_url_for(site_url)?;
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            site_url: site_url.trim().trim_end_matches('/').to_string(),
            root_url,
            auth: None,
        })
    }

    /// Sets the credentials attached to every request.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// The site URL without a trailing slash.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// `true` if credentials are configured.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    async fn send(&self, mut request: reqwest::RequestBuilder) -> Result<HttpResponse, ApiError> {
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.text().await?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl AsyncTransport for AsyncConfluence {
    fn root_url(&self) -> &str {
        &self.root_url
    }

    async fn get(
        &self,
        url: &str,
        params: Option<&[(String, String)]>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = self.http.get(url);
        if let Some(params) = params {
            request = request.query(params);
        }
        self.send(request).await
    }

    async fn post(
        &self,
        url: &str,
        params: Option<&[(String, String)]>,
        body: Option<&RawData>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = self.http.post(url);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }
}
