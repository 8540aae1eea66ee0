//
//  confluence-sdk
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport Seam
//!
//! Requests never talk to the network directly. They are handed a
//! [`Transport`] (blocking) or an [`AsyncTransport`], which supplies the API
//! root URL and performs the HTTP exchange. [`Confluence`] and
//! [`AsyncConfluence`] are the reqwest-backed implementations; tests plug in
//! their own.
//!
//! Retries, connection pooling, timeouts and authentication all live behind
//! this seam.
//!
//! [`Confluence`]: crate::api::Confluence
//! [`AsyncConfluence`]: crate::api::AsyncConfluence

use async_trait::async_trait;

use crate::api::common::ApiError;
use crate::api::model::{RawData, ResponseMeta};

/// Query string pairs. Repeated keys encode list values.
pub type Query = Vec<(String, String)>;

/// An HTTP response as seen by the request layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status and headers, detached from the body.
    pub fn meta(&self) -> ResponseMeta {
        ResponseMeta {
            status: self.status,
            headers: self.headers.clone(),
        }
    }
}

/// Blocking HTTP collaborator.
pub trait Transport {
    /// Root of the REST API, e.g. `https://acme.atlassian.net/wiki/api/v2`.
    fn root_url(&self) -> &str;

    /// Performs a GET. `params` is `None` when the request has no query.
    fn get(&self, url: &str, params: Option<&[(String, String)]>) -> Result<HttpResponse, ApiError>;

    /// Performs a POST with an optional JSON body.
    fn post(
        &self,
        url: &str,
        params: Option<&[(String, String)]>,
        body: Option<&RawData>,
    ) -> Result<HttpResponse, ApiError>;
}

/// Async HTTP collaborator.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    /// Root of the REST API, e.g. `https://acme.atlassian.net/wiki/api/v2`.
    fn root_url(&self) -> &str;

    /// Performs a GET. `params` is `None` when the request has no query.
    async fn get(
        &self,
        url: &str,
        params: Option<&[(String, String)]>,
    ) -> Result<HttpResponse, ApiError>;

    /// Performs a POST with an optional JSON body.
    async fn post(
        &self,
        url: &str,
        params: Option<&[(String, String)]>,
        body: Option<&RawData>,
    ) -> Result<HttpResponse, ApiError>;
}
