//
//  confluence-sdk
//  api/model/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Values
//!
//! Each endpoint is a plain struct of `Option` fields implementing
//! [`Request`]. `None` means "not set": the field is left out of the query
//! string or body entirely, so the server applies its own default.
//!
//! A request declares its path, its HTTP method and how local fields map to
//! wire names; the provided methods do the rest:
//!
//! 1. join the transport's root URL with [`Request::path`]
//! 2. derive the query ([`Request::final_params`]) and body
//!    ([`Request::final_body`]), both `None` when nothing is set
//! 3. send through the transport
//! 4. fail with [`ApiError::Http`] on a non-2xx status, or wrap the JSON body
//!    in the declared response type together with its [`ResponseMeta`]
//!
//! [`ResponseMeta`]: super::ResponseMeta

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::field::RawData;
use super::response::{json_type, Response, ResponseBase};
use crate::api::common::ApiError;
use crate::api::transport::{AsyncTransport, HttpResponse, Query, Transport};

/// HTTP verb used by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Conversion of a local field value into query string values.
///
/// Scalars produce one value; sequences produce one value per element, which
/// ends up as a repeated key (`id=1&id=2`).
pub trait ToQuery {
    fn to_query(&self) -> Vec<String>;
}

impl ToQuery for str {
    fn to_query(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl ToQuery for String {
    fn to_query(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl ToQuery for bool {
    fn to_query(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

macro_rules! impl_to_query_for_int {
    ($($t:ty),*) => {
        $(
            impl ToQuery for $t {
                fn to_query(&self) -> Vec<String> {
                    vec![self.to_string()]
                }
            }
        )*
    };
}

impl_to_query_for_int!(i32, i64, u32, u64, usize);

impl<T: ToQuery> ToQuery for [T] {
    fn to_query(&self) -> Vec<String> {
        self.iter().flat_map(ToQuery::to_query).collect()
    }
}

impl<T: ToQuery> ToQuery for Vec<T> {
    fn to_query(&self) -> Vec<String> {
        self.as_slice().to_query()
    }
}

/// Query parameters under construction. Unset fields are skipped.
///
/// ```rust
/// use confluence_sdk::api::model::Params;
///
/// let space_id: Option<Vec<i64>> = Some(vec![1, 2]);
/// let title: Option<String> = None;
///
/// let query = Params::new()
///     .set("space-id", space_id.as_deref())
///     .set("title", title.as_deref())
///     .into_query();
///
/// assert_eq!(
///     query,
///     Some(vec![
///         ("space-id".to_string(), "1".to_string()),
///         ("space-id".to_string(), "2".to_string()),
///     ])
/// );
/// assert_eq!(Params::new().into_query(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Query,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` under the wire name `name` if it is set.
    pub fn set<T: ToQuery + ?Sized>(mut self, name: &str, value: Option<&T>) -> Self {
        if let Some(value) = value {
            for item in value.to_query() {
                self.pairs.push((name.to_string(), item));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The collected pairs, or `None` when nothing was set.
    pub fn into_query(self) -> Option<Query> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(self.pairs)
        }
    }
}

/// JSON body under construction. Unset fields are skipped.
///
/// The first serialization failure is kept and reported by
/// [`into_payload`](Self::into_payload).
#[derive(Debug, Default)]
pub struct Body {
    fields: RawData,
    error: Option<serde_json::Error>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` under the wire name `name` if it is set.
    pub fn set<T: Serialize + ?Sized>(mut self, name: &str, value: Option<&T>) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Some(value) = value {
            match serde_json::to_value(value) {
                Ok(json) => {
                    self.fields.insert(name.to_string(), json);
                }
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The collected fields, or `None` when nothing was set.
    pub fn into_payload(self) -> Result<Option<RawData>, ApiError> {
        if let Some(e) = self.error {
            return Err(ApiError::Encode(e));
        }
        Ok(if self.fields.is_empty() {
            None
        } else {
            Some(self.fields)
        })
    }
}

/// One Confluence endpoint.
///
/// Implementors supply [`path`](Self::path), the [`METHOD`](Self::METHOD)
/// and, where the endpoint takes them, [`params`](Self::params) and
/// [`body`](Self::body). GET endpoints never override `body`.
#[async_trait]
pub trait Request: Sync {
    /// Wrapper type built from a successful response.
    type Response: Response + Send;

    /// HTTP verb used by [`sync`](Self::sync) and [`send`](Self::send).
    const METHOD: Method;

    /// Endpoint path relative to the API root, starting with `/`.
    fn path(&self) -> String;

    /// Query parameters keyed by wire name.
    fn params(&self) -> Params {
        Params::new()
    }

    /// Body fields keyed by wire name.
    fn body(&self) -> Body {
        Body::new()
    }

    /// Query ready for the transport: `None` when no field is set.
    fn final_params(&self) -> Option<Query> {
        self.params().into_query()
    }

    /// Body ready for the transport: `None` when no field is set.
    fn final_body(&self) -> Result<Option<RawData>, ApiError> {
        self.body().into_payload()
    }

    /// Full URL of this request under `root_url`.
    fn url(&self, root_url: &str) -> String {
        format!("{}{}", root_url, self.path())
    }

    /// Executes a GET through a blocking transport.
    fn sync_get(&self, client: &dyn Transport) -> Result<Self::Response, ApiError> {
        let url = self.url(client.root_url());
        let params = self.final_params();
        debug!(method = "GET", %url, "sending request");
        let response = client.get(&url, params.as_deref())?;
        into_response(Method::Get, &url, response)
    }

    /// Executes a POST through a blocking transport.
    fn sync_post(&self, client: &dyn Transport) -> Result<Self::Response, ApiError> {
        let url = self.url(client.root_url());
        let params = self.final_params();
        let body = self.final_body()?;
        debug!(method = "POST", %url, "sending request");
        let response = client.post(&url, params.as_deref(), body.as_ref())?;
        into_response(Method::Post, &url, response)
    }

    /// Executes this request with its declared method through a blocking
    /// transport.
    fn sync(&self, client: &dyn Transport) -> Result<Self::Response, ApiError> {
        match Self::METHOD {
            Method::Get => self.sync_get(client),
            Method::Post => self.sync_post(client),
        }
    }

    /// Executes a GET through an async transport.
    async fn async_get(&self, client: &dyn AsyncTransport) -> Result<Self::Response, ApiError> {
        let url = self.url(client.root_url());
        let params = self.final_params();
        debug!(method = "GET", %url, "sending request");
        let response = client.get(&url, params.as_deref()).await?;
        into_response(Method::Get, &url, response)
    }

    /// Executes a POST through an async transport.
    async fn async_post(&self, client: &dyn AsyncTransport) -> Result<Self::Response, ApiError> {
        let url = self.url(client.root_url());
        let params = self.final_params();
        let body = self.final_body()?;
        debug!(method = "POST", %url, "sending request");
        let response = client.post(&url, params.as_deref(), body.as_ref()).await?;
        into_response(Method::Post, &url, response)
    }

    /// Executes this request with its declared method through an async
    /// transport.
    async fn send(&self, client: &dyn AsyncTransport) -> Result<Self::Response, ApiError> {
        match Self::METHOD {
            Method::Get => self.async_get(client).await,
            Method::Post => self.async_post(client).await,
        }
    }
}

/// Checks the status and wraps the JSON body in `R`.
fn into_response<R: Response>(
    method: Method,
    url: &str,
    response: HttpResponse,
) -> Result<R, ApiError> {
    debug!(method = method.as_str(), %url, status = response.status, "received response");

    if !response.is_success() {
        return Err(ApiError::from_status(response.status, response.body));
    }

    let meta = response.meta();
    let value: Value =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match value {
        Value::Object(raw) => Ok(R::from_base(ResponseBase::new(raw, Some(meta)))),
        other => Err(ApiError::Decode(format!(
            "expected a JSON object, found {}",
            json_type(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::Field;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the last call and answers with a canned response.
    struct FakeTransport {
        reply: HttpResponse,
        calls: Mutex<Vec<(String, Option<Query>, Option<RawData>)>>,
    }

    impl FakeTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                reply: HttpResponse {
                    status,
                    headers: vec![("content-type".to_string(), "application/json".to_string())],
                    body: body.to_string(),
                },
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, url: &str, params: Option<&[(String, String)]>, body: Option<&RawData>) {
            self.calls.lock().unwrap().push((
                url.to_string(),
                params.map(<[_]>::to_vec),
                body.cloned(),
            ));
        }

        fn last_call(&self) -> (String, Option<Query>, Option<RawData>) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for FakeTransport {
        fn root_url(&self) -> &str {
            "https://acme.atlassian.net/wiki/api/v2"
        }

        fn get(
            &self,
            url: &str,
            params: Option<&[(String, String)]>,
        ) -> Result<HttpResponse, ApiError> {
            self.record(url, params, None);
            Ok(self.reply.clone())
        }

        fn post(
            &self,
            url: &str,
            params: Option<&[(String, String)]>,
            body: Option<&RawData>,
        ) -> Result<HttpResponse, ApiError> {
            self.record(url, params, body);
            Ok(self.reply.clone())
        }
    }

    #[async_trait]
    impl AsyncTransport for FakeTransport {
        fn root_url(&self) -> &str {
            Transport::root_url(self)
        }

        async fn get(
            &self,
            url: &str,
            params: Option<&[(String, String)]>,
        ) -> Result<HttpResponse, ApiError> {
            Transport::get(self, url, params)
        }

        async fn post(
            &self,
            url: &str,
            params: Option<&[(String, String)]>,
            body: Option<&RawData>,
        ) -> Result<HttpResponse, ApiError> {
            Transport::post(self, url, params, body)
        }
    }

    #[derive(Debug, Default)]
    struct ListThings {
        space_id: Option<Vec<i64>>,
        title: Option<String>,
        limit: Option<u32>,
    }

    impl Request for ListThings {
        type Response = ResponseBase;
        const METHOD: Method = Method::Get;

        fn path(&self) -> String {
            "/things".to_string()
        }

        fn params(&self) -> Params {
            Params::new()
                .set("space-id", self.space_id.as_deref())
                .set("title", self.title.as_deref())
                .set("limit", self.limit.as_ref())
        }
    }

    #[derive(Debug, Default)]
    struct CreateThing {
        name: Option<String>,
        is_private: Option<bool>,
        tags: Option<Vec<String>>,
    }

    impl Request for CreateThing {
        type Response = ResponseBase;
        const METHOD: Method = Method::Post;

        fn path(&self) -> String {
            "/things".to_string()
        }

        fn body(&self) -> Body {
            Body::new()
                .set("name", self.name.as_ref())
                .set("isPrivate", self.is_private.as_ref())
                .set("tags", self.tags.as_ref())
        }
    }

    #[test]
    fn test_all_unset_gives_no_params() {
        assert_eq!(ListThings::default().final_params(), None);
    }

    #[test]
    fn test_one_field_set_uses_wire_name() {
        let request = ListThings {
            space_id: Some(vec![42]),
            ..Default::default()
        };
        assert_eq!(
            request.final_params(),
            Some(vec![("space-id".to_string(), "42".to_string())])
        );
    }

    #[test]
    fn test_falsy_values_are_sent() {
        let request = ListThings {
            title: Some(String::new()),
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(
            request.final_params(),
            Some(vec![
                ("title".to_string(), String::new()),
                ("limit".to_string(), "0".to_string()),
            ])
        );
    }

    #[test]
    fn test_body_drops_unset_fields() {
        assert!(CreateThing::default().final_body().unwrap().is_none());

        let request = CreateThing {
            name: Some("Docs".to_string()),
            is_private: Some(false),
            ..Default::default()
        };
        let body = request.final_body().unwrap().unwrap();
        assert_eq!(Value::Object(body), json!({"name": "Docs", "isPrivate": false}));
    }

    #[test]
    fn test_get_requests_have_no_body() {
        assert!(ListThings::default().final_body().unwrap().is_none());
    }

    #[test]
    fn test_sync_get_composes_url_and_wraps_response() {
        let transport = FakeTransport::new(200, r#"{"results": [], "size": 0}"#);
        let request = ListThings {
            limit: Some(10),
            ..Default::default()
        };

        let response = request.sync(&transport).unwrap();
        assert_eq!(response.get_as::<i64>("size"), Field::Value(0));
        let meta = response.meta().unwrap();
        assert_eq!(meta.status, 200);
        assert_eq!(meta.header("content-type"), Some("application/json"));

        let (url, params, body) = transport.last_call();
        assert_eq!(url, "https://acme.atlassian.net/wiki/api/v2/things");
        assert_eq!(params, Some(vec![("limit".to_string(), "10".to_string())]));
        assert!(body.is_none());
    }

    #[test]
    fn test_sync_post_sends_body() {
        let transport = FakeTransport::new(201, r#"{"id": "7"}"#);
        let request = CreateThing {
            name: Some("Docs".to_string()),
            tags: Some(vec!["a".to_string()]),
            ..Default::default()
        };

        let response = request.sync(&transport).unwrap();
        assert_eq!(response.get_as::<&str>("id"), Field::Value("7"));

        let (_, params, body) = transport.last_call();
        assert!(params.is_none());
        assert_eq!(
            Value::Object(body.unwrap()),
            json!({"name": "Docs", "tags": ["a"]})
        );
    }

    #[test]
    fn test_non_success_status_is_http_error() {
        let transport = FakeTransport::new(404, r#"{"errors":[{"title":"Not Found"}]}"#);
        let err = ListThings::default().sync(&transport).unwrap_err();
        match err {
            ApiError::Http { status, body, .. } => {
                assert_eq!(status, 404);
                assert!(body.contains("Not Found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let transport = FakeTransport::new(200, "<html>maintenance</html>");
        let err = ListThings::default().sync(&transport).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_non_object_json_is_decode_error() {
        let transport = FakeTransport::new(200, "[1, 2, 3]");
        let err = ListThings::default().sync(&transport).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_async_dispatch() {
        let transport = FakeTransport::new(200, r#"{"id": "9"}"#);
        let request = CreateThing {
            name: Some("Async".to_string()),
            ..Default::default()
        };

        let response = tokio_test::block_on(request.send(&transport)).unwrap();
        assert_eq!(response.get_as::<&str>("id"), Field::Value("9"));

        let (url, _, body) = transport.last_call();
        assert_eq!(url, "https://acme.atlassian.net/wiki/api/v2/things");
        assert_eq!(Value::Object(body.unwrap()), json!({"name": "Async"}));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
    }
}
