//
//  confluence-sdk
//  api/methods/page/get_pages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `GET /pages`

use once_cell::sync::OnceCell;

use super::{BodyFormat, ContentStatus, PageSort};
use crate::api::common::MultiEntityLinks;
use crate::api::methods::{BodyType, Version};
use crate::api::model::{Field, Method, Params, Request, Response, ResponseBase};

/// Lists pages, optionally filtered.
///
/// ```rust
/// use confluence_sdk::api::methods::page::{BodyFormat, GetPagesRequest};
/// use confluence_sdk::api::model::Request;
///
/// let request = GetPagesRequest {
///     space_id: Some(vec![98306]),
///     body_format: Some(BodyFormat::Storage),
///     ..Default::default()
/// };
/// let query = request.final_params().unwrap();
/// assert_eq!(query[0], ("space-id".to_string(), "98306".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPagesRequest {
    /// Page IDs to include.
    pub id: Option<Vec<i64>>,
    /// Space IDs to search in.
    pub space_id: Option<Vec<i64>>,
    pub sort: Option<PageSort>,
    pub status: Option<Vec<ContentStatus>>,
    /// Exact page title.
    pub title: Option<String>,
    /// Body representation to include; bodies are omitted otherwise.
    pub body_format: Option<BodyFormat>,
    /// `live` for live docs, `page` for regular pages.
    pub subtype: Option<String>,
    pub cursor: Option<String>,
    /// Page size, 1 to 250.
    pub limit: Option<u32>,
}

impl Request for GetPagesRequest {
    type Response = GetPagesResponse;
    const METHOD: Method = Method::Get;

    fn path(&self) -> String {
        "/pages".to_string()
    }

    fn params(&self) -> Params {
        Params::new()
            .set("id", self.id.as_deref())
            .set("space-id", self.space_id.as_deref())
            .set("sort", self.sort.as_ref())
            .set("status", self.status.as_deref())
            .set("title", self.title.as_deref())
            .set("body-format", self.body_format.as_ref())
            .set("subtype", self.subtype.as_deref())
            .set("cursor", self.cursor.as_deref())
            .set("limit", self.limit.as_ref())
    }
}

/// One page of pages.
#[derive(Debug, Clone)]
pub struct GetPagesResponse {
    base: ResponseBase,
    results: OnceCell<Field<Vec<Page>>>,
    links: OnceCell<Field<MultiEntityLinks>>,
}

impl Response for GetPagesResponse {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            results: OnceCell::new(),
            links: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl GetPagesResponse {
    pub fn results(&self) -> Field<&[Page]> {
        self.base.many(&self.results, "results")
    }

    pub fn links(&self) -> Field<&MultiEntityLinks> {
        self.base.one(&self.links, "_links")
    }

    /// Cursor for the next page of results, if there is one.
    pub fn next_cursor(&self) -> Option<String> {
        self.links().value()?.next_cursor()
    }
}

/// A page (`PageBulk` schema).
#[derive(Debug, Clone)]
pub struct Page {
    base: ResponseBase,
    version: OnceCell<Field<Version>>,
    body: OnceCell<Field<PageBody>>,
    links: OnceCell<Field<PageLinks>>,
}

impl Response for Page {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            version: OnceCell::new(),
            body: OnceCell::new(),
            links: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl Page {
    pub fn id(&self) -> Field<&str> {
        self.base.get_as("id")
    }

    /// Wire value of `status`; see [`ContentStatus`].
    pub fn status(&self) -> Field<&str> {
        self.base.get_as("status")
    }

    pub fn title(&self) -> Field<&str> {
        self.base.get_as("title")
    }

    pub fn space_id(&self) -> Field<&str> {
        self.base.get_as("spaceId")
    }

    /// Null for top-level pages.
    pub fn parent_id(&self) -> Field<&str> {
        self.base.get_as("parentId")
    }

    pub fn parent_type(&self) -> Field<&str> {
        self.base.get_as("parentType")
    }

    /// Position among the parent's children.
    pub fn position(&self) -> Field<i64> {
        self.base.get_as("position")
    }

    pub fn author_id(&self) -> Field<&str> {
        self.base.get_as("authorId")
    }

    pub fn owner_id(&self) -> Field<&str> {
        self.base.get_as("ownerId")
    }

    pub fn last_owner_id(&self) -> Field<&str> {
        self.base.get_as("lastOwnerId")
    }

    pub fn subtype(&self) -> Field<&str> {
        self.base.get_as("subtype")
    }

    pub fn created_at(&self) -> Field<&str> {
        self.base.get_as("createdAt")
    }

    pub fn version(&self) -> Field<&Version> {
        self.base.one(&self.version, "version")
    }

    pub fn body(&self) -> Field<&PageBody> {
        self.base.one(&self.body, "body")
    }

    pub fn links(&self) -> Field<&PageLinks> {
        self.base.one(&self.links, "_links")
    }
}

/// Page body in each requested representation.
#[derive(Debug, Clone)]
pub struct PageBody {
    base: ResponseBase,
    storage: OnceCell<Field<BodyType>>,
    atlas_doc_format: OnceCell<Field<BodyType>>,
}

impl Response for PageBody {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            storage: OnceCell::new(),
            atlas_doc_format: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl PageBody {
    pub fn storage(&self) -> Field<&BodyType> {
        self.base.one(&self.storage, "storage")
    }

    pub fn atlas_doc_format(&self) -> Field<&BodyType> {
        self.base.one(&self.atlas_doc_format, "atlas_doc_format")
    }
}

leaf_response! {
    /// `_links` of a page.
    PageLinks
}

impl PageLinks {
    pub fn webui(&self) -> Field<&str> {
        self.base.get_as("webui")
    }

    pub fn editui(&self) -> Field<&str> {
        self.base.get_as("editui")
    }

    pub fn tinyui(&self) -> Field<&str> {
        self.base.get_as("tinyui")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_fields_no_query() {
        assert_eq!(GetPagesRequest::default().final_params(), None);
        assert_eq!(GetPagesRequest::default().final_body().unwrap(), None);
    }

    #[test]
    fn test_only_set_fields_under_wire_names() {
        let request = GetPagesRequest {
            space_id: Some(vec![98306]),
            status: Some(vec![ContentStatus::Current, ContentStatus::Draft]),
            body_format: Some(BodyFormat::AtlasDocFormat),
            sort: Some(PageSort::DescModifiedDate),
            ..Default::default()
        };
        assert_eq!(
            request.final_params(),
            Some(vec![
                ("space-id".to_string(), "98306".to_string()),
                ("sort".to_string(), "-modified-date".to_string()),
                ("status".to_string(), "current".to_string()),
                ("status".to_string(), "draft".to_string()),
                ("body-format".to_string(), "atlas_doc_format".to_string()),
            ])
        );
    }

    #[test]
    fn test_page_navigation() {
        let response = GetPagesResponse::from_value(json!({
            "results": [{
                "id": "1001",
                "status": "current",
                "title": "Runbook",
                "spaceId": "98306",
                "parentId": null,
                "position": 0,
                "version": {"number": 5, "minorEdit": true},
                "body": {"storage": {"representation": "storage", "value": "<p>hi</p>"}},
                "_links": {"webui": "/spaces/ENG/pages/1001", "tinyui": "/x/AQ"}
            }],
            "_links": {}
        }))
        .unwrap();

        let page = &response.results().unwrap()[0];
        assert_eq!(page.title(), Field::Value("Runbook"));
        assert!(page.parent_id().is_null());
        assert!(page.owner_id().is_absent());
        assert_eq!(page.position(), Field::Value(0));
        assert_eq!(page.version().and_then(Version::number), Field::Value(5));
        assert_eq!(page.version().and_then(Version::minor_edit), Field::Value(true));

        let body = page.body().unwrap();
        assert_eq!(body.storage().and_then(BodyType::value), Field::Value("<p>hi</p>"));
        assert!(body.atlas_doc_format().is_absent());

        let links = page.links().unwrap();
        assert_eq!(links.tinyui(), Field::Value("/x/AQ"));
        assert!(links.editui().is_absent());
        assert!(response.links().and_then(MultiEntityLinks::next).is_absent());
    }

    #[test]
    fn test_results_with_a_null_element_stay_present() {
        let response =
            GetPagesResponse::from_value(json!({"results": [{"id": "1"}, null]})).unwrap();
        assert!(!response.results().is_absent());
        assert!(response.results().is_mismatch());
        assert_eq!(response.raw_data()["results"][0]["id"], json!("1"));
    }

    #[test]
    fn test_wire_enums() {
        assert_eq!(ContentStatus::ALL.len(), 7);
        assert_eq!("created-date".parse::<PageSort>(), Ok(PageSort::CreatedDate));
        assert_eq!(BodyFormat::AtlasDocFormat.to_string(), "atlas_doc_format");
    }
}
