//
//  confluence-sdk
//  api/methods/space/get_spaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `GET /spaces`

use once_cell::sync::OnceCell;

use super::{DescriptionFormat, Space, SpaceSort, SpaceStatus, SpaceType};
use crate::api::common::MultiEntityLinks;
use crate::api::model::{Field, Method, Params, Request, Response, ResponseBase};

/// Lists spaces visible to the caller.
///
/// Every field is optional; the default value lists the first page with the
/// server's defaults.
///
/// ```rust
/// use confluence_sdk::api::methods::space::{GetSpacesRequest, SpaceType};
/// use confluence_sdk::api::model::Request;
///
/// let request = GetSpacesRequest {
///     space_type: Some(SpaceType::Global),
///     limit: Some(50),
///     ..Default::default()
/// };
/// assert_eq!(request.path(), "/spaces");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSpacesRequest {
    /// Space IDs to include.
    pub ids: Option<Vec<i64>>,
    /// Space keys to include.
    pub keys: Option<Vec<String>>,
    pub space_type: Option<SpaceType>,
    pub status: Option<SpaceStatus>,
    /// Only spaces carrying all of these labels.
    pub labels: Option<Vec<String>>,
    /// Account ID; only spaces this user has favorited.
    pub favorited_by: Option<String>,
    /// Account ID; only spaces this user has not favorited.
    pub not_favorited_by: Option<String>,
    pub sort: Option<SpaceSort>,
    pub description_format: Option<DescriptionFormat>,
    pub include_icon: Option<bool>,
    /// Cursor from the previous page's `_links.next`.
    pub cursor: Option<String>,
    /// Page size, 1 to 250.
    pub limit: Option<u32>,
}

impl Request for GetSpacesRequest {
    type Response = GetSpacesResponse;
    const METHOD: Method = Method::Get;

    fn path(&self) -> String {
        "/spaces".to_string()
    }

    fn params(&self) -> Params {
        Params::new()
            .set("ids", self.ids.as_deref())
            .set("keys", self.keys.as_deref())
            .set("type", self.space_type.as_ref())
            .set("status", self.status.as_ref())
            .set("labels", self.labels.as_deref())
            .set("favorited-by", self.favorited_by.as_deref())
            .set("not-favorited-by", self.not_favorited_by.as_deref())
            .set("sort", self.sort.as_ref())
            .set("description-format", self.description_format.as_ref())
            .set("include-icon", self.include_icon.as_ref())
            .set("cursor", self.cursor.as_deref())
            .set("limit", self.limit.as_ref())
    }
}

/// One page of spaces.
#[derive(Debug, Clone)]
pub struct GetSpacesResponse {
    base: ResponseBase,
    results: OnceCell<Field<Vec<Space>>>,
    links: OnceCell<Field<MultiEntityLinks>>,
}

impl Response for GetSpacesResponse {
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

impl GetSpacesResponse {
    pub fn results(&self) -> Field<&[Space]> {
        self.base.many(&self.results, "results")
    }

    pub fn links(&self) -> Field<&MultiEntityLinks> {
        self.base.one(&self.links, "_links")
    }

    /// Cursor for the next page, if there is one.
    pub fn next_cursor(&self) -> Option<String> {
        self.links().value()?.next_cursor()
    }
}
