//
//  confluence-sdk
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Shapes in Confluence v2 Responses
//!
//! The v2 API uses cursor pagination. List endpoints answer with a
//! `_links` object whose `next` entry is a relative URL carrying the cursor
//! for the following page:
//!
//! ```json
//! {
//!   "results": [],
//!   "_links": {"next": "/wiki/api/v2/pages?cursor=abc&limit=25", "base": "https://acme.atlassian.net/wiki"}
//! }
//! ```
//!
//! Expanded collections inside a single entity (labels, properties, ...) use
//! a slightly different envelope with a `meta` block:
//!
//! ```json
//! {"results": [], "meta": {"hasMore": true, "cursor": "abc"}, "_links": {"self": "..."}}
//! ```
//!
//! This module only describes those shapes. Walking pages is left to the
//! caller: feed [`MultiEntityLinks::next_cursor`] back into the request's
//! `cursor` field.

use once_cell::sync::OnceCell;
use url::Url;

use crate::api::model::{Field, Response, ResponseBase};

leaf_response! {
    /// `_links` of a list endpoint (`MultiEntityLinks` schema).
    MultiEntityLinks
}

impl MultiEntityLinks {
    /// Relative URL of the next page, or null on the last page.
    pub fn next(&self) -> Field<&str> {
        self.base.get_as("next")
    }

    /// Base URL of the Confluence site.
    pub fn base_url(&self) -> Field<&str> {
        self.base.get_as("base")
    }

    /// `true` if the server advertised another page.
    pub fn has_next(&self) -> bool {
        self.next().is_value()
    }

    /// The `cursor` query parameter of [`next`](Self::next), if any.
    pub fn next_cursor(&self) -> Option<String> {
        let next = self.next().value()?;
        // `next` is relative; any absolute base will do for parsing the query.
        let url = Url::parse("https://localhost").ok()?.join(next).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "cursor")
            .map(|(_, value)| value.into_owned())
    }
}

leaf_response! {
    /// `meta` block of an expanded collection.
    OptionalFieldMeta
}

impl OptionalFieldMeta {
    /// Whether more items exist beyond `results`.
    pub fn has_more(&self) -> Field<bool> {
        self.base.get_as("hasMore")
    }

    /// Cursor for fetching the remaining items.
    pub fn cursor(&self) -> Field<&str> {
        self.base.get_as("cursor")
    }
}

leaf_response! {
    /// `_links` of an expanded collection.
    OptionalFieldLinks
}

impl OptionalFieldLinks {
    /// Link to the full collection endpoint.
    pub fn self_link(&self) -> Field<&str> {
        self.base.get_as("self")
    }
}

/// An expanded collection: `results`, `meta` and `_links`.
///
/// Generic over the item wrapper so labels, properties, operations,
/// permissions and role assignments share one envelope type.
#[derive(Debug, Clone)]
pub struct OptionalFieldPage<T> {
    base: ResponseBase,
    results: OnceCell<Field<Vec<T>>>,
    meta: OnceCell<Field<OptionalFieldMeta>>,
    links: OnceCell<Field<OptionalFieldLinks>>,
}

impl<T: Response> Response for OptionalFieldPage<T> {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            results: OnceCell::new(),
            meta: OnceCell::new(),
            links: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl<T: Response> OptionalFieldPage<T> {
    /// Items included in the expansion.
    pub fn results(&self) -> Field<&[T]> {
        self.base.many(&self.results, "results")
    }

    /// Paging information for the expansion.
    pub fn meta(&self) -> Field<&OptionalFieldMeta> {
        self.base.one(&self.meta, "meta")
    }

    /// Links for the expansion.
    pub fn links(&self) -> Field<&OptionalFieldLinks> {
        self.base.one(&self.links, "_links")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_next_cursor() {
        let links = MultiEntityLinks::from_value(json!({
            "next": "/wiki/api/v2/pages?cursor=eyJpZCI6IjEyMyJ9&limit=25",
            "base": "https://acme.atlassian.net/wiki"
        }))
        .unwrap();
        assert!(links.has_next());
        assert_eq!(links.next_cursor().as_deref(), Some("eyJpZCI6IjEyMyJ9"));
        assert_eq!(links.base_url(), Field::Value("https://acme.atlassian.net/wiki"));
    }

    #[test]
    fn test_last_page() {
        let links = MultiEntityLinks::from_value(json!({"next": null})).unwrap();
        assert!(!links.has_next());
        assert!(links.next().is_null());
        assert_eq!(links.next_cursor(), None);
        assert!(links.base_url().is_absent());
    }

    #[test]
    fn test_optional_field_page() {
        let page: OptionalFieldPage<ResponseBase> = OptionalFieldPage::from_value(json!({
            "results": [{"name": "docs"}],
            "meta": {"hasMore": false, "cursor": null},
            "_links": {"self": "https://acme.atlassian.net/wiki/api/v2/spaces/1/labels"}
        }))
        .unwrap();

        let results = page.results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].get_as::<&str>("name"), Field::Value("docs"));

        let meta = page.meta().unwrap();
        assert_eq!(meta.has_more(), Field::Value(false));
        assert!(meta.cursor().is_null());

        assert!(page.links().unwrap().self_link().is_value());
    }
}
