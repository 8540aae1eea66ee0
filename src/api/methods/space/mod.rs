//
//  confluence-sdk
//  api/methods/space/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Space Endpoints
//!
//! - `GET /spaces`: [`GetSpacesRequest`]
//! - `GET /spaces/{id}`: [`GetSpaceRequest`]
//! - `POST /spaces`: [`CreateSpaceRequest`]
//!
//! All three answer with the [`Space`] shape, either as a list, as a single
//! object, or as a single object with expanded collections.

mod create_space;
mod get_space;
mod get_spaces;

pub use create_space::*;
pub use get_space::*;
pub use get_spaces::*;

use once_cell::sync::OnceCell;

use super::BodyType;
use crate::api::model::{Field, Response, ResponseBase};

wire_enum! {
    /// Kind of space.
    SpaceType {
        Global => "global",
        Collaboration => "collaboration",
        KnowledgeBase => "knowledge_base",
        Personal => "personal",
    }
}

wire_enum! {
    /// Lifecycle status of a space.
    SpaceStatus {
        Current => "current",
        Archived => "archived",
    }
}

wire_enum! {
    /// Sort order for `GET /spaces`. `Desc*` variants sort descending.
    SpaceSort {
        Id => "id",
        DescId => "-id",
        Key => "key",
        DescKey => "-key",
        Name => "name",
        DescName => "-name",
    }
}

wire_enum! {
    /// Representation of space descriptions.
    DescriptionFormat {
        Plain => "plain",
        View => "view",
    }
}

/// A space (`SpaceBulk` / `SpaceSingle` schema).
#[derive(Debug, Clone)]
pub struct Space {
    base: ResponseBase,
    description: OnceCell<Field<SpaceDescription>>,
    icon: OnceCell<Field<SpaceIcon>>,
    links: OnceCell<Field<SpaceLinks>>,
}

impl Response for Space {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            description: OnceCell::new(),
            icon: OnceCell::new(),
            links: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl Space {
    pub fn id(&self) -> Field<&str> {
        self.base.get_as("id")
    }

    pub fn key(&self) -> Field<&str> {
        self.base.get_as("key")
    }

    pub fn name(&self) -> Field<&str> {
        self.base.get_as("name")
    }

    /// Wire value of `type`; see [`SpaceType`] for the known values.
    pub fn space_type(&self) -> Field<&str> {
        self.base.get_as("type")
    }

    /// Wire value of `status`; see [`SpaceStatus`] for the known values.
    pub fn status(&self) -> Field<&str> {
        self.base.get_as("status")
    }

    pub fn author_id(&self) -> Field<&str> {
        self.base.get_as("authorId")
    }

    pub fn current_active_alias(&self) -> Field<&str> {
        self.base.get_as("currentActiveAlias")
    }

    /// ISO 8601 creation timestamp.
    pub fn created_at(&self) -> Field<&str> {
        self.base.get_as("createdAt")
    }

    pub fn homepage_id(&self) -> Field<&str> {
        self.base.get_as("homepageId")
    }

    /// Only populated when a `description-format` was requested.
    pub fn description(&self) -> Field<&SpaceDescription> {
        self.base.one(&self.description, "description")
    }

    /// Only populated when `include-icon` was requested.
    pub fn icon(&self) -> Field<&SpaceIcon> {
        self.base.one(&self.icon, "icon")
    }

    pub fn links(&self) -> Field<&SpaceLinks> {
        self.base.one(&self.links, "_links")
    }
}

/// Space description in each requested representation.
#[derive(Debug, Clone)]
pub struct SpaceDescription {
    base: ResponseBase,
    plain: OnceCell<Field<BodyType>>,
    view: OnceCell<Field<BodyType>>,
}

impl Response for SpaceDescription {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            plain: OnceCell::new(),
            view: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl SpaceDescription {
    pub fn plain(&self) -> Field<&BodyType> {
        self.base.one(&self.plain, "plain")
    }

    pub fn view(&self) -> Field<&BodyType> {
        self.base.one(&self.view, "view")
    }
}

leaf_response! {
    /// Space icon (`SpaceIcon` schema).
    SpaceIcon
}

impl SpaceIcon {
    /// Path relative to the site's base URL.
    pub fn path(&self) -> Field<&str> {
        self.base.get_as("path")
    }

    pub fn api_download_link(&self) -> Field<&str> {
        self.base.get_as("apiDownloadLink")
    }
}

leaf_response! {
    /// `_links` of a space.
    SpaceLinks
}

impl SpaceLinks {
    /// Web UI path of the space, relative to the site's base URL.
    pub fn webui(&self) -> Field<&str> {
        self.base.get_as("webui")
    }
}
