//
//  confluence-sdk
//  api/methods/space/create_space.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `POST /spaces`
//!
//! Creating spaces through v2 is only available to sites enrolled in the
//! role-based access control early access program; other sites answer 4xx.

use serde::Serialize;

use super::{DescriptionFormat, Space};
use crate::api::model::{Body, Method, Request};

/// Body for creating a space.
///
/// `name` is required by the server, as is one of `key` or `alias`.
///
/// ```rust
/// use confluence_sdk::api::methods::space::{CreateSpaceRequest, SpaceDescriptionInput};
/// use confluence_sdk::api::model::Request;
///
/// let request = CreateSpaceRequest {
///     name: Some("Engineering".to_string()),
///     key: Some("ENG".to_string()),
///     description: Some(SpaceDescriptionInput::plain("All things engineering")),
///     ..Default::default()
/// };
/// let body = request.final_body().unwrap().unwrap();
/// assert_eq!(body["description"]["representation"], "plain");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateSpaceRequest {
    pub name: Option<String>,
    /// Identifier used in URLs, up to 255 alphanumeric characters.
    pub key: Option<String>,
    /// Alternative URL identifier, used when `key` is not given.
    pub alias: Option<String>,
    pub description: Option<SpaceDescriptionInput>,
    pub role_assignments: Option<Vec<RoleAssignmentInput>>,
    /// Space ID to copy access settings from.
    pub copy_space_access_configuration: Option<i64>,
    /// Creates a space only its creator can see.
    pub create_private_space: Option<bool>,
    pub template_key: Option<String>,
}

impl Request for CreateSpaceRequest {
    type Response = CreateSpaceResponse;
    const METHOD: Method = Method::Post;

    fn path(&self) -> String {
        "/spaces".to_string()
    }

    fn body(&self) -> Body {
        Body::new()
            .set("name", self.name.as_ref())
            .set("key", self.key.as_ref())
            .set("alias", self.alias.as_ref())
            .set("description", self.description.as_ref())
            .set("roleAssignments", self.role_assignments.as_ref())
            .set(
                "copySpaceAccessConfiguration",
                self.copy_space_access_configuration.as_ref(),
            )
            .set("createPrivateSpace", self.create_private_space.as_ref())
            .set("templateKey", self.template_key.as_ref())
    }
}

/// The created space.
pub type CreateSpaceResponse = Space;

/// Description of a new space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceDescriptionInput {
    pub value: String,
    pub representation: DescriptionFormat,
}

impl SpaceDescriptionInput {
    /// A plain-text description, the only representation the server accepts
    /// on creation.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            representation: DescriptionFormat::Plain,
        }
    }
}

/// An initial role assignment for a new space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentInput {
    pub principal: PrincipalInput,
    pub role_id: String,
}

/// Principal of a [`RoleAssignmentInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalInput {
    /// `USER`, `GROUP` or `ACCESS_CLASS`.
    pub principal_type: String,
    pub principal_id: String,
}
