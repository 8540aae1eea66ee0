//
//  confluence-sdk
//  api/methods/space/get_space.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `GET /spaces/{id}`

use std::ops::Deref;

use once_cell::sync::OnceCell;
use serde_json::Value;

use super::{DescriptionFormat, Space};
use crate::api::common::OptionalFieldPage;
use crate::api::methods::Version;
use crate::api::model::{Field, Method, Params, Request, Response, ResponseBase};

/// Fetches one space by ID, optionally expanding its collections.
///
/// ```rust
/// use confluence_sdk::api::methods::space::GetSpaceRequest;
/// use confluence_sdk::api::model::Request;
///
/// let request = GetSpaceRequest {
///     include_labels: Some(true),
///     ..GetSpaceRequest::new(98306)
/// };
/// assert_eq!(request.path(), "/spaces/98306");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSpaceRequest {
    /// ID of the space.
    pub id: i64,
    pub description_format: Option<DescriptionFormat>,
    pub include_icon: Option<bool>,
    pub include_operations: Option<bool>,
    pub include_properties: Option<bool>,
    pub include_permissions: Option<bool>,
    /// Requires role-based access control on the site.
    pub include_role_assignments: Option<bool>,
    pub include_labels: Option<bool>,
}

impl GetSpaceRequest {
    /// Request for space `id` with nothing expanded.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            description_format: None,
            include_icon: None,
            include_operations: None,
            include_properties: None,
            include_permissions: None,
            include_role_assignments: None,
            include_labels: None,
        }
    }
}

impl Request for GetSpaceRequest {
    type Response = GetSpaceResponse;
    const METHOD: Method = Method::Get;

    fn path(&self) -> String {
        format!("/spaces/{}", self.id)
    }

    fn params(&self) -> Params {
        Params::new()
            .set("description-format", self.description_format.as_ref())
            .set("include-icon", self.include_icon.as_ref())
            .set("include-operations", self.include_operations.as_ref())
            .set("include-properties", self.include_properties.as_ref())
            .set("include-permissions", self.include_permissions.as_ref())
            .set("include-role-assignments", self.include_role_assignments.as_ref())
            .set("include-labels", self.include_labels.as_ref())
    }
}

/// A single space with its expanded collections.
///
/// Derefs to [`Space`] for the fields shared with the list endpoint.
/// Each collection is only present when its `include-*` flag was set.
#[derive(Debug, Clone)]
pub struct GetSpaceResponse {
    space: Space,
    labels: OnceCell<Field<OptionalFieldPage<Label>>>,
    properties: OnceCell<Field<OptionalFieldPage<SpaceProperty>>>,
    operations: OnceCell<Field<OptionalFieldPage<Operation>>>,
    permissions: OnceCell<Field<OptionalFieldPage<SpacePermission>>>,
    role_assignments: OnceCell<Field<OptionalFieldPage<RoleAssignment>>>,
}

impl Response for GetSpaceResponse {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            space: Space::from_base(base),
            labels: OnceCell::new(),
            properties: OnceCell::new(),
            operations: OnceCell::new(),
            permissions: OnceCell::new(),
            role_assignments: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        self.space.base()
    }
}

impl Deref for GetSpaceResponse {
    type Target = Space;

    fn deref(&self) -> &Space {
        &self.space
    }
}

impl GetSpaceResponse {
    /// The space itself, without the expansions.
    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn labels(&self) -> Field<&OptionalFieldPage<Label>> {
        self.base().one(&self.labels, "labels")
    }

    pub fn properties(&self) -> Field<&OptionalFieldPage<SpaceProperty>> {
        self.base().one(&self.properties, "properties")
    }

    /// Operations the caller may perform in the space.
    pub fn operations(&self) -> Field<&OptionalFieldPage<Operation>> {
        self.base().one(&self.operations, "operations")
    }

    pub fn permissions(&self) -> Field<&OptionalFieldPage<SpacePermission>> {
        self.base().one(&self.permissions, "permissions")
    }

    pub fn role_assignments(&self) -> Field<&OptionalFieldPage<RoleAssignment>> {
        self.base().one(&self.role_assignments, "roleAssignments")
    }
}

leaf_response! {
    /// A label attached to the space.
    Label
}

impl Label {
    pub fn id(&self) -> Field<&str> {
        self.base.get_as("id")
    }

    pub fn name(&self) -> Field<&str> {
        self.base.get_as("name")
    }

    /// Label namespace, e.g. `global` or `my`.
    pub fn prefix(&self) -> Field<&str> {
        self.base.get_as("prefix")
    }
}

/// A content property stored on the space.
#[derive(Debug, Clone)]
pub struct SpaceProperty {
    base: ResponseBase,
    version: OnceCell<Field<Version>>,
}

impl Response for SpaceProperty {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            version: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl SpaceProperty {
    pub fn id(&self) -> Field<&str> {
        self.base.get_as("id")
    }

    pub fn key(&self) -> Field<&str> {
        self.base.get_as("key")
    }

    /// Arbitrary JSON stored under the key.
    pub fn value(&self) -> Field<&Value> {
        self.base.get("value")
    }

    pub fn version(&self) -> Field<&Version> {
        self.base.one(&self.version, "version")
    }
}

leaf_response! {
    /// An operation the caller is allowed to perform.
    Operation
}

impl Operation {
    /// Operation name, e.g. `read` or `create`.
    pub fn operation(&self) -> Field<&str> {
        self.base.get_as("operation")
    }

    /// What the operation applies to, e.g. `page` or `space`.
    pub fn target_type(&self) -> Field<&str> {
        self.base.get_as("targetType")
    }
}

/// A permission granted in the space.
#[derive(Debug, Clone)]
pub struct SpacePermission {
    base: ResponseBase,
    principal: OnceCell<Field<PermissionSubject>>,
    operation: OnceCell<Field<PermissionOperation>>,
}

impl Response for SpacePermission {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            principal: OnceCell::new(),
            operation: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl SpacePermission {
    pub fn id(&self) -> Field<&str> {
        self.base.get_as("id")
    }

    pub fn principal(&self) -> Field<&PermissionSubject> {
        self.base.one(&self.principal, "principal")
    }

    pub fn operation(&self) -> Field<&PermissionOperation> {
        self.base.one(&self.operation, "operation")
    }
}

leaf_response! {
    /// Who a permission is granted to.
    PermissionSubject
}

impl PermissionSubject {
    /// `user`, `group` or `role`.
    pub fn principal_type(&self) -> Field<&str> {
        self.base.get_as("type")
    }

    pub fn id(&self) -> Field<&str> {
        self.base.get_as("id")
    }
}

leaf_response! {
    /// What a permission allows.
    PermissionOperation
}

impl PermissionOperation {
    pub fn key(&self) -> Field<&str> {
        self.base.get_as("key")
    }

    pub fn target_type(&self) -> Field<&str> {
        self.base.get_as("targetType")
    }
}

/// A role assigned to a principal in the space.
#[derive(Debug, Clone)]
pub struct RoleAssignment {
    base: ResponseBase,
    principal: OnceCell<Field<RolePrincipal>>,
}

impl Response for RoleAssignment {
    fn from_base(base: ResponseBase) -> Self {
        Self {
            base,
            principal: OnceCell::new(),
        }
    }

    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl RoleAssignment {
    pub fn principal(&self) -> Field<&RolePrincipal> {
        self.base.one(&self.principal, "principal")
    }

    pub fn role_id(&self) -> Field<&str> {
        self.base.get_as("roleId")
    }
}

leaf_response! {
    /// Principal of a role assignment.
    RolePrincipal
}

impl RolePrincipal {
    pub fn principal_type(&self) -> Field<&str> {
        self.base.get_as("principalType")
    }

    pub fn principal_id(&self) -> Field<&str> {
        self.base.get_as("principalId")
    }
}
