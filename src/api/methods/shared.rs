//
//  confluence-sdk
//  api/methods/shared.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Schemas that appear under more than one endpoint.

use crate::api::model::Field;

leaf_response! {
    /// One representation of a rich-text value (`BodyType` schema).
    ///
    /// Used for page bodies (`storage`, `atlas_doc_format`) and space
    /// descriptions (`plain`, `view`).
    BodyType
}

impl BodyType {
    /// Name of the representation, e.g. `storage`.
    pub fn representation(&self) -> Field<&str> {
        self.base.get_as("representation")
    }

    /// The content in that representation.
    pub fn value(&self) -> Field<&str> {
        self.base.get_as("value")
    }
}

leaf_response! {
    /// Version metadata of a page or content property (`Version` schema).
    Version
}

impl Version {
    /// ISO 8601 timestamp of the version.
    pub fn created_at(&self) -> Field<&str> {
        self.base.get_as("createdAt")
    }

    /// Message associated with the version.
    pub fn message(&self) -> Field<&str> {
        self.base.get_as("message")
    }

    /// The version number.
    pub fn number(&self) -> Field<i64> {
        self.base.get_as("number")
    }

    /// Whether this was a minor edit.
    pub fn minor_edit(&self) -> Field<bool> {
        self.base.get_as("minorEdit")
    }

    /// Account ID of the version's author.
    pub fn author_id(&self) -> Field<&str> {
        self.base.get_as("authorId")
    }
}
