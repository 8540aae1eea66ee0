//
//  confluence-sdk
//  api/methods/page/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Page Endpoints
//!
//! - `GET /pages`: [`GetPagesRequest`]

mod get_pages;

pub use get_pages::*;

wire_enum! {
    /// Representation of page bodies.
    BodyFormat {
        Storage => "storage",
        AtlasDocFormat => "atlas_doc_format",
    }
}

wire_enum! {
    /// Sort order for `GET /pages`. `Desc*` variants sort descending.
    PageSort {
        Id => "id",
        DescId => "-id",
        CreatedDate => "created-date",
        DescCreatedDate => "-created-date",
        ModifiedDate => "modified-date",
        DescModifiedDate => "-modified-date",
        Title => "title",
        DescTitle => "-title",
    }
}

wire_enum! {
    /// Status of a piece of content.
    ContentStatus {
        Current => "current",
        Draft => "draft",
        Archived => "archived",
        Historical => "historical",
        Trashed => "trashed",
        Deleted => "deleted",
        /// Every status.
        Any => "any",
    }
}
